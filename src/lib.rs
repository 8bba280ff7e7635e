//! # ubid-rs
//!
//! Converts between UBID strings (Unique Building Identifiers) and the
//! geographic bounding boxes they address. A UBID names the grid cell
//! containing a building footprint's centroid, plus the Chebyshev
//! distances, in whole grid cells, from that cell to the four extents of
//! the footprint's bounding box:
//!
//! ```text
//! 84VVJVW8+22-40-40-40-40
//! ^^^^^^^^^^^ ^^ ^^ ^^ ^^
//! centroid     N  E  S  W
//! ```
//!
//! There are three main entry points.
//!
//! ### 1. `encode` - Bounding Box to UBID
//!
//! ```
//! use ubid_rs::encode;
//!
//! # fn main() -> Result<(), ubid_rs::UbidError> {
//! let code = encode(47.64, -122.14, 47.65, -122.13, 47.645, -122.135)?;
//! assert_eq!(code, "84VVJVW8+22-40-40-40-40");
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `decode` - UBID to Bounding Box
//!
//! ```
//! use ubid_rs::decode;
//!
//! # fn main() -> Result<(), ubid_rs::UbidError> {
//! let area = decode("84VVJVW8+22-40-40-40-40")?;
//! println!("({}, {}) to ({}, {})", area.west, area.south, area.east, area.north);
//!
//! // Resizing first makes re-encoding reproduce the original string.
//! let code = ubid_rs::encode_area(&area.resize())?;
//! assert_eq!(code, "84VVJVW8+22-40-40-40-40");
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `is_valid` - UBID Validation
//!
//! ```
//! use ubid_rs::is_valid;
//!
//! assert!(is_valid("849VQJQ6+25-1-1-1-1"));
//! assert!(!is_valid("849VQJQ6+25-1-1-1"));
//! ```
//!
//! Grid-level encoding and decoding (Open Location Code semantics) lives in
//! [`core::grid`]; the UBID operations delegate all cell arithmetic to it.

pub mod api;
pub mod core;
pub mod util;

pub use crate::api::{
    UbidArea, decode, encode, encode_area, encode_points, encode_with_code_length, is_valid,
};
pub use crate::core::{
    CODE_ALPHABET, GridCell, LATITUDE_MAX, LONGITUDE_MAX, MAX_DIGIT_COUNT, PAIR_CODE_LENGTH,
    SEPARATOR, UBID_SEPARATOR, UbidParts, parse_ubid,
};
pub use crate::util::{Coordinate, UbidError};

pub use geo_types;
