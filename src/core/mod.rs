pub mod constants;
pub mod grid;
pub mod parse;

pub use constants::{
    CODE_ALPHABET, LATITUDE_MAX, LONGITUDE_MAX, MAX_DIGIT_COUNT, PAIR_CODE_LENGTH, SEPARATOR,
    UBID_SEPARATOR,
};
pub use grid::GridCell;
pub use parse::{UbidParts, parse_ubid};
