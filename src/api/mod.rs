pub mod area;
pub mod codec;

pub use area::UbidArea;
pub use codec::{decode, encode, encode_area, encode_points, encode_with_code_length, is_valid};
