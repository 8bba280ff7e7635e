/// Digit characters used in grid codes, in value order (base 20).
pub const CODE_ALPHABET: &str = "23456789CFGHJMPQRVWX";

/// Separator between the 8th and 9th digits of a grid code.
pub const SEPARATOR: char = '+';

/// Number of digits before the separator in a full grid code.
pub(crate) const SEPARATOR_POSITION: usize = 8;

/// Character used to pad low-precision grid codes up to the separator.
pub(crate) const PADDING_CHARACTER: char = '0';

/// Digit count of a standard pair-precision grid code. This is the default
/// precision for UBID centroids.
pub const PAIR_CODE_LENGTH: usize = 10;

/// Maximum number of significant digits in a grid code.
pub const MAX_DIGIT_COUNT: usize = 15;

/// Number of single-digit grid refinement steps after the pairs.
pub(crate) const GRID_CODE_LENGTH: usize = MAX_DIGIT_COUNT - PAIR_CODE_LENGTH;

/// Base of the paired digit section.
pub(crate) const ENCODING_BASE: i64 = 20;

/// Columns (longitude divisions) of a grid refinement step.
pub(crate) const GRID_COLUMNS: i64 = 4;

/// Rows (latitude divisions) of a grid refinement step.
pub(crate) const GRID_ROWS: i64 = 5;

/// Maximum absolute latitude in decimal degrees.
pub const LATITUDE_MAX: f64 = 90.0;

/// Maximum absolute longitude in decimal degrees.
pub const LONGITUDE_MAX: f64 = 180.0;

/// Integer value of one degree of latitude in pair units (20^3).
pub(crate) const PAIR_PRECISION: f64 = 8000.0;

/// Place value of the first pair digit (20^4).
pub(crate) const PAIR_FIRST_PLACE_VALUE: f64 = 160_000.0;

/// Place value of the first grid refinement row digit (5^4).
pub(crate) const GRID_LAT_FIRST_PLACE_VALUE: f64 = 625.0;

/// Place value of the first grid refinement column digit (4^4).
pub(crate) const GRID_LNG_FIRST_PLACE_VALUE: f64 = 256.0;

/// Integer value of one degree of latitude at full precision (20^3 * 5^5).
pub(crate) const FINAL_LAT_PRECISION: f64 = 25_000_000.0;

/// Integer value of one degree of longitude at full precision (20^3 * 4^5).
pub(crate) const FINAL_LNG_PRECISION: f64 = 8_192_000.0;

/// Separator between the grid code and the four Chebyshev distances in a
/// UBID string.
pub const UBID_SEPARATOR: char = '-';
