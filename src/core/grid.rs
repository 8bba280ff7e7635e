use crate::core::constants::{
    CODE_ALPHABET, ENCODING_BASE, FINAL_LAT_PRECISION, FINAL_LNG_PRECISION, GRID_CODE_LENGTH,
    GRID_COLUMNS, GRID_LAT_FIRST_PLACE_VALUE, GRID_LNG_FIRST_PLACE_VALUE, GRID_ROWS, LATITUDE_MAX,
    LONGITUDE_MAX, MAX_DIGIT_COUNT, PADDING_CHARACTER, PAIR_CODE_LENGTH, PAIR_FIRST_PLACE_VALUE,
    PAIR_PRECISION, SEPARATOR, SEPARATOR_POSITION,
};
use crate::util::coord::Coordinate;
use crate::util::error::UbidError;
use geo_types::Point;
use serde::{Deserialize, Serialize};

/// A single rectangular cell of the geocoding grid.
///
/// Decoding a grid code yields the cell it addresses: its bounds and center
/// in decimal degrees (WGS84) and the number of significant digits in the
/// code. Cells are immutable once returned.
///
/// # Example
///
/// ```
/// use ubid_rs::core::grid;
///
/// # fn main() -> Result<(), ubid_rs::UbidError> {
/// let cell = grid::decode("84VVJVW8+22")?;
/// assert!(cell.contains(&cell.center()));
/// assert_eq!(cell.code_length, 10);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    /// Southern latitude bound in decimal degrees
    pub south: f64,
    /// Western longitude bound in decimal degrees
    pub west: f64,
    /// Northern latitude bound in decimal degrees
    pub north: f64,
    /// Eastern longitude bound in decimal degrees
    pub east: f64,
    /// Latitude of the cell center
    pub latitude_center: f64,
    /// Longitude of the cell center
    pub longitude_center: f64,
    /// Number of significant digits in the grid code for this cell
    pub code_length: usize,
}

impl GridCell {
    pub(crate) fn new(south: f64, west: f64, north: f64, east: f64, code_length: usize) -> Self {
        Self {
            south,
            west,
            north,
            east,
            latitude_center: (south + (north - south) / 2.0).min(LATITUDE_MAX),
            longitude_center: (west + (east - west) / 2.0).min(LONGITUDE_MAX),
            code_length,
        }
    }

    /// Returns the cell center as a point (x = longitude, y = latitude).
    pub fn center(&self) -> Point<f64> {
        Point::new(self.longitude_center, self.latitude_center)
    }

    /// Returns the cell height in decimal degrees of latitude.
    pub fn height(&self) -> f64 {
        self.north - self.south
    }

    /// Returns the cell width in decimal degrees of longitude.
    pub fn width(&self) -> f64 {
        self.east - self.west
    }

    /// Returns `true` if the coordinate lies within the cell bounds
    /// (inclusive on all edges).
    pub fn contains(&self, coord: &impl Coordinate) -> bool {
        self.south <= coord.y()
            && coord.y() <= self.north
            && self.west <= coord.x()
            && coord.x() <= self.east
    }
}

/// Encodes a latitude/longitude pair into a grid code with the given number
/// of significant digits.
///
/// Latitude is clipped to ±90° and longitude is normalized into
/// [-180°, 180°). Code lengths above the 15-digit maximum are clamped.
///
/// # Example
/// ```
/// use ubid_rs::core::grid;
///
/// # fn main() -> Result<(), ubid_rs::UbidError> {
/// let code = grid::encode(47.6450625, -122.1349375, 10)?;
/// assert_eq!(code, "84VVJVW8+22");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`UbidError::InvalidCodeLength`] - the length is below 2, or odd and
///   below the pair precision
/// - [`UbidError::InvalidCoordinate`] - latitude or longitude is NaN or
///   infinite
pub fn encode(latitude: f64, longitude: f64, code_length: usize) -> Result<String, UbidError> {
    if code_length < 2 || (code_length < PAIR_CODE_LENGTH && code_length % 2 == 1) {
        return Err(UbidError::InvalidCodeLength(code_length));
    }
    if !latitude.is_finite() || !longitude.is_finite() {
        return Err(UbidError::InvalidCoordinate(format!(
            "({}, {})",
            latitude, longitude
        )));
    }
    let code_length = code_length.min(MAX_DIGIT_COUNT);

    let mut latitude = clip_latitude(latitude);
    let longitude = normalize_longitude(longitude);

    // The north edge of the top row of cells is exactly 90°; nudge the pole
    // down into the top row so it stays encodable.
    if latitude == LATITUDE_MAX {
        latitude -= 0.9 * latitude_precision(code_length);
    }

    // Scale the coordinates to integer grid units. Rounding at 1e-6 first
    // absorbs floating point error from the degree arithmetic.
    let mut lat_val =
        (((latitude + LATITUDE_MAX) * FINAL_LAT_PRECISION * 1e6).round() / 1e6).floor() as i64;
    let mut lng_val =
        (((longitude + LONGITUDE_MAX) * FINAL_LNG_PRECISION * 1e6).round() / 1e6).floor() as i64;

    let alphabet = CODE_ALPHABET.as_bytes();
    // Digits are extracted least significant first and reversed at the end.
    let mut digits = String::with_capacity(MAX_DIGIT_COUNT);
    if code_length > PAIR_CODE_LENGTH {
        for _ in 0..GRID_CODE_LENGTH {
            let lat_digit = lat_val % GRID_ROWS;
            let lng_digit = lng_val % GRID_COLUMNS;
            digits.push(alphabet[(lat_digit * GRID_COLUMNS + lng_digit) as usize] as char);
            lat_val /= GRID_ROWS;
            lng_val /= GRID_COLUMNS;
        }
    } else {
        lat_val /= GRID_ROWS.pow(GRID_CODE_LENGTH as u32);
        lng_val /= GRID_COLUMNS.pow(GRID_CODE_LENGTH as u32);
    }
    for _ in 0..PAIR_CODE_LENGTH / 2 {
        digits.push(alphabet[(lng_val % ENCODING_BASE) as usize] as char);
        digits.push(alphabet[(lat_val % ENCODING_BASE) as usize] as char);
        lat_val /= ENCODING_BASE;
        lng_val /= ENCODING_BASE;
    }
    let digits: String = digits.chars().rev().collect();

    if code_length >= SEPARATOR_POSITION {
        Ok(format!(
            "{}{}{}",
            &digits[..SEPARATOR_POSITION],
            SEPARATOR,
            &digits[SEPARATOR_POSITION..code_length]
        ))
    } else {
        Ok(format!(
            "{}{}{}",
            &digits[..code_length],
            PADDING_CHARACTER
                .to_string()
                .repeat(SEPARATOR_POSITION - code_length),
            SEPARATOR
        ))
    }
}

/// Decodes a full grid code into the cell it addresses.
///
/// # Example
/// ```
/// use ubid_rs::core::grid;
///
/// # fn main() -> Result<(), ubid_rs::UbidError> {
/// let cell = grid::decode("84VVJVW8+22")?;
/// assert!((cell.south - 47.645).abs() < 1e-10);
/// assert!((cell.west - -122.135).abs() < 1e-10);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// [`UbidError::InvalidGridCode`] - the string is not a valid, full grid
/// code (short codes cannot be decoded without a reference location).
pub fn decode(code: &str) -> Result<GridCell, UbidError> {
    if !is_full(code) {
        return Err(UbidError::InvalidGridCode(code.to_string()));
    }
    let clean: String = code
        .chars()
        .filter(|&c| c != SEPARATOR && c != PADDING_CHARACTER)
        .map(|c| c.to_ascii_uppercase())
        .collect();
    let bytes = clean.as_bytes();

    // Work in integer pair units and convert to degrees at the end.
    let mut normal_lat = -LATITUDE_MAX * PAIR_PRECISION;
    let mut normal_lng = -LONGITUDE_MAX * PAIR_PRECISION;
    let mut grid_lat = 0.0;
    let mut grid_lng = 0.0;

    let digits = clean.len().min(PAIR_CODE_LENGTH);
    let mut pv = PAIR_FIRST_PLACE_VALUE;
    let mut i = 0;
    while i + 1 < digits {
        normal_lat += digit_value(bytes[i]) * pv;
        normal_lng += digit_value(bytes[i + 1]) * pv;
        if i + 2 < digits {
            pv /= ENCODING_BASE as f64;
        }
        i += 2;
    }
    let mut lat_precision = pv / PAIR_PRECISION;
    let mut lng_precision = pv / PAIR_PRECISION;

    if clean.len() > PAIR_CODE_LENGTH {
        let mut row_pv = GRID_LAT_FIRST_PLACE_VALUE;
        let mut col_pv = GRID_LNG_FIRST_PLACE_VALUE;
        let max_digits = clean.len().min(MAX_DIGIT_COUNT);
        for j in PAIR_CODE_LENGTH..max_digits {
            let digit = digit_value(bytes[j]) as i64;
            grid_lat += (digit / GRID_COLUMNS) as f64 * row_pv;
            grid_lng += (digit % GRID_COLUMNS) as f64 * col_pv;
            if j + 1 < max_digits {
                row_pv /= GRID_ROWS as f64;
                col_pv /= GRID_COLUMNS as f64;
            }
        }
        lat_precision = row_pv / FINAL_LAT_PRECISION;
        lng_precision = col_pv / FINAL_LNG_PRECISION;
    }

    let latitude = normal_lat / PAIR_PRECISION + grid_lat / FINAL_LAT_PRECISION;
    let longitude = normal_lng / PAIR_PRECISION + grid_lng / FINAL_LNG_PRECISION;

    Ok(GridCell::new(
        round_degrees(latitude),
        round_degrees(longitude),
        round_degrees(latitude + lat_precision),
        round_degrees(longitude + lng_precision),
        clean.len().min(MAX_DIGIT_COUNT),
    ))
}

/// Is the string a well-formed grid code (full or short)?
pub fn is_valid(code: &str) -> bool {
    let mut separators = code.match_indices(SEPARATOR);
    let Some((sep, _)) = separators.next() else {
        return false;
    };
    if separators.next().is_some() {
        return false;
    }
    if code.len() == 1 {
        return false;
    }
    if sep > SEPARATOR_POSITION || sep % 2 == 1 {
        return false;
    }
    if let Some(pad) = code.find(PADDING_CHARACTER) {
        // Padding is only legal in full codes, never leading, in a single
        // even-length run, and the code must end at the separator.
        if sep < SEPARATOR_POSITION || pad == 0 {
            return false;
        }
        let run = code[pad..]
            .chars()
            .take_while(|&c| c == PADDING_CHARACTER)
            .count();
        if code[pad + run..].contains(PADDING_CHARACTER) {
            return false;
        }
        if run % 2 == 1 || run > SEPARATOR_POSITION - 2 {
            return false;
        }
        if !code.ends_with(SEPARATOR) {
            return false;
        }
    }
    // A single digit after the separator is not decodable.
    if code.len() - sep - 1 == 1 {
        return false;
    }
    code.chars()
        .filter(|&c| c != SEPARATOR && c != PADDING_CHARACTER)
        .all(|c| CODE_ALPHABET.contains(c.to_ascii_uppercase()))
}

/// Is the string a valid short grid code (separator before position 8)?
pub fn is_short(code: &str) -> bool {
    if !is_valid(code) {
        return false;
    }
    match code.find(SEPARATOR) {
        Some(sep) => sep < SEPARATOR_POSITION,
        None => false,
    }
}

/// Is the string a valid full grid code?
///
/// Full codes carry the separator at position 8 and a leading digit pair
/// inside the latitude/longitude domain; only full codes can be decoded.
pub fn is_full(code: &str) -> bool {
    if !is_valid(code) || is_short(code) {
        return false;
    }
    let bytes = code.as_bytes();
    match digit_index(bytes[0]) {
        Some(lat) => {
            if (lat as i64) * ENCODING_BASE >= (2.0 * LATITUDE_MAX) as i64 {
                return false;
            }
        }
        None => return false,
    }
    if bytes.len() > 1 {
        match digit_index(bytes[1]) {
            Some(lng) => {
                if (lng as i64) * ENCODING_BASE >= (2.0 * LONGITUDE_MAX) as i64 {
                    return false;
                }
            }
            None => return false,
        }
    }
    true
}

fn digit_index(byte: u8) -> Option<usize> {
    CODE_ALPHABET
        .bytes()
        .position(|b| b == byte.to_ascii_uppercase())
}

fn digit_value(byte: u8) -> f64 {
    digit_index(byte).unwrap_or(0) as f64
}

fn clip_latitude(latitude: f64) -> f64 {
    latitude.clamp(-LATITUDE_MAX, LATITUDE_MAX)
}

fn normalize_longitude(mut longitude: f64) -> f64 {
    while longitude < -LONGITUDE_MAX {
        longitude += 2.0 * LONGITUDE_MAX;
    }
    while longitude >= LONGITUDE_MAX {
        longitude -= 2.0 * LONGITUDE_MAX;
    }
    longitude
}

/// Height in degrees of a cell addressed by a code of the given length.
fn latitude_precision(code_length: usize) -> f64 {
    if code_length <= PAIR_CODE_LENGTH {
        (ENCODING_BASE as f64).powf((code_length as f64 / -2.0 + 2.0).floor())
    } else {
        (ENCODING_BASE as f64).powi(-3)
            / (GRID_ROWS as f64).powi(code_length as i32 - PAIR_CODE_LENGTH as i32)
    }
}

/// Rounds at the 14th decimal place to suppress floating point artifacts in
/// decoded degree values.
fn round_degrees(value: f64) -> f64 {
    (value * 1e14).round() / 1e14
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_pair_precision() -> Result<(), UbidError> {
        assert_eq!(encode(47.645, -122.135, 10)?, "84VVJVW8+22");
        assert_eq!(encode(47.65, -122.13, 10)?, "84VVMV2C+22");
        assert_eq!(encode(47.64, -122.14, 10)?, "84VVJVR6+22");
        Ok(())
    }

    #[test]
    fn test_encode_padded() -> Result<(), UbidError> {
        assert_eq!(encode(20.375, 2.775, 6)?, "7FG49Q00+");
        assert_eq!(encode(47.645, -122.135, 2)?, "84000000+");
        Ok(())
    }

    #[test]
    fn test_encode_grid_refinement() -> Result<(), UbidError> {
        assert_eq!(encode(47.6450625, -122.1349375, 11)?, "84VVJVW8+22G");
        Ok(())
    }

    #[test]
    fn test_encode_clamps_length() -> Result<(), UbidError> {
        // Lengths above the maximum digit count are clamped, not rejected.
        assert_eq!(encode(47.6450625, -122.1349375, 17)?, "84VVJVW8+22GCCCC");
        Ok(())
    }

    #[test]
    fn test_encode_invalid_length() {
        assert_eq!(encode(47.645, -122.135, 0), Err(UbidError::InvalidCodeLength(0)));
        assert_eq!(encode(47.645, -122.135, 1), Err(UbidError::InvalidCodeLength(1)));
        assert_eq!(encode(47.645, -122.135, 3), Err(UbidError::InvalidCodeLength(3)));
        assert_eq!(encode(47.645, -122.135, 9), Err(UbidError::InvalidCodeLength(9)));
        assert!(encode(47.645, -122.135, 11).is_ok());
    }

    #[test]
    fn test_encode_non_finite() {
        assert!(matches!(
            encode(f64::NAN, -122.135, 10),
            Err(UbidError::InvalidCoordinate(_))
        ));
        assert!(matches!(
            encode(47.645, f64::INFINITY, 10),
            Err(UbidError::InvalidCoordinate(_))
        ));
    }

    #[test]
    fn test_encode_normalizes_longitude() -> Result<(), UbidError> {
        assert_eq!(
            encode(47.6450625, 237.8650625, 10)?,
            encode(47.6450625, -122.1349375, 10)?
        );
        Ok(())
    }

    #[test]
    fn test_encode_north_pole() -> Result<(), UbidError> {
        let cell = decode(&encode(90.0, 1.0, 10)?)?;
        assert!((cell.north - 90.0).abs() < 1e-9);
        assert!(cell.south < 90.0);
        Ok(())
    }

    #[test]
    fn test_decode_pair_precision() -> Result<(), UbidError> {
        let cell = decode("84VVJVW8+22")?;
        assert!((cell.south - 47.645).abs() < 1e-10);
        assert!((cell.west - -122.135).abs() < 1e-10);
        assert!((cell.north - 47.645125).abs() < 1e-10);
        assert!((cell.east - -122.134875).abs() < 1e-10);
        assert_eq!(cell.code_length, 10);
        assert!((cell.height() - 0.000125).abs() < 1e-12);
        assert!((cell.width() - 0.000125).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn test_decode_grid_refinement() -> Result<(), UbidError> {
        let cell = decode("84VVJVW8+22G")?;
        assert!((cell.south - 47.64505).abs() < 1e-10);
        assert!((cell.west - -122.1349375).abs() < 1e-10);
        assert_eq!(cell.code_length, 11);
        assert!((cell.height() - 0.000025).abs() < 1e-12);
        assert!((cell.width() - 0.00003125).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn test_decode_lowercase() -> Result<(), UbidError> {
        assert_eq!(decode("84vvjvw8+22")?, decode("84VVJVW8+22")?);
        Ok(())
    }

    #[test]
    fn test_decode_rejects_short() {
        assert_eq!(
            decode("JVW8+22"),
            Err(UbidError::InvalidGridCode("JVW8+22".to_string()))
        );
    }

    #[test]
    fn test_decode_rejects_malformed() {
        assert!(decode("").is_err());
        assert!(decode("84VVJVW8").is_err());
        assert!(decode("84VVJVW8+2").is_err());
        assert!(decode("84VVJVWA+22").is_err());
    }

    #[test]
    fn test_cell_contains_center() -> Result<(), UbidError> {
        let cell = decode("84VVJVW8+22")?;
        assert!(cell.contains(&cell.center()));
        assert!(cell.contains(&(-122.135, 47.645)));
        assert!(!cell.contains(&(-122.14, 47.645)));
        Ok(())
    }

    #[test]
    fn test_encode_decode_contains_point() -> Result<(), UbidError> {
        let (latitude, longitude) = (47.3655625, 8.5249375);
        for code_length in [4, 6, 8, 10, 11, 12, 15] {
            let cell = decode(&encode(latitude, longitude, code_length)?)?;
            assert!(cell.contains(&(longitude, latitude)), "length {}", code_length);
        }
        Ok(())
    }

    #[test]
    fn test_is_valid() {
        assert!(is_valid("849VQJQ6+25"));
        assert!(is_valid("84VVJVW8+"));
        assert!(is_valid("7FG49Q00+"));
        assert!(is_valid("JVW8+22"));
        assert!(is_valid("84vvjvw8+22"));

        assert!(!is_valid(""));
        assert!(!is_valid("+"));
        assert!(!is_valid("849VQJQ6-25"));
        assert!(!is_valid("849VQJQ6+2"));
        assert!(!is_valid("849VQ+JQ6+25"));
        assert!(!is_valid("849VQJQ+25"));
        assert!(!is_valid("0849VQJQ+"));
        assert!(!is_valid("849VQ000+"));
        assert!(!is_valid("8490QJ00+"));
        assert!(!is_valid("84VV0000+22"));
        assert!(!is_valid("849AQJQ6+25"));
    }

    #[test]
    fn test_is_short_and_full() {
        assert!(is_short("JVW8+22"));
        assert!(!is_short("84VVJVW8+22"));
        assert!(is_full("84VVJVW8+22"));
        assert!(is_full("7FG49Q00+"));
        assert!(!is_full("JVW8+22"));
        // First digit would place the latitude beyond the pole.
        assert!(!is_full("XX5JJC23+"));
    }

    #[test]
    fn test_latitude_precision() {
        assert!((latitude_precision(2) - 20.0).abs() < 1e-12);
        assert!((latitude_precision(10) - 0.000125).abs() < 1e-12);
        assert!((latitude_precision(11) - 0.000025).abs() < 1e-12);
    }
}
