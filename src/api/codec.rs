use crate::api::area::UbidArea;
use crate::core::constants::{PAIR_CODE_LENGTH, SEPARATOR, UBID_SEPARATOR};
use crate::core::grid;
use crate::core::parse::parse_ubid;
use crate::util::coord::Coordinate;
use crate::util::error::UbidError;

/// Decodes a UBID string into the area it addresses.
///
/// The centroid segment is decoded into its grid cell and the four
/// Chebyshev distances are applied outward from the cell edges to rebuild
/// the bounding box. The box is returned as decoded; callers that want a
/// box which re-encodes to the same UBID apply
/// [`UbidArea::resize`] first.
///
/// # Example
/// ```
/// use ubid_rs::decode;
///
/// # fn main() -> Result<(), ubid_rs::UbidError> {
/// let area = decode("84VVJVW8+22-40-40-40-40")?;
/// assert!((area.south - 47.64).abs() < 1e-9);
/// assert!((area.west - -122.14).abs() < 1e-9);
/// assert_eq!(area.centroid_code_length, 10);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// [`UbidError::InvalidUbid`] - the string does not match the UBID grammar,
/// or its centroid segment is not a decodable grid code.
pub fn decode(code: &str) -> Result<UbidArea, UbidError> {
    let parts = parse_ubid(code).ok_or_else(|| UbidError::InvalidUbid(code.to_string()))?;

    let centroid_cell =
        grid::decode(parts.grid_code).map_err(|_| UbidError::InvalidUbid(code.to_string()))?;

    let height = centroid_cell.north - centroid_cell.south;
    let width = centroid_cell.east - centroid_cell.west;

    // The distances are whole-cell counts outward from the cell edges, not
    // from the centroid point.
    let north = centroid_cell.north + parts.north as f64 * height;
    let east = centroid_cell.east + parts.east as f64 * width;
    let south = centroid_cell.south - parts.south as f64 * height;
    let west = centroid_cell.west - parts.west as f64 * width;

    let centroid_code_length = parts.grid_code.len() - SEPARATOR.len_utf8();

    Ok(UbidArea::new(
        centroid_cell,
        centroid_code_length,
        north,
        south,
        east,
        west,
    ))
}

/// Encodes a building footprint as a UBID at the standard pair precision.
///
/// Takes the southwest corner, northeast corner, and centroid of the
/// minimal bounding box for the footprint, in decimal degrees (WGS84).
///
/// # Example
/// ```
/// use ubid_rs::encode;
///
/// # fn main() -> Result<(), ubid_rs::UbidError> {
/// let code = encode(47.64, -122.14, 47.65, -122.13, 47.645, -122.135)?;
/// assert_eq!(code, "84VVJVW8+22-40-40-40-40");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// [`UbidError::InvalidBoundingBox`] - a corner or the centroid could not
/// be encoded as a grid code.
pub fn encode(
    latitude_lo: f64,
    longitude_lo: f64,
    latitude_hi: f64,
    longitude_hi: f64,
    latitude_center: f64,
    longitude_center: f64,
) -> Result<String, UbidError> {
    encode_with_code_length(
        latitude_lo,
        longitude_lo,
        latitude_hi,
        longitude_hi,
        latitude_center,
        longitude_center,
        PAIR_CODE_LENGTH,
    )
}

/// Encodes a building footprint as a UBID with an explicit grid code
/// length.
///
/// The corners and centroid are each encoded into grid codes and decoded
/// back, so the distance arithmetic runs on cell-aligned coordinates rather
/// than the raw inputs. The four Chebyshev distances are the whole-cell
/// offsets between the centroid cell edges and the corner cell edges.
///
/// # Errors
///
/// [`UbidError::InvalidBoundingBox`] - the code length is unsupported or a
/// coordinate could not be encoded.
pub fn encode_with_code_length(
    latitude_lo: f64,
    longitude_lo: f64,
    latitude_hi: f64,
    longitude_hi: f64,
    latitude_center: f64,
    longitude_center: f64,
    code_length: usize,
) -> Result<String, UbidError> {
    let northeast_code = grid::encode(latitude_hi, longitude_hi, code_length)
        .map_err(|e| UbidError::InvalidBoundingBox(e.to_string()))?;
    let southwest_code = grid::encode(latitude_lo, longitude_lo, code_length)
        .map_err(|e| UbidError::InvalidBoundingBox(e.to_string()))?;
    let centroid_code = grid::encode(latitude_center, longitude_center, code_length)
        .map_err(|e| UbidError::InvalidBoundingBox(e.to_string()))?;

    let northeast = grid::decode(&northeast_code)
        .map_err(|e| UbidError::InvalidBoundingBox(e.to_string()))?;
    let southwest = grid::decode(&southwest_code)
        .map_err(|e| UbidError::InvalidBoundingBox(e.to_string()))?;
    let centroid = grid::decode(&centroid_code)
        .map_err(|e| UbidError::InvalidBoundingBox(e.to_string()))?;

    let height = centroid.north - centroid.south;
    let width = centroid.east - centroid.west;

    let delta_north = (northeast.north - centroid.north) / height;
    let delta_east = (northeast.east - centroid.east) / width;
    let delta_south = (centroid.south - southwest.south) / height;
    let delta_west = (centroid.west - southwest.west) / width;

    // The ratios resolve to whole cell counts for ordered input; the
    // zero-decimal formatting absorbs the residual float error.
    Ok(format!(
        "{code}{sep}{north:.0}{sep}{east:.0}{sep}{south:.0}{sep}{west:.0}",
        code = centroid_code,
        sep = UBID_SEPARATOR,
        north = delta_north,
        east = delta_east,
        south = delta_south,
        west = delta_west,
    ))
}

/// Encodes a building footprint as a UBID from corner and centroid points
/// at the standard pair precision.
///
/// Accepts anything implementing [`Coordinate`] (x = longitude,
/// y = latitude), such as `geo_types::Point<f64>` or `(f64, f64)` tuples.
///
/// # Example
/// ```
/// use ubid_rs::{encode_points, is_valid};
/// use geo_types::Point;
///
/// # fn main() -> Result<(), ubid_rs::UbidError> {
/// let code = encode_points(
///     &Point::new(-122.14, 47.64),
///     &Point::new(-122.13, 47.65),
///     &(-122.135, 47.645),
/// )?;
/// assert!(is_valid(&code));
/// # Ok(())
/// # }
/// ```
pub fn encode_points(
    southwest: &impl Coordinate,
    northeast: &impl Coordinate,
    centroid: &impl Coordinate,
) -> Result<String, UbidError> {
    encode(
        southwest.y(),
        southwest.x(),
        northeast.y(),
        northeast.x(),
        centroid.y(),
        centroid.x(),
    )
}

/// Encodes a UBID area back into a UBID string.
///
/// Delegates to [`encode_with_code_length`] with the area bounds, the
/// centroid cell center, and the area's centroid code length. Together
/// with [`UbidArea::resize`] this reproduces the string a decoded area came
/// from.
///
/// # Example
/// ```
/// use ubid_rs::{decode, encode_area};
///
/// # fn main() -> Result<(), ubid_rs::UbidError> {
/// let code = "849VQJQ6+25-1-1-1-1";
/// let area = decode(code)?;
/// assert_eq!(encode_area(&area.resize())?, code);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`UbidError::InvalidArgument`] - the area has non-finite or inverted
///   bounds
/// - [`UbidError::InvalidBoundingBox`] - the area could not be re-encoded
pub fn encode_area(area: &UbidArea) -> Result<String, UbidError> {
    let finite = area.north.is_finite()
        && area.south.is_finite()
        && area.east.is_finite()
        && area.west.is_finite();
    if !finite || area.north < area.south || area.east < area.west {
        return Err(UbidError::InvalidArgument(format!(
            "degenerate UBID area: {:?}",
            area
        )));
    }

    encode_with_code_length(
        area.south,
        area.west,
        area.north,
        area.east,
        area.centroid_cell.latitude_center,
        area.centroid_cell.longitude_center,
        area.centroid_code_length,
    )
}

/// Is the string a valid UBID?
///
/// The string must match the UBID grammar and its centroid segment must be
/// a valid grid code. Never errors; all failure modes return `false`.
///
/// # Example
/// ```
/// use ubid_rs::is_valid;
///
/// assert!(is_valid("849VQJQ6+25-1-1-1-1"));
/// assert!(!is_valid("invalid+chars-1-1-1-1"));
/// assert!(!is_valid("849VQJQ6+25-01-1-1-1"));
/// ```
pub fn is_valid(code: &str) -> bool {
    match parse_ubid(code) {
        Some(parts) => grid::is_valid(parts.grid_code),
        None => false,
    }
}
