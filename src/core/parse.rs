use crate::core::constants::{CODE_ALPHABET, SEPARATOR, UBID_SEPARATOR};

/// The typed fields of a UBID string.
///
/// A UBID is `<grid-code>-<north>-<east>-<south>-<west>`: the grid code for
/// the footprint centroid followed by the Chebyshev distances, in grid cell
/// units, from the centroid cell to the four extents of the bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UbidParts<'a> {
    /// Grid code segment for the centroid of the building footprint
    pub grid_code: &'a str,
    /// Cell count from the centroid cell to the northern extent
    pub north: u64,
    /// Cell count from the centroid cell to the eastern extent
    pub east: u64,
    /// Cell count from the centroid cell to the southern extent
    pub south: u64,
    /// Cell count from the centroid cell to the western extent
    pub west: u64,
}

/// Splits a UBID string into its typed fields.
///
/// Returns `None` unless the whole string matches the UBID grammar: a grid
/// segment of 4 to 8 uppercase digit characters, the grid separator and any
/// number of trailing digit characters, then exactly four `-`-separated
/// non-negative integers without leading zeros. The grid segment is only
/// checked against the grammar here; grid-level validity is the caller's
/// concern.
pub fn parse_ubid(code: &str) -> Option<UbidParts<'_>> {
    let mut fields = code.split(UBID_SEPARATOR);
    let grid_code = fields.next()?;
    let north = parse_distance(fields.next()?)?;
    let east = parse_distance(fields.next()?)?;
    let south = parse_distance(fields.next()?)?;
    let west = parse_distance(fields.next()?)?;
    if fields.next().is_some() {
        return None;
    }
    if !is_grammar_grid_code(grid_code) {
        return None;
    }
    Some(UbidParts {
        grid_code,
        north,
        east,
        south,
        west,
    })
}

/// Matches the grid segment of the UBID grammar: 4-8 digit characters, the
/// separator, then zero or more digit characters.
fn is_grammar_grid_code(segment: &str) -> bool {
    let Some(sep) = segment.find(SEPARATOR) else {
        return false;
    };
    let head = &segment[..sep];
    let tail = &segment[sep + SEPARATOR.len_utf8()..];
    (4..=8).contains(&head.len())
        && head.chars().all(|c| CODE_ALPHABET.contains(c))
        && tail.chars().all(|c| CODE_ALPHABET.contains(c))
}

/// Parses `0|[1-9][0-9]*`: no sign, no leading zero, digits only.
fn parse_distance(field: &str) -> Option<u64> {
    if field.is_empty() {
        return None;
    }
    if field.len() > 1 && field.starts_with('0') {
        return None;
    }
    if !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}
