use crate::core::grid::GridCell;
use geo_types::{Point, Rect, coord};
use serde::{Deserialize, Serialize};

/// The area addressed by a UBID: a bounding box for a building footprint,
/// anchored to the grid cell containing the footprint centroid.
///
/// The box bounds are decimal degrees (WGS84) and may be larger than the
/// centroid cell, since they are built from whole-cell Chebyshev distances.
/// Areas are immutable; [`resize`](UbidArea::resize) returns a new value.
///
/// # Example
///
/// ```
/// use ubid_rs::decode;
///
/// # fn main() -> Result<(), ubid_rs::UbidError> {
/// let area = decode("84VVJVW8+22-40-40-40-40")?;
/// assert!(area.north >= area.south);
/// assert!(area.centroid_cell.contains(&area.centroid()));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UbidArea {
    /// Grid cell containing the centroid of the building footprint
    pub centroid_cell: GridCell,
    /// Digit count of the centroid grid code, excluding the separator
    pub centroid_code_length: usize,
    /// Northern latitude bound of the bounding box
    pub north: f64,
    /// Southern latitude bound of the bounding box
    pub south: f64,
    /// Eastern longitude bound of the bounding box
    pub east: f64,
    /// Western longitude bound of the bounding box
    pub west: f64,
}

impl UbidArea {
    /// Assembles a UBID area from a decoded centroid cell and bounding box
    /// bounds. No validation is performed.
    pub fn new(
        centroid_cell: GridCell,
        centroid_code_length: usize,
        north: f64,
        south: f64,
        east: f64,
        west: f64,
    ) -> Self {
        Self {
            centroid_cell,
            centroid_code_length,
            north,
            south,
            east,
            west,
        }
    }

    /// Returns a copy of this area with each edge of the bounding box moved
    /// inward by half the height/width of the centroid grid cell.
    ///
    /// A decoded bounding box extends to the outer edges of its outermost
    /// grid cells, which is half a cell larger on each side than the box
    /// whose corners re-encode to those same cells. Resizing first makes
    /// re-encoding a decoded area reproduce the original UBID.
    pub fn resize(&self) -> Self {
        let half_height = (self.centroid_cell.north - self.centroid_cell.south) / 2.0;
        let half_width = (self.centroid_cell.east - self.centroid_cell.west) / 2.0;

        Self {
            centroid_cell: self.centroid_cell.clone(),
            centroid_code_length: self.centroid_code_length,
            north: self.north - half_height,
            south: self.south + half_height,
            east: self.east - half_width,
            west: self.west + half_width,
        }
    }

    /// Returns the centroid cell center as a point (x = longitude,
    /// y = latitude).
    pub fn centroid(&self) -> Point<f64> {
        self.centroid_cell.center()
    }

    /// Returns the bounding box height in decimal degrees of latitude.
    pub fn height(&self) -> f64 {
        self.north - self.south
    }

    /// Returns the bounding box width in decimal degrees of longitude.
    pub fn width(&self) -> f64 {
        self.east - self.west
    }

    /// Converts the bounding box to a `geo_types::Rect` for GIS operations.
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(
            coord! { x: self.west, y: self.south },
            coord! { x: self.east, y: self.north },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid;
    use crate::util::error::UbidError;

    fn sample_area() -> Result<UbidArea, UbidError> {
        let cell = grid::decode("84VVJVW8+22")?;
        Ok(UbidArea::new(cell, 10, 47.650125, 47.64, -122.129875, -122.14))
    }

    #[test]
    fn test_resize_shrinks_inward() -> Result<(), UbidError> {
        let area = sample_area()?;
        let resized = area.resize();

        assert!(resized.north < area.north);
        assert!(resized.south > area.south);
        assert!(resized.east < area.east);
        assert!(resized.west > area.west);

        let half_height = area.centroid_cell.height() / 2.0;
        let half_width = area.centroid_cell.width() / 2.0;
        assert!((area.north - resized.north - half_height).abs() < 1e-12);
        assert!((resized.south - area.south - half_height).abs() < 1e-12);
        assert!((area.east - resized.east - half_width).abs() < 1e-12);
        assert!((resized.west - area.west - half_width).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn test_resize_preserves_centroid_cell() -> Result<(), UbidError> {
        let area = sample_area()?;
        let resized = area.resize();

        assert_eq!(resized.centroid_cell, area.centroid_cell);
        assert_eq!(resized.centroid_code_length, area.centroid_code_length);
        Ok(())
    }

    #[test]
    fn test_resize_does_not_mutate() -> Result<(), UbidError> {
        let area = sample_area()?;
        let copy = area.clone();
        let _ = area.resize();
        assert_eq!(area, copy);
        Ok(())
    }

    #[test]
    fn test_dimensions() -> Result<(), UbidError> {
        let area = sample_area()?;
        assert!((area.height() - 0.010125).abs() < 1e-9);
        assert!((area.width() - 0.010125).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_to_rect() -> Result<(), UbidError> {
        let area = sample_area()?;
        let rect = area.to_rect();
        assert_eq!(rect.min().x, area.west);
        assert_eq!(rect.min().y, area.south);
        assert_eq!(rect.max().x, area.east);
        assert_eq!(rect.max().y, area.north);
        Ok(())
    }

    #[test]
    fn test_serialization_round_trip() -> Result<(), UbidError> {
        let area = sample_area()?;
        let json = serde_json::to_string(&area).expect("serializable");
        let back: UbidArea = serde_json::from_str(&json).expect("deserializable");
        assert_eq!(back, area);
        Ok(())
    }
}
