use crate::core::cell_id::CellId;
use geo_types::{Polygon, Rect, coord};

/// Returns the axis-aligned rectangle covered by a cell, given the grid's
/// cell geometry. The cell id names the upper-left corner, so the rectangle
/// extends east and south from it.
pub fn cell_rect(cell: &CellId, cell_width: i32, cell_height: i32) -> Rect<f64> {
    Rect::new(
        coord! { x: cell.x as f64, y: (cell.y - cell_height) as f64 },
        coord! { x: (cell.x + cell_width) as f64, y: cell.y as f64 },
    )
}

/// Returns the cell's footprint as a closed polygon, suitable for spatial
/// operations or WKT/GeoJSON export.
pub fn cell_polygon(cell: &CellId, cell_width: i32, cell_height: i32) -> Polygon<f64> {
    cell_rect(cell, cell_width, cell_height).to_polygon()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_rect() {
        let rect = cell_rect(&CellId::new(-180, 90), 3, 3);
        assert_eq!(rect.min().x, -180.0);
        assert_eq!(rect.min().y, 87.0);
        assert_eq!(rect.max().x, -177.0);
        assert_eq!(rect.max().y, 90.0);
    }

    #[test]
    fn test_cell_polygon_is_closed() {
        let polygon = cell_polygon(&CellId::new(0, 0), 3, 3);
        let exterior = polygon.exterior();
        assert_eq!(exterior.coords().count(), 5); // 4 corners + 1 to close
        assert_eq!(exterior.0[0], exterior.0[4]);
    }

    #[test]
    fn test_cell_polygon_dimensions() {
        let polygon = cell_polygon(&CellId::new(160, -40), 20, 20);
        let rect = cell_rect(&CellId::new(160, -40), 20, 20);
        assert_eq!(rect.width(), 20.0);
        assert_eq!(rect.height(), 20.0);
        assert!(polygon.exterior().coords().any(|c| c.x == 180.0 && c.y == -60.0));
    }
}
