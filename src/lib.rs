//! # geogrid-rs
//!
//! A global equirectangular degree grid over longitude/latitude. The globe
//! is partitioned into fixed-size rectangular cells, each identified by the
//! coordinate of its upper-left corner and encodable as a compact
//! 7-character string such as `N54W003`.
//!
//! There are three main entry points.
//!
//! ### 1. `GridIndex` - point lookup and cell enumeration
//!
//! ```
//! use geogrid_rs::{CellId, GridIndex};
//!
//! # fn main() -> Result<(), geogrid_rs::GridError> {
//! let grid = GridIndex::default();
//! let cell = grid.cell_id_for(-176.0, 80.0)?;
//! assert_eq!(cell, CellId::new(-177, 81));
//!
//! // neighbourhoods wrap around the antimeridian and collapse at the poles
//! let neighbours = grid.surrounding_cell_ids(&cell)?;
//! assert_eq!(neighbours.len(), 9);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `CellGrid` - collections of cells
//!
//! ```
//! use geogrid_rs::CellGrid;
//! use geo_types::point;
//!
//! let grid = CellGrid::builder()
//!     .cell_size(3, 3)
//!     .extent(-4.0, -35.0, 2.0, -30.0)
//!     .build();
//! assert_eq!(grid.len(), 6);
//!
//! let pt = point! { x: -2.0, y: -31.0 };
//! if let Some(cell) = grid.get_cell_at(&pt) {
//!     println!("{}", cell.id);
//! }
//! ```
//!
//! ### 3. Cell identifiers
//!
//! ```
//! use geogrid_rs::{CellId, format_cell_id, parse_cell_id};
//!
//! # fn main() -> Result<(), geogrid_rs::GridError> {
//! let cell = parse_cell_id("N90W180")?;
//! assert_eq!(cell, CellId::new(-180, 90));
//! assert_eq!(format_cell_id(&cell), "N90W180");
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod core;
pub mod util;

pub use api::{CellGrid, CellGridBuilder, GridCell};
pub use self::core::{
    CELL_ID_LEN, CellId, DEFAULT_CELL_SIZE, DEFAULT_PIXEL_SIZE, EAST_BOUND, GRID_WIDTH, GridIndex,
    NORTH_BOUND, SOUTH_BOUND, WEST_BOUND, cell_polygon, cell_rect,
};
pub use util::{Coordinate, GridError, clip_lat, format_cell_id, normalize_lon, parse_cell_id};

pub use geo_types;
pub use geojson;

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::{Rect, coord, point};

    #[test]
    fn test_end_to_end_workflow() -> Result<(), GridError> {
        let grid = CellGrid::builder()
            .cell_size(3, 3)
            .extent(-4.0, -35.0, 2.0, -30.0)
            .build();

        assert!(!grid.is_empty());
        assert_eq!(grid.len(), 6);

        let pt = point! { x: -2.0, y: -31.0 };
        let cell = grid.get_cell_at(&pt);
        assert!(cell.is_some());

        if let Some(cell) = cell {
            assert_eq!(cell.id, "S30W003");
            let parsed = parse_cell_id(&cell.id)?;
            assert_eq!(parsed, cell.cell_id);

            let polygon = cell.to_polygon();
            assert_eq!(polygon.exterior().coords().count(), 5);
        }
        Ok(())
    }

    #[test]
    fn test_using_geo_types_macros() -> Result<(), GridError> {
        let index = GridIndex::default();
        let pt = point! { x: -2.248, y: 53.481 };
        let cell = index.cell_id_at(&pt)?;
        assert_eq!(cell, CellId::new(-3, 54));

        let rect = Rect::new(
            coord! { x: -4.0, y: -35.0 },
            coord! { x: 2.0, y: -30.0 },
        );
        let grid = CellGrid::from_rect(index, &rect);
        assert!(!grid.is_empty());
        Ok(())
    }

    #[test]
    fn test_grid_iteration() {
        let grid = CellGrid::builder().cell_size(20, 20).build();

        let mut count = 0;
        for cell in grid.iter() {
            assert_eq!(cell.cell_width, 20);
            count += 1;
        }
        assert_eq!(count, grid.len());
    }

    #[test]
    fn test_identifier_round_trip_through_grid() -> Result<(), GridError> {
        let index = GridIndex::default();
        for cell_id in index.all_cell_ids() {
            let formatted = format_cell_id(&cell_id);
            assert_eq!(formatted.len(), CELL_ID_LEN);
            assert_eq!(parse_cell_id(&formatted)?, cell_id);
        }
        Ok(())
    }

    #[test]
    fn test_cell_consistency_with_grid() -> Result<(), GridError> {
        let index = GridIndex::default();
        let cell_direct = GridCell::from_lonlat(&index, &(-2.0, -31.0))?;

        let grid = CellGrid::from_extent(index, -4.0, -35.0, 2.0, -30.0);
        let pt = point! { x: -2.0, y: -31.0 };
        let cell_from_grid = grid.get_cell_at(&pt);

        assert!(cell_from_grid.is_some());
        assert_eq!(&cell_direct, cell_from_grid.unwrap());
        Ok(())
    }

    #[test]
    fn test_geojson_export() -> Result<(), GridError> {
        let index = GridIndex::default();
        let cell = GridCell::from_id(&index, "N90W180")?;

        let feature = cell.to_geojson_feature();
        let json = serde_json::to_string(&feature).expect("feature serializes");
        assert!(json.contains("N90W180"));
        assert!(json.contains("Polygon"));
        Ok(())
    }
}
