use crate::api::cell::GridCell;
use crate::core::constants::{DEFAULT_CELL_SIZE, DEFAULT_PIXEL_SIZE};
use crate::core::grid::GridIndex;
use geo_types::{Point, Polygon, Rect};
use rayon::prelude::*;

/// A materialized collection of [`GridCell`]s covering a bounding box (or
/// the whole grid), built from a [`GridIndex`].
///
/// Cells are kept in the grid's canonical row-major order, north to south
/// and west to east.
#[derive(Debug, Clone)]
pub struct CellGrid {
    cells: Vec<GridCell>,
    index: GridIndex,
}

impl CellGrid {
    pub fn builder() -> CellGridBuilder {
        CellGridBuilder::new()
    }

    /// Materializes the cells intersected by the given bounding box.
    pub fn from_extent(index: GridIndex, min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        let cells = index
            .intersected_cells(min_x, min_y, max_x, max_y)
            .into_iter()
            .map(|cell_id| GridCell::from_cell_id(&index, cell_id))
            .collect();
        Self { cells, index }
    }

    pub fn from_rect(index: GridIndex, rect: &Rect<f64>) -> Self {
        Self::from_extent(
            index,
            rect.min().x,
            rect.min().y,
            rect.max().x,
            rect.max().y,
        )
    }

    /// Materializes every cell of the grid.
    pub fn global(index: GridIndex) -> Self {
        let cells = index
            .all_cell_ids()
            .into_iter()
            .map(|cell_id| GridCell::from_cell_id(&index, cell_id))
            .collect();
        Self { cells, index }
    }

    /// The [`GridIndex`] this collection was built from.
    pub fn index(&self) -> &GridIndex {
        &self.index
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    pub fn iter(&self) -> impl Iterator<Item = &GridCell> {
        self.cells.iter()
    }

    /// Returns the materialized cell containing the given point, if any.
    pub fn get_cell_at(&self, point: &Point<f64>) -> Option<&GridCell> {
        let cell_id = self.index.cell_id_at(point).ok()?;
        self.cells.iter().find(|cell| cell.cell_id == cell_id)
    }

    pub fn filter<F>(&self, predicate: F) -> Vec<&GridCell>
    where
        F: Fn(&GridCell) -> bool,
    {
        self.cells.iter().filter(|cell| predicate(cell)).collect()
    }

    /// Converts all cells to footprint polygons, in cell order.
    pub fn to_polygons(&self) -> Vec<Polygon<f64>> {
        self.cells.par_iter().map(|cell| cell.to_polygon()).collect()
    }
}

/// Builder for [`CellGrid`]. Cell geometry defaults to 3x3-degree cells
/// with the default pixel size; without an extent the whole grid is
/// materialized.
#[derive(Debug, Default)]
pub struct CellGridBuilder {
    cell_width: Option<i32>,
    cell_height: Option<i32>,
    pixel_size: Option<f64>,
    bounds: Option<(i32, i32)>,
    extent: Option<(f64, f64, f64, f64)>,
}

impl CellGridBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cell_size(mut self, cell_width: i32, cell_height: i32) -> Self {
        self.cell_width = Some(cell_width);
        self.cell_height = Some(cell_height);
        self
    }

    pub fn pixel_size(mut self, pixel_size: f64) -> Self {
        self.pixel_size = Some(pixel_size);
        self
    }

    /// Narrows the covered latitude band to `north`/`south`.
    pub fn latitude_bounds(mut self, north: i32, south: i32) -> Self {
        self.bounds = Some((north, south));
        self
    }

    pub fn extent(mut self, min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        self.extent = Some((min_x, min_y, max_x, max_y));
        self
    }

    pub fn rect(mut self, rect: &Rect<f64>) -> Self {
        self.extent = Some((rect.min().x, rect.min().y, rect.max().x, rect.max().y));
        self
    }

    pub fn build(self) -> CellGrid {
        let cell_width = self.cell_width.unwrap_or(DEFAULT_CELL_SIZE);
        let cell_height = self.cell_height.unwrap_or(DEFAULT_CELL_SIZE);
        let pixel_size = self.pixel_size.unwrap_or(DEFAULT_PIXEL_SIZE);
        let mut index = GridIndex::new(cell_width, cell_height, pixel_size);
        if let Some((north, south)) = self.bounds {
            index.set_grid_bounds(north, south);
        }
        match self.extent {
            Some((min_x, min_y, max_x, max_y)) => {
                CellGrid::from_extent(index, min_x, min_y, max_x, max_y)
            }
            None => CellGrid::global(index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cell_id::CellId;
    use geo_types::{coord, point};

    #[test]
    fn test_cell_grid_from_extent() {
        let grid = CellGrid::from_extent(GridIndex::default(), -4.0, -35.0, 2.0, -30.0);
        assert_eq!(grid.len(), 6);
        assert_eq!(grid.cells()[0].cell_id, CellId::new(-6, -30));
        assert_eq!(grid.cells()[5].cell_id, CellId::new(0, -33));

        for cell in grid.iter() {
            assert_eq!(cell.cell_width, 3);
            assert_eq!(cell.cell_height, 3);
        }
    }

    #[test]
    fn test_cell_grid_from_rect() {
        let rect = Rect::new(
            coord! { x: -4.0, y: -35.0 },
            coord! { x: 2.0, y: -30.0 },
        );
        let grid = CellGrid::from_rect(GridIndex::default(), &rect);
        assert_eq!(grid.len(), 6);
    }

    #[test]
    fn test_cell_grid_global() {
        let grid = CellGrid::global(GridIndex::default());
        assert_eq!(grid.len(), 360 / 3 * 180 / 3);
        assert_eq!(grid.cells()[0].id, "N90W180");
        assert_eq!(grid.cells()[grid.len() - 1].id, "S87E177");
    }

    #[test]
    fn test_cell_grid_builder() {
        let grid = CellGrid::builder()
            .cell_size(3, 3)
            .extent(-4.0, -35.0, 2.0, -30.0)
            .build();
        assert_eq!(grid.len(), 6);
        assert_eq!(grid.index().cell_width(), 3);
    }

    #[test]
    fn test_cell_grid_builder_defaults_to_global() {
        let grid = CellGrid::builder().build();
        assert_eq!(grid.len(), 7200);
    }

    #[test]
    fn test_cell_grid_builder_with_bounds() {
        let grid = CellGrid::builder()
            .cell_size(20, 20)
            .latitude_bounds(60, -60)
            .build();
        assert_eq!(grid.len(), 108);
        assert_eq!(grid.cells()[0].cell_id, CellId::new(-180, 60));
        assert_eq!(grid.cells()[107].cell_id, CellId::new(160, -40));
    }

    #[test]
    fn test_get_cell_at() {
        let grid = CellGrid::builder().extent(-4.0, -35.0, 2.0, -30.0).build();
        let pt = point! { x: -2.0, y: -31.0 };
        let cell = grid.get_cell_at(&pt);
        assert!(cell.is_some());
        assert_eq!(cell.unwrap().cell_id, CellId::new(-3, -30));

        // outside the materialized extent
        let pt = point! { x: 100.0, y: 50.0 };
        assert!(grid.get_cell_at(&pt).is_none());
    }

    #[test]
    fn test_filter_cells() {
        let grid = CellGrid::builder().extent(-4.0, -35.0, 2.0, -30.0).build();
        let northern = grid.filter(|cell| cell.lat() == -30);
        assert_eq!(northern.len(), 3);
    }

    #[test]
    fn test_to_polygons() {
        let grid = CellGrid::builder().extent(-4.0, -35.0, 2.0, -30.0).build();
        let polygons = grid.to_polygons();
        assert_eq!(polygons.len(), grid.len());
        assert_eq!(polygons[0].exterior().coords().count(), 5);
    }
}
