use crate::core::cell_id::CellId;
use crate::core::constants::{
    DEFAULT_CELL_SIZE, DEFAULT_PIXEL_SIZE, EAST_BOUND, GRID_WIDTH, NORTH_BOUND, SOUTH_BOUND,
    WEST_BOUND,
};
use crate::util::coord::{Coordinate, clip_lat, normalize_lon};
use crate::util::error::GridError;

/// A global grid of fixed-size rectangular cells over longitude/latitude.
///
/// Each cell is identified by its upper-left (northwest) corner, see
/// [`CellId`]. The grid starts in the upper-left corner and proceeds east
/// and then south: with 3-degree cells the first cell is at -180/90, the
/// second at -177/90. Longitude always spans the full circle and wraps at
/// the antimeridian; the covered latitude band can be narrowed with
/// [`set_grid_bounds`](GridIndex::set_grid_bounds).
///
/// This is a flat equirectangular partition measured in degrees; no
/// geodesic math is involved.
///
/// # Example
///
/// ```
/// use geogrid_rs::{CellId, GridIndex};
///
/// # fn main() -> Result<(), geogrid_rs::GridError> {
/// let grid = GridIndex::default();
/// assert_eq!(grid.cell_id_for(-176.0, 80.0)?, CellId::new(-177, 81));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridIndex {
    cell_width: i32,
    cell_height: i32,
    pixel_size: f64,
    north_bound: i32,
    south_bound: i32,
}

impl Default for GridIndex {
    fn default() -> Self {
        Self::new(DEFAULT_CELL_SIZE, DEFAULT_CELL_SIZE, DEFAULT_PIXEL_SIZE)
    }
}

impl GridIndex {
    /// Creates a grid with the given cell size and sub-cell pixel size, in
    /// degrees, covering the full globe.
    ///
    /// `cell_width` must evenly divide 360 for full longitude coverage, and
    /// `pixel_size` must not exceed the cell size.
    pub fn new(cell_width: i32, cell_height: i32, pixel_size: f64) -> Self {
        debug_assert!(cell_width > 0 && GRID_WIDTH % cell_width == 0);
        debug_assert!(cell_height > 0);
        debug_assert!(pixel_size <= cell_width.min(cell_height) as f64);
        Self {
            cell_width,
            cell_height,
            pixel_size,
            north_bound: NORTH_BOUND,
            south_bound: SOUTH_BOUND,
        }
    }

    /// Creates a grid with the given cell size and the default pixel size.
    pub fn with_cell_size(cell_width: i32, cell_height: i32) -> Self {
        Self::new(cell_width, cell_height, DEFAULT_PIXEL_SIZE)
    }

    /// Replaces the northern and southern latitude limits of the grid.
    ///
    /// The values are stored unconditionally; callers are responsible for
    /// `north > south` and both lying within ±90. All subsequent queries
    /// observe the new band.
    pub fn set_grid_bounds(&mut self, north: i32, south: i32) {
        self.north_bound = north;
        self.south_bound = south;
    }

    /// Width of the grid in longitude degrees, always the full circle.
    pub fn grid_width(&self) -> i32 {
        GRID_WIDTH
    }

    /// Height of the grid in latitude degrees under the current bounds.
    pub fn grid_height(&self) -> i32 {
        (self.north_bound + 90) - (self.south_bound + 90)
    }

    pub fn cell_width(&self) -> i32 {
        self.cell_width
    }

    pub fn cell_height(&self) -> i32 {
        self.cell_height
    }

    pub fn pixel_size(&self) -> f64 {
        self.pixel_size
    }

    pub fn north_bound(&self) -> i32 {
        self.north_bound
    }

    pub fn south_bound(&self) -> i32 {
        self.south_bound
    }

    /// Returns true if the coordinate lies within the grid's longitude range
    /// and the current latitude band.
    pub fn is_in_bounds(&self, lon: f64, lat: f64) -> bool {
        lon >= WEST_BOUND as f64
            && lon <= EAST_BOUND as f64
            && lat >= self.south_bound as f64
            && lat <= self.north_bound as f64
    }

    /// Returns the id of the cell containing the given coordinate.
    ///
    /// Coordinates within half a pixel of a cell edge are attributed to the
    /// adjacent cell, compensating for sub-cell sampling offsets in the
    /// caller's data. Longitude wraps around the antimeridian and latitude
    /// is clipped at the poles before the lookup; a latitude outside the
    /// current bounds fails with [`GridError::OutOfBounds`].
    pub fn cell_id_for(&self, lon: f64, lat: f64) -> Result<CellId, GridError> {
        let mut lon = lon;
        let mut lat = lat;
        // a coordinate within half a pixel of the cell edge already belongs
        // to the adjacent cell
        let lat_remaining = (lat % self.cell_height as f64).abs();
        if lat_remaining > 0.0 && lat_remaining < self.pixel_size / 2.0 {
            lat -= self.pixel_size / 2.0;
        }
        let lon_remaining = (lon % self.cell_width as f64).abs();
        if lon_remaining > 0.0 && lon_remaining < self.pixel_size / 2.0 {
            lon += self.pixel_size / 2.0;
        }
        let lon = normalize_lon(lon);
        let lat = clip_lat(lat);
        if !self.is_in_bounds(lon, lat) {
            return Err(GridError::OutOfBounds(format!(
                "Cell-X must be between {} and {}, Cell-Y must be between {} and {}",
                WEST_BOUND, EAST_BOUND, self.south_bound, self.north_bound
            )));
        }
        let x = ((lon + 180.0) % 360.0 / self.cell_width as f64).floor() as i32 * self.cell_width
            - 180;
        let y = if lat < 0.0 {
            let mut y = -((-lat / self.cell_height as f64).floor() as i32 * self.cell_height);
            if y == self.south_bound {
                // the southernmost row is identified by its upper edge
                y = self.south_bound + self.cell_height;
            }
            y
        } else {
            (lat / self.cell_height as f64).ceil() as i32 * self.cell_height
        };
        Ok(CellId::new(x, y))
    }

    /// [`cell_id_for`](GridIndex::cell_id_for) accepting any [`Coordinate`],
    /// e.g. an `(f64, f64)` tuple or a `geo_types::Point`.
    pub fn cell_id_at<C: Coordinate>(&self, coord: &C) -> Result<CellId, GridError> {
        self.cell_id_for(coord.x(), coord.y())
    }

    /// Returns the cells intersected by the given bounding box, ordered
    /// row-major from the upper-left corner to the lower-right corner
    /// (north to south, west to east).
    ///
    /// The box is clipped to the grid first; the eastern edge is nudged
    /// inward by half a cell width so a box ending exactly on the
    /// antimeridian does not pull in a wrapped-around cell. A box that
    /// misses the current latitude band entirely yields no cells.
    pub fn intersected_cells(&self, min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Vec<CellId> {
        let ul = match self.cell_id_for(
            min_x.max(WEST_BOUND as f64),
            max_y.min(self.north_bound as f64),
        ) {
            Ok(cell) => cell,
            Err(_) => return Vec::new(),
        };
        let lr = match self.cell_id_for(
            max_x.min(EAST_BOUND as f64 - self.cell_width as f64 / 2.0),
            min_y.max(self.south_bound as f64),
        ) {
            Ok(cell) => cell,
            Err(_) => return Vec::new(),
        };

        let mut cells = Vec::new();
        let mut lat = ul.y;
        while lat >= lr.y {
            let mut lon = ul.x;
            while lon <= lr.x {
                cells.push(CellId::new(lon, lat));
                lon += self.cell_width;
            }
            lat -= self.cell_height;
        }
        cells
    }

    /// Returns the cells of a horizontal stripe starting at `lon_start` and
    /// spanning `lon_width` degrees, covering every latitude row from the
    /// northern bound down to (but excluding) the southern bound.
    ///
    /// Unlike [`intersected_cells`](GridIndex::intersected_cells) the
    /// longitude inputs are neither clipped nor normalized, so out-of-range
    /// values produce cell ids outside the canonical ±180 range. This is
    /// intentional and used for synthetic, periodically repeated stripes.
    pub fn stripe(&self, lon_start: i32, lon_width: i32) -> Vec<CellId> {
        self.stripe_from(lon_start, lon_width, self.north_bound)
    }

    /// Like [`stripe`](GridIndex::stripe), but the latitude rows start at
    /// `start_lat` (capped at the northern bound) instead of the top of the
    /// grid.
    pub fn stripe_from(&self, lon_start: i32, lon_width: i32, start_lat: i32) -> Vec<CellId> {
        let mut cells = Vec::new();
        let mut lat = start_lat.min(self.north_bound);
        while lat > self.south_bound {
            let mut lon = lon_start;
            while lon < lon_start + lon_width {
                cells.push(CellId::new(lon, lat));
                lon += self.cell_width;
            }
            lat -= self.cell_height;
        }
        cells
    }

    /// Returns every cell id in the grid, ordered row-major from -180 at
    /// the northern bound, east and then south. The length is exactly
    /// `(360 / cell_width) * (grid_height / cell_height)`.
    pub fn all_cell_ids(&self) -> Vec<CellId> {
        let count = (self.grid_width() / self.cell_width) as usize
            * (self.grid_height() / self.cell_height) as usize;
        let mut cells = Vec::with_capacity(count);
        let mut lat = self.north_bound;
        while lat > self.south_bound {
            let mut lon = WEST_BOUND;
            while lon < EAST_BOUND {
                cells.push(CellId::new(lon, lat));
                lon += self.cell_width;
            }
            lat -= self.cell_height;
        }
        cells
    }

    /// Returns the 3x3 neighbourhood around the given cell, ordered
    /// row-major from the upper-left to the lower-right neighbour, with
    /// duplicates removed in first-seen order.
    ///
    /// Neighbour longitudes wrap around the antimeridian, so a cell next to
    /// the ±180 seam returns neighbours on the opposite side. Neighbour
    /// latitudes are clamped to the grid's rows, which collapses candidates
    /// next to a pole onto the same row; the result then shrinks from 9 to
    /// 6 distinct cells (or fewer on a single-row grid).
    pub fn surrounding_cell_ids(&self, cell: &CellId) -> Result<Vec<CellId>, GridError> {
        if cell.y < self.south_bound + self.cell_height || cell.y > self.north_bound {
            return Err(GridError::OutOfBounds(format!(
                "Cell-Y must be between {} and {}",
                self.south_bound + self.cell_height,
                self.north_bound
            )));
        }
        if cell.x < WEST_BOUND || cell.x > EAST_BOUND {
            return Err(GridError::OutOfBounds(format!(
                "Cell-X must be between {} and {}",
                WEST_BOUND, EAST_BOUND
            )));
        }
        let mut cells: Vec<CellId> = Vec::with_capacity(9);
        let cell0_x = cell.x - self.cell_width;
        let cell0_y = cell.y + self.cell_height;
        for i in 0..9 {
            let x = normalize_lon((cell0_x + (i % 3) * self.cell_width) as f64) as i32;
            let y = self.clip_cell_y(cell0_y - (i / 3) * self.cell_height);
            let candidate = CellId::new(x, y);
            // clamping at a pole folds candidates onto the same row; keep
            // first-seen order, the returned count is part of the contract
            if !cells.contains(&candidate) {
                cells.push(candidate);
            }
        }
        Ok(cells)
    }

    /// [`surrounding_cell_ids`](GridIndex::surrounding_cell_ids) for the
    /// cell containing the given coordinate.
    pub fn surrounding_cell_ids_at(&self, lon: f64, lat: f64) -> Result<Vec<CellId>, GridError> {
        if !self.is_in_bounds(lon, lat) {
            return Err(GridError::OutOfBounds(format!(
                "Cell-X must be between {} and {}, Cell-Y must be between {} and {}",
                WEST_BOUND, EAST_BOUND, self.south_bound, self.north_bound
            )));
        }
        let cell = self.cell_id_for(lon, lat)?;
        self.surrounding_cell_ids(&cell)
    }

    fn clip_cell_y(&self, cell_y: i32) -> i32 {
        cell_y
            .max(self.south_bound + self.cell_height)
            .min(self.north_bound)
    }
}
