pub mod cell_id;
pub mod constants;
pub mod geometry;
pub mod grid;

pub use cell_id::CellId;
pub use constants::{
    CELL_ID_LEN, DEFAULT_CELL_SIZE, DEFAULT_PIXEL_SIZE, EAST_BOUND, GRID_WIDTH, NORTH_BOUND,
    SOUTH_BOUND, WEST_BOUND,
};
pub use geometry::{cell_polygon, cell_rect};
pub use grid::GridIndex;
