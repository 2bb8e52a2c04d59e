pub mod cell;
pub mod grid;

pub use cell::GridCell;
pub use grid::{CellGrid, CellGridBuilder};
