pub mod coord;
pub mod error;
pub mod identifier;

pub use coord::{Coordinate, clip_lat, normalize_lon};
pub use error::GridError;
pub use identifier::{format_cell_id, parse_cell_id};
