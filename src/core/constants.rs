/// Northern latitude limit of the full globe
pub const NORTH_BOUND: i32 = 90;

/// Southern latitude limit of the full globe
pub const SOUTH_BOUND: i32 = -90;

/// Western longitude limit; the grid always spans the full longitude circle
pub const WEST_BOUND: i32 = -180;

/// Eastern longitude limit, equivalent to [`WEST_BOUND`] on the wrapped circle
pub const EAST_BOUND: i32 = 180;

/// Longitude span of the grid in degrees
pub const GRID_WIDTH: i32 = 360;

/// Cell edge length in degrees used when no explicit geometry is given
pub const DEFAULT_CELL_SIZE: i32 = 3;

/// Sub-cell sampling granularity in degrees used for boundary snapping
/// when none is given
pub const DEFAULT_PIXEL_SIZE: f64 = 0.01;

/// Length of a formatted cell identifier string
pub const CELL_ID_LEN: usize = 7;
