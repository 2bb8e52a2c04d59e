use crate::util::error::GridError;
use crate::util::identifier::{format_cell_id, parse_cell_id};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies one grid cell by the geographic coordinate of its upper-left
/// (northwest) corner: `x` is the corner longitude, `y` the corner latitude,
/// both in whole degrees.
///
/// `CellId` is plain data with structural equality; it carries no reference
/// to the grid that produced it and is safe to store in sets and maps.
///
/// # Example
///
/// ```
/// use geogrid_rs::CellId;
///
/// let cell = CellId::new(-180, 90);
/// assert_eq!(cell.to_string(), "N90W180");
/// assert_eq!("N90W180".parse::<CellId>(), Ok(cell));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellId {
    /// Longitude of the cell's upper-left corner in degrees
    pub x: i32,
    /// Latitude of the cell's upper-left corner in degrees
    pub y: i32,
}

impl CellId {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_cell_id(self))
    }
}

impl FromStr for CellId {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_cell_id(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_structural_equality() {
        assert_eq!(CellId::new(-180, 90), CellId::new(-180, 90));
        assert_ne!(CellId::new(-180, 90), CellId::new(-180, 87));
        assert_ne!(CellId::new(-180, 90), CellId::new(-177, 90));
    }

    #[test]
    fn test_usable_in_hash_set() {
        let mut set = HashSet::new();
        set.insert(CellId::new(0, 0));
        set.insert(CellId::new(0, 0));
        set.insert(CellId::new(3, 0));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_display_and_from_str() -> Result<(), GridError> {
        let cell = CellId::new(177, -87);
        assert_eq!(cell.to_string(), "S87E177");
        assert_eq!("S87E177".parse::<CellId>()?, cell);
        Ok(())
    }

    #[test]
    fn test_serde_round_trip() {
        let cell = CellId::new(-177, 33);
        let json = serde_json::to_string(&cell).unwrap();
        assert_eq!(json, r#"{"x":-177,"y":33}"#);
        let back: CellId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cell);
    }
}
