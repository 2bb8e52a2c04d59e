/// Error type for geogrid-rs operations.
#[derive(Debug, PartialEq)]
pub enum GridError {
    /// A coordinate or cell id lies outside the current grid bounds.
    /// The message carries the valid ranges.
    OutOfBounds(String),
    /// A cell identifier string is malformed (wrong length or non-numeric digits).
    InvalidCellId(String),
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::OutOfBounds(msg) => write!(f, "Out of grid bounds: {}", msg),
            GridError::InvalidCellId(msg) => write!(f, "Invalid cell identifier: {}", msg),
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = GridError::OutOfBounds("Cell-Y must be between -90 and 90".into());
        assert!(err.to_string().contains("-90 and 90"));

        let err = GridError::InvalidCellId("must be 7 characters long".into());
        assert!(err.to_string().contains("7 characters"));
    }

    #[test]
    fn test_error_kinds_are_branchable() {
        let oob = GridError::OutOfBounds("y".into());
        let fmt = GridError::InvalidCellId("x".into());
        assert!(matches!(oob, GridError::OutOfBounds(_)));
        assert!(matches!(fmt, GridError::InvalidCellId(_)));
        assert_ne!(oob, fmt);
    }
}
