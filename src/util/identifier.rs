use crate::core::cell_id::CellId;
use crate::core::constants::CELL_ID_LEN;
use crate::util::error::GridError;

/// Formats a cell id as its 7-character string form `[N|S]LL[E|W]LLL`.
///
/// The corner latitude is zero-padded to two digits and prefixed with `N`
/// for zero/positive or `S` for negative values; the corner longitude is
/// zero-padded to three digits and prefixed with `E` for zero/positive or
/// `W` for negative values.
pub fn format_cell_id(cell: &CellId) -> String {
    let ns = if cell.y >= 0 { 'N' } else { 'S' };
    let ew = if cell.x < 0 { 'W' } else { 'E' };
    format!("{}{:02}{}{:03}", ns, cell.y.abs(), ew, cell.x.abs())
}

/// Parses a 7-character cell identifier back into a [`CellId`].
///
/// The string length is the only structural check; no range validation is
/// performed, so a parsed id may lie outside any particular grid's bounds.
pub fn parse_cell_id(s: &str) -> Result<CellId, GridError> {
    if s.len() != CELL_ID_LEN {
        return Err(GridError::InvalidCellId(format!(
            "cell identifier must be {} characters long, got {:?}",
            CELL_ID_LEN, s
        )));
    }
    let mut lat: i32 = s
        .get(1..3)
        .and_then(|digits| digits.parse().ok())
        .ok_or_else(|| GridError::InvalidCellId(format!("invalid latitude digits in {:?}", s)))?;
    if s.as_bytes()[0] == b'S' {
        lat = -lat;
    }
    let mut lon: i32 = s
        .get(4..7)
        .and_then(|digits| digits.parse().ok())
        .ok_or_else(|| GridError::InvalidCellId(format!("invalid longitude digits in {:?}", s)))?;
    if s.as_bytes()[3] == b'W' {
        lon = -lon;
    }
    Ok(CellId::new(lon, lat))
}
