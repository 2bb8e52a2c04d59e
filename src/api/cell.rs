use crate::core::cell_id::CellId;
use crate::core::geometry::{cell_polygon, cell_rect};
use crate::core::grid::GridIndex;
use crate::util::coord::Coordinate;
use crate::util::error::GridError;
use crate::util::identifier::{format_cell_id, parse_cell_id};
use geo_types::{Point, Polygon, Rect};
use serde::{Deserialize, Serialize};

/// A single cell of a [`GridIndex`], bound to the grid's cell geometry.
///
/// Where [`CellId`] is the bare corner coordinate, a `GridCell` also knows
/// the cell extent and carries the formatted identifier, so it can produce
/// geometry for GIS export.
///
/// # Example
///
/// ```
/// use geogrid_rs::{GridCell, GridIndex};
///
/// # fn main() -> Result<(), geogrid_rs::GridError> {
/// let grid = GridIndex::default();
/// let cell = GridCell::from_lonlat(&grid, &(-2.248, 53.481))?;
/// assert_eq!(cell.id, "N54W003");
/// let polygon = cell.to_polygon();
/// assert_eq!(polygon.exterior().coords().count(), 5);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    /// The 7-character cell identifier, e.g. `N54W003`
    pub id: String,
    /// Upper-left corner of the cell
    pub cell_id: CellId,
    /// Width of the cell in degrees of longitude
    pub cell_width: i32,
    /// Height of the cell in degrees of latitude
    pub cell_height: i32,
}

impl GridCell {
    pub(crate) fn new(cell_id: CellId, cell_width: i32, cell_height: i32) -> Self {
        Self {
            id: format_cell_id(&cell_id),
            cell_id,
            cell_width,
            cell_height,
        }
    }

    /// Creates the cell of `grid` containing the given coordinate.
    ///
    /// # Example
    /// ```
    /// use geogrid_rs::{GridCell, GridIndex};
    /// use geo_types::Point;
    ///
    /// # fn main() -> Result<(), geogrid_rs::GridError> {
    /// let grid = GridIndex::default();
    /// // From tuple
    /// let cell = GridCell::from_lonlat(&grid, &(-15.0, 39.0))?;
    /// // From Point
    /// let cell = GridCell::from_lonlat(&grid, &Point::new(-15.0, 39.0))?;
    /// assert_eq!(cell.id, "N39W015");
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_lonlat(grid: &GridIndex, coord: &impl Coordinate) -> Result<Self, GridError> {
        let cell_id = grid.cell_id_at(coord)?;
        Ok(Self::new(cell_id, grid.cell_width(), grid.cell_height()))
    }

    /// Binds an existing [`CellId`] to the geometry of `grid`.
    pub fn from_cell_id(grid: &GridIndex, cell_id: CellId) -> Self {
        Self::new(cell_id, grid.cell_width(), grid.cell_height())
    }

    /// Creates a cell from its 7-character identifier string.
    ///
    /// # Example
    /// ```
    /// use geogrid_rs::{GridCell, GridIndex};
    ///
    /// # fn main() -> Result<(), geogrid_rs::GridError> {
    /// let grid = GridIndex::default();
    /// let cell = GridCell::from_id(&grid, "N90W180")?;
    /// assert_eq!((cell.lon(), cell.lat()), (-180, 90));
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_id(grid: &GridIndex, id: &str) -> Result<Self, GridError> {
        let cell_id = parse_cell_id(id)?;
        Ok(Self::new(cell_id, grid.cell_width(), grid.cell_height()))
    }

    /// Longitude of the cell's upper-left corner in degrees.
    pub fn lon(&self) -> i32 {
        self.cell_id.x
    }

    /// Latitude of the cell's upper-left corner in degrees.
    pub fn lat(&self) -> i32 {
        self.cell_id.y
    }

    /// The upper-left corner as a point.
    pub fn corner(&self) -> Point<f64> {
        Point::new(self.cell_id.x as f64, self.cell_id.y as f64)
    }

    /// The rectangle covered by this cell.
    pub fn to_rect(&self) -> Rect<f64> {
        cell_rect(&self.cell_id, self.cell_width, self.cell_height)
    }

    /// The cell footprint as a closed polygon.
    pub fn to_polygon(&self) -> Polygon<f64> {
        cell_polygon(&self.cell_id, self.cell_width, self.cell_height)
    }

    /// The cell footprint as a WKT polygon string.
    pub fn wkt_string(&self) -> String {
        use wkt::ToWkt;
        self.to_polygon().wkt_string()
    }

    /// The cell footprint as a GeoJSON geometry string.
    pub fn to_geojson(&self) -> String {
        geojson::Geometry::from(&self.to_polygon()).to_string()
    }

    /// The cell as a GeoJSON feature with `id`, `lon` and `lat` properties.
    pub fn to_geojson_feature(&self) -> geojson::Feature {
        let mut properties = serde_json::Map::new();
        properties.insert("id".to_string(), serde_json::Value::from(self.id.as_str()));
        properties.insert("lon".to_string(), serde_json::Value::from(self.cell_id.x));
        properties.insert("lat".to_string(), serde_json::Value::from(self.cell_id.y));
        geojson::Feature {
            bbox: None,
            geometry: Some(geojson::Geometry::from(&self.to_polygon())),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }
    }
}
