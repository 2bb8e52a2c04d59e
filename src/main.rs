use geogrid_rs::{GridCell, GridError, GridIndex};

fn main() -> Result<(), GridError> {
    let lon = -2.2479699500757597;
    let lat = 53.48082746395233;

    let grid = GridIndex::default();
    let cell = GridCell::from_lonlat(&grid, &(lon, lat))?;

    println!("Cell ID: {}", cell.id);
    println!("Corner: ({}, {})", cell.lon(), cell.lat());

    let neighbours = grid.surrounding_cell_ids(&cell.cell_id)?;
    println!("Neighbours: {}", neighbours.len());

    println!("WKT: {}", cell.wkt_string());
    println!("GeoJSON: {}", cell.to_geojson());

    Ok(())
}
