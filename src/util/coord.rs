use geo_types::Point;

pub trait Coordinate {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 {
        Point::x(*self)
    }
    fn y(&self) -> f64 {
        Point::y(*self)
    }
}

/// Reduces a longitude into the half-open range `[-180, 180)`, wrapping
/// around the antimeridian. Every input maps to exactly one canonical
/// value on the longitude circle; 180 comes back as -180.
pub fn normalize_lon(lon: f64) -> f64 {
    let mut lon = lon % 360.0;
    if lon < -180.0 {
        lon += 360.0;
    } else if lon >= 180.0 {
        lon -= 360.0;
    }
    lon
}

/// Clamps a latitude into `[-90, 90]`, clipping at the poles.
pub fn clip_lat(lat: f64) -> f64 {
    lat.clamp(-90.0, 90.0)
}
