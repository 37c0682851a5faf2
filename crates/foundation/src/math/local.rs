use super::{Ecef, Geodetic, Vec3, geodetic_to_ecef};

/// Local East-North-Up coordinates (meters).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Enu {
    pub east: f64,
    pub north: f64,
    pub up: f64,
}

impl Enu {
    pub fn new(east: f64, north: f64, up: f64) -> Self {
        Self { east, north, up }
    }

    /// Length of the horizontal (east, north) component.
    pub fn horizontal(&self) -> f64 {
        self.east.hypot(self.north)
    }
}

/// Unit east, north and up axes of the tangent frame at `origin`, in ECEF.
pub fn enu_axes(origin: Geodetic) -> [Vec3; 3] {
    let sin_lat = origin.lat_rad.sin();
    let cos_lat = origin.lat_rad.cos();
    let sin_lon = origin.lon_rad.sin();
    let cos_lon = origin.lon_rad.cos();

    [
        Vec3::new(-sin_lon, cos_lon, 0.0),
        Vec3::new(-sin_lat * cos_lon, -sin_lat * sin_lon, cos_lat),
        Vec3::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat),
    ]
}

pub fn ecef_to_enu(point: Ecef, origin: Geodetic) -> Enu {
    let d = point.as_vec3() - geodetic_to_ecef(origin).as_vec3();
    let [east, north, up] = enu_axes(origin);
    Enu::new(d.dot(east), d.dot(north), d.dot(up))
}

pub fn enu_to_ecef(enu: Enu, origin: Geodetic) -> Ecef {
    let [east, north, up] = enu_axes(origin);
    let o = geodetic_to_ecef(origin).as_vec3();
    Ecef::from(o + east * enu.east + north * enu.north + up * enu.up)
}
