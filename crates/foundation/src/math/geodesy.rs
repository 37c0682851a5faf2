use serde::{Deserialize, Serialize};

use super::Ecef;

/// WGS84 semi-major axis (meters).
pub const WGS84_A: f64 = 6_378_137.0;
/// WGS84 flattening.
pub const WGS84_F: f64 = 1.0 / 298.257_223_563;
/// WGS84 semi-minor axis (meters).
pub const WGS84_B: f64 = WGS84_A * (1.0 - WGS84_F);
/// WGS84 first eccentricity squared.
pub const WGS84_E2: f64 = WGS84_F * (2.0 - WGS84_F);
/// WGS84 second eccentricity squared.
pub const WGS84_EP2: f64 = (WGS84_A * WGS84_A - WGS84_B * WGS84_B) / (WGS84_B * WGS84_B);

/// Fixed-point steps applied after Bowring's estimate. Each step shrinks the
/// latitude error by roughly a factor of `WGS84_E2`.
const LATITUDE_REFINEMENT_STEPS: usize = 2;

/// Geodetic coordinates in radians and meters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Geodetic {
    pub lat_rad: f64,
    pub lon_rad: f64,
    pub alt_m: f64,
}

impl Geodetic {
    pub fn new(lat_rad: f64, lon_rad: f64, alt_m: f64) -> Self {
        Self {
            lat_rad,
            lon_rad,
            alt_m,
        }
    }
}

/// Geographic point in degrees and meters, the unit callers speak.
///
/// Altitude is height above the ellipsoid and may be negative.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lng: f64,
    pub lat: f64,
    #[serde(default)]
    pub alt: f64,
}

impl GeoPoint {
    pub fn new(lng: f64, lat: f64, alt: f64) -> Self {
        Self { lng, lat, alt }
    }

    /// Same horizontal position at a different altitude.
    pub fn with_alt(self, alt: f64) -> Self {
        Self { alt, ..self }
    }

    pub fn is_valid(&self) -> bool {
        self.lng.is_finite()
            && self.lat.is_finite()
            && self.alt.is_finite()
            && (-180.0..=180.0).contains(&self.lng)
            && (-90.0..=90.0).contains(&self.lat)
    }

    pub fn to_geodetic(self) -> Geodetic {
        Geodetic::new(self.lat.to_radians(), self.lng.to_radians(), self.alt)
    }

    pub fn from_geodetic(geo: Geodetic) -> Self {
        Self::new(geo.lon_rad.to_degrees(), geo.lat_rad.to_degrees(), geo.alt_m)
    }
}

pub fn geodetic_to_ecef(geo: Geodetic) -> Ecef {
    let sin_lat = geo.lat_rad.sin();
    let cos_lat = geo.lat_rad.cos();
    let sin_lon = geo.lon_rad.sin();
    let cos_lon = geo.lon_rad.cos();

    let n = WGS84_A / (1.0 - WGS84_E2 * sin_lat * sin_lat).sqrt();
    let x = (n + geo.alt_m) * cos_lat * cos_lon;
    let y = (n + geo.alt_m) * cos_lat * sin_lon;
    let z = (n * (1.0 - WGS84_E2) + geo.alt_m) * sin_lat;

    Ecef::new(x, y, z)
}

pub fn ecef_to_geodetic(ecef: Ecef) -> Geodetic {
    let p = ecef.x.hypot(ecef.y);
    let lon = ecef.y.atan2(ecef.x);

    let theta = (ecef.z * WGS84_A).atan2(p * WGS84_B);
    let sin_theta = theta.sin();
    let cos_theta = theta.cos();

    let mut lat = (ecef.z + WGS84_EP2 * WGS84_B * sin_theta * sin_theta * sin_theta)
        .atan2(p - WGS84_E2 * WGS84_A * cos_theta * cos_theta * cos_theta);

    for _ in 0..LATITUDE_REFINEMENT_STEPS {
        let sin_lat = lat.sin();
        let n = WGS84_A / (1.0 - WGS84_E2 * sin_lat * sin_lat).sqrt();
        lat = (ecef.z + n * WGS84_E2 * sin_lat).atan2(p);
    }

    let sin_lat = lat.sin();
    let cos_lat = lat.cos();
    let n = WGS84_A / (1.0 - WGS84_E2 * sin_lat * sin_lat).sqrt();
    // Stays finite at the poles, unlike `p / cos(lat) - n`.
    let alt = p * cos_lat + ecef.z * sin_lat - WGS84_A * WGS84_A / n;

    Geodetic::new(lat, lon, alt)
}

/// Geographic (degrees) to world Cartesian.
pub fn geo_to_ecef(point: GeoPoint) -> Ecef {
    geodetic_to_ecef(point.to_geodetic())
}

/// World Cartesian back to geographic degrees on the WGS84 ellipsoid.
pub fn to_geographic(ecef: Ecef) -> GeoPoint {
    GeoPoint::from_geodetic(ecef_to_geodetic(ecef))
}
