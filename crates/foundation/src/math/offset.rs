use super::{Ecef, GeoPoint, Mat3, Mat4, Vec3, to_geographic};

/// A move along the ground: bearing clockwise from local north, in degrees,
/// and a distance in meters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LocalOffset {
    pub bearing_deg: f64,
    pub distance_m: f64,
}

impl LocalOffset {
    pub fn new(bearing_deg: f64, distance_m: f64) -> Self {
        Self {
            bearing_deg,
            distance_m,
        }
    }

    pub fn apply(self, origin: GeoPoint) -> GeoPoint {
        offset_point(origin, self.bearing_deg, self.distance_m)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum OffsetError {
    InvalidOrigin(GeoPoint),
    InvalidBearing(f64),
    InvalidDistance(f64),
}

impl std::fmt::Display for OffsetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OffsetError::InvalidOrigin(p) => write!(
                f,
                "origin out of range: lng={} lat={} alt={}",
                p.lng, p.lat, p.alt
            ),
            OffsetError::InvalidBearing(b) => write!(f, "bearing must be finite: {b}"),
            OffsetError::InvalidDistance(d) => {
                write!(f, "distance must be finite and non-negative: {d}")
            }
        }
    }
}

impl std::error::Error for OffsetError {}

/// Point reached by moving `distance_m` from `origin` along `bearing_deg`.
///
/// The move happens in the east-north-up tangent plane at `origin`: the frame
/// is turned about its up axis and the point `(0, distance, 0)` of the turned
/// frame is projected back onto the ellipsoid. The result therefore sits
/// slightly above `origin.alt` (about `d^2 / 2R`).
///
/// A zero distance returns `origin` bit-for-bit.
pub fn offset_point(origin: GeoPoint, bearing_deg: f64, distance_m: f64) -> GeoPoint {
    if distance_m == 0.0 {
        return origin;
    }

    let frame = Mat4::east_north_up_to_fixed_frame(origin.to_geodetic());
    // Bearings turn clockwise, `from_rotation_z` turns counterclockwise.
    let turn = Mat4::from_rotation_translation(
        Mat3::from_rotation_z(-bearing_deg.to_radians()),
        Vec3::ZERO,
    );
    let world = frame
        .multiply(&turn)
        .mul_point(Vec3::new(0.0, distance_m, 0.0));

    to_geographic(Ecef::from(world))
}

/// [`offset_point`] with its inputs checked first.
pub fn try_offset_point(
    origin: GeoPoint,
    bearing_deg: f64,
    distance_m: f64,
) -> Result<GeoPoint, OffsetError> {
    if !origin.is_valid() {
        return Err(OffsetError::InvalidOrigin(origin));
    }
    if !bearing_deg.is_finite() {
        return Err(OffsetError::InvalidBearing(bearing_deg));
    }
    if !distance_m.is_finite() || distance_m < 0.0 {
        return Err(OffsetError::InvalidDistance(distance_m));
    }
    Ok(offset_point(origin, bearing_deg, distance_m))
}
