use foundation::math::GeoPoint;
use serde::{Deserialize, Serialize};

/// Where the camera should end up.
///
/// `heading`/`pitch` are degrees; a negative pitch looks down. Both are
/// `None` for a top-down 2D view, where orientation has no meaning.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: GeoPoint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pitch: Option<f64>,
}

impl CameraPose {
    pub fn oblique(position: GeoPoint, heading: f64, pitch: f64) -> Self {
        Self {
            position,
            heading: Some(heading),
            pitch: Some(pitch),
        }
    }

    pub fn top_down(position: GeoPoint) -> Self {
        Self {
            position,
            heading: None,
            pitch: None,
        }
    }

    pub fn is_finite(&self) -> bool {
        let p = self.position;
        p.lng.is_finite()
            && p.lat.is_finite()
            && p.alt.is_finite()
            && self.heading.is_none_or(f64::is_finite)
            && self.pitch.is_none_or(f64::is_finite)
    }
}

/// The camera as the engine currently reports it.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraView {
    pub lng: f64,
    pub lat: f64,
    pub alt: f64,
    #[serde(default)]
    pub heading: f64,
    #[serde(default)]
    pub pitch: f64,
}

impl CameraView {
    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.lng, self.lat, self.alt)
    }

    pub fn from_pose(pose: CameraPose) -> Self {
        Self {
            lng: pose.position.lng,
            lat: pose.position.lat,
            alt: pose.position.alt,
            heading: pose.heading.unwrap_or(0.0),
            pitch: pose.pitch.unwrap_or(-90.0),
        }
    }
}

/// An animated camera move handed to the engine.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraFlight {
    pub pose: CameraPose,
    pub duration_s: f64,
}

impl CameraFlight {
    pub fn new(pose: CameraPose, duration_s: f64) -> Self {
        Self { pose, duration_s }
    }
}

#[cfg(test)]
mod tests {
    use super::{CameraPose, CameraView};
    use foundation::math::GeoPoint;

    #[test]
    fn top_down_pose_has_no_orientation() {
        let pose = CameraPose::top_down(GeoPoint::new(1.0, 2.0, 3.0));
        assert_eq!(pose.heading, None);
        assert_eq!(pose.pitch, None);
        assert!(pose.is_finite());
    }

    #[test]
    fn top_down_pose_reads_back_as_straight_down() {
        let view = CameraView::from_pose(CameraPose::top_down(GeoPoint::new(1.0, 2.0, 3.0)));
        assert_eq!(view.pitch, -90.0);
        assert_eq!(view.position(), GeoPoint::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn nan_orientation_is_not_finite() {
        let pose = CameraPose::oblique(GeoPoint::new(0.0, 0.0, 0.0), 0.0, f64::NAN);
        assert!(!pose.is_finite());
    }

    #[test]
    fn top_down_pose_serializes_without_orientation() {
        let pose = CameraPose::top_down(GeoPoint::new(1.0, 2.0, 3.0));
        let json = serde_json::to_string(&pose).unwrap();
        assert_eq!(json, r#"{"position":{"lng":1.0,"lat":2.0,"alt":3.0}}"#);
    }
}
