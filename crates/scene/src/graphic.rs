//! Graphic kinds placed on the globe and the updates each one accepts.
//!
//! Callers ask a graphic what it [`supports`](Graphic::supports) instead of
//! matching on its concrete kind.

use foundation::math::GeoPoint;

use crate::route::DroneRoute;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Capability {
    Position,
    Heading,
    Pitch,
    Text,
    Visibility,
}

/// A 3D model (glb) placed at a point, rotated by heading.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelGraphic {
    pub position: GeoPoint,
    pub url: String,
    pub scale: f64,
    pub heading_deg: f64,
    /// Free-form category supplied by the caller.
    pub kind: Option<String>,
}

/// An HTML-style text overlay anchored at a point.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelGraphic {
    pub position: GeoPoint,
    pub text: String,
    /// Hidden when the camera is farther away than this (meters).
    pub max_display_distance_m: f64,
}

/// A billboard image, optionally captioned.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerGraphic {
    pub position: GeoPoint,
    pub image: String,
    pub text: Option<String>,
    pub clamp_to_ground: bool,
}

/// A conic sensor footprint.
#[derive(Debug, Clone, PartialEq)]
pub struct ConeGraphic {
    pub position: GeoPoint,
    pub half_angle_deg: f64,
    pub length_m: f64,
    pub heading_deg: f64,
    pub pitch_deg: f64,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ZoneKind {
    Strike,
    Warning,
    Detection,
}

/// A hemispherical range ring around a fixed center.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneGraphic {
    pub center: GeoPoint,
    pub radius_m: f64,
    pub kind: ZoneKind,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Graphic {
    Model(ModelGraphic),
    Label(LabelGraphic),
    Marker(MarkerGraphic),
    Cone(ConeGraphic),
    Zone(ZoneGraphic),
    Route(DroneRoute),
}

impl Graphic {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Graphic::Model(_) => "model",
            Graphic::Label(_) => "label",
            Graphic::Marker(_) => "marker",
            Graphic::Cone(_) => "cone",
            Graphic::Zone(_) => "zone",
            Graphic::Route(_) => "route",
        }
    }

    pub fn supports(&self, capability: Capability) -> bool {
        use Capability::*;
        match self {
            Graphic::Model(_) => matches!(capability, Position | Heading | Visibility),
            Graphic::Label(_) | Graphic::Marker(_) => {
                matches!(capability, Position | Text | Visibility)
            }
            Graphic::Cone(_) => matches!(capability, Position | Heading | Pitch | Visibility),
            // Zones stay on their center; routes move with their waypoints.
            Graphic::Zone(_) | Graphic::Route(_) => capability == Visibility,
        }
    }

    pub fn position(&self) -> Option<GeoPoint> {
        match self {
            Graphic::Model(g) => Some(g.position),
            Graphic::Label(g) => Some(g.position),
            Graphic::Marker(g) => Some(g.position),
            Graphic::Cone(g) => Some(g.position),
            Graphic::Zone(g) => Some(g.center),
            Graphic::Route(r) => r.last().map(|w| w.position),
        }
    }

    /// Returns `false` if this graphic cannot be repositioned.
    pub fn set_position(&mut self, position: GeoPoint) -> bool {
        match self {
            Graphic::Model(g) => g.position = position,
            Graphic::Label(g) => g.position = position,
            Graphic::Marker(g) => g.position = position,
            Graphic::Cone(g) => g.position = position,
            Graphic::Zone(_) | Graphic::Route(_) => return false,
        }
        true
    }

    pub fn set_heading(&mut self, heading_deg: f64) -> bool {
        match self {
            Graphic::Model(g) => g.heading_deg = heading_deg,
            Graphic::Cone(g) => g.heading_deg = heading_deg,
            _ => return false,
        }
        true
    }

    pub fn set_pitch(&mut self, pitch_deg: f64) -> bool {
        match self {
            Graphic::Cone(g) => g.pitch_deg = pitch_deg,
            _ => return false,
        }
        true
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        match self {
            Graphic::Label(g) => g.text = text.into(),
            Graphic::Marker(g) => g.text = Some(text.into()),
            _ => return false,
        }
        true
    }
}

/// Caption showing a coordinate to two decimals, as markers display it.
pub fn coordinate_text(lng: f64, lat: f64) -> String {
    format!("{lng:.2}, {lat:.2}")
}
