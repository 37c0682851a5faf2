//! Point graphics: image markers, coordinate labels and glb models.

use foundation::ids::GraphicId;
use foundation::math::GeoPoint;
use scene::{Graphic, LabelGraphic, MarkerGraphic, ModelGraphic, coordinate_text};

use crate::layer::GraphicLayer;

pub const MARKER_ID_PREFIX: &str = "img_point";
pub const LABEL_ID_PREFIX: &str = "div_point";
pub const MODEL_ID_PREFIX: &str = "glb_point";

pub const MARKER_IMAGE: &str = "img/point.png";
pub const LABEL_MAX_DISPLAY_DISTANCE_M: f64 = 400_000.0;
pub const MODEL_SCALE: f64 = 1.2;

#[derive(Debug, Clone, PartialEq)]
pub struct ModelSpec {
    pub id: Option<String>,
    pub url: String,
    pub position: GeoPoint,
    pub heading_deg: f64,
    pub kind: Option<String>,
}

impl GraphicLayer {
    /// Ground-clamped image marker at `lng`/`lat`.
    pub fn add_marker(&mut self, id: Option<&str>, lng: f64, lat: f64) -> GraphicId {
        let graphic = Graphic::Marker(MarkerGraphic {
            position: GeoPoint::new(lng, lat, 0.0),
            image: MARKER_IMAGE.to_string(),
            text: None,
            clamp_to_ground: true,
        });
        self.insert(id, MARKER_ID_PREFIX, graphic)
    }

    /// Text label showing its own coordinate.
    pub fn add_label(&mut self, id: Option<&str>, lng: f64, lat: f64) -> GraphicId {
        let graphic = Graphic::Label(LabelGraphic {
            position: GeoPoint::new(lng, lat, 0.0),
            text: coordinate_text(lng, lat),
            max_display_distance_m: LABEL_MAX_DISPLAY_DISTANCE_M,
        });
        self.insert(id, LABEL_ID_PREFIX, graphic)
    }

    pub fn add_model(&mut self, spec: ModelSpec) -> GraphicId {
        let graphic = Graphic::Model(ModelGraphic {
            position: spec.position,
            url: spec.url,
            scale: MODEL_SCALE,
            heading_deg: spec.heading_deg,
            kind: spec.kind,
        });
        self.insert(spec.id.as_deref(), MODEL_ID_PREFIX, graphic)
    }
}
