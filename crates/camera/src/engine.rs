use crate::{CameraFlight, CameraView, ProjectionMode};

/// One-shot continuation run by the engine once a camera flight lands.
///
/// It receives the engine back so it can act on the scene without holding a
/// reference across the animation.
pub type FlightComplete = Box<dyn FnOnce(&mut dyn SceneControl)>;

/// The slice of the host globe engine that camera planning talks to.
///
/// Getters return `None` while the engine's camera or scene is not ready.
pub trait SceneControl {
    fn camera_view(&self) -> Option<CameraView>;

    fn projection_mode(&self) -> Option<ProjectionMode>;

    fn set_projection_mode(&mut self, mode: ProjectionMode);

    /// Starts an animated move. `on_complete` fires exactly once, after the
    /// camera reaches `flight.pose`.
    fn fly_to(&mut self, flight: CameraFlight, on_complete: Option<FlightComplete>);
}
