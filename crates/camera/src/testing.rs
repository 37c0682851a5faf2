//! Recording engine double for tests (no globe required).

use crate::{CameraFlight, CameraView, FlightComplete, ProjectionMode, SceneControl};

#[derive(Debug, Clone, PartialEq)]
pub enum SceneCall {
    SetMode(ProjectionMode),
    FlyTo(CameraFlight),
    FlightFinished,
}

/// Records every call in order and holds the pending flight until the test
/// lands it with [`RecordingScene::finish_flight`].
pub struct RecordingScene {
    view: Option<CameraView>,
    mode: Option<ProjectionMode>,
    calls: Vec<SceneCall>,
    in_flight: Option<CameraFlight>,
    pending: Option<FlightComplete>,
}

impl RecordingScene {
    pub fn ready(view: CameraView, mode: ProjectionMode) -> Self {
        Self {
            view: Some(view),
            mode: Some(mode),
            calls: Vec::new(),
            in_flight: None,
            pending: None,
        }
    }

    pub fn not_ready() -> Self {
        Self {
            view: None,
            mode: None,
            calls: Vec::new(),
            in_flight: None,
            pending: None,
        }
    }

    pub fn calls(&self) -> &[SceneCall] {
        &self.calls
    }

    pub fn projection_mode_now(&self) -> ProjectionMode {
        self.mode.expect("scene not ready")
    }

    /// Lands the current flight: moves the camera, then runs the completion.
    ///
    /// Returns `false` if nothing was in flight.
    pub fn finish_flight(&mut self) -> bool {
        let Some(flight) = self.in_flight.take() else {
            return false;
        };
        self.view = Some(CameraView::from_pose(flight.pose));
        self.calls.push(SceneCall::FlightFinished);
        if let Some(on_complete) = self.pending.take() {
            let scene: &mut dyn SceneControl = self;
            on_complete(scene);
        }
        true
    }
}

impl SceneControl for RecordingScene {
    fn camera_view(&self) -> Option<CameraView> {
        self.view
    }

    fn projection_mode(&self) -> Option<ProjectionMode> {
        self.mode
    }

    fn set_projection_mode(&mut self, mode: ProjectionMode) {
        self.calls.push(SceneCall::SetMode(mode));
        self.mode = Some(mode);
    }

    fn fly_to(&mut self, flight: CameraFlight, on_complete: Option<FlightComplete>) {
        self.calls.push(SceneCall::FlyTo(flight));
        self.in_flight = Some(flight);
        self.pending = on_complete;
    }
}
