//! 2D <-> 3D projection switches that keep the focal point in place.
//!
//! The two directions are not mirror images. Leaving 3D, the camera first
//! flies to the overhead pose and the projection flips only once it lands.
//! Entering 3D, the projection flips immediately and the camera then tilts
//! into the oblique view.

use foundation::math::offset_point;
use serde::Serialize;
use tracing::{info, warn};

use crate::error::finite;
use crate::planner::{clamp_look_down, oblique_pose};
use crate::{
    CameraFlight, CameraPose, CameraView, FlightComplete, ProjectionMode, SceneControl,
    ViewConfig, ViewError,
};

/// When the engine's projection changes relative to the camera flight.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeSwitch {
    BeforeFlight,
    AfterFlight,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct TransitionPlan {
    pub from: ProjectionMode,
    pub to: ProjectionMode,
    pub flight: CameraFlight,
    pub switch: ModeSwitch,
}

impl TransitionPlan {
    /// Hands the plan to the engine in the order `switch` demands.
    pub fn execute(self, engine: &mut dyn SceneControl) {
        let to = self.to;
        match self.switch {
            ModeSwitch::BeforeFlight => {
                engine.set_projection_mode(to);
                engine.fly_to(self.flight, None);
            }
            ModeSwitch::AfterFlight => {
                let on_complete: FlightComplete =
                    Box::new(move |scene: &mut dyn SceneControl| scene.set_projection_mode(to));
                engine.fly_to(self.flight, Some(on_complete));
            }
        }
    }
}

/// Plans the switch away from `current` for a camera at `view`.
///
/// Pitch follows the engine convention: negative looks down. The look-down
/// angle is `-view.pitch`, clamped to `[eps, 90 - eps]`, so a camera level
/// with or above the horizon is treated as barely looking down.
pub fn plan_transition(
    view: CameraView,
    current: ProjectionMode,
    config: &ViewConfig,
) -> Result<TransitionPlan, ViewError> {
    let ground = view.position().with_alt(0.0);
    if !ground.is_valid() {
        return Err(ViewError::InvalidTarget(view.position()));
    }
    let alt = finite("camera altitude", view.alt)?;
    let heading = finite("heading", view.heading)?;
    let pitch = finite("pitch", view.pitch)?;
    let Some(to) = current.toggled() else {
        return Err(ViewError::UnsupportedMode(current));
    };

    match to {
        ProjectionMode::Scene2D => {
            let angle = clamp_look_down(-pitch, config.pitch_epsilon_deg)?.to_radians();
            let ground_distance = alt / angle.tan();
            let overhead_alt = alt / angle.sin();
            let focal = offset_point(ground, heading, ground_distance);

            Ok(TransitionPlan {
                from: current,
                to,
                flight: CameraFlight::new(
                    CameraPose::top_down(focal.with_alt(overhead_alt)),
                    config.transition_duration_s,
                ),
                switch: ModeSwitch::AfterFlight,
            })
        }
        _ => {
            let pose = oblique_pose(
                ground,
                alt,
                config.oblique_pitch_deg,
                heading,
                config.pitch_epsilon_deg,
            )?;

            Ok(TransitionPlan {
                from: current,
                to,
                flight: CameraFlight::new(pose, config.transition_duration_s),
                switch: ModeSwitch::BeforeFlight,
            })
        }
    }
}

/// Toggles the engine between 2D and 3D around the current focal point.
///
/// Returns `Ok(None)` and leaves the engine alone if its camera or scene is
/// not ready. At most one switch should be in flight at a time; this does
/// not queue or cancel.
pub fn switch_projection_mode(
    engine: &mut dyn SceneControl,
    config: &ViewConfig,
) -> Result<Option<TransitionPlan>, ViewError> {
    let (Some(view), Some(mode)) = (engine.camera_view(), engine.projection_mode()) else {
        warn!("camera or scene not ready; projection switch skipped");
        return Ok(None);
    };

    let plan = plan_transition(view, mode, config)?;
    info!(from = %plan.from, to = %plan.to, "switching projection mode");
    plan.execute(engine);
    Ok(Some(plan))
}

#[cfg(test)]
mod tests {
    use super::{ModeSwitch, plan_transition, switch_projection_mode};
    use crate::testing::{RecordingScene, SceneCall};
    use crate::{CameraView, ProjectionMode, ViewConfig, ViewError, ViewPlanner};
    use foundation::math::{GeoPoint, ecef_to_enu, geo_to_ecef};

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    fn oblique_view() -> CameraView {
        CameraView {
            lng: 117.233619,
            lat: 31.716288,
            alt: 1_000.0,
            heading: 0.0,
            pitch: -45.0,
        }
    }

    fn overhead_view() -> CameraView {
        CameraView {
            lng: 117.233619,
            lat: 31.716288,
            alt: 10_000.0,
            heading: 0.0,
            pitch: -90.0,
        }
    }

    #[test]
    fn leaving_3d_flies_overhead_the_focal_point() {
        let view = oblique_view();
        let plan =
            plan_transition(view, ProjectionMode::Scene3D, &ViewConfig::default()).unwrap();

        assert_eq!(plan.to, ProjectionMode::Scene2D);
        assert_eq!(plan.switch, ModeSwitch::AfterFlight);
        assert_eq!(plan.flight.duration_s, 1.5);

        let pose = plan.flight.pose;
        assert_eq!(pose.heading, None);
        assert_close(pose.position.alt, 1_414.2136, 1e-3);

        // The focal point is 1 km ahead (north) of the camera.
        let origin = view.position().with_alt(0.0);
        let enu = ecef_to_enu(
            geo_to_ecef(pose.position.with_alt(0.0)),
            origin.to_geodetic(),
        );
        assert_close(enu.north, 1_000.0, 0.1);
        assert_close(enu.east, 0.0, 0.1);
    }

    #[test]
    fn projection_flips_to_2d_only_after_the_flight_lands() {
        let mut scene = RecordingScene::ready(oblique_view(), ProjectionMode::Scene3D);
        let plan = switch_projection_mode(&mut scene, &ViewConfig::default())
            .unwrap()
            .unwrap();

        assert_eq!(scene.calls(), &[SceneCall::FlyTo(plan.flight)]);
        assert_eq!(scene.projection_mode_now(), ProjectionMode::Scene3D);

        assert!(scene.finish_flight());
        assert_eq!(
            scene.calls(),
            &[
                SceneCall::FlyTo(plan.flight),
                SceneCall::FlightFinished,
                SceneCall::SetMode(ProjectionMode::Scene2D),
            ]
        );
        assert_eq!(scene.projection_mode_now(), ProjectionMode::Scene2D);
    }

    #[test]
    fn entering_3d_flips_first_then_tilts() {
        let mut scene = RecordingScene::ready(overhead_view(), ProjectionMode::Scene2D);
        let plan = switch_projection_mode(&mut scene, &ViewConfig::default())
            .unwrap()
            .unwrap();

        assert_eq!(plan.switch, ModeSwitch::BeforeFlight);
        assert_eq!(
            scene.calls(),
            &[
                SceneCall::SetMode(ProjectionMode::Scene3D),
                SceneCall::FlyTo(plan.flight),
            ]
        );

        let pose = plan.flight.pose;
        assert_eq!(pose.heading, Some(0.0));
        assert_eq!(pose.pitch, Some(-30.0));
        assert_close(pose.position.alt, 5_000.0, 1e-6);

        // Camera backs off south so the old center stays in view.
        let origin = overhead_view().position().with_alt(0.0);
        let enu = ecef_to_enu(
            geo_to_ecef(pose.position.with_alt(0.0)),
            origin.to_geodetic(),
        );
        assert_close(enu.north, -8_660.254, 0.5);

        assert!(scene.finish_flight());
        assert_eq!(scene.calls().last(), Some(&SceneCall::FlightFinished));
        assert_eq!(scene.projection_mode_now(), ProjectionMode::Scene3D);
    }

    #[test]
    fn framing_then_flattening_keeps_the_target_centered() {
        let target = GeoPoint::new(117.233619, 31.716288, 0.0);
        let planner = ViewPlanner::default();
        for heading in [0.0, 30.0, 135.0, 290.0] {
            let pose = planner
                .plan_camera_pose(target, 2_000.0, -45.0, heading, ProjectionMode::Scene3D)
                .unwrap();
            let plan = planner
                .plan_transition(CameraView::from_pose(pose), ProjectionMode::Scene3D)
                .unwrap();

            let center = plan.flight.pose.position;
            assert_close(center.lng, target.lng, 1e-5);
            assert_close(center.lat, target.lat, 1e-5);
            assert_close(center.alt, 2_000.0, 0.5);
        }
    }

    #[test]
    fn pitch_sign_convention_is_pinned() {
        // Level or upward cameras are clamped, never flipped behind.
        let config = ViewConfig {
            pitch_epsilon_deg: 5.0,
            ..ViewConfig::default()
        };
        for pitch in [0.0, 10.0] {
            let view = CameraView {
                pitch,
                ..oblique_view()
            };
            let plan = plan_transition(view, ProjectionMode::Scene3D, &config).unwrap();
            let pose = plan.flight.pose;
            assert!(pose.is_finite());
            assert!(pose.position.lat > view.lat);
            assert_close(pose.position.alt, 1_000.0 / 5f64.to_radians().sin(), 1e-6);
        }
    }

    #[test]
    fn straight_down_camera_barely_moves() {
        let view = CameraView {
            pitch: -90.0,
            ..oblique_view()
        };
        let plan = plan_transition(view, ProjectionMode::Scene3D, &ViewConfig::default()).unwrap();
        let pose = plan.flight.pose;
        assert!(pose.is_finite());
        assert_close(pose.position.alt, 1_000.0, 1e-3);
        assert_close(pose.position.lat, view.lat, 1e-5);
    }

    #[test]
    fn unsupported_mode_leaves_engine_untouched() {
        let mut scene = RecordingScene::ready(oblique_view(), ProjectionMode::ColumbusView);
        assert_eq!(
            switch_projection_mode(&mut scene, &ViewConfig::default()),
            Err(ViewError::UnsupportedMode(ProjectionMode::ColumbusView))
        );
        assert!(scene.calls().is_empty());
    }

    #[test]
    fn engine_not_ready_yields_nothing() {
        let mut scene = RecordingScene::not_ready();
        assert_eq!(
            switch_projection_mode(&mut scene, &ViewConfig::default()),
            Ok(None)
        );
        assert!(scene.calls().is_empty());
    }

    #[test]
    fn unusable_epsilon_fails_in_both_directions() {
        for eps in [f64::NAN, 60.0] {
            let config = ViewConfig {
                pitch_epsilon_deg: eps,
                ..ViewConfig::default()
            };
            for (view, mode) in [
                (oblique_view(), ProjectionMode::Scene3D),
                (overhead_view(), ProjectionMode::Scene2D),
            ] {
                assert!(matches!(
                    plan_transition(view, mode, &config),
                    Err(ViewError::InvalidInput {
                        field: "pitch epsilon",
                        ..
                    })
                ));
            }
        }
    }

    #[test]
    fn negative_altitude_in_2d_is_rejected() {
        let view = CameraView {
            alt: -50.0,
            ..overhead_view()
        };
        assert!(matches!(
            plan_transition(view, ProjectionMode::Scene2D, &ViewConfig::default()),
            Err(ViewError::InvalidInput { .. })
        ));
    }
}
