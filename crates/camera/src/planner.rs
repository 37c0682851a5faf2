use foundation::math::{GeoPoint, offset_point};
use tracing::{debug, warn};

use crate::error::finite;
use crate::{
    CameraFlight, CameraPose, CameraView, ConfigError, ProjectionMode, SceneControl,
    TransitionPlan, ViewConfig, ViewError, plan_transition, switch_projection_mode,
};

/// A viewing distance split into its ground and height components.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewDecomposition {
    pub horizontal_m: f64,
    pub vertical_m: f64,
    /// The look-down angle actually used, after clamping (degrees, positive).
    pub look_down_deg: f64,
}

/// Keeps a look-down angle away from 0 and 90 degrees, where the tangent
/// and its reciprocal blow up.
///
/// `epsilon_deg` must lie in `(0, 45)`; anything else leaves no valid range.
pub fn clamp_look_down(angle_deg: f64, epsilon_deg: f64) -> Result<f64, ViewError> {
    if !(epsilon_deg > 0.0 && epsilon_deg < 45.0) {
        return Err(ViewError::InvalidInput {
            field: "pitch epsilon",
            value: epsilon_deg,
        });
    }
    Ok(angle_deg.clamp(epsilon_deg, 90.0 - epsilon_deg))
}

/// Splits `distance_m` along a line of sight pitched `pitch_deg`.
///
/// Only the magnitude of the pitch matters: -45 and 45 both mean "45
/// degrees below the horizon".
pub fn decompose_view_distance(
    distance_m: f64,
    pitch_deg: f64,
    epsilon_deg: f64,
) -> Result<ViewDecomposition, ViewError> {
    let look_down_deg = clamp_look_down(pitch_deg.abs(), epsilon_deg)?;
    let (sin, cos) = look_down_deg.to_radians().sin_cos();
    Ok(ViewDecomposition {
        horizontal_m: distance_m * cos,
        vertical_m: distance_m * sin,
        look_down_deg,
    })
}

/// Bearing pointing opposite `heading_deg`, in `[0, 360)`.
pub fn reverse_bearing(heading_deg: f64) -> f64 {
    (heading_deg + 180.0).rem_euclid(360.0)
}

/// Oblique 3D pose behind `target`, shared by framing and the 2D-to-3D
/// switch.
pub(crate) fn oblique_pose(
    target: GeoPoint,
    view_distance_m: f64,
    pitch_deg: f64,
    heading_deg: f64,
    epsilon_deg: f64,
) -> Result<CameraPose, ViewError> {
    let distance = finite("view distance", view_distance_m)?;
    if distance < 0.0 {
        return Err(ViewError::InvalidInput {
            field: "view distance",
            value: distance,
        });
    }
    let pitch = finite("pitch", pitch_deg)?;
    let heading = finite("heading", heading_deg)?;

    let split = decompose_view_distance(distance, pitch, epsilon_deg)?;
    let ground = offset_point(target, reverse_bearing(heading), split.horizontal_m);
    Ok(CameraPose::oblique(
        ground.with_alt(target.alt + split.vertical_m),
        heading,
        -split.look_down_deg,
    ))
}

#[derive(Debug, Clone, Default)]
pub struct ViewPlanner {
    config: ViewConfig,
}

impl ViewPlanner {
    /// Validates `config` up front so planning never sees an unusable one.
    pub fn new(config: ViewConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Camera pose that keeps `target` in frame from `view_distance_m` away.
    ///
    /// In 3D the camera sits behind the target (opposite `heading_deg`),
    /// looking down at the clamped pitch. In 2D it sits straight above the
    /// target at the configured clearance and `pitch_deg`/`heading_deg` are
    /// ignored.
    pub fn plan_camera_pose(
        &self,
        target: GeoPoint,
        view_distance_m: f64,
        pitch_deg: f64,
        heading_deg: f64,
        mode: ProjectionMode,
    ) -> Result<CameraPose, ViewError> {
        if !target.is_valid() {
            return Err(ViewError::InvalidTarget(target));
        }

        let pose = match mode {
            ProjectionMode::Scene3D => oblique_pose(
                target,
                view_distance_m,
                pitch_deg,
                heading_deg,
                self.config.pitch_epsilon_deg,
            )?,
            ProjectionMode::Scene2D => CameraPose::top_down(
                target.with_alt(target.alt + self.config.overhead_clearance_m),
            ),
            other => return Err(ViewError::UnsupportedMode(other)),
        };

        debug!(%mode, ?pose, "planned camera pose");
        Ok(pose)
    }

    /// Pure 2D/3D switch plan for the given camera and mode.
    pub fn plan_transition(
        &self,
        view: CameraView,
        current: ProjectionMode,
    ) -> Result<TransitionPlan, ViewError> {
        plan_transition(view, current, &self.config)
    }

    /// Reads the engine's camera and toggles between 2D and 3D.
    pub fn switch_projection_mode(
        &self,
        engine: &mut dyn SceneControl,
    ) -> Result<Option<TransitionPlan>, ViewError> {
        switch_projection_mode(engine, &self.config)
    }

    /// Flies the engine's camera to frame `target` with the default pitch
    /// and heading.
    ///
    /// Returns `Ok(None)` without touching the engine when its scene is not
    /// ready.
    pub fn center_on(
        &self,
        engine: &mut dyn SceneControl,
        target: GeoPoint,
        view_distance_m: f64,
    ) -> Result<Option<CameraPose>, ViewError> {
        let Some(mode) = engine.projection_mode() else {
            warn!("scene not ready; centering skipped");
            return Ok(None);
        };

        let pose = self.plan_camera_pose(
            target,
            view_distance_m,
            self.config.default_pitch_deg,
            self.config.default_heading_deg,
            mode,
        )?;
        engine.fly_to(
            CameraFlight::new(pose, self.config.transition_duration_s),
            None,
        );
        Ok(Some(pose))
    }
}

#[cfg(test)]
mod tests {
    use super::{ViewPlanner, clamp_look_down, decompose_view_distance, reverse_bearing};
    use crate::testing::{RecordingScene, SceneCall};
    use crate::{CameraFlight, CameraView, ConfigError, ProjectionMode, ViewConfig, ViewError};
    use foundation::math::{GeoPoint, ecef_to_enu, geo_to_ecef};

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    fn hefei() -> GeoPoint {
        GeoPoint::new(117.233619, 31.716288, 200.0)
    }

    #[test]
    fn forty_five_degrees_splits_evenly() {
        let split = decompose_view_distance(1_000.0, -45.0, 0.01).unwrap();
        assert_close(split.horizontal_m, 707.1068, 1e-3);
        assert_close(split.vertical_m, 707.1068, 1e-3);
        assert_eq!(split.look_down_deg, 45.0);
    }

    #[test]
    fn degenerate_pitches_are_clamped() {
        for pitch in [-90.0, 90.0, 0.0, -0.0, 1e9] {
            let split = decompose_view_distance(500.0, pitch, 0.01).unwrap();
            assert!(split.horizontal_m.is_finite() && split.horizontal_m > 0.0);
            assert!(split.vertical_m.is_finite() && split.vertical_m > 0.0);
        }
        assert_eq!(clamp_look_down(90.0, 0.5), Ok(89.5));
        assert_eq!(clamp_look_down(0.0, 0.5), Ok(0.5));
    }

    #[test]
    fn reverse_bearing_wraps() {
        assert_eq!(reverse_bearing(0.0), 180.0);
        assert_eq!(reverse_bearing(270.0), 90.0);
        assert_eq!(reverse_bearing(-90.0), 90.0);
    }

    #[test]
    fn frames_hefei_example_in_3d() {
        let planner = ViewPlanner::default();
        let target = hefei();
        let pose = planner
            .plan_camera_pose(target, 500.0, -45.0, 0.0, ProjectionMode::Scene3D)
            .unwrap();

        assert_close(pose.position.alt, 553.553, 1e-3);
        assert_eq!(pose.heading, Some(0.0));
        assert_eq!(pose.pitch, Some(-45.0));

        // Heading 0 puts the camera due south of the target.
        let enu = ecef_to_enu(
            geo_to_ecef(pose.position.with_alt(target.alt)),
            target.to_geodetic(),
        );
        assert_close(enu.horizontal(), 353.553, 0.1);
        assert_close(enu.north, -353.553, 0.1);
        assert_close(enu.east, 0.0, 0.1);
    }

    #[test]
    fn camera_sits_behind_the_heading() {
        let planner = ViewPlanner::default();
        let target = GeoPoint::new(10.0, 45.0, 0.0);
        let pose = planner
            .plan_camera_pose(target, 1_000.0, -30.0, 90.0, ProjectionMode::Scene3D)
            .unwrap();

        // Looking east, so the camera is west of the target.
        let enu = ecef_to_enu(geo_to_ecef(pose.position.with_alt(0.0)), target.to_geodetic());
        assert_close(enu.east, -866.025, 0.1);
        assert_close(enu.north, 0.0, 0.1);
        assert_eq!(pose.heading, Some(90.0));
    }

    #[test]
    fn pitch_sign_does_not_matter_in_3d() {
        let planner = ViewPlanner::default();
        let down = planner
            .plan_camera_pose(hefei(), 800.0, -60.0, 15.0, ProjectionMode::Scene3D)
            .unwrap();
        let up = planner
            .plan_camera_pose(hefei(), 800.0, 60.0, 15.0, ProjectionMode::Scene3D)
            .unwrap();
        assert_eq!(down, up);
        assert_eq!(down.pitch, Some(-60.0));
    }

    #[test]
    fn straight_down_pitch_stays_finite() {
        let planner = ViewPlanner::default();
        let pose = planner
            .plan_camera_pose(hefei(), 500.0, -90.0, 0.0, ProjectionMode::Scene3D)
            .unwrap();
        assert!(pose.is_finite());
        assert_close(pose.position.alt, 700.0, 1e-3);
        assert_close(pose.pitch.unwrap(), -89.99, 1e-9);
    }

    #[test]
    fn planning_in_2d_ignores_pitch_and_heading() {
        let planner = ViewPlanner::default();
        let a = planner
            .plan_camera_pose(hefei(), 500.0, -10.0, 0.0, ProjectionMode::Scene2D)
            .unwrap();
        let b = planner
            .plan_camera_pose(hefei(), 500.0, 80.0, 123.0, ProjectionMode::Scene2D)
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(a.position, hefei().with_alt(10_200.0));
        assert_eq!(a.heading, None);
        assert_eq!(a.pitch, None);
    }

    #[test]
    fn modes_are_not_unified() {
        let planner = ViewPlanner::default();
        let flat = planner
            .plan_camera_pose(hefei(), 500.0, -45.0, 0.0, ProjectionMode::Scene2D)
            .unwrap();
        let oblique = planner
            .plan_camera_pose(hefei(), 500.0, -45.0, 0.0, ProjectionMode::Scene3D)
            .unwrap();
        assert_ne!(flat.position, oblique.position);
    }

    #[test]
    fn unsupported_modes_fail() {
        let planner = ViewPlanner::default();
        for mode in [ProjectionMode::ColumbusView, ProjectionMode::Morphing] {
            assert_eq!(
                planner.plan_camera_pose(hefei(), 500.0, -45.0, 0.0, mode),
                Err(ViewError::UnsupportedMode(mode))
            );
        }
    }

    #[test]
    fn rejects_bad_inputs() {
        let planner = ViewPlanner::default();
        assert!(matches!(
            planner.plan_camera_pose(hefei(), -1.0, -45.0, 0.0, ProjectionMode::Scene3D),
            Err(ViewError::InvalidInput { field: "view distance", .. })
        ));
        assert!(matches!(
            planner.plan_camera_pose(hefei(), 10.0, f64::NAN, 0.0, ProjectionMode::Scene3D),
            Err(ViewError::InvalidInput { field: "pitch", .. })
        ));
        assert!(matches!(
            planner.plan_camera_pose(
                GeoPoint::new(0.0, 95.0, 0.0),
                10.0,
                -45.0,
                0.0,
                ProjectionMode::Scene2D
            ),
            Err(ViewError::InvalidTarget(_))
        ));
    }

    #[test]
    fn unusable_epsilon_is_refused_not_clamped() {
        for eps in [60.0, 45.0, 0.0, -1.0, f64::NAN] {
            let config = ViewConfig {
                pitch_epsilon_deg: eps,
                ..ViewConfig::default()
            };
            assert!(matches!(
                ViewPlanner::new(config),
                Err(ConfigError::Invalid {
                    field: "pitch_epsilon_deg",
                    ..
                })
            ));
            assert!(matches!(
                clamp_look_down(30.0, eps),
                Err(ViewError::InvalidInput {
                    field: "pitch epsilon",
                    ..
                })
            ));
            assert!(decompose_view_distance(500.0, -45.0, eps).is_err());
        }
    }

    #[test]
    fn custom_clearance_is_used() {
        let planner = ViewPlanner::new(ViewConfig {
            overhead_clearance_m: 1_234.0,
            ..ViewConfig::default()
        })
        .unwrap();
        let pose = planner
            .plan_camera_pose(hefei(), 500.0, -45.0, 0.0, ProjectionMode::Scene2D)
            .unwrap();
        assert_eq!(pose.position.alt, 1_434.0);
    }

    #[test]
    fn center_on_flies_to_the_planned_pose() {
        let planner = ViewPlanner::default();
        let view = CameraView {
            lng: 117.0,
            lat: 31.0,
            alt: 20_000.0,
            heading: 0.0,
            pitch: -90.0,
        };
        let mut scene = RecordingScene::ready(view, ProjectionMode::Scene3D);

        let pose = planner.center_on(&mut scene, hefei(), 500.0).unwrap().unwrap();
        assert_eq!(pose.pitch, Some(-45.0));
        assert_eq!(
            scene.calls(),
            &[SceneCall::FlyTo(CameraFlight::new(pose, 1.5))]
        );
    }

    #[test]
    fn center_on_is_a_no_op_before_the_scene_is_ready() {
        let planner = ViewPlanner::default();
        let mut scene = RecordingScene::not_ready();
        assert_eq!(planner.center_on(&mut scene, hefei(), 500.0), Ok(None));
        assert!(scene.calls().is_empty());
    }
}
