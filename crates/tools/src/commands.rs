//! Subcommand bodies. Each returns the pretty-printed JSON to emit.

use camera::{CameraView, ProjectionMode, ViewConfig, ViewPlanner};
use foundation::math::{Ecef, GeoPoint, to_geographic, try_offset_point};
use serde::Serialize;

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("encode output: {e}"))
}

pub fn offset(origin: GeoPoint, bearing_deg: f64, distance_m: f64) -> Result<String, String> {
    let point = try_offset_point(origin, bearing_deg, distance_m).map_err(|e| e.to_string())?;
    to_json(&point)
}

pub fn geographic(xyz: [f64; 3]) -> Result<String, String> {
    if xyz.iter().any(|v| !v.is_finite()) {
        return Err(format!("non-finite coordinate: {xyz:?}"));
    }
    let [x, y, z] = xyz;
    to_json(&to_geographic(Ecef::new(x, y, z)))
}

pub fn plan(
    config: &ViewConfig,
    target: GeoPoint,
    distance_m: f64,
    pitch_deg: Option<f64>,
    heading_deg: Option<f64>,
    mode: ProjectionMode,
) -> Result<String, String> {
    let planner = ViewPlanner::new(config.clone()).map_err(|e| e.to_string())?;
    let pose = planner
        .plan_camera_pose(
            target,
            distance_m,
            pitch_deg.unwrap_or(config.default_pitch_deg),
            heading_deg.unwrap_or(config.default_heading_deg),
            mode,
        )
        .map_err(|e| e.to_string())?;
    to_json(&pose)
}

pub fn switch(config: &ViewConfig, view: CameraView, mode: ProjectionMode) -> Result<String, String> {
    let plan = ViewPlanner::new(config.clone())
        .map_err(|e| e.to_string())?
        .plan_transition(view, mode)
        .map_err(|e| e.to_string())?;
    to_json(&plan)
}
