//! Camera placement on the globe: look-at framing and 2D/3D projection
//! switches, driven through the [`SceneControl`] seam of the host engine.

pub mod config;
pub mod engine;
pub mod error;
pub mod planner;
pub mod pose;
pub mod projection;
pub mod transition;

#[cfg(test)]
mod testing;

pub use config::*;
pub use engine::*;
pub use error::*;
pub use planner::*;
pub use pose::*;
pub use projection::*;
pub use transition::*;
