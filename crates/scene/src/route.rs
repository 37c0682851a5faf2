use std::collections::BTreeMap;

use foundation::math::{GeoPoint, StableF64};
use foundation::time::{Time, TimeSpan};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Waypoint {
    pub time: Time,
    pub position: GeoPoint,
}

/// Timestamped positions of one moving object, ordered by time.
///
/// Only bookkeeping lives here; the engine interpolates between waypoints.
/// `trail_s` bounds how much flown path is kept on screen (`None` keeps all).
#[derive(Debug, Clone, PartialEq)]
pub struct DroneRoute {
    pub label: String,
    pub model_url: String,
    pub trail_s: Option<f64>,
    waypoints: BTreeMap<StableF64, GeoPoint>,
}

impl DroneRoute {
    pub fn new(label: impl Into<String>, model_url: impl Into<String>, trail_s: Option<f64>) -> Self {
        Self {
            label: label.into(),
            model_url: model_url.into(),
            trail_s,
            waypoints: BTreeMap::new(),
        }
    }

    /// Adds a fix, in any order. A fix at an existing time replaces it.
    ///
    /// Returns `false` (and keeps nothing) for a non-finite time.
    pub fn add_time_position(&mut self, time: Time, position: GeoPoint) -> bool {
        if !time.0.is_finite() {
            return false;
        }
        self.waypoints.insert(StableF64(time.0), position);
        true
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn waypoints(&self) -> impl Iterator<Item = Waypoint> + '_ {
        self.waypoints.iter().map(|(t, p)| Waypoint {
            time: Time(t.0),
            position: *p,
        })
    }

    pub fn first(&self) -> Option<Waypoint> {
        self.waypoints.first_key_value().map(|(t, p)| Waypoint {
            time: Time(t.0),
            position: *p,
        })
    }

    pub fn last(&self) -> Option<Waypoint> {
        self.waypoints.last_key_value().map(|(t, p)| Waypoint {
            time: Time(t.0),
            position: *p,
        })
    }

    pub fn start_time(&self) -> Option<Time> {
        self.waypoints.first_key_value().map(|(t, _)| Time(t.0))
    }

    pub fn stop_time(&self) -> Option<Time> {
        self.waypoints.last_key_value().map(|(t, _)| Time(t.0))
    }

    pub fn span(&self) -> Option<TimeSpan> {
        Some(TimeSpan {
            start: self.start_time()?,
            end: self.stop_time()?,
        })
    }

    /// Most recent fix at or before `time`.
    pub fn latest_at(&self, time: Time) -> Option<Waypoint> {
        self.waypoints
            .range(..=StableF64(time.0))
            .next_back()
            .map(|(t, p)| Waypoint {
                time: Time(t.0),
                position: *p,
            })
    }

    /// Flown path visible at `time`, oldest first.
    ///
    /// Empty for a NaN `time`. A window with no finite start (an infinite
    /// trail at an infinite time) reaches back to the first fix.
    pub fn trail_at(&self, time: Time) -> Vec<Waypoint> {
        if time.0.is_nan() {
            return Vec::new();
        }
        let start = match self.trail_s {
            Some(trail) => time.0 - trail.max(0.0),
            None => f64::NEG_INFINITY,
        };
        let start = if start.is_nan() { f64::NEG_INFINITY } else { start };
        let (start, end) = (StableF64(start), StableF64(time.0));
        if start > end {
            return Vec::new();
        }
        self.waypoints
            .range(start..=end)
            .map(|(t, p)| Waypoint {
                time: Time(t.0),
                position: *p,
            })
            .collect()
    }
}
