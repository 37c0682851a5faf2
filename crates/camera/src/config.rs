use serde::{Deserialize, Serialize};

/// Tunables for camera planning.
///
/// Every field has a default, so a config file only needs the keys it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Height kept above the target in a 2D top-down view (meters).
    pub overhead_clearance_m: f64,
    /// Pitch of the oblique view entered when leaving 2D (degrees).
    pub oblique_pitch_deg: f64,
    /// Pitch used when framing a target without an explicit one (degrees).
    pub default_pitch_deg: f64,
    /// Heading used when framing a target without an explicit one (degrees).
    pub default_heading_deg: f64,
    /// Duration of every animated camera move (seconds).
    pub transition_duration_s: f64,
    /// Look-down angles are kept inside `[eps, 90 - eps]` degrees.
    pub pitch_epsilon_deg: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            overhead_clearance_m: 10_000.0,
            oblique_pitch_deg: -30.0,
            default_pitch_deg: -45.0,
            default_heading_deg: 0.0,
            transition_duration_s: 1.5,
            pitch_epsilon_deg: 0.01,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Parse(String),
    Invalid { field: &'static str, reason: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "view config parse error: {msg}"),
            ConfigError::Invalid { field, reason } => {
                write!(f, "view config field {field} {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl ViewConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: ViewConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("overhead_clearance_m", self.overhead_clearance_m),
            ("oblique_pitch_deg", self.oblique_pitch_deg),
            ("default_pitch_deg", self.default_pitch_deg),
            ("default_heading_deg", self.default_heading_deg),
            ("transition_duration_s", self.transition_duration_s),
            ("pitch_epsilon_deg", self.pitch_epsilon_deg),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(invalid(field, "must be finite"));
            }
        }

        if self.overhead_clearance_m < 0.0 {
            return Err(invalid("overhead_clearance_m", "must be non-negative"));
        }
        if self.transition_duration_s < 0.0 {
            return Err(invalid("transition_duration_s", "must be non-negative"));
        }
        if self.pitch_epsilon_deg <= 0.0 || self.pitch_epsilon_deg >= 45.0 {
            return Err(invalid("pitch_epsilon_deg", "must lie in (0, 45)"));
        }
        for (field, value) in [
            ("oblique_pitch_deg", self.oblique_pitch_deg),
            ("default_pitch_deg", self.default_pitch_deg),
        ] {
            if !(-90.0..=90.0).contains(&value) {
                return Err(invalid(field, "must lie in [-90, 90]"));
            }
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.to_string(),
    }
}
