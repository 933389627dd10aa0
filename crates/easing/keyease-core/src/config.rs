//! Library configuration.

use serde::{Deserialize, Serialize};

use crate::easing::DEFAULT_OVERSHOOT;
use crate::{PresetError, Result};

/// Marker separating template regions.
pub const DEFAULT_REGION_MARKER: &str = "/*_EASING_PRESET_*/";

/// Identifier the setup region reads the host's frame input from.
pub const DEFAULT_FRAME_IDENTIFIER: &str = "$frame";

/// Settings for template parsing, literal emission and curve shape.
/// Missing JSON fields fall back to their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresetConfig {
    /// Literal token splitting a preset into regions.
    pub region_marker: String,

    /// Name the host gives its current-frame input.
    pub frame_identifier: String,

    /// Decimal places for numeric literals; `None` emits the shortest
    /// representation that round-trips.
    pub literal_precision: Option<u32>,

    /// Overshoot coefficient for the back family.
    pub back_overshoot: f64,
}

impl Default for PresetConfig {
    fn default() -> Self {
        Self {
            region_marker: DEFAULT_REGION_MARKER.to_string(),
            frame_identifier: DEFAULT_FRAME_IDENTIFIER.to_string(),
            literal_precision: None,
            back_overshoot: DEFAULT_OVERSHOOT,
        }
    }
}

impl PresetConfig {
    /// Parse a JSON config object and check it.
    pub fn from_json(s: &str) -> Result<Self> {
        let config: PresetConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.region_marker.trim().is_empty() {
            return Err(PresetError::Config {
                reason: "region_marker must not be empty".to_string(),
            });
        }
        if !is_identifier(&self.frame_identifier) {
            return Err(PresetError::Config {
                reason: format!(
                    "frame_identifier '{}' is not an identifier",
                    self.frame_identifier
                ),
            });
        }
        if !self.back_overshoot.is_finite() {
            return Err(PresetError::Config {
                reason: format!("back_overshoot must be finite, got {}", self.back_overshoot),
            });
        }
        Ok(())
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = PresetConfig::from_json(r#"{ "literal_precision": 3 }"#).unwrap();
        assert_eq!(cfg.literal_precision, Some(3));
        assert_eq!(cfg.region_marker, DEFAULT_REGION_MARKER);
        assert_eq!(cfg.frame_identifier, "$frame");
        assert_eq!(cfg.back_overshoot, 1.70158);
    }

    #[test]
    fn rejects_empty_marker() {
        let err = PresetConfig::from_json(r#"{ "region_marker": "  " }"#).unwrap_err();
        assert_eq!(err.category(), "config");
    }

    #[test]
    fn rejects_bad_frame_identifier() {
        let err = PresetConfig::from_json(r#"{ "frame_identifier": "9frame" }"#).unwrap_err();
        assert!(matches!(err, PresetError::Config { .. }));
    }

    #[test]
    fn malformed_json_maps_to_config_error() {
        let err = PresetConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, PresetError::Config { .. }));
    }
}
