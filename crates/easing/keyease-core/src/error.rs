//! Error types for preset lookup, template parsing and substitution

use serde::{Deserialize, Serialize};

/// Error type for every fallible preset operation.
///
/// Clamping and degenerate intervals are never errors: they resolve to a
/// defined value in [`crate::clamp`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum PresetError {
    /// Curve name does not parse, or the curve has no preset template
    #[error("Unknown curve: {name}")]
    UnknownCurve { name: String },

    /// Region markers do not match the template's declared shape
    #[error("Malformed template for {curve}: {reason} (expected {expected} markers, found {found})")]
    TemplateMalformed {
        curve: String,
        reason: String,
        expected: usize,
        found: usize,
    },

    /// Template references a placeholder the caller did not bind
    #[error("Missing placeholder {name} while rendering {curve}")]
    MissingPlaceholder { curve: String, name: String },

    /// Bound placeholder value cannot be emitted as a literal
    #[error("Invalid literal for {placeholder} in {curve}: {value}")]
    InvalidLiteral {
        curve: String,
        placeholder: String,
        value: String,
    },

    /// Configuration could not be parsed or is inconsistent
    #[error("Config error: {reason}")]
    Config { reason: String },
}

impl PresetError {
    pub(crate) fn unknown_curve(name: impl Into<String>) -> Self {
        Self::UnknownCurve { name: name.into() }
    }

    /// Check if the caller can fix this by changing its input
    #[inline]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::MissingPlaceholder { .. } | Self::InvalidLiteral { .. } | Self::Config { .. }
        )
    }

    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::UnknownCurve { .. } => "lookup",
            Self::TemplateMalformed { .. } => "template",
            Self::MissingPlaceholder { .. } | Self::InvalidLiteral { .. } => "input",
            Self::Config { .. } => "config",
        }
    }
}

impl From<serde_json::Error> for PresetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_recoverability() {
        let recoverable = PresetError::InvalidLiteral {
            curve: "expo-out".to_string(),
            placeholder: "START_VALUE".to_string(),
            value: "NaN".to_string(),
        };
        assert!(recoverable.is_recoverable());

        let non_recoverable = PresetError::TemplateMalformed {
            curve: "expo-out".to_string(),
            reason: "marker count".to_string(),
            expected: 3,
            found: 1,
        };
        assert!(!non_recoverable.is_recoverable());
        assert!(!PresetError::unknown_curve("wobble-in").is_recoverable());
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(PresetError::unknown_curve("x").category(), "lookup");
        let missing = PresetError::MissingPlaceholder {
            curve: "sine-in".to_string(),
            name: "END_FRAME".to_string(),
        };
        assert_eq!(missing.category(), "input");
    }

    #[test]
    fn test_error_message_names_context() {
        let missing = PresetError::MissingPlaceholder {
            curve: "sine-in".to_string(),
            name: "END_FRAME".to_string(),
        };
        let text = missing.to_string();
        assert!(text.contains("END_FRAME"));
        assert!(text.contains("sine-in"));
    }

    #[test]
    fn test_serialization() {
        let error = PresetError::unknown_curve("wobble-in");
        let serialized = serde_json::to_string(&error).unwrap();
        let deserialized: PresetError = serde_json::from_str(&serialized).unwrap();
        assert_eq!(error, deserialized);
    }
}
