use serde::{Deserialize, Serialize};

use crate::error::{BezError, Result};
use crate::traits::Validate;

/// Tuning for the closest-point-to-ray search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionSettings {
    /// Number of bracket refinement rounds. Each round halves the bracket width.
    pub iterations: u32,
}

impl ProjectionSettings {
    pub const DEFAULT_ITERATIONS: u32 = 16;
    /// Past this many rounds the bracket is narrower than f64 can resolve on `[0, 1]`.
    pub const MAX_ITERATIONS: u32 = 64;

    pub fn new(iterations: u32) -> Self {
        Self { iterations }
    }

    /// Cheap setting for interactive hover/picking.
    pub fn coarse() -> Self {
        Self { iterations: 8 }
    }

    pub fn fine() -> Self {
        Self { iterations: 24 }
    }

    /// Parse settings from a JSON document, filling missing fields with defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        tracing::debug!(iterations = settings.iterations, "loaded projection settings");
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Default for ProjectionSettings {
    fn default() -> Self {
        Self {
            iterations: Self::DEFAULT_ITERATIONS,
        }
    }
}

impl Validate for ProjectionSettings {
    fn validate(&self) -> Result<()> {
        if self.iterations > Self::MAX_ITERATIONS {
            return Err(BezError::InvalidInput(format!(
                "iterations must be at most {}, got {}",
                Self::MAX_ITERATIONS,
                self.iterations
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        assert_eq!(ProjectionSettings::default().iterations, 16);
        assert!(ProjectionSettings::coarse().iterations < ProjectionSettings::fine().iterations);
    }

    #[test]
    fn test_from_json() {
        let settings = ProjectionSettings::from_json(r#"{ "iterations": 10 }"#).unwrap();
        assert_eq!(settings, ProjectionSettings::new(10));
    }

    #[test]
    fn test_from_json_missing_field_uses_default() {
        let settings = ProjectionSettings::from_json("{}").unwrap();
        assert_eq!(settings, ProjectionSettings::default());
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        let err = ProjectionSettings::from_json(r#"{ "iterations": -1 }"#).unwrap_err();
        assert!(matches!(err, BezError::Config(_)));
    }

    #[test]
    fn test_validate_upper_bound() {
        assert!(ProjectionSettings::new(64).validate().is_ok());
        let err = ProjectionSettings::from_json(r#"{ "iterations": 65 }"#).unwrap_err();
        assert!(matches!(err, BezError::InvalidInput(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let settings = ProjectionSettings::fine();
        let json = settings.to_json().unwrap();
        assert_eq!(ProjectionSettings::from_json(&json).unwrap(), settings);
    }
}
