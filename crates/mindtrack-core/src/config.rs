//! Engine configuration: every tunable threshold enumerated with its default.
//!
//! Thresholds are configuration constants, not learned parameters. Callers
//! embed the defaults or load overrides from TOML; the engine never reads
//! files or environment itself.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Tunable thresholds for alerting and trend classification.
///
/// Unrecognized keys are rejected on deserialization rather than ignored,
/// so a typo in an override file surfaces immediately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Anxiety level above which an anxiety alert fires.
    pub anxiety_alert_threshold: f32,
    /// Depression indicator level above which a depression alert fires.
    pub depression_alert_threshold: f32,
    /// Stress level above which a stress alert fires.
    pub stress_alert_threshold: f32,
    /// Cognitive score below which decline is flagged.
    pub cognitive_decline_threshold: f32,
    /// Absolute regression slope beyond which a trend counts as
    /// declining (negative) or improving (positive).
    pub trend_slope_threshold: f32,
    /// Number of most recent assessments used for the trend fit.
    pub trend_window: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            anxiety_alert_threshold: 0.65,
            depression_alert_threshold: 0.6,
            stress_alert_threshold: 0.7,
            cognitive_decline_threshold: 0.5,
            trend_slope_threshold: 0.05,
            trend_window: 10,
        }
    }
}

impl EngineConfig {
    /// Parses a TOML override document; absent keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, EngineError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks thresholds against their stated domains.
    pub fn validate(&self) -> Result<(), EngineError> {
        for (field, value) in [
            ("anxiety_alert_threshold", self.anxiety_alert_threshold),
            ("depression_alert_threshold", self.depression_alert_threshold),
            ("stress_alert_threshold", self.stress_alert_threshold),
            ("cognitive_decline_threshold", self.cognitive_decline_threshold),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(EngineError::validation(field, format!("{value} is outside [0, 1]")));
            }
        }
        if !self.trend_slope_threshold.is_finite() || self.trend_slope_threshold <= 0.0 {
            return Err(EngineError::validation(
                "trend_slope_threshold",
                "must be a positive finite number",
            ));
        }
        if self.trend_window < 3 {
            return Err(EngineError::validation(
                "trend_window",
                "trend analysis needs at least 3 assessments",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        EngineConfig::default().validate().unwrap();
    }

    #[test]
    fn toml_override_keeps_unset_defaults() {
        let config = EngineConfig::from_toml_str("stress_alert_threshold = 0.8\n").unwrap();
        assert_eq!(config.stress_alert_threshold, 0.8);
        assert_eq!(config.anxiety_alert_threshold, 0.65);
        assert_eq!(config.trend_window, 10);
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(EngineConfig::from_toml_str("stress_treshold = 0.8\n").is_err());
    }

    #[test]
    fn out_of_range_threshold_names_the_field() {
        let err = EngineConfig::from_toml_str("anxiety_alert_threshold = 1.5\n").unwrap_err();
        match err {
            EngineError::Validation { field, .. } => assert_eq!(field, "anxiety_alert_threshold"),
            other => panic!("expected validation error, got: {other}"),
        }
    }
}
