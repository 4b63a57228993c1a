//! Threshold alerts derived from a mood analysis.
//!
//! The engine only decides whether an alert fires; delivery and storage
//! belong to the caller. Thresholds come from [`EngineConfig`] so an
//! embedding can tune sensitivity without touching the rules.

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::mood::TextAnalysis;

/// What triggered the alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Anxiety,
    Depression,
    Stress,
}

impl AlertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::Anxiety => "anxiety",
            AlertKind::Depression => "depression",
            AlertKind::Stress => "stress",
        }
    }
}

/// Alert severity for caller-side triage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Medium,
    High,
}

/// One alert record for the caller to persist or relay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub kind: AlertKind,
    pub severity: AlertSeverity,
    pub message: String,
}

/// Checks a mood analysis against the configured thresholds. Possibly
/// empty; each indicator contributes at most one alert.
pub fn evaluate_alerts(analysis: &TextAnalysis, config: &EngineConfig) -> Vec<Alert> {
    let mut alerts = Vec::new();

    if analysis.anxiety_level > config.anxiety_alert_threshold {
        alerts.push(Alert {
            kind: AlertKind::Anxiety,
            severity: AlertSeverity::High,
            message: "Elevated anxiety levels detected. Consider relaxation techniques.".to_string(),
        });
    }

    if analysis.depression_indicators > config.depression_alert_threshold {
        alerts.push(Alert {
            kind: AlertKind::Depression,
            severity: AlertSeverity::High,
            message: "Signs of depression detected. Consider speaking with a healthcare provider."
                .to_string(),
        });
    }

    if analysis.stress_level > config.stress_alert_threshold {
        alerts.push(Alert {
            kind: AlertKind::Stress,
            severity: AlertSeverity::Medium,
            message: "High stress levels detected. Take time for self-care.".to_string(),
        });
    }

    if !alerts.is_empty() {
        tracing::info!(count = alerts.len(), "wellbeing alerts raised");
    }
    alerts
}
