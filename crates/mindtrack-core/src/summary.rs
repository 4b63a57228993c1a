//! Rolling aggregate summaries over caller-fetched history rows.
//!
//! Pure averaging for dashboard and trend views; a missing metric value
//! contributes zero to its average rather than being skipped, matching
//! how the stored rows are aggregated downstream.

use serde::{Deserialize, Serialize};

use crate::cognitive::CognitiveAssessment;
use crate::round3;

/// One stored health-metric row. All fields optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthMetrics {
    pub heart_rate: Option<f32>,
    pub hrv_score: Option<f32>,
    pub sleep_hours: Option<f32>,
    pub steps: Option<u32>,
    pub stress_level: Option<f32>,
}

/// Windowed averages over health metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HealthTrends {
    pub avg_heart_rate: f32,
    pub avg_sleep_hours: f32,
    pub avg_steps: f32,
    pub avg_stress_level: f32,
    pub data_points: usize,
}

/// Averages a health-metric window. Empty input yields a zeroed summary.
pub fn health_trends(metrics: &[HealthMetrics]) -> HealthTrends {
    if metrics.is_empty() {
        return HealthTrends::default();
    }
    let n = metrics.len() as f32;
    HealthTrends {
        avg_heart_rate: metrics.iter().map(|m| m.heart_rate.unwrap_or(0.0)).sum::<f32>() / n,
        avg_sleep_hours: metrics.iter().map(|m| m.sleep_hours.unwrap_or(0.0)).sum::<f32>() / n,
        avg_steps: metrics.iter().map(|m| m.steps.unwrap_or(0) as f32).sum::<f32>() / n,
        avg_stress_level: metrics.iter().map(|m| m.stress_level.unwrap_or(0.0)).sum::<f32>() / n,
        data_points: metrics.len(),
    }
}

/// Averages over recent cognitive assessments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CognitiveSummary {
    pub avg_cognitive_score: f32,
    pub avg_memory_score: f32,
    pub avg_focus_score: f32,
    pub total_assessments: usize,
}

/// Averages a cognitive assessment window; `None` for empty history.
pub fn cognitive_summary(history: &[CognitiveAssessment]) -> Option<CognitiveSummary> {
    if history.is_empty() {
        return None;
    }
    let n = history.len() as f32;
    Some(CognitiveSummary {
        avg_cognitive_score: round3(history.iter().map(|a| a.cognitive_score).sum::<f32>() / n),
        avg_memory_score: round3(history.iter().map(|a| a.memory_score).sum::<f32>() / n),
        avg_focus_score: round3(history.iter().map(|a| a.focus_score).sum::<f32>() / n),
        total_assessments: history.len(),
    })
}
