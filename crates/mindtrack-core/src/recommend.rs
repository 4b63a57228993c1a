//! **Recommendation Rule Engine** — prioritized wellbeing recommendations
//! from the latest aggregated user-state snapshot.
//!
//! Each rule independently inspects one field against a fixed threshold;
//! multiple rules may fire. Absent fields use documented defaults so a
//! rule never false-triggers on missing data, and the result is always
//! non-empty (a generic wellness recommendation as fallback).

use serde::{Deserialize, Serialize};

/// Latest known user state, merged by the caller from health metrics,
/// mood assessment, and cognitive assessment. Every recognized optional
/// field is enumerated here; unrecognized fields are rejected on
/// deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UserState {
    /// Latest anxiety level in `[0, 1]`. Absent: the anxiety rule never fires.
    pub anxiety_level: Option<f32>,
    /// Latest stress level in `[0, 1]`. Absent: the stress rule never fires.
    pub stress_level: Option<f32>,
    /// Latest depression indicators in `[0, 1]`. Absent: the mood-support rule never fires.
    pub depression_indicators: Option<f32>,
    /// Hours slept last night. Assumed 7 when absent.
    pub sleep_hours: Option<f32>,
    /// Daily step count. Assumed 5000 when absent.
    pub steps: Option<u32>,
    /// Latest overall cognitive score in `[0, 1]`. Assumed 0.7 when absent.
    pub cognitive_score: Option<f32>,
}

/// Recommendation priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

/// Recommendation category, named after the triggering condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    MentalHealth,
    StressRelief,
    Sleep,
    Exercise,
    Cognitive,
    Wellness,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::MentalHealth => "mental_health",
            Category::StressRelief => "stress_relief",
            Category::Sleep => "sleep",
            Category::Exercise => "exercise",
            Category::Cognitive => "cognitive",
            Category::Wellness => "wellness",
        }
    }
}

/// One prioritized recommendation record for the caller to store/render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: Category,
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

impl Recommendation {
    fn new(category: Category, title: &str, description: &str, priority: Priority) -> Self {
        Self {
            category,
            title: title.to_string(),
            description: description.to_string(),
            priority,
        }
    }
}

/// Generates personalized recommendations from a user-state snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationEngine;

impl RecommendationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Applies the rule table in order; every triggered rule appends one
    /// recommendation. The result is never empty.
    pub fn generate_recommendations(&self, state: &UserState) -> Vec<Recommendation> {
        let mut recommendations = Vec::new();

        if state.anxiety_level.unwrap_or(0.0) > 0.6 {
            recommendations.push(Recommendation::new(
                Category::MentalHealth,
                "Anxiety Management",
                "Practice deep breathing exercises for 10 minutes daily. Try the 4-7-8 technique.",
                Priority::High,
            ));
        }

        if state.stress_level.unwrap_or(0.0) > 0.7 {
            recommendations.push(Recommendation::new(
                Category::StressRelief,
                "Stress Reduction",
                "Consider guided meditation or yoga. Take regular breaks during work.",
                Priority::High,
            ));
        }

        if state.depression_indicators.unwrap_or(0.0) > 0.6 {
            recommendations.push(Recommendation::new(
                Category::MentalHealth,
                "Mood Support",
                "Engage in physical activity and social connections. Consider speaking with a therapist.",
                Priority::High,
            ));
        }

        if state.sleep_hours.unwrap_or(7.0) < 6.0 {
            recommendations.push(Recommendation::new(
                Category::Sleep,
                "Improve Sleep Quality",
                "Aim for 7-9 hours of sleep. Maintain consistent sleep schedule.",
                Priority::Medium,
            ));
        }

        if state.steps.unwrap_or(5000) < 5000 {
            recommendations.push(Recommendation::new(
                Category::Exercise,
                "Increase Physical Activity",
                "Try to reach 8,000-10,000 steps daily. Take short walks throughout the day.",
                Priority::Medium,
            ));
        }

        if state.cognitive_score.unwrap_or(0.7) < 0.5 {
            recommendations.push(Recommendation::new(
                Category::Cognitive,
                "Brain Training",
                "Play cognitive games daily. Read, learn new skills, and stay mentally active.",
                Priority::High,
            ));
        }

        if recommendations.is_empty() {
            recommendations.push(Recommendation::new(
                Category::Wellness,
                "Maintain Healthy Habits",
                "Continue your current wellness routine. Stay active and engaged.",
                Priority::Low,
            ));
        }

        tracing::debug!(count = recommendations.len(), "recommendations generated");
        recommendations
    }
}
