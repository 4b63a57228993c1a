//! **Cognitive Performance Scorer** and decline trend detection.
//!
//! A single game result becomes three domain scores (memory, focus,
//! problem-solving) and an overall cognitive score with a qualitative
//! performance level. An ordered history of assessments becomes a trend
//! classification from an ordinary least-squares fit over the most recent
//! window.

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::{round3, round4};

/// Domain score below which the matching practice recommendation fires.
const DOMAIN_RECOMMENDATION_THRESHOLD: f32 = 0.6;
/// Overall score below which professional consultation is suggested.
const CONSULTATION_THRESHOLD: f32 = 0.5;
/// Reaction time (ms) mapping to a zero reaction score.
const REACTION_BASELINE_MS: f32 = 2000.0;

/// Cognitive game category. Unknown types fall back to the generic
/// 0.5/0.5 domain blends rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameType {
    MemoryMatch,
    SequenceRecall,
    ReactionTest,
    AttentionTask,
    Other,
}

impl GameType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameType::MemoryMatch => "memory_match",
            GameType::SequenceRecall => "sequence_recall",
            GameType::ReactionTest => "reaction_test",
            GameType::AttentionTask => "attention_task",
            GameType::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.trim() {
            "memory_match" => GameType::MemoryMatch,
            "sequence_recall" => GameType::SequenceRecall,
            "reaction_test" => GameType::ReactionTest,
            "attention_task" => GameType::AttentionTask,
            _ => GameType::Other,
        }
    }

    /// Memory-weighted games: raw score matters more than accuracy.
    #[inline]
    fn is_memory_game(self) -> bool {
        matches!(self, GameType::MemoryMatch | GameType::SequenceRecall)
    }

    /// Attention-weighted games: reaction time matters more than accuracy.
    #[inline]
    fn is_attention_game(self) -> bool {
        matches!(self, GameType::ReactionTest | GameType::AttentionTask)
    }
}

impl Serialize for GameType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for GameType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(GameType::from_str(&s))
    }
}

/// One cognitive game result as reported by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameResult {
    pub game_type: GameType,
    /// Raw game score on a 0–100 scale.
    pub score: f32,
    /// Mean reaction time in milliseconds.
    pub reaction_time_ms: f32,
    /// Response accuracy on a 0–100 scale.
    pub accuracy: f32,
    /// Difficulty level, 1 = easiest. Defaults to 1.
    #[serde(default = "default_difficulty")]
    pub difficulty: f32,
}

fn default_difficulty() -> f32 {
    1.0
}

impl GameResult {
    /// Fails fast on malformed numbers, naming the offending field.
    pub fn validate(&self) -> Result<(), EngineError> {
        for (field, value) in [
            ("score", self.score),
            ("reaction_time_ms", self.reaction_time_ms),
            ("accuracy", self.accuracy),
        ] {
            if !value.is_finite() || value < 0.0 {
                tracing::warn!(field, value, "game result rejected");
                return Err(EngineError::validation(
                    field,
                    format!("{value} is not a non-negative number"),
                ));
            }
        }
        if !self.difficulty.is_finite() || self.difficulty < 1.0 {
            tracing::warn!(difficulty = self.difficulty, "game result rejected");
            return Err(EngineError::validation(
                "difficulty",
                format!("{} is below the minimum difficulty of 1", self.difficulty),
            ));
        }
        Ok(())
    }
}

/// Qualitative performance bucket for an overall cognitive score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PerformanceLevel {
    Excellent,
    Good,
    Fair,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl PerformanceLevel {
    pub fn from_score(score: f32) -> Self {
        if score >= 0.8 {
            PerformanceLevel::Excellent
        } else if score >= 0.6 {
            PerformanceLevel::Good
        } else if score >= 0.4 {
            PerformanceLevel::Fair
        } else {
            PerformanceLevel::NeedsImprovement
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PerformanceLevel::Excellent => "Excellent",
            PerformanceLevel::Good => "Good",
            PerformanceLevel::Fair => "Fair",
            PerformanceLevel::NeedsImprovement => "Needs Improvement",
        }
    }
}

/// Deterministic assessment of one game result. Domain scores and the
/// overall score are in `[0, 1]`, rounded to 3 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CognitiveAssessment {
    pub cognitive_score: f32,
    pub memory_score: f32,
    pub focus_score: f32,
    pub problem_solving_score: f32,
    pub performance_level: PerformanceLevel,
    pub recommendations: Vec<String>,
}

/// Minimal view of a stored assessment needed for trend analysis, so
/// callers can pass persisted rows without rebuilding full assessments.
pub trait HasCognitiveScore {
    fn cognitive_score(&self) -> f32;
}

impl HasCognitiveScore for CognitiveAssessment {
    fn cognitive_score(&self) -> f32 {
        self.cognitive_score
    }
}

impl HasCognitiveScore for f32 {
    fn cognitive_score(&self) -> f32 {
        *self
    }
}

/// Trend direction over the recent assessment window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    InsufficientData,
    Declining,
    Stable,
    Improving,
}

/// Result of decline trend detection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendAnalysis {
    pub trend: Trend,
    pub decline_detected: bool,
    /// OLS slope of cognitive score against assessment index, rounded to
    /// 4 decimals. Absent when there is too little data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slope: Option<f32>,
    pub message: String,
}

/// Scores cognitive game results and classifies longitudinal trends.
#[derive(Debug, Clone)]
pub struct CognitiveAnalyzer {
    trend_window: usize,
    trend_slope_threshold: f32,
}

impl Default for CognitiveAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl CognitiveAnalyzer {
    pub fn new() -> Self {
        Self::from_config(&EngineConfig::default())
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            trend_window: config.trend_window,
            trend_slope_threshold: config.trend_slope_threshold,
        }
    }

    /// Scores a single game result across the three cognitive domains.
    pub fn analyze_game_result(&self, result: &GameResult) -> Result<CognitiveAssessment, EngineError> {
        result.validate()?;

        let score = (result.score / 100.0).min(1.0);
        let accuracy = (result.accuracy / 100.0).min(1.0);
        // Lower reaction time is better; the baseline maps to zero and the
        // score never goes negative.
        let reaction = (1.0 - result.reaction_time_ms / REACTION_BASELINE_MS).max(0.0);

        let memory = if result.game_type.is_memory_game() {
            score * 0.6 + accuracy * 0.4
        } else {
            score * 0.5 + accuracy * 0.5
        };
        let focus = if result.game_type.is_attention_game() {
            reaction * 0.7 + accuracy * 0.3
        } else {
            reaction * 0.5 + accuracy * 0.5
        };
        // Difficulty multiplies reward linearly above level 1, capped at 1.
        let problem_solving = (score * (1.0 + (result.difficulty - 1.0) * 0.2)).min(1.0);

        let cognitive = (memory + focus + problem_solving) / 3.0;

        tracing::debug!(
            game_type = result.game_type.as_str(),
            cognitive = cognitive,
            "game result scored"
        );

        Ok(CognitiveAssessment {
            cognitive_score: round3(cognitive),
            memory_score: round3(memory),
            focus_score: round3(focus),
            problem_solving_score: round3(problem_solving),
            performance_level: PerformanceLevel::from_score(cognitive),
            recommendations: domain_recommendations(cognitive, memory, focus, problem_solving),
        })
    }

    /// Classifies the trend over a chronological assessment history.
    /// Fewer than 3 records yields `insufficient_data`; otherwise the
    /// slope of an OLS fit over the most recent window decides.
    pub fn detect_decline_trend<T: HasCognitiveScore>(&self, history: &[T]) -> TrendAnalysis {
        if history.len() < 3 {
            return TrendAnalysis {
                trend: Trend::InsufficientData,
                decline_detected: false,
                slope: None,
                message: "More data needed for trend analysis.".to_string(),
            };
        }

        let start = history.len().saturating_sub(self.trend_window);
        let scores: Vec<f32> = history[start..].iter().map(HasCognitiveScore::cognitive_score).collect();
        let slope = ols_slope(&scores);

        let trend = if slope < -self.trend_slope_threshold {
            Trend::Declining
        } else if slope > self.trend_slope_threshold {
            Trend::Improving
        } else {
            Trend::Stable
        };
        let decline_detected = trend == Trend::Declining;

        tracing::debug!(slope = slope, trend = ?trend, "cognitive trend classified");

        let message = match trend {
            Trend::Declining => {
                "Cognitive performance shows declining trend. Consider consulting a healthcare provider."
            }
            Trend::Improving => "Cognitive performance is improving. Keep up the good work!",
            _ => "Cognitive performance is stable.",
        };

        TrendAnalysis {
            trend,
            decline_detected,
            slope: Some(round4(slope)),
            message: message.to_string(),
        }
    }
}

/// Slope of an ordinary least-squares line through `(index, score)`.
fn ols_slope(scores: &[f32]) -> f32 {
    let n = scores.len() as f32;
    let mean_x = (n - 1.0) / 2.0;
    let mean_y: f32 = scores.iter().sum::<f32>() / n;
    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for (i, y) in scores.iter().enumerate() {
        let dx = i as f32 - mean_x;
        numerator += dx * (y - mean_y);
        denominator += dx * dx;
    }
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

fn domain_recommendations(cognitive: f32, memory: f32, focus: f32, problem_solving: f32) -> Vec<String> {
    let mut recommendations = Vec::new();
    if memory < DOMAIN_RECOMMENDATION_THRESHOLD {
        recommendations.push("Practice memory exercises daily to improve recall.".to_string());
    }
    if focus < DOMAIN_RECOMMENDATION_THRESHOLD {
        recommendations.push("Try meditation to enhance focus and attention.".to_string());
    }
    if problem_solving < DOMAIN_RECOMMENDATION_THRESHOLD {
        recommendations.push("Engage in puzzles and strategy games.".to_string());
    }
    if cognitive < CONSULTATION_THRESHOLD {
        recommendations
            .push("Consider consulting a healthcare provider for cognitive assessment.".to_string());
    }
    if recommendations.is_empty() {
        recommendations.push("Maintain current cognitive activities for optimal brain health.".to_string());
    }
    recommendations
}
