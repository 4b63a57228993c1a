//! mindtrack-core: wellbeing analysis and dialogue engine.
//!
//! A pure computation layer invoked synchronously per request: free-text
//! mood scoring, cognitive game assessment, decline-trend detection,
//! rule-based recommendations, threshold alerts, and a template-driven
//! wellness chatbot. The engine performs no I/O and keeps no state
//! between calls; callers supply already-fetched history and context and
//! persist the structured results themselves. Randomness and the wall
//! clock are injected, so fixed seeds and timestamps make every call
//! reproducible.

mod alerts;
mod chatbot;
mod cognitive;
mod config;
mod error;
mod mood;
mod recommend;
pub mod sentiment;
mod summary;

// Configuration and errors
pub use config::EngineConfig;
pub use error::EngineError;

// Sentiment & Mood Scorer
pub use mood::{Emotion, MoodAnalyzer, TextAnalysis};
pub use sentiment::{Sentiment, SentimentLexicon, SentimentModel};

// Cognitive Performance Scorer + Decline Trend Detector
pub use cognitive::{
    CognitiveAnalyzer, CognitiveAssessment, GameResult, GameType, HasCognitiveScore,
    PerformanceLevel, Trend, TrendAnalysis,
};

// Recommendation Rule Engine
pub use recommend::{Category, Priority, Recommendation, RecommendationEngine, UserState};

// Wellness Chatbot Dialogue Engine
pub use chatbot::{
    analyze_emotional_patterns, daily_affirmation, ChatbotResponse, ConversationRecord,
    EmotionalPattern, EmotionalPatternSummary, Exercise, Suggestion, TimeOfDay, UserContext,
    WellnessChatbot,
};

// Threshold alerts and rolling summaries
pub use alerts::{evaluate_alerts, Alert, AlertKind, AlertSeverity};
pub use summary::{cognitive_summary, health_trends, CognitiveSummary, HealthMetrics, HealthTrends};

/// Rounds to 3 decimal places for stable display and storage.
pub(crate) fn round3(value: f32) -> f32 {
    (value * 1000.0).round() / 1000.0
}

/// Rounds to 4 decimal places; used for regression slopes.
pub(crate) fn round4(value: f32) -> f32 {
    (value * 10_000.0).round() / 10_000.0
}
