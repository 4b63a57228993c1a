//! **Sentiment & Mood Scorer** — turns free journal/chat text into
//! normalized wellbeing indicators.
//!
//! Raw sentiment polarity alone misses domain-specific distress vocabulary
//! that a general model scores as neutral, so the scorer blends the
//! sentiment primitive with three fixed keyword lexicons (anxiety,
//! depression, stress) and dampens the mood score by their density.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::round3;
use crate::sentiment::{tokenize, word_count, SentimentLexicon, SentimentModel};

/// Anxiety vocabulary scanned in lowercased text.
const ANXIETY_KEYWORDS: &[&str] = &[
    "worried", "anxious", "nervous", "panic", "fear", "scared", "overwhelmed", "stressed",
    "tense", "uneasy", "restless",
];

/// Depression vocabulary.
const DEPRESSION_KEYWORDS: &[&str] = &[
    "sad", "depressed", "hopeless", "empty", "worthless", "tired", "exhausted", "lonely",
    "isolated", "numb", "unmotivated",
];

/// Stress vocabulary.
const STRESS_KEYWORDS: &[&str] = &[
    "stress", "pressure", "burden", "overwhelmed", "exhausted", "demanding", "hectic",
    "chaotic", "intense", "struggling",
];

/// Polarity beyond which text counts as positive (or, negated, negative).
const POLARITY_LABEL_THRESHOLD: f32 = 0.3;
/// Indicator score beyond which the matching emotion label is added.
const INDICATOR_LABEL_THRESHOLD: f32 = 0.3;
/// Indicator score beyond which the summary calls the level out.
const INDICATOR_SUMMARY_THRESHOLD: f32 = 0.5;

/// Emotion labels attached to a text analysis. Labels are additive, not
/// exclusive: one text can be both `negative` and `anxious`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Positive,
    Negative,
    Neutral,
    Anxious,
    Sad,
    Stressed,
}

impl Emotion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Positive => "positive",
            Emotion::Negative => "negative",
            Emotion::Neutral => "neutral",
            Emotion::Anxious => "anxious",
            Emotion::Sad => "sad",
            Emotion::Stressed => "stressed",
        }
    }
}

/// Normalized wellbeing scores for one text input.
///
/// All bounded scores are clamped to their stated range and rounded to
/// 3 decimal places for stable display and storage; `emotions` always
/// carries at least one label (`neutral` as fallback).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextAnalysis {
    /// Overall mood in `[0, 1]`: 0 = very negative, 1 = very positive.
    pub mood_score: f32,
    /// Anxiety keyword density in `[0, 1]`.
    pub anxiety_level: f32,
    /// Depression keyword density in `[0, 1]`.
    pub depression_indicators: f32,
    /// Stress keyword density in `[0, 1]`.
    pub stress_level: f32,
    /// Raw sentiment valence in `[-1, 1]`.
    pub sentiment_polarity: f32,
    /// Raw sentiment subjectivity in `[0, 1]`.
    pub sentiment_subjectivity: f32,
    /// Detected emotion labels, never empty.
    pub emotions: Vec<Emotion>,
    /// Human-readable summary of the indicators.
    pub summary: String,
}

impl TextAnalysis {
    /// The fixed result for empty or whitespace-only input.
    pub fn neutral() -> Self {
        Self {
            mood_score: 0.5,
            anxiety_level: 0.0,
            depression_indicators: 0.0,
            stress_level: 0.0,
            sentiment_polarity: 0.0,
            sentiment_subjectivity: 0.0,
            emotions: vec![Emotion::Neutral],
            summary: "No text provided for analysis.".to_string(),
        }
    }
}

/// Scores free text for mood and mental-health indicators.
///
/// Generic over the sentiment primitive so tests and embedders can swap in
/// their own model; defaults to the bundled [`SentimentLexicon`].
#[derive(Debug, Clone)]
pub struct MoodAnalyzer<M: SentimentModel = SentimentLexicon> {
    model: M,
}

impl MoodAnalyzer<SentimentLexicon> {
    pub fn new() -> Self {
        Self {
            model: SentimentLexicon::default(),
        }
    }
}

impl Default for MoodAnalyzer<SentimentLexicon> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: SentimentModel> MoodAnalyzer<M> {
    /// Uses a caller-supplied sentiment primitive instead of the default lexicon.
    pub fn with_model(model: M) -> Self {
        Self { model }
    }

    /// Analyzes text for mood and mental-health indicators. Never fails:
    /// empty input yields the fixed neutral default.
    pub fn analyze_text(&self, text: &str) -> TextAnalysis {
        if text.trim().is_empty() {
            return TextAnalysis::neutral();
        }

        let lowered = text.to_lowercase();
        let sentiment = self.model.score(&lowered);

        let tokens: HashSet<String> = tokenize(&lowered).into_iter().collect();
        let words = word_count(&lowered);
        let anxiety = indicator_score(&tokens, ANXIETY_KEYWORDS, words);
        let depression = indicator_score(&tokens, DEPRESSION_KEYWORDS, words);
        let stress = indicator_score(&tokens, STRESS_KEYWORDS, words);

        // Rescale polarity from [-1, 1] to [0, 1], then dampen by the
        // average of the negative indicators.
        let base_mood = (sentiment.polarity + 1.0) / 2.0;
        let mood = (base_mood * (1.0 - (anxiety + depression + stress) / 3.0)).clamp(0.0, 1.0);

        let emotions = extract_emotions(sentiment.polarity, anxiety, depression, stress);
        let summary = compose_summary(mood, anxiety, depression, stress);

        tracing::debug!(
            mood = mood,
            anxiety = anxiety,
            depression = depression,
            stress = stress,
            "text analysis scored"
        );

        TextAnalysis {
            mood_score: round3(mood),
            anxiety_level: round3(anxiety),
            depression_indicators: round3(depression),
            stress_level: round3(stress),
            sentiment_polarity: round3(sentiment.polarity),
            sentiment_subjectivity: round3(sentiment.subjectivity),
            emotions,
            summary,
        }
    }
}

/// Normalizes a lexicon hit count into `[0, 1]`: proportional to keyword
/// density in short texts, saturating for keyword-dense text. Each lexicon
/// entry counts at most once per text.
fn indicator_score(tokens: &HashSet<String>, lexicon: &[&str], words: usize) -> f32 {
    let hits = lexicon.iter().filter(|k| tokens.contains(**k)).count() as f32;
    (hits / (words as f32 * 0.1).max(1.0)).min(1.0)
}

fn extract_emotions(polarity: f32, anxiety: f32, depression: f32, stress: f32) -> Vec<Emotion> {
    let mut emotions = Vec::new();
    if polarity > POLARITY_LABEL_THRESHOLD {
        emotions.push(Emotion::Positive);
    } else if polarity < -POLARITY_LABEL_THRESHOLD {
        emotions.push(Emotion::Negative);
    } else {
        emotions.push(Emotion::Neutral);
    }
    if anxiety > INDICATOR_LABEL_THRESHOLD {
        emotions.push(Emotion::Anxious);
    }
    if depression > INDICATOR_LABEL_THRESHOLD {
        emotions.push(Emotion::Sad);
    }
    if stress > INDICATOR_LABEL_THRESHOLD {
        emotions.push(Emotion::Stressed);
    }
    emotions
}

fn compose_summary(mood: f32, anxiety: f32, depression: f32, stress: f32) -> String {
    let mut parts: Vec<&str> = Vec::new();

    if mood > 0.7 {
        parts.push("Overall mood appears positive and healthy.");
    } else if mood > 0.4 {
        parts.push("Mood is moderate with some fluctuations.");
    } else {
        parts.push("Mood indicators suggest emotional distress.");
    }

    if anxiety > INDICATOR_SUMMARY_THRESHOLD {
        parts.push("Elevated anxiety levels detected.");
    }
    if depression > INDICATOR_SUMMARY_THRESHOLD {
        parts.push("Signs of depressive symptoms present.");
    }
    if stress > INDICATOR_SUMMARY_THRESHOLD {
        parts.push("High stress levels identified.");
    }

    if parts.is_empty() {
        parts.push("Mental health indicators within normal range.");
    }

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_counts_each_keyword_once() {
        let tokens: HashSet<String> =
            ["anxious", "anxious", "scared"].iter().map(|s| s.to_string()).collect();
        // Two distinct lexicon entries over 20 words: 2 / 2.0
        assert_eq!(indicator_score(&tokens, ANXIETY_KEYWORDS, 20), 1.0);
    }

    #[test]
    fn short_text_denominator_floors_at_one() {
        let tokens: HashSet<String> = ["scared".to_string()].into_iter().collect();
        // 3 words: max(0.3, 1) = 1, so score = 1/1
        assert_eq!(indicator_score(&tokens, ANXIETY_KEYWORDS, 3), 1.0);
    }

    #[test]
    fn emotion_labels_are_additive() {
        let emotions = extract_emotions(-0.5, 0.4, 0.4, 0.4);
        assert_eq!(
            emotions,
            vec![Emotion::Negative, Emotion::Anxious, Emotion::Sad, Emotion::Stressed]
        );
    }

    #[test]
    fn summary_names_each_elevated_indicator() {
        let summary = compose_summary(0.2, 0.6, 0.1, 0.6);
        assert!(summary.contains("emotional distress"));
        assert!(summary.contains("anxiety"));
        assert!(summary.contains("stress"));
        assert!(!summary.contains("depressive"));
    }
}
