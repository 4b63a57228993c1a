//! **Wellness Chatbot Dialogue Engine** — empathetic, context-aware
//! replies with exercise and affirmation suggestions.
//!
//! Per call: message → mood analysis → primary-emotion classification →
//! template selection → context augmentation → suggestion assembly →
//! exercise/affirmation selection. No cross-call state is kept; any
//! personalization must be re-supplied by the caller as [`UserContext`].
//! The random source and the wall clock are injected so a fixed seed and
//! timestamp reproduce a response exactly.

mod catalog;

use chrono::{DateTime, Timelike, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

pub use catalog::Exercise;

use crate::mood::{Emotion, MoodAnalyzer, TextAnalysis};
use crate::round3;
use crate::sentiment::{SentimentLexicon, SentimentModel};

/// Caller-supplied context snapshot used to augment the base reply.
/// Unrecognized fields are rejected on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UserContext {
    /// Recent stress level in `[0, 1]`; above 0.7 adds a stress-awareness clause.
    pub stress_level: Option<f32>,
    /// Recent sleep hours; below 6 adds a rest-suggestion clause.
    pub sleep_hours: Option<f32>,
    /// Prior conversation turns; above 5 adds a continuity clause.
    pub conversation_count: Option<u32>,
}

/// One assembled suggestion. Serializes as `{"type": ..., "content": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "content", rename_all = "snake_case")]
pub enum Suggestion {
    /// A mindfulness exercise matched to the detected emotion.
    Exercise(Exercise),
    /// A mood-boosting activity.
    Activity(&'static str),
    /// Encouragement to seek professional support.
    ProfessionalHelp(&'static str),
    /// An immediate-relief breathing tip.
    QuickTip(&'static str),
}

/// The chatbot's full structured reply.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatbotResponse {
    pub response: String,
    /// Zero to four suggestions, in assembly order.
    pub suggestions: Vec<Suggestion>,
    pub emotion_detected: Emotion,
    /// Mood score of the analyzed message, in `[0, 1]`.
    pub sentiment_score: f32,
    pub recommended_exercise: Exercise,
    pub affirmation: &'static str,
}

/// Affirmation bucket derived from the hour of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    General,
    Evening,
}

impl TimeOfDay {
    pub fn from_hour(hour: u32) -> Self {
        if hour < 12 {
            TimeOfDay::Morning
        } else if hour < 18 {
            TimeOfDay::General
        } else {
            TimeOfDay::Evening
        }
    }

    fn affirmations(self) -> &'static [&'static str] {
        match self {
            TimeOfDay::Morning => catalog::MORNING_AFFIRMATIONS,
            TimeOfDay::General => catalog::GENERAL_AFFIRMATIONS,
            TimeOfDay::Evening => catalog::EVENING_AFFIRMATIONS,
        }
    }
}

/// Template-driven wellness chatbot.
///
/// Generic over the sentiment primitive backing its mood analysis, like
/// [`MoodAnalyzer`] itself.
#[derive(Debug, Clone)]
pub struct WellnessChatbot<M: SentimentModel = SentimentLexicon> {
    mood: MoodAnalyzer<M>,
}

impl WellnessChatbot<SentimentLexicon> {
    pub fn new() -> Self {
        Self {
            mood: MoodAnalyzer::new(),
        }
    }
}

impl Default for WellnessChatbot<SentimentLexicon> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: SentimentModel> WellnessChatbot<M> {
    pub fn with_model(model: M) -> Self {
        Self {
            mood: MoodAnalyzer::with_model(model),
        }
    }

    /// Generates an empathetic reply for a user message.
    ///
    /// `now` drives affirmation time-of-day bucketing and `rng` drives
    /// every uniform template/exercise/affirmation draw.
    pub fn generate_response(
        &self,
        message: &str,
        context: Option<&UserContext>,
        now: DateTime<Utc>,
        rng: &mut impl Rng,
    ) -> ChatbotResponse {
        let analysis = self.mood.analyze_text(message);
        let emotion = primary_emotion(&analysis.emotions);

        tracing::debug!(emotion = emotion.as_str(), "chatbot reply composed");

        ChatbotResponse {
            response: compose_response(emotion, &analysis, context, rng),
            suggestions: assemble_suggestions(emotion, &analysis, rng),
            emotion_detected: emotion,
            sentiment_score: analysis.mood_score,
            recommended_exercise: recommend_exercise(emotion, rng),
            affirmation: select_affirmation(emotion, now, rng),
        }
    }
}

/// Fixed priority order resolving multiple simultaneous labels:
/// `anxious > sad > stressed > positive > neutral`.
fn primary_emotion(emotions: &[Emotion]) -> Emotion {
    for candidate in [Emotion::Anxious, Emotion::Sad, Emotion::Stressed, Emotion::Positive] {
        if emotions.contains(&candidate) {
            return candidate;
        }
    }
    Emotion::Neutral
}

/// Base template plus conditionally appended context and empathy clauses.
/// Clauses are concatenations, never replacements.
fn compose_response(
    emotion: Emotion,
    analysis: &TextAnalysis,
    context: Option<&UserContext>,
    rng: &mut impl Rng,
) -> String {
    let mut response = choose(rng, catalog::response_templates(emotion)).to_string();

    if let Some(context) = context {
        if context.stress_level.unwrap_or(0.0) > 0.7 {
            response.push_str(" I notice your stress levels have been high lately.");
        }
        if context.sleep_hours.unwrap_or(7.0) < 6.0 {
            response.push_str(" Getting more rest might help you feel better.");
        }
        if context.conversation_count.unwrap_or(0) > 5 {
            response.push_str(" I'm glad we can continue our conversation.");
        }
    }

    // The anxiety acknowledgment takes precedence over the depression one.
    if analysis.anxiety_level > 0.6 {
        response.push_str(" Your anxiety is valid, and it's brave of you to acknowledge it.");
    } else if analysis.depression_indicators > 0.6 {
        response.push_str(" I want you to know that what you're feeling matters.");
    }

    response
}

/// Zero to four suggestions in fixed order: exercise, activity,
/// professional help, quick breathing tip.
fn assemble_suggestions(emotion: Emotion, analysis: &TextAnalysis, rng: &mut impl Rng) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();
    let tense = matches!(emotion, Emotion::Anxious | Emotion::Stressed);

    if tense {
        let targeted: Vec<&Exercise> = catalog::MINDFULNESS_EXERCISES
            .iter()
            .filter(|e| e.targets_anxiety_or_stress())
            .collect();
        suggestions.push(Suggestion::Exercise(**choose(rng, &targeted)));
    }

    if matches!(emotion, Emotion::Sad | Emotion::Neutral) {
        suggestions.push(Suggestion::Activity(*choose(rng, catalog::MOOD_BOOSTING_ACTIVITIES)));
    }

    if analysis.depression_indicators > 0.7 || analysis.anxiety_level > 0.8 {
        suggestions.push(Suggestion::ProfessionalHelp(catalog::PROFESSIONAL_HELP_SUGGESTION));
    }

    if tense {
        suggestions.push(Suggestion::QuickTip(catalog::QUICK_BREATHING_TIP));
    }

    suggestions
}

/// Anxious/stressed restrict the bank to anxiety/stress-tagged exercises;
/// everything else draws from the full catalog.
fn recommend_exercise(emotion: Emotion, rng: &mut impl Rng) -> Exercise {
    if matches!(emotion, Emotion::Anxious | Emotion::Stressed) {
        let targeted: Vec<&Exercise> = catalog::MINDFULNESS_EXERCISES
            .iter()
            .filter(|e| e.targets_anxiety_or_stress())
            .collect();
        if targeted.is_empty() {
            return catalog::MINDFULNESS_EXERCISES[0];
        }
        return **choose(rng, &targeted);
    }
    *choose(rng, catalog::MINDFULNESS_EXERCISES)
}

/// Dedicated emotion bank when one exists, else the time-of-day bank.
fn select_affirmation(emotion: Emotion, now: DateTime<Utc>, rng: &mut impl Rng) -> &'static str {
    if let Some(bank) = catalog::emotion_affirmations(emotion) {
        return *choose(rng, bank);
    }
    *choose(rng, TimeOfDay::from_hour(now.hour()).affirmations())
}

/// Daily affirmation from the time-of-day bank, regardless of emotion.
pub fn daily_affirmation(now: DateTime<Utc>, rng: &mut impl Rng) -> &'static str {
    *choose(rng, TimeOfDay::from_hour(now.hour()).affirmations())
}

fn choose<'a, T>(rng: &mut impl Rng, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

// ---------------------------------------------------------------------------
// Emotional pattern analysis over conversation history
// ---------------------------------------------------------------------------

/// One stored conversation turn, supplied back by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversationRecord {
    pub emotion_detected: Option<Emotion>,
    pub sentiment_score: Option<f32>,
}

/// Dominant emotional pattern over a conversation history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionalPattern {
    #[serde(rename = "insufficient_data")]
    InsufficientData,
    Positive,
    Negative,
    Neutral,
    Anxious,
    Sad,
    Stressed,
}

impl From<Emotion> for EmotionalPattern {
    fn from(emotion: Emotion) -> Self {
        match emotion {
            Emotion::Positive => EmotionalPattern::Positive,
            Emotion::Negative => EmotionalPattern::Negative,
            Emotion::Neutral => EmotionalPattern::Neutral,
            Emotion::Anxious => EmotionalPattern::Anxious,
            Emotion::Sad => EmotionalPattern::Sad,
            Emotion::Stressed => EmotionalPattern::Stressed,
        }
    }
}

/// Summary of emotional patterns across a conversation history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmotionalPatternSummary {
    pub pattern: EmotionalPattern,
    /// Mean of the available sentiment scores, rounded to 3 decimals.
    /// Absent when there is too little history to analyze.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_sentiment: Option<f32>,
    pub conversation_count: usize,
    pub insights: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

/// Analyzes emotional patterns across a conversation history. Requires at
/// least 3 entries; fewer reports `insufficient_data`.
pub fn analyze_emotional_patterns(history: &[ConversationRecord]) -> EmotionalPatternSummary {
    if history.len() < 3 {
        return EmotionalPatternSummary {
            pattern: EmotionalPattern::InsufficientData,
            average_sentiment: None,
            conversation_count: history.len(),
            insights: "More conversations needed to identify patterns.".to_string(),
            recommendation: None,
        };
    }

    let emotions: Vec<Emotion> = history.iter().filter_map(|r| r.emotion_detected).collect();
    let scores: Vec<f32> = history.iter().filter_map(|r| r.sentiment_score).collect();

    let dominant = most_frequent_emotion(&emotions).unwrap_or(Emotion::Neutral);
    let average = if scores.is_empty() {
        0.5
    } else {
        scores.iter().sum::<f32>() / scores.len() as f32
    };

    EmotionalPatternSummary {
        pattern: dominant.into(),
        average_sentiment: Some(round3(average)),
        conversation_count: history.len(),
        insights: pattern_insights(dominant, average, history.len()),
        recommendation: Some(pattern_recommendation(dominant, average)),
    }
}

/// Mode of the emotion labels. Ties break to the emotion whose count
/// reached the maximum first in encounter order; counting is over an
/// ordered list, never hash-map iteration, so the result is deterministic.
fn most_frequent_emotion(emotions: &[Emotion]) -> Option<Emotion> {
    let mut counts: Vec<(Emotion, usize)> = Vec::new();
    for emotion in emotions {
        match counts.iter_mut().find(|(e, _)| e == emotion) {
            Some((_, n)) => *n += 1,
            None => counts.push((*emotion, 1)),
        }
    }
    let mut best: Option<(Emotion, usize)> = None;
    for (emotion, count) in counts {
        match best {
            Some((_, max)) if count <= max => {}
            _ => best = Some((emotion, count)),
        }
    }
    best.map(|(emotion, _)| emotion)
}

fn pattern_insights(emotion: Emotion, average: f32, count: usize) -> String {
    let insight = if emotion == Emotion::Anxious && count >= 5 {
        "You've been experiencing anxiety frequently. Consider stress management techniques."
    } else if emotion == Emotion::Sad && average < 0.4 {
        "Your mood has been consistently low. It might help to talk to someone you trust."
    } else if emotion == Emotion::Stressed && count >= 5 {
        "Stress seems to be a recurring theme. Let's work on coping strategies together."
    } else if emotion == Emotion::Positive && average > 0.7 {
        "You've been maintaining a positive outlook! Keep up the great work."
    } else {
        "Your emotional state varies. This is completely normal."
    };
    insight.to_string()
}

fn pattern_recommendation(emotion: Emotion, average: f32) -> String {
    let recommendation = if matches!(emotion, Emotion::Anxious | Emotion::Stressed) || average < 0.4 {
        "Consider establishing a daily mindfulness routine and ensure you're getting adequate rest."
    } else if emotion == Emotion::Sad {
        "Engage in activities you enjoy and maintain social connections. Professional support can also be beneficial."
    } else {
        "Continue your current wellness practices and stay mindful of your emotional health."
    };
    recommendation.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_order_resolves_simultaneous_labels() {
        assert_eq!(
            primary_emotion(&[Emotion::Negative, Emotion::Stressed, Emotion::Anxious]),
            Emotion::Anxious
        );
        assert_eq!(primary_emotion(&[Emotion::Negative, Emotion::Sad, Emotion::Stressed]), Emotion::Sad);
        assert_eq!(primary_emotion(&[Emotion::Negative]), Emotion::Neutral);
        assert_eq!(primary_emotion(&[Emotion::Positive]), Emotion::Positive);
    }

    #[test]
    fn mode_tie_breaks_to_first_seen() {
        let emotions = [Emotion::Sad, Emotion::Anxious, Emotion::Anxious, Emotion::Sad];
        assert_eq!(most_frequent_emotion(&emotions), Some(Emotion::Sad));
    }

    #[test]
    fn time_of_day_buckets() {
        assert_eq!(TimeOfDay::from_hour(0), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(11), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(12), TimeOfDay::General);
        assert_eq!(TimeOfDay::from_hour(17), TimeOfDay::General);
        assert_eq!(TimeOfDay::from_hour(18), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(23), TimeOfDay::Evening);
    }
}
