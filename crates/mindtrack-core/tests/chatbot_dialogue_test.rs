//! Integration test: Wellness Chatbot Dialogue Engine — verifies reply
//! composition, suggestion assembly, determinism under injected clock and
//! RNG, wire shape of suggestions, and emotional pattern analysis.
//!
//! ## Scenarios
//! 1. Every reply is non-empty with a known emotion and 0–4 suggestions.
//! 2. An anxious message gets exercise + quick tip and anxiety-targeted content.
//! 3. A low-mood message gets the depression acknowledgment and professional help.
//! 4. Context clauses are appended, never replacing the base template.
//! 5. Same seed + same clock reproduce the response exactly.
//! 6. Suggestions serialize as `{"type": ..., "content": ...}`.
//! 7. Pattern analysis needs 3 entries; mode and tie-break are deterministic.

use chrono::{TimeZone, Utc};
use mindtrack_core::{
    analyze_emotional_patterns, daily_affirmation, ConversationRecord, Emotion, EmotionalPattern,
    Suggestion, UserContext, WellnessChatbot,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn morning() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 7, 9, 30, 0).unwrap()
}

fn record(emotion: Emotion, score: f32) -> ConversationRecord {
    ConversationRecord {
        emotion_detected: Some(emotion),
        sentiment_score: Some(score),
    }
}

// ===========================================================================
// Test 1: Reply invariants over assorted messages
// ===========================================================================

#[test]
fn replies_are_well_formed_for_assorted_messages() {
    let chatbot = WellnessChatbot::new();
    let known = [
        Emotion::Positive,
        Emotion::Negative,
        Emotion::Neutral,
        Emotion::Anxious,
        Emotion::Sad,
        Emotion::Stressed,
    ];
    let messages = [
        "hello there",
        "I am so anxious about tomorrow",
        "work has been pure stress and pressure lately",
        "feeling sad and lonely tonight",
        "today was wonderful and I feel happy",
        "",
    ];

    let mut rng = StdRng::seed_from_u64(1);
    for message in messages {
        let reply = chatbot.generate_response(message, None, morning(), &mut rng);
        assert!(!reply.response.is_empty(), "empty reply for {message:?}");
        assert!(known.contains(&reply.emotion_detected));
        assert!(reply.suggestions.len() <= 4, "too many suggestions for {message:?}");
        assert!((0.0..=1.0).contains(&reply.sentiment_score));
        assert!(!reply.affirmation.is_empty());
        assert!(!reply.recommended_exercise.name.is_empty());
    }
}

// ===========================================================================
// Test 2: Anxious message — targeted exercise and quick tip
// ===========================================================================

#[test]
fn anxious_message_gets_targeted_exercise_and_quick_tip() {
    let chatbot = WellnessChatbot::new();
    let mut rng = StdRng::seed_from_u64(3);
    let reply = chatbot.generate_response(
        "I'm so anxious and worried, full of panic and fear",
        None,
        morning(),
        &mut rng,
    );

    assert_eq!(reply.emotion_detected, Emotion::Anxious);
    assert!(matches!(reply.suggestions.first(), Some(Suggestion::Exercise(_))));
    assert!(matches!(reply.suggestions.last(), Some(Suggestion::QuickTip(_))));
    // Saturated anxiety also brings the professional-help suggestion.
    assert!(reply
        .suggestions
        .iter()
        .any(|s| matches!(s, Suggestion::ProfessionalHelp(_))));

    let benefits = reply.recommended_exercise.benefits.to_lowercase();
    assert!(benefits.contains("anxiety") || benefits.contains("stress"));
    assert!(reply.response.contains("Your anxiety is valid"));
}

// ===========================================================================
// Test 3: Low-mood message — depression acknowledgment, professional help
// ===========================================================================

#[test]
fn low_mood_message_gets_depression_acknowledgment() {
    let chatbot = WellnessChatbot::new();
    let mut rng = StdRng::seed_from_u64(5);
    let reply = chatbot.generate_response(
        "I feel sad depressed hopeless lonely",
        None,
        morning(),
        &mut rng,
    );

    assert_eq!(reply.emotion_detected, Emotion::Sad);
    assert!(reply.response.contains("what you're feeling matters"));
    assert!(matches!(reply.suggestions.first(), Some(Suggestion::Activity(_))));
    assert!(reply
        .suggestions
        .iter()
        .any(|s| matches!(s, Suggestion::ProfessionalHelp(_))));
}

// ===========================================================================
// Test 4: Context clauses append to the base template
// ===========================================================================

#[test]
fn context_clauses_are_appended_to_the_base_template() {
    let chatbot = WellnessChatbot::new();
    let context = UserContext {
        stress_level: Some(0.9),
        sleep_hours: Some(4.0),
        conversation_count: Some(8),
    };

    let mut seeded = StdRng::seed_from_u64(9);
    let bare = chatbot.generate_response("hello there", None, morning(), &mut seeded);
    let mut seeded = StdRng::seed_from_u64(9);
    let contextual = chatbot.generate_response("hello there", Some(&context), morning(), &mut seeded);

    assert!(contextual.response.starts_with(&bare.response));
    assert!(contextual.response.contains("stress levels have been high"));
    assert!(contextual.response.contains("Getting more rest"));
    assert!(contextual.response.contains("continue our conversation"));
}

// ===========================================================================
// Test 5: Determinism under injected clock and RNG
// ===========================================================================

#[test]
fn same_seed_and_clock_reproduce_the_response() {
    let chatbot = WellnessChatbot::new();
    let context = UserContext {
        stress_level: Some(0.8),
        ..UserContext::default()
    };

    let mut first_rng = StdRng::seed_from_u64(42);
    let first = chatbot.generate_response("so much stress and pressure", Some(&context), morning(), &mut first_rng);
    let mut second_rng = StdRng::seed_from_u64(42);
    let second = chatbot.generate_response("so much stress and pressure", Some(&context), morning(), &mut second_rng);

    assert_eq!(first, second);
}

#[test]
fn daily_affirmation_is_always_available() {
    let mut rng = StdRng::seed_from_u64(13);
    for hour in 0..24 {
        let now = Utc.with_ymd_and_hms(2026, 8, 7, hour, 0, 0).unwrap();
        assert!(!daily_affirmation(now, &mut rng).is_empty());
    }
}

// ===========================================================================
// Test 6: Suggestion wire shape
// ===========================================================================

#[test]
fn suggestions_serialize_with_type_and_content() {
    let chatbot = WellnessChatbot::new();
    let mut rng = StdRng::seed_from_u64(17);
    let reply = chatbot.generate_response(
        "I'm so anxious and worried, full of panic and fear",
        None,
        morning(),
        &mut rng,
    );

    let value = serde_json::to_value(&reply.suggestions).unwrap();
    let entries = value.as_array().unwrap();
    assert!(!entries.is_empty());
    for entry in entries {
        assert!(entry.get("type").is_some(), "missing type: {entry}");
        assert!(entry.get("content").is_some(), "missing content: {entry}");
    }
    assert_eq!(entries[0]["type"], "exercise");
    assert!(entries[0]["content"]["name"].is_string());
}

// ===========================================================================
// Test 7: Emotional pattern analysis
// ===========================================================================

#[test]
fn two_entries_are_insufficient_for_pattern_analysis() {
    let history = [record(Emotion::Sad, 0.3), record(Emotion::Sad, 0.2)];
    let summary = analyze_emotional_patterns(&history);

    assert_eq!(summary.pattern, EmotionalPattern::InsufficientData);
    assert_eq!(summary.conversation_count, 2);
    assert!(summary.average_sentiment.is_none());
    assert!(summary.recommendation.is_none());
}

#[test]
fn pattern_is_the_most_frequent_emotion() {
    let history = [
        record(Emotion::Anxious, 0.2),
        record(Emotion::Neutral, 0.5),
        record(Emotion::Anxious, 0.3),
        record(Emotion::Positive, 0.8),
        record(Emotion::Anxious, 0.25),
    ];
    let summary = analyze_emotional_patterns(&history);

    assert_eq!(summary.pattern, EmotionalPattern::Anxious);
    assert_eq!(summary.conversation_count, 5);
    assert_eq!(summary.average_sentiment, Some(0.41));
    assert!(summary.insights.contains("anxiety frequently"));
    assert!(summary
        .recommendation
        .unwrap()
        .contains("daily mindfulness routine"));
}

#[test]
fn frequency_ties_break_to_the_first_seen_emotion() {
    let history = [
        record(Emotion::Sad, 0.3),
        record(Emotion::Stressed, 0.4),
        record(Emotion::Stressed, 0.4),
        record(Emotion::Sad, 0.3),
    ];
    let summary = analyze_emotional_patterns(&history);
    assert_eq!(summary.pattern, EmotionalPattern::Sad);
}

#[test]
fn missing_sentiment_scores_default_the_average() {
    let history = [
        ConversationRecord {
            emotion_detected: Some(Emotion::Neutral),
            sentiment_score: None,
        },
        ConversationRecord {
            emotion_detected: Some(Emotion::Neutral),
            sentiment_score: None,
        },
        ConversationRecord {
            emotion_detected: Some(Emotion::Neutral),
            sentiment_score: None,
        },
    ];
    let summary = analyze_emotional_patterns(&history);

    assert_eq!(summary.pattern, EmotionalPattern::Neutral);
    assert_eq!(summary.average_sentiment, Some(0.5));
    assert!(summary.insights.contains("completely normal"));
}
