//! Integration test: Sentiment & Mood Scorer — verifies the neutral
//! default, score bounds under randomized input, keyword density
//! behavior, and the emotion labeling of a distress message.
//!
//! ## Scenarios
//! 1. Empty and whitespace-only input return the exact neutral default.
//! 2. Bounded scores hold for arbitrary generated text.
//! 3. Adding anxiety vocabulary at fixed word count never lowers the score.
//! 4. A distress message saturates the anxiety score and labels `anxious`.
//! 5. Positive text scores a positive label and an upbeat summary.

use mindtrack_core::{Emotion, MoodAnalyzer, TextAnalysis};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ===========================================================================
// Test 1: Empty input — exact neutral default
// ===========================================================================

#[test]
fn empty_input_returns_the_neutral_default() {
    let analyzer = MoodAnalyzer::new();
    for text in ["", "   ", "\n\t  "] {
        let analysis = analyzer.analyze_text(text);
        assert_eq!(analysis, TextAnalysis::neutral(), "input: {text:?}");
        assert_eq!(analysis.mood_score, 0.5);
        assert_eq!(analysis.anxiety_level, 0.0);
        assert_eq!(analysis.emotions, vec![Emotion::Neutral]);
    }
}

// ===========================================================================
// Test 2: Bounded scores for arbitrary text
// ===========================================================================

#[test]
fn scores_stay_bounded_for_randomized_text() {
    let pool = [
        "anxious", "scared", "happy", "wonderful", "tired", "hopeless", "meeting", "tuesday",
        "stress", "pressure", "calm", "lonely", "walk", "coffee", "overwhelmed", "fine",
    ];
    let analyzer = MoodAnalyzer::new();
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..200 {
        let length = rng.gen_range(1..40);
        let words: Vec<&str> = (0..length).map(|_| pool[rng.gen_range(0..pool.len())]).collect();
        let text = words.join(" ");
        let analysis = analyzer.analyze_text(&text);

        for (name, value) in [
            ("mood_score", analysis.mood_score),
            ("anxiety_level", analysis.anxiety_level),
            ("depression_indicators", analysis.depression_indicators),
            ("stress_level", analysis.stress_level),
            ("sentiment_subjectivity", analysis.sentiment_subjectivity),
        ] {
            assert!((0.0..=1.0).contains(&value), "{name} out of range for {text:?}: {value}");
        }
        assert!((-1.0..=1.0).contains(&analysis.sentiment_polarity));
        assert!(!analysis.emotions.is_empty());
        assert!(!analysis.summary.is_empty());
    }
}

// ===========================================================================
// Test 3: Keyword density monotonicity at fixed word count
// ===========================================================================

#[test]
fn more_anxiety_vocabulary_never_lowers_the_anxiety_score() {
    let anxiety_words = ["worried", "anxious", "nervous", "panic", "fear", "scared", "tense"];
    let analyzer = MoodAnalyzer::new();
    let mut previous = 0.0;

    for k in 0..=anxiety_words.len() {
        // Fixed word count of 20: k anxiety words, the rest filler.
        let mut words: Vec<&str> = anxiety_words[..k].to_vec();
        words.resize(20, "today");
        let analysis = analyzer.analyze_text(&words.join(" "));

        assert!(
            analysis.anxiety_level >= previous,
            "anxiety dropped from {previous} to {} at k={k}",
            analysis.anxiety_level
        );
        previous = analysis.anxiety_level;
    }
}

// ===========================================================================
// Test 4: Distress message — saturated anxiety, `anxious` label
// ===========================================================================

#[test]
fn distress_message_saturates_anxiety_and_labels_anxious() {
    let analyzer = MoodAnalyzer::new();
    let analysis =
        analyzer.analyze_text("I feel so anxious and scared about everything, I can't stop worrying");

    // Two distinct anxiety-lexicon words over 12 words: 2 / 1.2, capped at 1.
    assert_eq!(analysis.anxiety_level, 1.0);
    assert!(analysis.emotions.contains(&Emotion::Anxious));
    assert!(analysis.mood_score < 0.4, "mood: {}", analysis.mood_score);
    assert!(analysis.summary.contains("Elevated anxiety levels detected."));
}

// ===========================================================================
// Test 5: Positive text — positive label and upbeat summary
// ===========================================================================

#[test]
fn positive_text_labels_positive() {
    let analyzer = MoodAnalyzer::new();
    let analysis = analyzer.analyze_text("Today was wonderful, I feel happy and grateful and calm");

    assert!(analysis.emotions.contains(&Emotion::Positive));
    assert_eq!(analysis.anxiety_level, 0.0);
    assert!(analysis.mood_score > 0.7, "mood: {}", analysis.mood_score);
    assert!(analysis.summary.contains("positive and healthy"));
}
