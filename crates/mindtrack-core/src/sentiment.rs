//! Lexicon-based sentiment primitive.
//!
//! `SentimentModel` is the seam between the mood scorer and whatever
//! produces raw sentiment: the bundled `SentimentLexicon` scores text from
//! signed word weights, and callers with a heavier model (or a remote one)
//! can implement the trait and inject it via `MoodAnalyzer::with_model`.
//! Scores are deterministic per call.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Scalar sentiment for one text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sentiment {
    /// Valence in `[-1, 1]`; negative = unfavorable, positive = favorable.
    pub polarity: f32,
    /// Opinion-vs-fact content in `[0, 1]`.
    pub subjectivity: f32,
}

impl Sentiment {
    pub fn new(polarity: f32, subjectivity: f32) -> Self {
        Self {
            polarity: polarity.clamp(-1.0, 1.0),
            subjectivity: subjectivity.clamp(0.0, 1.0),
        }
    }

    /// Sentiment of text with no scored words.
    pub fn neutral() -> Self {
        Self {
            polarity: 0.0,
            subjectivity: 0.0,
        }
    }
}

impl Default for Sentiment {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Produces `(polarity, subjectivity)` for a text. Treated as an opaque,
/// deterministic-per-call black box by the rest of the engine.
pub trait SentimentModel {
    fn score(&self, text: &str) -> Sentiment;
}

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z']+").expect("static word pattern"));

/// Lowercased word tokens; punctuation is stripped, apostrophes kept
/// (`can't` stays one token).
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD_RE.find_iter(&lower).map(|m| m.as_str().to_string()).collect()
}

/// Whitespace-delimited word count, the denominator for keyword density.
pub(crate) fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Word-weight sentiment lexicon.
///
/// Maps words to signed weights in `[-1, 1]`. Polarity is the mean weight
/// over matched tokens; subjectivity is the fraction of tokens carrying
/// any weight at all.
#[derive(Debug, Clone)]
pub struct SentimentLexicon {
    weights: HashMap<&'static str, f32>,
}

impl SentimentLexicon {
    /// Empty lexicon; every text scores neutral until words are added.
    pub fn new() -> Self {
        Self {
            weights: HashMap::new(),
        }
    }

    /// Adds or replaces a word weight, clamped to `[-1, 1]`.
    pub fn add_word(&mut self, word: &'static str, weight: f32) {
        self.weights.insert(word, weight.clamp(-1.0, 1.0));
    }

    fn add_all(&mut self, words: &[&'static str], weight: f32) {
        for word in words {
            self.add_word(word, weight);
        }
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl Default for SentimentLexicon {
    /// Default lexicon: graded tiers of common emotional vocabulary,
    /// weighted toward the words that show up in journal and chat text.
    fn default() -> Self {
        let mut lexicon = Self::new();

        // Strongly positive
        lexicon.add_all(
            &[
                "amazing", "wonderful", "excellent", "fantastic", "brilliant", "thrilled",
                "excited", "joyful", "grateful", "loved", "delighted", "ecstatic",
            ],
            0.9,
        );
        // Moderately positive
        lexicon.add_all(
            &[
                "good", "great", "happy", "glad", "pleased", "proud", "calm", "peaceful",
                "relaxed", "hopeful", "confident", "energized", "motivated", "refreshed",
                "better", "enjoyed", "fun", "nice",
            ],
            0.6,
        );
        // Mildly positive
        lexicon.add_all(
            &["okay", "fine", "decent", "alright", "stable", "steady", "improving", "rested"],
            0.3,
        );
        // Strongly negative
        lexicon.add_all(
            &[
                "terrible", "awful", "horrible", "hopeless", "worthless", "devastated",
                "miserable", "unbearable", "panicked", "desperate", "dreadful",
            ],
            -0.9,
        );
        // Moderately negative
        lexicon.add_all(
            &[
                "sad", "depressed", "anxious", "worried", "scared", "afraid", "angry",
                "upset", "lonely", "exhausted", "stressed", "overwhelmed", "frustrated",
                "empty", "numb", "tired", "nervous", "tense", "struggling", "hurt",
            ],
            -0.6,
        );
        // Mildly negative
        lexicon.add_all(
            &[
                "uneasy", "restless", "worrying", "difficult", "hard", "hectic", "drained",
                "low", "down", "bothered", "unsure", "bad",
            ],
            -0.3,
        );

        lexicon
    }
}

impl SentimentModel for SentimentLexicon {
    fn score(&self, text: &str) -> Sentiment {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return Sentiment::neutral();
        }

        let mut matched = 0usize;
        let mut sum = 0.0f32;
        for token in &tokens {
            if let Some(weight) = self.weights.get(token.as_str()) {
                matched += 1;
                sum += weight;
            }
        }
        if matched == 0 {
            return Sentiment::neutral();
        }

        let polarity = sum / matched as f32;
        let subjectivity = matched as f32 / tokens.len() as f32;
        Sentiment::new(polarity, subjectivity)
    }
}
