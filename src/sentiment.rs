//! Compound polarity scoring and sentiment classification.
//!
//! [`VaderAnalyzer`] scores text with the VADER rule-based model and its full
//! English lexicon: word valences adjusted for negation, intensity boosters,
//! capitalization, "but" clauses and punctuation emphasis, summed and squashed
//! into a compound score in `[-1, 1]`. It is tuned for English only.
//!
//! [`classify`] maps a compound score to a [`Sentiment`] with fixed, symmetric,
//! inclusive thresholds.

use crate::models::Sentiment;
use vader_sentiment::SentimentIntensityAnalyzer;

/// `compound >= POSITIVE_THRESHOLD` is positive.
pub const POSITIVE_THRESHOLD: f64 = 0.3;
/// `compound <= NEGATIVE_THRESHOLD` is negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.3;

/// Polarity proportions plus the normalized compound score.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PolarityScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

/// A text polarity scorer.
pub trait PolarityScorer: Send + Sync {
    fn polarity(&self, text: &str) -> PolarityScores;
}

/// Map a compound score to a sentiment label.
pub fn classify(compound: f64) -> Sentiment {
    if compound >= POSITIVE_THRESHOLD {
        Sentiment::Positive
    } else if compound <= NEGATIVE_THRESHOLD {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

/// Classify the sentiment of `text` with the given scorer.
pub fn analyze_sentiment(scorer: &dyn PolarityScorer, text: &str) -> Sentiment {
    classify(scorer.polarity(text).compound)
}

/// VADER-backed [`PolarityScorer`] for English news text.
pub struct VaderAnalyzer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderAnalyzer {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityScorer for VaderAnalyzer {
    fn polarity(&self, text: &str) -> PolarityScores {
        if text.trim().is_empty() {
            return PolarityScores::default();
        }
        let scores = self.analyzer.polarity_scores(text);
        let score = |key: &str| scores.get(key).copied().unwrap_or(0.0);
        PolarityScores {
            neg: score("neg"),
            neu: score("neu"),
            pos: score("pos"),
            compound: score("compound"),
        }
    }
}
