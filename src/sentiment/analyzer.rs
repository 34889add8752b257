//! Lexicon-based polarity scoring.

use crate::sentiment::lexicon::{ReviewLexicon, SentimentLexicon};
use tracing::trace;

/// Factor applied to a sentiment word that follows a negation.
const NEGATION_FACTOR: f64 = -0.5;

/// Scores text polarity from a word lexicon.
///
/// Each sentiment word contributes its lexicon polarity, scaled by an
/// intensifier directly before it and flipped (at half strength) when a
/// negation appeared within the last few tokens. The text's polarity is the
/// mean of those contributions, or 0.0 when there are none.
pub struct SentimentAnalyzer {
    lexicon: Box<dyn SentimentLexicon>,
    negation_window: usize,
}

impl SentimentAnalyzer {
    /// Creates an analyzer with the built-in review lexicon.
    pub fn new() -> Self {
        Self { lexicon: Box::new(ReviewLexicon::new()), negation_window: 3 }
    }

    /// Replaces the lexicon.
    pub fn with_lexicon(mut self, lexicon: impl SentimentLexicon + 'static) -> Self {
        self.lexicon = Box::new(lexicon);
        self
    }

    /// Sets how many tokens a negation reaches forward.
    pub fn with_negation_window(mut self, window: usize) -> Self {
        self.negation_window = window;
        self
    }

    /// Polarity of a single text in [-1.0, 1.0].
    pub fn polarity(&self, text: &str) -> f64 {
        let mut contributions = Vec::new();
        let mut intensity = 1.0;
        let mut negation_left = 0usize;

        for token in tokenize(text) {
            if self.lexicon.is_negation(&token) {
                negation_left = self.negation_window;
                continue;
            }

            if let Some(factor) = self.lexicon.intensity(&token) {
                intensity *= factor;
                continue;
            }

            if let Some(base) = self.lexicon.polarity(&token) {
                let mut score = base * intensity;
                if negation_left > 0 {
                    score *= NEGATION_FACTOR;
                    negation_left = 0;
                }
                trace!("{} -> {:.3}", token, score);
                contributions.push(score.clamp(-1.0, 1.0));
            } else {
                negation_left = negation_left.saturating_sub(1);
            }

            // Intensifiers only reach the very next word
            intensity = 1.0;
        }

        if contributions.is_empty() {
            return 0.0;
        }

        let mean = contributions.iter().sum::<f64>() / contributions.len() as f64;
        mean.clamp(-1.0, 1.0)
    }

    /// Scores every review, preserving order and length.
    pub fn score(&self, reviews: &[String]) -> Vec<f64> {
        reviews.iter().map(|review| self.polarity(review)).collect()
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Splits text into lowercase word tokens, keeping inner apostrophes.
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '\u{2019}'))
        .map(|word| word.trim_matches(|c: char| c == '\'' || c == '\u{2019}'))
        .filter(|word| !word.is_empty())
        .map(|word| word.replace('\u{2019}', "'").to_lowercase())
}
