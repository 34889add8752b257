//! Sentiment lexicons.
//!
//! A lexicon maps words to a polarity in [-1.0, 1.0], plus the intensifiers
//! and negations the analyzer uses to adjust those polarities.

use std::collections::{HashMap, HashSet};

/// A source of word polarities.
pub trait SentimentLexicon: Send + Sync {
    /// Polarity of a lowercase word, if it carries sentiment.
    fn polarity(&self, word: &str) -> Option<f64>;

    /// Multiplier applied to the next sentiment word ("very" -> 1.3).
    fn intensity(&self, word: &str) -> Option<f64>;

    /// Whether the word negates the sentiment that follows it.
    fn is_negation(&self, word: &str) -> bool;
}

// Scores follow the usual product-review sense of each word
const POSITIVE: &[(&str, f64)] = &[
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("beautiful", 0.85),
    ("best", 1.0),
    ("brilliant", 0.9),
    ("comfortable", 0.4),
    ("convenient", 0.5),
    ("cool", 0.35),
    ("decent", 0.17),
    ("durable", 0.5),
    ("easy", 0.43),
    ("effective", 0.6),
    ("excellent", 1.0),
    ("fantastic", 0.4),
    ("fast", 0.2),
    ("fine", 0.42),
    ("fun", 0.3),
    ("glad", 0.5),
    ("good", 0.7),
    ("great", 0.8),
    ("happy", 0.8),
    ("helpful", 0.5),
    ("impressed", 0.7),
    ("impressive", 1.0),
    ("incredible", 0.9),
    ("like", 0.2),
    ("love", 0.5),
    ("loved", 0.7),
    ("lovely", 0.5),
    ("nice", 0.6),
    ("ok", 0.5),
    ("okay", 0.5),
    ("outstanding", 0.5),
    ("perfect", 1.0),
    ("perfectly", 1.0),
    ("pleased", 0.5),
    ("quality", 0.3),
    ("recommend", 0.5),
    ("recommended", 0.5),
    ("reliable", 0.5),
    ("satisfied", 0.5),
    ("smooth", 0.4),
    ("solid", 0.4),
    ("sturdy", 0.5),
    ("superb", 1.0),
    ("useful", 0.3),
    ("well", 0.3),
    ("wonderful", 1.0),
    ("worth", 0.3),
];

const NEGATIVE: &[(&str, f64)] = &[
    ("annoying", -0.8),
    ("awful", -1.0),
    ("bad", -0.7),
    ("broke", -0.6),
    ("broken", -0.4),
    ("cheaply", -0.4),
    ("defective", -0.6),
    ("difficult", -0.5),
    ("disappointed", -0.75),
    ("disappointing", -0.6),
    ("flimsy", -0.5),
    ("garbage", -0.8),
    ("hate", -0.8),
    ("hated", -0.9),
    ("horrible", -1.0),
    ("junk", -0.6),
    ("mediocre", -0.4),
    ("poor", -0.4),
    ("poorly", -0.4),
    ("refund", -0.2),
    ("return", -0.2),
    ("returned", -0.3),
    ("sad", -0.5),
    ("slow", -0.3),
    ("terrible", -1.0),
    ("ugly", -0.7),
    ("unhappy", -0.6),
    ("useless", -0.5),
    ("waste", -0.6),
    ("weak", -0.4),
    ("worse", -0.4),
    ("worst", -1.0),
    ("worthless", -0.8),
    ("wrong", -0.5),
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.5),
    ("extremely", 1.5),
    ("highly", 1.3),
    ("incredibly", 1.5),
    ("quite", 1.1),
    ("rather", 0.9),
    ("really", 1.3),
    ("slightly", 0.6),
    ("so", 1.3),
    ("somewhat", 0.7),
    ("super", 1.4),
    ("too", 1.2),
    ("totally", 1.4),
    ("very", 1.3),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "none", "nothing", "nobody", "without", "cannot",
    "dont", "doesnt", "didnt", "isnt", "wasnt", "wont", "cant", "couldnt", "wouldnt",
];

/// General-purpose English lexicon tuned for product reviews.
#[derive(Debug, Clone)]
pub struct ReviewLexicon {
    words: HashMap<String, f64>,
    intensifiers: HashMap<String, f64>,
    negations: HashSet<String>,
}

impl ReviewLexicon {
    /// Creates the built-in lexicon.
    pub fn new() -> Self {
        let words = POSITIVE
            .iter()
            .chain(NEGATIVE)
            .map(|(word, score)| (word.to_string(), *score))
            .collect();

        let intensifiers =
            INTENSIFIERS.iter().map(|(word, factor)| (word.to_string(), *factor)).collect();

        let negations = NEGATIONS.iter().map(|w| w.to_string()).collect();

        Self { words, intensifiers, negations }
    }

    /// Adds or replaces a word's polarity (clamped to [-1, 1]).
    pub fn with_word(mut self, word: &str, polarity: f64) -> Self {
        self.words.insert(word.to_lowercase(), polarity.clamp(-1.0, 1.0));
        self
    }

    /// Number of sentiment-bearing words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for ReviewLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentLexicon for ReviewLexicon {
    fn polarity(&self, word: &str) -> Option<f64> {
        self.words.get(word).copied()
    }

    fn intensity(&self, word: &str) -> Option<f64> {
        self.intensifiers.get(word).copied()
    }

    fn is_negation(&self, word: &str) -> bool {
        // Covers every "*n't" contraction without listing them
        self.negations.contains(word) || word.ends_with("n't")
    }
}
