// src/analysis/lexicon.rs
use std::collections::HashMap;
use std::sync::LazyLock;
use regex::Regex;

use super::sentiment::SentimentClassifier;

static TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w']+|!").unwrap());

// Word polarities, mostly adjectives plus a handful of strong verbs
const POLARITIES: &[(&str, f64)] = &[
    // positive
    ("love", 0.5),
    ("loved", 0.7),
    ("lovely", 0.5),
    ("good", 0.7),
    ("great", 0.8),
    ("nice", 0.6),
    ("best", 1.0),
    ("better", 0.5),
    ("excellent", 1.0),
    ("awesome", 1.0),
    ("amazing", 0.6),
    ("wonderful", 1.0),
    ("fantastic", 0.4),
    ("brilliant", 0.9),
    ("perfect", 1.0),
    ("beautiful", 0.85),
    ("happy", 0.8),
    ("glad", 0.5),
    ("fun", 0.3),
    ("funny", 0.25),
    ("cool", 0.35),
    ("superb", 1.0),
    ("outstanding", 0.5),
    ("incredible", 0.9),
    ("impressive", 1.0),
    ("enjoyable", 0.4),
    ("delightful", 1.0),
    ("pleasant", 0.73),
    ("pleased", 0.5),
    ("satisfied", 0.5),
    ("helpful", 0.5),
    ("useful", 0.3),
    ("easy", 0.43),
    ("fast", 0.2),
    ("smart", 0.21),
    ("clever", 0.5),
    ("kind", 0.6),
    ("friendly", 0.38),
    ("positive", 0.23),
    ("fine", 0.42),
    ("favorite", 0.5),
    ("exciting", 0.3),
    ("excited", 0.38),
    ("thrilled", 0.6),
    ("grateful", 0.4),
    ("thankful", 0.4),
    ("recommended", 0.5),
    ("well", 0.2),
    ("right", 0.29),
    ("correct", 0.3),
    ("fresh", 0.3),
    ("clean", 0.37),
    ("elegant", 0.55),
    ("gorgeous", 0.7),
    ("stunning", 0.5),
    ("magnificent", 1.0),
    ("marvelous", 1.0),
    ("terrific", 1.0),
    ("joyful", 0.6),
    ("cheerful", 0.6),
    ("calm", 0.3),
    ("safe", 0.5),
    ("free", 0.4),
    ("successful", 0.75),
    ("popular", 0.6),
    ("interesting", 0.5),
    ("wow", 0.1),
    // negative
    ("hate", -0.8),
    ("hated", -0.9),
    ("bad", -0.7),
    ("worse", -0.4),
    ("worst", -1.0),
    ("terrible", -1.0),
    ("horrible", -1.0),
    ("awful", -1.0),
    ("poor", -0.4),
    ("sad", -0.5),
    ("unhappy", -0.6),
    ("angry", -0.5),
    ("annoying", -0.8),
    ("annoyed", -0.5),
    ("boring", -1.0),
    ("bored", -0.5),
    ("disappointing", -0.6),
    ("disappointed", -0.75),
    ("ugly", -0.7),
    ("stupid", -0.8),
    ("dumb", -0.38),
    ("useless", -0.5),
    ("broken", -0.4),
    ("slow", -0.3),
    ("difficult", -0.5),
    ("hard", -0.29),
    ("wrong", -0.5),
    ("painful", -0.7),
    ("sick", -0.71),
    ("tired", -0.4),
    ("lonely", -0.4),
    ("miserable", -1.0),
    ("disgusting", -1.0),
    ("pathetic", -1.0),
    ("nasty", -1.0),
    ("dreadful", -1.0),
    ("frustrating", -0.4),
    ("frustrated", -0.7),
    ("confusing", -0.3),
    ("confused", -0.4),
    ("scary", -0.5),
    ("afraid", -0.6),
    ("worried", -0.5),
    ("negative", -0.3),
    ("dirty", -0.6),
    ("expensive", -0.5),
    ("failed", -0.5),
    ("dead", -0.2),
    ("dangerous", -0.6),
    ("lame", -0.5),
    ("mediocre", -0.4),
    ("unfortunate", -0.5),
    ("ridiculous", -0.33),
    ("rude", -0.3),
    ("cruel", -1.0),
    ("evil", -1.0),
];

// Multipliers applied to the word that follows
const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.2),
    ("extremely", 1.5),
    ("incredibly", 1.4),
    ("so", 1.2),
    ("too", 1.2),
    ("super", 1.3),
    ("totally", 1.3),
    ("absolutely", 1.4),
    ("completely", 1.3),
    ("highly", 1.3),
    ("quite", 1.1),
    ("pretty", 1.1),
    ("somewhat", 0.8),
    ("slightly", 0.7),
    ("barely", 0.6),
    ("little", 0.7),
];

const NEGATIONS: &[&str] = &["not", "no", "never", "nothing", "nobody", "neither", "nor", "cannot"];

const NEGATION_FACTOR: f64 = -0.5;
const EXCLAMATION_FACTOR: f64 = 1.25;

/// Lexicon-based polarity scorer.
///
/// Each lexicon hit becomes an assessment. Intensifiers right before a word scale it, a
/// negation within the last few tokens flips and damps it, and `!` boosts the latest
/// assessment. Polarity is the mean of the assessments.
#[derive(Debug, Clone)]
pub struct LexiconClassifier {
    polarities: HashMap<String, f64>,
    intensifiers: HashMap<String, f64>,
    negation_window: usize,
}

impl LexiconClassifier {
    pub fn new() -> Self {
        Self {
            polarities: POLARITIES.iter()
                .map(|(word, score)| (word.to_string(), *score))
                .collect(),
            intensifiers: INTENSIFIERS.iter()
                .map(|(word, factor)| (word.to_string(), *factor))
                .collect(),
            negation_window: 3,
        }
    }

    /// Add or override lexicon words. Scores are clamped to [-1, 1].
    pub fn with_extra_words(mut self, words: &HashMap<String, f64>) -> Self {
        for (word, score) in words {
            self.add_word(word, *score);
        }
        self
    }

    pub fn add_word(&mut self, word: &str, score: f64) {
        if score.is_finite() {
            self.polarities.insert(word.to_lowercase(), score.clamp(-1.0, 1.0));
        }
    }

    fn is_negation(token: &str) -> bool {
        NEGATIONS.contains(&token) || token.ends_with("n't")
    }

    fn tokenize(text: &str) -> Vec<String> {
        TOKEN_REGEX.find_iter(text)
            .map(|m| m.as_str().trim_matches('\'').to_lowercase())
            .filter(|token| !token.is_empty())
            .collect()
    }

    /// Individual assessment scores, in text order.
    pub fn assessments(&self, text: &str) -> Vec<f64> {
        let mut assessments: Vec<f64> = Vec::new();
        let mut modifier = 1.0;
        let mut tokens_since_negation: Option<usize> = None;

        for token in Self::tokenize(text) {
            if token == "!" {
                if let Some(last) = assessments.last_mut() {
                    *last = (*last * EXCLAMATION_FACTOR).clamp(-1.0, 1.0);
                }
                continue;
            }

            if Self::is_negation(&token) {
                tokens_since_negation = Some(0);
                continue;
            }

            if let Some(factor) = self.intensifiers.get(&token) {
                modifier *= factor;
                continue;
            }

            if let Some(&base) = self.polarities.get(&token) {
                let mut score = base * modifier;
                if tokens_since_negation.map_or(false, |n| n < self.negation_window) {
                    score *= NEGATION_FACTOR;
                    tokens_since_negation = None;
                }
                assessments.push(score.clamp(-1.0, 1.0));
            }

            modifier = 1.0;
            if let Some(n) = tokens_since_negation.as_mut() {
                *n += 1;
                if *n >= self.negation_window {
                    tokens_since_negation = None;
                }
            }
        }

        assessments
    }
}

impl Default for LexiconClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentClassifier for LexiconClassifier {
    fn polarity(&self, text: &str) -> f64 {
        let assessments = self.assessments(text);
        if assessments.is_empty() {
            return 0.0;
        }

        let mean = assessments.iter().sum::<f64>() / assessments.len() as f64;
        mean.clamp(-1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_sentences() {
        let classifier = LexiconClassifier::new();

        assert!(classifier.polarity("I love this app!") > 0.0);
        assert_eq!(classifier.polarity("This is a table."), 0.0);
        assert!(classifier.polarity("I hate waiting in line.") < 0.0);
    }

    #[test]
    fn test_exclamation_boosts_last_assessment() {
        let classifier = LexiconClassifier::new();

        let plain = classifier.polarity("I love this app");
        let excited = classifier.polarity("I love this app!");
        assert!((plain - 0.5).abs() < 1e-9);
        assert!((excited - 0.625).abs() < 1e-9);
    }

    #[test]
    fn test_negation_flips_and_damps() {
        let classifier = LexiconClassifier::new();

        let good = classifier.polarity("the food was good");
        let not_good = classifier.polarity("the food was not good");
        let isnt_good = classifier.polarity("the food isn't good");

        assert!(good > 0.0);
        assert!(not_good < 0.0);
        assert!((not_good - good * NEGATION_FACTOR).abs() < 1e-9);
        assert!((isnt_good - not_good).abs() < 1e-9);
    }

    #[test]
    fn test_negation_expires_after_window() {
        let classifier = LexiconClassifier::new();

        // "not" is four tokens away from "great"
        let score = classifier.polarity("not that it matters much, great");
        assert!(score > 0.0);
    }

    #[test]
    fn test_intensifier_scales_next_word() {
        let classifier = LexiconClassifier::new();

        let good = classifier.polarity("good");
        let very_good = classifier.polarity("very good");
        assert!((very_good - good * 1.3).abs() < 1e-9);

        // intensifier only touches the next word
        let spread = classifier.polarity("very much good");
        assert!((spread - good).abs() < 1e-9);
    }

    #[test]
    fn test_polarity_is_mean_and_bounded() {
        let classifier = LexiconClassifier::new();

        let mixed = classifier.polarity("good but bad");
        assert!(mixed.abs() < 1e-9);

        let extreme = classifier.polarity("absolutely perfect!!!");
        assert!(extreme <= 1.0);
        assert!((extreme - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_extra_words_override_and_clamp() {
        let mut extra = HashMap::new();
        extra.insert("Dope".to_string(), 0.6);
        extra.insert("bad".to_string(), 4.0);

        let classifier = LexiconClassifier::new().with_extra_words(&extra);
        assert!((classifier.polarity("dope") - 0.6).abs() < 1e-9);
        assert_eq!(classifier.polarity("bad"), 1.0);
    }

    #[test]
    fn test_case_insensitive() {
        let classifier = LexiconClassifier::new();
        assert_eq!(classifier.polarity("GREAT"), classifier.polarity("great"));
    }
}
