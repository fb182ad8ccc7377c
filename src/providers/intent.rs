//! Local fallback responder
//!
//! A small intent classifier over the fixed training catalog: each pair is
//! one intent whose question becomes a weighted bag of tokens, and an
//! incoming message is matched by cosine similarity against every intent.
//! The classifier is built at most once per process, on first use, and is
//! immutable afterwards.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use crate::constants::INTENT_MATCH_THRESHOLD;
use crate::models::TrainingPair;

use super::catalog::TRAINING_PAIRS;

/// Process-wide classifier singleton. Construction is guarded by the lazy
/// cell, so concurrent first requests train exactly once.
static CLASSIFIER: LazyLock<IntentClassifier> =
    LazyLock::new(|| IntentClassifier::train(TRAINING_PAIRS));

/// Get the shared classifier, training it on first use
pub fn classifier() -> &'static IntentClassifier {
    &CLASSIFIER
}

/// Words too common to carry intent signal
const STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "be", "between", "can", "do", "does", "for", "how", "i", "in", "is",
    "it", "my", "of", "on", "or", "should", "the", "to", "use", "what", "when", "which", "why",
    "with", "you",
];

/// Intent classifier trained from the fixed catalog
pub struct IntentClassifier {
    intents: Vec<Intent>,
    /// Inverse document frequency per known token
    idf: HashMap<String, f32>,
}

struct Intent {
    /// Normalized tf-idf vector over the intent's question tokens
    weights: HashMap<String, f32>,
    answer: &'static str,
}

impl IntentClassifier {
    /// Build a classifier from training pairs
    pub fn train(pairs: &[TrainingPair]) -> Self {
        let tokenized: Vec<Vec<String>> = pairs.iter().map(|p| tokenize(p.question)).collect();

        // Document frequency over the training questions
        let mut df: HashMap<String, u32> = HashMap::new();
        for tokens in &tokenized {
            for token in tokens.iter().collect::<HashSet<_>>() {
                *df.entry(token.clone()).or_insert(0) += 1;
            }
        }

        let total = pairs.len().max(1) as f32;
        let idf: HashMap<String, f32> = df
            .into_iter()
            .map(|(token, count)| (token, (total / count as f32).ln() + 1.0))
            .collect();

        let intents = pairs
            .iter()
            .zip(tokenized)
            .map(|(pair, tokens)| Intent {
                weights: weigh(&tokens, &idf),
                answer: pair.answer,
            })
            .collect();

        Self { intents, idf }
    }

    /// Classify a message, returning the best-matching canned answer when the
    /// match clears the similarity threshold
    pub fn classify(&self, message: &str) -> Option<&'static str> {
        let tokens = tokenize(message);
        if tokens.is_empty() {
            return None;
        }
        let query = weigh(&tokens, &self.idf);

        let mut best: Option<(&'static str, f32)> = None;
        for intent in &self.intents {
            let score = cosine(&query, &intent.weights);
            if best.is_none_or(|(_, s)| score > s) {
                best = Some((intent.answer, score));
            }
        }

        best.filter(|(_, score)| *score >= INTENT_MATCH_THRESHOLD)
            .map(|(answer, _)| answer)
    }
}

/// Lowercase, split on non-alphanumerics, drop stopwords and one-letter tokens
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.len() > 1 && !STOPWORDS.contains(t))
        .map(str::to_string)
        .collect()
}

/// Build a normalized tf-idf vector. Tokens absent from the training
/// vocabulary get a neutral weight of 1.0 so unknown words dilute the match
/// instead of being ignored.
fn weigh(tokens: &[String], idf: &HashMap<String, f32>) -> HashMap<String, f32> {
    let mut tf: HashMap<String, f32> = HashMap::new();
    for token in tokens {
        *tf.entry(token.clone()).or_insert(0.0) += 1.0;
    }

    let mut weights: HashMap<String, f32> = tf
        .into_iter()
        .map(|(token, count)| {
            let idf_weight = idf.get(&token).copied().unwrap_or(1.0);
            (token, count * idf_weight)
        })
        .collect();

    let norm: f32 = weights.values().map(|w| w * w).sum::<f32>().sqrt();
    if norm > 0.0 {
        for weight in weights.values_mut() {
            *weight /= norm;
        }
    }
    weights
}

fn cosine(a: &HashMap<String, f32>, b: &HashMap<String, f32>) -> f32 {
    // Vectors are pre-normalized, so the dot product is the cosine
    a.iter()
        .filter_map(|(token, wa)| b.get(token).map(|wb| wa * wb))
        .sum()
}
