// The filter/round transform at the heart of the tool.
//
// Walks the curated vocabulary, copies each word's vector out of the model
// lookup, rounds every component to 6 decimal places, and collects the
// result into an ordered map. A word the model doesn't know is skipped
// without comment: the vocabulary deliberately contains terms (platform
// slang, an uppercase "AI") that older or lowercased models lack.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::model::keyed_vectors::KeyedVectors;

/// Round a value to 6 decimal places, half away from zero.
///
/// The only "compression" the bundle applies; it exists to shorten the
/// serialized floats. Idempotent: rounding a rounded value is a no-op.
pub fn round6(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}

/// The output artifact: an ordered word → vector map plus the model
/// dimensionality it was built at.
///
/// BTreeMap keys serialize in sorted order, so two builds over the same
/// model and vocabulary produce byte-identical JSON.
pub struct VectorBundle {
    words: BTreeMap<String, Vec<f64>>,
    dimension: usize,
}

impl VectorBundle {
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    pub fn get(&self, word: &str) -> Option<&[f64]> {
        self.words.get(word).map(|v| v.as_slice())
    }

    /// The underlying map; exactly what gets serialized.
    pub fn words(&self) -> &BTreeMap<String, Vec<f64>> {
        &self.words
    }
}

/// Build the bundle: filter the model down to the vocabulary and round.
///
/// Misses are expected and stay silent; the count is recorded at debug
/// level only.
pub fn build_bundle(model: &KeyedVectors, vocabulary: &BTreeSet<String>) -> VectorBundle {
    let mut words = BTreeMap::new();
    let mut skipped = 0usize;

    for word in vocabulary {
        match model.get(word) {
            Some(vector) => {
                let rounded: Vec<f64> = vector.iter().copied().map(round6).collect();
                words.insert(word.clone(), rounded);
            }
            None => skipped += 1,
        }
    }

    debug!(
        retained = words.len(),
        skipped,
        dimension = model.dimension(),
        "Filtered vocabulary against model"
    );

    VectorBundle {
        words,
        dimension: model.dimension(),
    }
}
