// TF-IDF vectorization over a per-call vocabulary.
//
// The vectorizer is constructed fresh for every scoring call: vocabulary,
// document frequencies, and vector dimensions all belong to that one call.
// Scores from two different calls are therefore not numerically comparable —
// caching a vectorizer across calls would silently change scoring semantics
// as the vocabulary drifted, so there is deliberately no module-level state.

use std::collections::{HashMap, HashSet};

use stop_words::{get, LANGUAGE};

/// A sparse TF-IDF vector: vocabulary index -> weight.
///
/// Vectors coming out of [`TfIdfVectorizer::vectorize`] are L2-normalized,
/// so cosine similarity between two of them reduces to a dot product.
/// A document with no surviving tokens is represented as an empty map
/// (the zero vector), never as an error.
#[derive(Debug, Clone, Default)]
pub struct SparseVector {
    weights: HashMap<usize, f64>,
}

impl SparseVector {
    pub fn is_zero(&self) -> bool {
        self.weights.is_empty()
    }

    /// Dot product with another vector over the same vocabulary.
    ///
    /// Iterates the smaller map and probes the larger one, so sparse
    /// vectors with little overlap stay cheap.
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (small, large) = if self.weights.len() <= other.weights.len() {
            (&self.weights, &other.weights)
        } else {
            (&other.weights, &self.weights)
        };

        small
            .iter()
            .filter_map(|(idx, w)| large.get(idx).map(|v| w * v))
            .sum()
    }

    #[cfg(test)]
    pub fn norm(&self) -> f64 {
        self.weights.values().map(|w| w * w).sum::<f64>().sqrt()
    }
}

/// Per-call TF-IDF vectorizer with English stop-word filtering.
///
/// Tokenizes on non-alphanumeric boundaries, lowercases, drops stop words,
/// weights terms by tf * smoothed idf, and L2-normalizes each vector.
/// No stemming, no lemmatization.
pub struct TfIdfVectorizer {
    stop_words: HashSet<String>,
}

impl Default for TfIdfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TfIdfVectorizer {
    pub fn new() -> Self {
        // English stop words from the stop-words crate
        let stop_words: HashSet<String> = get(LANGUAGE::English).into_iter().collect();
        Self { stop_words }
    }

    /// Vectorize a batch of documents over a shared vocabulary.
    ///
    /// Returns one vector per input document, in input order. The vocabulary
    /// is derived from this batch alone. Empty documents (or documents that
    /// are all stop words) come back as zero vectors; an empty batch comes
    /// back as an empty Vec. Nothing here can fail.
    pub fn vectorize(&self, documents: &[String]) -> Vec<SparseVector> {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| self.tokenize(d)).collect();

        // Vocabulary: term -> dimension index, in first-seen order
        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        // Document frequency per dimension
        let mut doc_freq: HashMap<usize, usize> = HashMap::new();

        for tokens in &tokenized {
            let unique: HashSet<&str> = tokens.iter().map(|t| t.as_str()).collect();
            for term in unique {
                let next = vocabulary.len();
                let idx = *vocabulary.entry(term.to_string()).or_insert(next);
                *doc_freq.entry(idx).or_insert(0) += 1;
            }
        }

        // Smoothed IDF: ln((1 + n) / (1 + df)) + 1. Finite and strictly
        // positive for every term that appears in at least one document,
        // including terms present in all of them.
        let n = documents.len() as f64;
        let idf: HashMap<usize, f64> = doc_freq
            .iter()
            .map(|(&idx, &df)| (idx, ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0))
            .collect();

        tokenized
            .iter()
            .map(|tokens| {
                // Raw term frequencies for this document
                let mut weights: HashMap<usize, f64> = HashMap::new();
                for token in tokens {
                    let idx = vocabulary[token.as_str()];
                    *weights.entry(idx).or_insert(0.0) += 1.0;
                }

                for (idx, w) in weights.iter_mut() {
                    *w *= idf[idx];
                }

                // L2 normalization, skipped for the zero vector
                let norm = weights.values().map(|w| w * w).sum::<f64>().sqrt();
                if norm > 0.0 {
                    for w in weights.values_mut() {
                        *w /= norm;
                    }
                }

                SparseVector { weights }
            })
            .collect()
    }

    /// Split on non-alphanumeric boundaries, lowercase, drop stop words.
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
            .map(|t| t.to_lowercase())
            .filter(|t| !self.stop_words.contains(t))
            .collect()
    }
}
