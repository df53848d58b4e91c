// Cosine similarity between TF-IDF vectors.
//
// Vectors from the vectorizer are already unit-normalized, so cosine
// similarity is just their dot product. The zero vector (empty or
// fully-stop-worded document) gets similarity 0.0 against anything —
// never NaN, never an error.

use super::vectorizer::SparseVector;

/// Cosine similarity of two unit-normalized vectors, clamped to [0, 1].
///
/// Returns exactly 0.0 when either vector is zero. TF-IDF weights are
/// non-negative so the dot product can't go below zero; the clamp guards
/// against floating-point drift pushing it a hair above 1.0.
pub fn cosine(a: &SparseVector, b: &SparseVector) -> f64 {
    if a.is_zero() || b.is_zero() {
        return 0.0;
    }
    a.dot(b).clamp(0.0, 1.0)
}
