// Resume scoring — the similarity pipeline.
//
// Everything in here is pure and call-scoped: the caller hands over raw
// document strings plus one query string, and gets back one score per
// document. How the strings were obtained (PDF extraction, pasted text)
// and how the scores are displayed are the collaborators' business.

pub mod rank;
pub mod similarity;
pub mod vectorizer;

use vectorizer::TfIdfVectorizer;

/// Score a batch of candidate documents against a query text.
///
/// The corpus for vocabulary and IDF purposes is the candidate texts plus
/// the query, appended last. Returns `(identifier, score)` pairs in the
/// same order as the input — ranking is a separate step (see
/// [`rank::rank_candidates`]).
///
/// Degenerate inputs degrade instead of failing: an empty batch returns an
/// empty Vec, and an empty query or empty document text produces a score of
/// exactly 0.0 for the affected pairings.
pub fn score_candidates(documents: &[(String, String)], query_text: &str) -> Vec<(String, f64)> {
    let mut corpus: Vec<String> = documents.iter().map(|(_, text)| text.clone()).collect();
    corpus.push(query_text.to_string());

    let vectorizer = TfIdfVectorizer::new();
    let vectors = vectorizer.vectorize(&corpus);

    // Query vector is the last row
    let (query_vector, candidate_vectors) = vectors
        .split_last()
        .expect("corpus always contains the query");

    documents
        .iter()
        .zip(candidate_vectors)
        .map(|((id, _), vector)| (id.clone(), similarity::cosine(vector, query_vector)))
        .collect()
}
