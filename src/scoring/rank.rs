// Ranking and display formatting for scored candidates.
//
// Sorting uses the raw unrounded score. The displayed percentage is rounded
// to two decimals, and rounding two nearly-equal scores to the same display
// value must not be allowed to invert their order — hence sort first, on the
// raw value, with a stable sort so exact ties keep input order.

use std::sync::OnceLock;

use regex_lite::Regex;
use serde::Serialize;

/// One row of the screening result, in final rank order.
#[derive(Debug, Clone, Serialize)]
pub struct RankedCandidate {
    /// 1-based position after sorting
    pub rank: usize,
    /// Display name: the document identifier with any resume-file
    /// extension stripped
    pub name: String,
    /// Raw cosine similarity in [0, 1] — unrounded
    pub score: f64,
}

impl RankedCandidate {
    /// The score as a percentage rounded to 2 decimal places, for display
    /// and export only. Never used for ordering.
    pub fn percent(&self) -> f64 {
        (self.score * 10000.0).round() / 100.0
    }
}

/// Sort scored candidates into rank order.
///
/// Takes `(identifier, score)` pairs in input order (as produced by
/// [`super::score_candidates`]) and returns them sorted by score descending.
/// The sort is stable, so candidates with exactly equal scores keep their
/// relative input order — there is no secondary key.
pub fn rank_candidates(scored: Vec<(String, f64)>) -> Vec<RankedCandidate> {
    let mut ranked: Vec<RankedCandidate> = scored
        .into_iter()
        .map(|(name, score)| RankedCandidate {
            rank: 0,
            name: clean_candidate_name(&name),
            score,
        })
        .collect();

    // sort_by is a stable sort. NaN can't occur (the scorer never produces
    // it), but total ordering still needs a fallback arm.
    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    for (i, candidate) in ranked.iter_mut().enumerate() {
        candidate.rank = i + 1;
    }

    ranked
}

/// Strip a trailing resume-file extension from a candidate identifier.
///
/// Recruiters name resume files after the candidate ("Ada Lovelace.pdf"),
/// so the filename minus extension is the display name.
fn clean_candidate_name(name: &str) -> String {
    // Compiled once, shared across every candidate in every batch
    static EXTENSION_RE: OnceLock<Regex> = OnceLock::new();
    let re = EXTENSION_RE
        .get_or_init(|| Regex::new(r"(?i)\.(pdf|docx|txt|md)$").expect("valid extension pattern"));
    re.replace(name, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_descending_by_score() {
        let ranked = rank_candidates(vec![
            ("low.pdf".to_string(), 0.2),
            ("high.pdf".to_string(), 0.9),
            ("mid.pdf".to_string(), 0.5),
        ]);
        let names: Vec<&str> = ranked.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["high", "mid", "low"]);
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[2].rank, 3);
    }

    #[test]
    fn exact_ties_keep_input_order() {
        let ranked = rank_candidates(vec![
            ("first.pdf".to_string(), 0.5),
            ("second.pdf".to_string(), 0.5),
            ("third.pdf".to_string(), 0.5),
        ]);
        let names: Vec<&str> = ranked.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn sort_uses_unrounded_scores() {
        // Both display as 90.00% but the raw ordering must hold
        let ranked = rank_candidates(vec![
            ("a.pdf".to_string(), 0.900001),
            ("b.pdf".to_string(), 0.900004),
        ]);
        assert_eq!(ranked[0].name, "b");
        assert_eq!(ranked[0].percent(), ranked[1].percent());
    }

    #[test]
    fn percent_rounds_to_two_decimals() {
        let c = RankedCandidate {
            rank: 1,
            name: "x".to_string(),
            score: 0.123456,
        };
        assert_eq!(c.percent(), 12.35);
    }

    #[test]
    fn name_cleanup_is_stable_across_repeated_batches() {
        // The cached pattern must behave identically on every call
        for _ in 0..3 {
            let ranked = rank_candidates(vec![
                ("Ada Lovelace.PDF".to_string(), 0.9),
                ("Grace Hopper.docx".to_string(), 0.4),
            ]);
            assert_eq!(ranked[0].name, "Ada Lovelace");
            assert_eq!(ranked[1].name, "Grace Hopper");
        }
    }

    #[test]
    fn strips_resume_extensions_case_insensitively() {
        assert_eq!(clean_candidate_name("Ada Lovelace.PDF"), "Ada Lovelace");
        assert_eq!(clean_candidate_name("grace.docx"), "grace");
        assert_eq!(clean_candidate_name("notes.md"), "notes");
        // Only a trailing extension is stripped
        assert_eq!(clean_candidate_name("v2.pdf.bak"), "v2.pdf.bak");
        assert_eq!(clean_candidate_name("pasted text"), "pasted text");
    }
}
