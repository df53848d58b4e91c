// CSV export of the ranked results.
//
// One row per candidate, in rank order, with the displayed (2-decimal)
// percentage — the file is for recruiters, not for re-sorting.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::scoring::rank::RankedCandidate;

/// Write the ranked candidates to a CSV file at `path`.
pub fn write_results(path: &Path, candidates: &[RankedCandidate]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    writer.write_record(["Rank", "Candidate Name", "Match Score (%)"])?;
    for candidate in candidates {
        writer.write_record([
            candidate.rank.to_string(),
            candidate.name.clone(),
            format!("{:.2}", candidate.percent()),
        ])?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!(path = %path.display(), rows = candidates.len(), "Wrote CSV results");
    Ok(())
}
