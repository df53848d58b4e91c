// Colored terminal output for the screening results.
//
// This module handles all terminal-specific formatting: colors, the ranked
// table, score bars. The main.rs display calls delegate here.

use colored::Colorize;

use crate::scoring::rank::RankedCandidate;

/// Display the ranked candidate table in the terminal.
pub fn display_ranked_table(candidates: &[RankedCandidate]) {
    if candidates.is_empty() {
        println!("No candidates scored. Provide at least one resume.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Candidate Ranking ({} resumes) ===", candidates.len()).bold()
    );
    println!();

    // Header
    println!(
        "  {:>4}  {:<40} {:>9}",
        "Rank".dimmed(),
        "Candidate".dimmed(),
        "Match %".dimmed(),
    );
    println!("  {}", "-".repeat(80).dimmed());

    for candidate in candidates {
        let name = super::truncate_chars(&candidate.name, 38);
        println!(
            "  {:>4}. {:<40} {:>8.2}  {}",
            candidate.rank,
            name,
            candidate.percent(),
            score_bar(candidate.score),
        );
    }

    println!();

    let unreadable = candidates.iter().filter(|c| c.score == 0.0).count();
    if unreadable > 0 {
        println!(
            "  {} {} resume(s) scored 0.00 — empty, unreadable, or no vocabulary overlap",
            "!".yellow(),
            unreadable
        );
        println!();
    }
}

/// Render a 20-char score bar, colored by match strength.
fn score_bar(score: f64) -> colored::ColoredString {
    let bar_width: usize = 20;
    let filled = (score * bar_width as f64).round() as usize;
    let empty = bar_width.saturating_sub(filled);
    let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(empty));

    if score >= 0.5 {
        bar.bright_green()
    } else if score >= 0.2 {
        bar.bright_yellow()
    } else {
        bar.bright_blue()
    }
}
