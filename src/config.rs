use std::env;

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// Everything has a default — grist runs with no configuration at all.
/// The .env file is loaded automatically at startup via dotenvy.
pub struct Config {
    /// Where `screen --csv` writes its results (GRIST_CSV_PATH)
    pub csv_path: String,
    /// Per-file size cap for resume extraction, in megabytes
    /// (GRIST_MAX_FILE_MB). Files above the cap score as empty.
    pub max_file_mb: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let max_file_mb = match env::var("GRIST_MAX_FILE_MB") {
            Ok(raw) => parse_max_file_mb(&raw)?,
            Err(_) => 10,
        };

        Ok(Self {
            csv_path: env::var("GRIST_CSV_PATH")
                .unwrap_or_else(|_| "./resume_scores.csv".to_string()),
            max_file_mb,
        })
    }

    /// The extraction size cap in bytes.
    pub fn max_file_bytes(&self) -> u64 {
        self.max_file_mb * 1024 * 1024
    }
}

/// Parse the size cap, rejecting zero — a 0 MB cap would empty every
/// resume and silently score the whole batch at 0.
fn parse_max_file_mb(raw: &str) -> Result<u64> {
    match raw.parse::<u64>() {
        Ok(0) | Err(_) => anyhow::bail!(
            "GRIST_MAX_FILE_MB must be a positive integer, got '{raw}'"
        ),
        Ok(mb) => Ok(mb),
    }
}
