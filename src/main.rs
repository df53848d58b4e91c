use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use grist::config::Config;
use grist::extract::reader;
use grist::output::{csv as csv_export, terminal};
use grist::scoring::{self, rank};

/// Grist: rank candidate resumes against a job description.
///
/// Extracts text from resume files, scores each one against the job
/// description with TF-IDF and cosine similarity, and prints a ranked
/// match table.
#[derive(Parser)]
#[command(name = "grist", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Screen resumes against a job description
    Screen {
        /// Resume files to screen (pdf, docx, txt, md)
        resumes: Vec<PathBuf>,

        /// Directory to scan recursively for resumes, in addition to
        /// any files given directly
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Path to a file containing the job description
        #[arg(long, conflicts_with = "job_text")]
        job: Option<PathBuf>,

        /// The job description given inline
        #[arg(long)]
        job_text: Option<String>,

        /// Only show the top N candidates
        #[arg(long)]
        top: Option<usize>,

        /// Also export results as CSV (path: GRIST_CSV_PATH,
        /// default ./resume_scores.csv)
        #[arg(long)]
        csv: bool,

        /// Print results as JSON instead of the table
        #[arg(long)]
        json: bool,
    },

    /// Print the extracted text of a single resume file
    Extract {
        /// The file to extract
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("grist=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Screen {
            resumes,
            dir,
            job,
            job_text,
            top,
            csv,
            json,
        } => {
            let config = Config::load()?;

            let query = load_job_description(job.as_deref(), job_text)?;

            let mut paths = resumes;
            if let Some(dir) = dir {
                paths.extend(reader::collect_resumes(&dir)?);
            }
            if paths.is_empty() {
                anyhow::bail!(
                    "No resumes to screen. Pass resume files directly or use --dir <DIR>."
                );
            }

            info!(resumes = paths.len(), "Starting screening run");

            // Extract text from every resume. Unreadable files become empty
            // strings and score 0 — the batch always completes.
            let pb = ProgressBar::new(paths.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("  Extracting [{bar:30}] {pos}/{len}")
                    .expect("valid template"),
            );

            let documents: Vec<(String, String)> = paths
                .iter()
                .map(|path| {
                    let id = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| path.display().to_string());
                    let text = reader::read_resume(path, config.max_file_bytes());
                    pb.inc(1);
                    (id, text)
                })
                .collect();
            pb.finish_and_clear();

            let readable = documents.iter().filter(|(_, t)| !t.is_empty()).count();
            println!(
                "Screening {} resumes ({} readable) against the job description...",
                documents.len(),
                readable
            );

            let scores = scoring::score_candidates(&documents, &query);
            let mut ranked = rank::rank_candidates(scores);
            if let Some(top) = top {
                ranked.truncate(top);
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&ranked)?);
            } else {
                terminal::display_ranked_table(&ranked);
            }

            if csv {
                let path = PathBuf::from(&config.csv_path);
                csv_export::write_results(&path, &ranked)?;
                println!("Results written to {}", path.display().to_string().bold());
            }
        }

        Commands::Extract { file } => {
            let config = Config::load()?;
            let text = reader::read_resume(&file, config.max_file_bytes());
            if text.is_empty() {
                println!(
                    "{} No text extracted from {}",
                    "Warning:".yellow(),
                    file.display()
                );
            } else {
                println!("{text}");
            }
        }
    }

    Ok(())
}

/// Resolve the job description from --job or --job-text.
///
/// Missing or empty input is rejected here, before the scoring core is
/// ever invoked — the core itself treats an empty query as a degenerate
/// all-zero batch rather than an error.
fn load_job_description(job: Option<&Path>, job_text: Option<String>) -> Result<String> {
    let query = match (job, job_text) {
        (Some(path), _) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read job description {}", path.display()))?,
        (None, Some(text)) => text,
        (None, None) => anyhow::bail!(
            "Provide a job description via --job <FILE> or --job-text <TEXT>."
        ),
    };

    let query = query.trim().to_string();
    if query.is_empty() {
        anyhow::bail!("The job description is empty.");
    }
    Ok(query)
}
