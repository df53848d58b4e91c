// End-to-end screening tests: extraction -> scoring -> ranking -> export.
//
// Exercises the same path the `screen` subcommand takes, using plain-text
// resumes in a temp directory so no PDF fixtures are needed.

use std::fs;

use grist::extract::reader;
use grist::output::csv::write_results;
use grist::scoring::rank::rank_candidates;
use grist::scoring::score_candidates;

const MAX_BYTES: u64 = 10 * 1024 * 1024;

#[test]
fn full_pipeline_ranks_the_best_match_first() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("Ada Lovelace.txt"),
        "Senior python developer with machine learning and data pipeline experience",
    )
    .unwrap();
    fs::write(
        dir.path().join("Bob Smith.txt"),
        "Graphic designer proficient in Photoshop and Illustrator",
    )
    .unwrap();
    fs::write(
        dir.path().join("Carol Jones.txt"),
        "Python developer, cloud infrastructure, some machine learning",
    )
    .unwrap();

    let paths = reader::collect_resumes(dir.path()).unwrap();
    assert_eq!(paths.len(), 3);

    let documents: Vec<(String, String)> = paths
        .iter()
        .map(|p| {
            (
                p.file_name().unwrap().to_string_lossy().into_owned(),
                reader::read_resume(p, MAX_BYTES),
            )
        })
        .collect();

    let scores = score_candidates(
        &documents,
        "python developer with machine learning experience",
    );
    let ranked = rank_candidates(scores);

    assert_eq!(ranked.len(), 3);
    assert_eq!(ranked[0].rank, 1);
    // The designer has essentially no vocabulary overlap — last place
    assert_eq!(ranked[2].name, "Bob Smith");
    // The python candidates both beat the designer
    assert!(ranked[0].score > ranked[2].score);
    assert!(ranked[1].score > ranked[2].score);
}

#[test]
fn docx_resume_scores_like_any_other_format() {
    let dir = tempfile::tempdir().unwrap();

    let docx_path = dir.path().join("Dana Torres.docx");
    let file = fs::File::create(&docx_path).unwrap();
    docx_rs::Docx::new()
        .add_paragraph(
            docx_rs::Paragraph::new()
                .add_run(docx_rs::Run::new().add_text("Python developer with machine learning background")),
        )
        .build()
        .pack(file)
        .unwrap();

    fs::write(
        dir.path().join("offtopic.txt"),
        "Pastry chef specializing in laminated doughs",
    )
    .unwrap();

    let paths = reader::collect_resumes(dir.path()).unwrap();
    let documents: Vec<(String, String)> = paths
        .iter()
        .map(|p| {
            (
                p.file_name().unwrap().to_string_lossy().into_owned(),
                reader::read_resume(p, MAX_BYTES),
            )
        })
        .collect();

    let ranked = rank_candidates(score_candidates(
        &documents,
        "python developer with machine learning experience",
    ));

    assert_eq!(ranked[0].name, "Dana Torres");
    assert!(
        ranked[0].score > 0.0,
        "DOCX text must be extracted and scored, got {}",
        ranked[0].score
    );
}

#[test]
fn unreadable_resume_completes_the_batch_and_ranks_last() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("good.txt"),
        "python developer with kubernetes experience",
    )
    .unwrap();
    // A "PDF" that is not a PDF — extraction degrades to empty text
    fs::write(dir.path().join("broken.pdf"), b"not actually a pdf").unwrap();

    let paths = reader::collect_resumes(dir.path()).unwrap();
    let documents: Vec<(String, String)> = paths
        .iter()
        .map(|p| {
            (
                p.file_name().unwrap().to_string_lossy().into_owned(),
                reader::read_resume(p, MAX_BYTES),
            )
        })
        .collect();

    let scores = score_candidates(&documents, "python developer");
    assert_eq!(scores.len(), 2, "Broken file must not abort the batch");

    let ranked = rank_candidates(scores);
    assert_eq!(ranked.last().unwrap().name, "broken");
    assert_eq!(ranked.last().unwrap().score, 0.0);
}

#[test]
fn ranked_results_export_to_csv() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("dev.txt"), "rust engineer").unwrap();
    fs::write(dir.path().join("other.txt"), "pastry chef").unwrap();

    let paths = reader::collect_resumes(dir.path()).unwrap();
    let documents: Vec<(String, String)> = paths
        .iter()
        .map(|p| {
            (
                p.file_name().unwrap().to_string_lossy().into_owned(),
                reader::read_resume(p, MAX_BYTES),
            )
        })
        .collect();

    let ranked = rank_candidates(score_candidates(&documents, "rust engineer"));

    let csv_path = dir.path().join("scores.csv");
    write_results(&csv_path, &ranked).unwrap();

    let contents = fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Rank,Candidate Name,Match Score (%)");
    assert!(lines[1].starts_with("1,dev,"));
    assert!(lines[2].starts_with("2,other,"));
}
