// File readers for the supported resume formats.
//
// PDF via pdf-extract, DOCX via docx-rs, plain text via std::fs. Any parse
// or read failure degrades to an empty string, so a broken upload ranks
// last instead of aborting the screening run.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use docx_rs::{
    DocumentChild, Paragraph, ParagraphChild, RunChild, Table, TableCellContent, TableChild,
    TableRowChild,
};
use tracing::warn;
use walkdir::WalkDir;

/// File extensions accepted when collecting resumes from a directory.
const RESUME_EXTENSIONS: &[&str] = &["pdf", "docx", "txt", "md"];

/// Extract the text of one resume file.
///
/// Never fails: any read or parse problem is logged and yields an empty
/// string, which scores as 0 downstream. `max_bytes` caps how large a file
/// will be read at all (a multi-hundred-MB "resume" is a mistake, not a
/// candidate).
pub fn read_resume(path: &Path, max_bytes: u64) -> String {
    match fs::metadata(path) {
        Ok(meta) if meta.len() > max_bytes => {
            warn!(
                path = %path.display(),
                size = meta.len(),
                "Resume exceeds size cap, treating as empty"
            );
            return String::new();
        }
        Ok(_) => {}
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Cannot stat resume file");
            return String::new();
        }
    }

    let text = match extension_of(path).as_deref() {
        Some("pdf") => match pdf_extract::extract_text(path) {
            Ok(text) => text,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "PDF extraction failed");
                String::new()
            }
        },
        Some("txt") | Some("md") => match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Cannot read text file");
                String::new()
            }
        },
        Some("docx") => match extract_docx(path) {
            Ok(text) => text,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "DOCX extraction failed");
                String::new()
            }
        },
        _ => {
            warn!(path = %path.display(), "Unsupported resume format, treating as empty");
            String::new()
        }
    };

    text.trim().to_string()
}

/// Extract the visible text of a DOCX file.
///
/// Walks the document body collecting run text from paragraphs, tables
/// (resumes love two-column table layouts), and hyperlinks (email and
/// profile links). One line per paragraph.
fn extract_docx(path: &Path) -> Result<String> {
    let buf = fs::read(path)?;
    let docx = docx_rs::read_docx(&buf)?;

    let mut text = String::new();
    for child in &docx.document.children {
        match child {
            DocumentChild::Paragraph(p) => push_paragraph(p, &mut text),
            DocumentChild::Table(t) => push_table(t, &mut text),
            _ => {}
        }
    }
    Ok(text)
}

fn push_paragraph(paragraph: &Paragraph, out: &mut String) {
    push_paragraph_children(&paragraph.children, out);
    out.push('\n');
}

fn push_paragraph_children(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for rc in &run.children {
                    if let RunChild::Text(t) = rc {
                        out.push_str(&t.text);
                    }
                }
            }
            // Hyperlinks wrap their own runs
            ParagraphChild::Hyperlink(link) => push_paragraph_children(&link.children, out),
            _ => {}
        }
    }
}

fn push_table(table: &Table, out: &mut String) {
    for TableChild::TableRow(row) in &table.rows {
        for TableRowChild::TableCell(cell) in &row.cells {
            for content in &cell.children {
                match content {
                    TableCellContent::Paragraph(p) => push_paragraph(p, out),
                    TableCellContent::Table(t) => push_table(t, out),
                    _ => {}
                }
            }
        }
    }
}

/// Collect resume files from a directory, recursively, in sorted order.
///
/// Only files with a recognized resume extension are returned. Unlike
/// per-file extraction, an unreadable *directory* is a real error — there
/// is nothing to screen.
pub fn collect_resumes(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        anyhow::bail!("Not a directory: {}", dir.display());
    }

    let mut paths = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry.with_context(|| format!("Failed to walk {}", dir.display()))?;
        if entry.file_type().is_file() && is_resume_file(entry.path()) {
            paths.push(entry.into_path());
        }
    }

    paths.sort();
    Ok(paths)
}

/// Whether a path looks like a resume file we accept.
pub fn is_resume_file(path: &Path) -> bool {
    matches!(
        extension_of(path).as_deref(),
        Some(ext) if RESUME_EXTENSIONS.contains(&ext)
    )
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
}
