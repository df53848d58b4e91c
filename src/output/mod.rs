// Output formatting — terminal display and CSV export.

pub mod csv;
pub mod terminal;

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Candidate names come straight from uploaded filenames, which routinely
/// carry accented or CJK characters. Counting chars instead of byte-slicing
/// (`&name[..38]`) keeps the table layout from panicking mid-code-point.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}
