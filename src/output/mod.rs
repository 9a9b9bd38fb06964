// Output formatting — terminal display helpers.

pub mod terminal;

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Unlike byte slicing (`&text[..120]`), this respects UTF-8 character boundaries
/// and will never panic on multi-byte characters like emoji or accented letters.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

/// Break a string into lines of at most `width` characters.
///
/// Compiled patterns are one long line with nowhere natural to break, so
/// this wraps at a fixed column rather than at whitespace. Counts
/// characters, not bytes.
pub fn wrap_text(text: &str, width: usize) -> String {
    let width = width.max(1);
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<String>>()
        .join("\n")
}
