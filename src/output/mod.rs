// Output formatting for the scan and ranges commands.

pub mod terminal;

/// Shorten a scan preview to `max_chars` characters and mark the cut with `...`.
///
/// Counts characters rather than bytes, so a preview that ends inside an
/// emoji run is cut between code points.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Collapse line breaks and tabs to single spaces so a preview fits one line.
pub fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
