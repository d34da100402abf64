//! Short text windows around a match, for display.

const ELLIPSIS: &str = "...";

/// Cut a window of at most `width` characters out of `text`, placed around
/// the first case-insensitive occurrence of `query`.
///
/// Falls back to the start of `text` when `query` is empty or only matched
/// the title. Newlines are flattened to spaces.
pub fn excerpt(text: &str, query: &str, width: usize) -> String {
    let chars: Vec<char> =
        text.chars().map(|c| if c.is_whitespace() { ' ' } else { c }).collect();
    if width == 0 || chars.is_empty() {
        return String::new();
    }
    if chars.len() <= width {
        return chars.into_iter().collect();
    }

    let hit = find_char_index(text, query).unwrap_or(0);
    let lead = width / 3;
    let mut start = hit.saturating_sub(lead);
    let end = (start + width).min(chars.len());
    if end - start < width {
        start = end.saturating_sub(width);
    }

    let mut out = String::new();
    if start > 0 {
        out.push_str(ELLIPSIS);
    }
    out.extend(&chars[start..end]);
    if end < chars.len() {
        out.push_str(ELLIPSIS);
    }
    out
}

/// Char index in `text` where `query` first occurs, ignoring case.
fn find_char_index(text: &str, query: &str) -> Option<usize> {
    if query.is_empty() {
        return None;
    }
    let needle = query.to_lowercase();

    // Lowercasing can change byte lengths, so remember where each original
    // char starts in the folded string.
    let mut folded = String::with_capacity(text.len());
    let mut starts = Vec::with_capacity(text.len());
    for c in text.chars() {
        starts.push(folded.len());
        folded.extend(c.to_lowercase());
    }

    let byte = folded.find(&needle)?;
    match starts.binary_search(&byte) {
        Ok(i) => Some(i),
        Err(i) => Some(i.saturating_sub(1)),
    }
}
