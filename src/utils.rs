/// Cut `text` to `max_len` characters and mark the cut with `...`
///
/// input - "Koh Lipe is an island", 7
/// return - "Koh Lip..."
pub fn truncate_description(text: &str, max_len: usize) -> String {
    match text.char_indices().nth(max_len) {
        None => text.to_string(),
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
    }
}

/// Whitespace separated tokens of a search query
pub fn tag_tokens(query: &str) -> Vec<&str> {
    query.split_whitespace().collect()
}

/// Query after clicking `tag`, `None` when the tag is blank or already a token
pub fn append_tag(query: &str, tag: &str) -> Option<String> {
    let tokens = tag_tokens(query);
    if tag.trim().is_empty() || tokens.contains(&tag) {
        return None;
    }
    if tokens.is_empty() {
        return Some(tag.to_string());
    }
    Some(format!("{query} {tag}").trim().to_string())
}
