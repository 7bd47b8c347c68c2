//! Text helpers shared by the prompt builder and the text view.

/// Cut `text` to at most `max` characters, marking the cut with `...`.
///
/// Counts chars, not bytes, so multi-byte text is never split mid-character.
pub fn excerpt(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
