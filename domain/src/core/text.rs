//! Text helpers for rendering quote content in logs and menus.

/// Collapse whitespace and cut `text` to at most `max_chars` characters.
///
/// Counts characters, not bytes, so multi-byte text is never split. A cut
/// preview ends with `…`, which is included in the `max_chars` budget.
pub fn preview(text: &str, max_chars: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }
    if max_chars == 0 {
        return String::new();
    }
    let mut out: String = collapsed.chars().take(max_chars - 1).collect();
    out.truncate(out.trim_end().len());
    out.push('…');
    out
}
