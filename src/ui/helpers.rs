//! Text layout helpers for the terminal renderers.
//!
//! All width math here is character-based and applied to plain text before any
//! escape sequences are attached; colorized strings must never be measured.

/// Truncates to at most `max` characters, appending `…` when text was cut.
///
/// Character-safe: never splits a multi-byte scalar.
#[must_use]
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(1);
    let mut out: String = text.chars().take(keep).collect();
    out.push('…');
    out
}

/// Pads with trailing spaces to exactly `width` characters, truncating first
/// if the text is too long.
#[must_use]
pub fn pad_to(text: &str, width: usize) -> String {
    let text = truncate_chars(text, width);
    let len = text.chars().count();
    format!("{text}{}", " ".repeat(width - len))
}

/// Centers within `width` characters, leaving the text as-is when it does not
/// fit.
#[must_use]
pub fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{text}{}", " ".repeat(left), " ".repeat(right))
}

/// First line of a note body, truncated for card display.
#[must_use]
pub fn body_preview(body: &str, max: usize) -> String {
    let first_line = body.lines().next().unwrap_or("");
    let multiline = body.lines().nth(1).is_some();
    let preview = truncate_chars(first_line, max);
    if multiline && preview.chars().count() < max && !preview.ends_with('…') {
        format!("{preview}…")
    } else {
        preview
    }
}
