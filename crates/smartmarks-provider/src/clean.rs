//! Normalization of raw classifier answers.

const FENCE: &str = "```";
const QUOTE_CHARS: &[char] = &['"', '\'', '`', '\u{201C}', '\u{201D}', '\u{2018}', '\u{2019}'];
const LABELS: &[&str] = &["category path", "category", "folder path", "folder", "path"];

/// Reduce a raw model answer to the bare path string.
///
/// Strips markdown code fences, a leading `Category:`-style label
/// (case-insensitive) and surrounding quotes, and keeps only the first
/// non-empty line. Applying it to its own output changes nothing.
pub fn clean_response(raw: &str) -> String {
    let mut current = raw.trim().to_string();
    loop {
        let next = clean_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn clean_once(text: &str) -> String {
    let text = strip_code_fence(text.trim());
    let text = first_line(text);
    let text = strip_label(text);
    text.trim().trim_matches(QUOTE_CHARS).trim().to_string()
}

fn strip_code_fence(text: &str) -> &str {
    let mut text = text;
    if let Some(rest) = text.strip_prefix(FENCE) {
        text = match rest.split_once('\n') {
            Some((info, body)) if is_fence_info(info) => body,
            _ => rest,
        };
    }
    if let Some(rest) = text.trim_end().strip_suffix(FENCE) {
        text = rest;
    }
    text.trim()
}

/// Language tag on an opening fence, e.g. `text` in "```text".
fn is_fence_info(info: &str) -> bool {
    info.trim()
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn first_line(text: &str) -> &str {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or_default()
}

fn strip_label(text: &str) -> &str {
    let lower = text.to_ascii_lowercase();
    for label in LABELS {
        if lower.starts_with(label) {
            let rest = text[label.len()..].trim_start();
            if let Some(value) = rest.strip_prefix(':') {
                return value.trim_start();
            }
        }
    }
    text
}
