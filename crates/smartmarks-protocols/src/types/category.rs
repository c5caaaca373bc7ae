//! Category paths produced by the classifier.

use std::fmt;

/// Deepest folder nesting a category may request.
pub const MAX_CATEGORY_DEPTH: usize = 3;

const QUOTE_CHARS: &[char] = &['"', '\'', '`', '\u{201C}', '\u{201D}', '\u{2018}', '\u{2019}'];

/// Ordered, non-empty list of folder names, outermost first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoryPath {
    segments: Vec<String>,
}

impl CategoryPath {
    /// Build a path from raw segments.
    ///
    /// Each segment is trimmed and stripped of surrounding quotes; empty
    /// segments are dropped and anything past [`MAX_CATEGORY_DEPTH`] is
    /// discarded. Returns `None` when nothing usable remains.
    pub fn new<I, S>(segments: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let segments: Vec<String> = segments
            .into_iter()
            .map(|s| normalize_segment(s.as_ref()))
            .filter(|s| !s.is_empty())
            .take(MAX_CATEGORY_DEPTH)
            .collect();

        if segments.is_empty() {
            None
        } else {
            Some(Self { segments })
        }
    }

    /// Parse a slash-delimited path such as `Development/GitHub`.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::new(raw.split('/'))
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// The innermost folder name.
    pub fn leaf(&self) -> &str {
        // Construction guarantees at least one segment.
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    /// Searchable tag derived from the leaf, with all whitespace removed.
    pub fn tag(&self) -> String {
        self.leaf().split_whitespace().collect()
    }
}

impl fmt::Display for CategoryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

fn normalize_segment(segment: &str) -> String {
    segment.trim().trim_matches(QUOTE_CHARS).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_levels() {
        let path = CategoryPath::parse("Development/Education").unwrap();
        assert_eq!(path.segments(), &["Development", "Education"]);
        assert_eq!(path.depth(), 2);
        assert_eq!(path.leaf(), "Education");
        assert_eq!(path.to_string(), "Development/Education");
    }

    #[test]
    fn test_parse_trims_segments() {
        let path = CategoryPath::parse("  Social Media /  Reddit ").unwrap();
        assert_eq!(path.segments(), &["Social Media", "Reddit"]);
    }

    #[test]
    fn test_parse_strips_segment_quotes() {
        let path = CategoryPath::parse("\"News & Reading\"/'Blogs'").unwrap();
        assert_eq!(path.segments(), &["News & Reading", "Blogs"]);
    }

    #[test]
    fn test_parse_drops_empty_segments() {
        let path = CategoryPath::parse("/Tools & Utilities//Converters/").unwrap();
        assert_eq!(path.segments(), &["Tools & Utilities", "Converters"]);
    }

    #[test]
    fn test_parse_caps_depth() {
        let path = CategoryPath::parse("A/B/C/D/E").unwrap();
        assert_eq!(path.segments(), &["A", "B", "C"]);
    }

    #[test]
    fn test_parse_empty_is_none() {
        assert!(CategoryPath::parse("").is_none());
        assert!(CategoryPath::parse(" / / ").is_none());
        assert!(CategoryPath::parse("\"\"").is_none());
    }

    #[test]
    fn test_tag_removes_whitespace() {
        let path = CategoryPath::parse("Entertainment/Video Games").unwrap();
        assert_eq!(path.tag(), "VideoGames");
    }

    #[test]
    fn test_single_segment() {
        let path = CategoryPath::new(["Finance"]).unwrap();
        assert_eq!(path.leaf(), "Finance");
        assert_eq!(path.tag(), "Finance");
    }
}
