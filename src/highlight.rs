use serde::Serialize;

/// A run of text that is either outside or inside a search match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Segment {
    Plain(String),
    Match(String),
}

/// Text annotated with search-match boundaries. The external renderer
/// decides how matches are presented; `to_marked_string` gives the
/// classic `<mark>` form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightedText {
    pub segments: Vec<Segment>,
}

impl HighlightedText {
    /// Unannotated text, a single plain segment.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            segments: vec![Segment::Plain(text.into())],
        }
    }

    /// The text with annotations stripped.
    pub fn raw(&self) -> String {
        self.segments
            .iter()
            .map(|s| match s {
                Segment::Plain(t) | Segment::Match(t) => t.as_str(),
            })
            .collect()
    }

    pub fn has_match(&self) -> bool {
        self.segments.iter().any(|s| matches!(s, Segment::Match(_)))
    }

    /// Render with `<mark>` wrappers around matched runs.
    pub fn to_marked_string(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Plain(t) => out.push_str(t),
                Segment::Match(t) => {
                    out.push_str("<mark>");
                    out.push_str(t);
                    out.push_str("</mark>");
                }
            }
        }
        out
    }
}

/// Mark every case-insensitive occurrence of `query` in `text` as a
/// literal substring. The query is never interpreted as a pattern, so
/// regex metacharacters like `.` or `(` match only themselves.
///
/// Matches are found in a single left-to-right pass and never overlap;
/// original casing inside a match is preserved. An empty or
/// whitespace-only query returns the text unannotated.
///
/// Case folds per `char` via Unicode lowercasing, the same width the
/// search stage uses, so a recipe retained by search always carries its
/// highlight.
pub fn highlight(text: &str, query: &str) -> HighlightedText {
    let needle = query.trim();
    if needle.is_empty() || text.is_empty() {
        return HighlightedText::plain(text);
    }

    let needle_folded: Vec<char> = needle.chars().flat_map(char::to_lowercase).collect();
    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;
    while pos < text.len() {
        match match_len_at(&text[pos..], &needle_folded) {
            Some(len) => {
                if plain_start < pos {
                    segments.push(Segment::Plain(text[plain_start..pos].to_string()));
                }
                segments.push(Segment::Match(text[pos..pos + len].to_string()));
                pos += len;
                plain_start = pos;
            }
            None => {
                pos += text[pos..].chars().next().map_or(1, char::len_utf8);
            }
        }
    }
    if plain_start < text.len() {
        segments.push(Segment::Plain(text[plain_start..].to_string()));
    }
    HighlightedText { segments }
}

/// Byte length of a lowercase-folded match of the needle at the start of
/// `window`, if there is one. A text char whose lowercase expansion runs
/// past the end of the needle is no match; highlights never split a char.
fn match_len_at(window: &str, needle_folded: &[char]) -> Option<usize> {
    let mut remaining = needle_folded;
    let mut consumed = 0;
    for c in window.chars() {
        if remaining.is_empty() {
            break;
        }
        for folded in c.to_lowercase() {
            match remaining.split_first() {
                Some((&head, rest)) if head == folded => remaining = rest,
                _ => return None,
            }
        }
        consumed += c.len_utf8();
    }
    if remaining.is_empty() {
        Some(consumed)
    } else {
        None
    }
}
