//! Locate the tag under an editor cursor.
//!
//! A tag is a marker character (`#` by default) followed by one or more word
//! characters, `/`, `-` or `_`. Cursor offsets and returned spans are character
//! offsets into the line.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

use crate::utils::utf8_offsets::{byte_offset_to_char_offset, char_offset_to_byte_offset};

pub const DEFAULT_MARKER: char = '#';

static DEFAULT_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| tag_regex(DEFAULT_MARKER));

fn tag_regex(marker: char) -> Regex {
    let pattern = format!(r"{}([\w/\-_]+)", regex::escape(&marker.to_string()));
    Regex::new(&pattern).expect("an escaped marker always forms a valid pattern")
}

/// A tag found in a line, without its marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedTag {
    pub tag: String,
    /// Character span of the whole token, marker included
    pub span: Range<usize>,
}

#[derive(Debug, Clone)]
pub struct TagLocator {
    marker: char,
    regex: Regex,
}

impl Default for TagLocator {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER,
            regex: DEFAULT_TAG_REGEX.clone(),
        }
    }
}

impl TagLocator {
    pub fn new(marker: char) -> Self {
        if marker == DEFAULT_MARKER {
            return Self::default();
        }
        Self {
            marker,
            regex: tag_regex(marker),
        }
    }

    pub fn marker(&self) -> char {
        self.marker
    }

    /// Find the tag whose span contains `cursor`, both edges inclusive.
    ///
    /// Matches are scanned left to right; the scan stops at the first match that
    /// starts after the cursor.
    pub fn locate(&self, line: &str, cursor: usize) -> Option<LocatedTag> {
        let cursor = char_offset_to_byte_offset(line, cursor)?;

        for caps in self.regex.captures_iter(line) {
            let token = caps.get(0)?;
            if token.end() < cursor {
                continue;
            }
            if token.start() > cursor {
                break;
            }

            return Some(LocatedTag {
                tag: caps[1].to_string(),
                span: byte_offset_to_char_offset(line, token.start())..byte_offset_to_char_offset(line, token.end()),
            });
        }

        None
    }
}

/// Locate the `#` tag under the cursor.
pub fn locate(line: &str, cursor: usize) -> Option<LocatedTag> {
    TagLocator::default().locate(line, cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE: &str = "see #foo/bar and #baz";

    #[test]
    fn test_cursor_inside_first_tag() {
        let found = locate(LINE, 6).unwrap();
        assert_eq!(found.tag, "foo/bar");
        assert_eq!(found.span, 4..12);
    }

    #[test]
    fn test_cursor_inside_second_tag() {
        let found = locate(LINE, 20).unwrap();
        assert_eq!(found.tag, "baz");
        assert_eq!(found.span, 17..21);
    }

    #[test]
    fn test_cursor_before_any_tag() {
        assert_eq!(locate(LINE, 2), None);
    }

    #[test]
    fn test_cursor_between_tags() {
        assert_eq!(locate(LINE, 14), None);
    }

    #[test]
    fn test_span_edges_are_inclusive() {
        // On the marker itself
        assert_eq!(locate(LINE, 4).unwrap().tag, "foo/bar");
        // Directly after the last character
        assert_eq!(locate(LINE, 12).unwrap().tag, "foo/bar");
        assert_eq!(locate(LINE, 21).unwrap().tag, "baz");
    }

    #[test]
    fn test_adjacent_tags_prefer_the_earlier_one() {
        // The end of #a and the start of #b share offset 2
        assert_eq!(locate("#a#b", 2).unwrap().tag, "a");
        assert_eq!(locate("#a#b", 3).unwrap().tag, "b");
    }

    #[test]
    fn test_cursor_past_end_of_line() {
        assert_eq!(locate(LINE, 22), None);
        assert_eq!(locate(LINE, 500), None);
    }

    #[test]
    fn test_hyphens_underscores_and_nesting() {
        let found = locate("#area/sub-topic_2 done", 3).unwrap();
        assert_eq!(found.tag, "area/sub-topic_2");
        assert_eq!(found.span, 0..17);
    }

    #[test]
    fn test_marker_alone_is_not_a_tag() {
        assert_eq!(locate("# heading", 0), None);
        assert_eq!(locate("a # b", 2), None);
    }

    #[test]
    fn test_multibyte_line_uses_character_offsets() {
        let line = "Blåbær #frukt/bær";
        let found = locate(line, 9).unwrap();
        assert_eq!(found.tag, "frukt/bær");
        assert_eq!(found.span, 7..17);
        assert_eq!(locate(line, 3), None);
    }

    #[test]
    fn test_custom_marker() {
        let locator = TagLocator::new('+');
        assert_eq!(locator.marker(), '+');
        let found = locator.locate("call +alice/work later", 8).unwrap();
        assert_eq!(found.tag, "alice/work");
        assert_eq!(locator.locate("call #alice later", 7), None);
    }
}
