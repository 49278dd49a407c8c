//! Compiled recognition grammar.
//!
//! One grammar exists per distinct [`Config`]; all patterns are assembled
//! once and cached for the life of the process. Book-name precedence is
//! encoded by branch order: the regex engine picks the leftmost matching
//! alternative, so ordinal-prefixed books are listed ahead of their bases
//! and a single scan suffices.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use regex::{Captures, Regex};

use crate::books;
use crate::config::Config;

pub(crate) struct Grammar {
    /// Matches one full reference: book name (66 positional capture
    /// groups, one per canonical book) plus the `ref` named group holding
    /// the chapter/verse tail.
    pub(crate) pericope_regex: Regex,
    /// Matches one normalized segment: optional `chapter:` prefix,
    /// optional verse number, optional sub-verse letter.
    pub(crate) fragment_regex: Regex,
    /// Matches a `{{...}}` placeholder of space-separated verse ids.
    pub(crate) rsub_regex: Regex,
    separator_regex: Regex,
    dash_regex: Regex,
    strip_regex: Regex,
    pub(crate) max_letter: char,
}

static CACHE: OnceLock<Mutex<HashMap<char, Arc<Grammar>>>> = OnceLock::new();

impl Grammar {
    /// The shared grammar for a configuration, compiling it on first use.
    pub(crate) fn cached(config: Config) -> Arc<Self> {
        let cache = CACHE.get_or_init(|| Mutex::new(HashMap::new()));
        let mut map = cache.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(
            map.entry(config.max_letter())
                .or_insert_with(|| Arc::new(Self::build(config.max_letter()))),
        )
    }

    fn build(max_letter: char) -> Self {
        // All patterns here are assembled from static tables and a
        // validated letter bound, so compilation cannot fail at runtime.
        let letters = format!("a-{max_letter}");
        let reference = reference_pattern(&letters);
        let alternation = book_alternation();
        let pericope_regex = Regex::new(&format!(
            r"(?i)\b(?:{alternation})\.?\s*(?P<ref>{reference})"
        ))
        .expect("pericope pattern compiles");
        let fragment_regex = Regex::new(&format!(
            r"^(?:(\d{{1,3}}):)?(\d{{1,3}})?([{letters}])?$"
        ))
        .expect("fragment pattern compiles");
        let rsub_regex = Regex::new(&format!(r"\{{\{{((?:\d{{7,8}}[{letters}]? ?)+)\}}\}}"))
            .expect("placeholder pattern compiles");
        let separator_regex =
            Regex::new(r#"(\d+)\s*["\.]\s*(\d+)"#).expect("separator pattern compiles");
        let dash_regex = Regex::new(r"[–—]").expect("dash pattern compiles");
        let strip_regex =
            Regex::new(&format!(r"[^0-9,;:\-{letters}]")).expect("strip pattern compiles");
        Self {
            pericope_regex,
            fragment_regex,
            rsub_regex,
            separator_regex,
            dash_regex,
            strip_regex,
            max_letter,
        }
    }

    /// Reduce a matched reference tail to canonical punctuation: quote and
    /// period chapter-verse separators become colons, en and em dashes
    /// become hyphens, and everything outside the digit/punctuation/letter
    /// alphabet is dropped. Idempotent.
    pub(crate) fn normalize(&self, raw: &str) -> String {
        let lowered = raw.to_ascii_lowercase();
        let with_colons = self.separator_regex.replace_all(&lowered, "$1:$2");
        let with_hyphens = self.dash_regex.replace_all(&with_colons, "-");
        self.strip_regex.replace_all(&with_hyphens, "").into_owned()
    }

    /// The book a pericope match named, recovered from whichever of the 66
    /// book groups participated.
    pub(crate) fn book_from_captures(captures: &Captures<'_>) -> Option<u8> {
        books::BOOK_MATCH_ORDER
            .iter()
            .enumerate()
            .find(|&(i, _)| captures.get(i + 1).is_some())
            .map(|(_, &book)| book)
    }
}

/// The 66 book branches in precedence order, each its own capture group.
fn book_alternation() -> String {
    books::BOOK_MATCH_ORDER
        .iter()
        .filter_map(|&book| books::alternation_pattern(book))
        .map(|branch| format!("({branch})"))
        .collect::<Vec<_>>()
        .join("|")
}

/// The chapter/verse tail: a number, an optional `:verse` pair, then any
/// run of list and range continuations. A continuation may be a bare
/// letter ("12a-c"). A trailing close paren is consumed so parenthesized
/// references can be recognized whole; the scanner trims it back off when
/// the text carries no matching open paren.
fn reference_pattern(letters: &str) -> String {
    format!(
        r#"\d{{1,3}}(?:\s*[:"\.]\s*\d{{1,3}}[{letters}]?)?(?:\s*[,;\-–—]\s*(?:\d{{1,3}}\s*[:"\.]\s*)?(?:\d{{1,3}}[{letters}]?|[{letters}])\b)*(?:\s*\))?"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grammar() -> Arc<Grammar> {
        Grammar::cached(Config::default())
    }

    fn first_book(text: &str) -> Option<u8> {
        let grammar = grammar();
        let captures = grammar.pericope_regex.captures(text)?;
        Grammar::book_from_captures(&captures)
    }

    #[test]
    fn recognizes_full_names_and_abbreviations() {
        assert_eq!(first_book("Romans 3:23"), Some(45));
        assert_eq!(first_book("rom. 3:23"), Some(45));
        assert_eq!(first_book("ps 118:17"), Some(19));
        assert_eq!(first_book("jn 21:1"), Some(43));
    }

    #[test]
    fn ordinal_books_outrank_their_bases() {
        assert_eq!(first_book("2 John 3"), Some(63));
        assert_eq!(first_book("ii joh 3"), Some(63));
        assert_eq!(first_book("Second Peter 3:1"), Some(61));
        assert_eq!(first_book("1 Tim 2:1"), Some(54));
        assert_eq!(first_book("John 3:16"), Some(43));
    }

    #[test]
    fn isaiah_wins_the_is_abbreviation() {
        assert_eq!(first_book("is 53:5"), Some(23));
    }

    #[test]
    fn philemon_is_not_philippians() {
        assert_eq!(first_book("philemon 8"), Some(57));
        assert_eq!(first_book("phil 1:6"), Some(50));
    }

    #[test]
    fn requires_a_reference_tail() {
        let grammar = grammar();
        assert!(!grammar.pericope_regex.is_match("Great is thy faithfulness"));
        assert!(!grammar.pericope_regex.is_match("Genesis tells the story"));
    }

    #[test]
    fn matched_text_spans_the_whole_reference() {
        let grammar = grammar();
        let found = grammar
            .pericope_regex
            .find("compare Ps. 118:17–18, 23 with the rest")
            .expect("matches");
        assert_eq!(found.as_str(), "Ps. 118:17–18, 23");
    }

    #[test]
    fn normalization_canonicalizes_punctuation() {
        let grammar = grammar();
        assert_eq!(grammar.normalize("3.23"), "3:23");
        assert_eq!(grammar.normalize("3\"23"), "3:23");
        assert_eq!(grammar.normalize("117–118"), "117-118");
        assert_eq!(grammar.normalize("17—18, 23"), "17-18,23");
        assert_eq!(grammar.normalize("12A-C"), "12a-c");
        assert_eq!(grammar.normalize("1:4, 5; 2:1 )"), "1:4,5;2:1");
    }

    #[test]
    fn normalization_is_idempotent() {
        let grammar = grammar();
        for raw in ["3.23", "117–118", "12A-C", "1:4, 5; 2:1"] {
            let once = grammar.normalize(raw);
            assert_eq!(grammar.normalize(&once), once);
        }
    }

    #[test]
    fn fragment_pattern_splits_chapter_verse_letter() {
        let grammar = grammar();
        let captures = grammar.fragment_regex.captures("9:12a").expect("matches");
        assert_eq!(captures.get(1).map(|m| m.as_str()), Some("9"));
        assert_eq!(captures.get(2).map(|m| m.as_str()), Some("12"));
        assert_eq!(captures.get(3).map(|m| m.as_str()), Some("a"));

        let bare = grammar.fragment_regex.captures("c").expect("matches");
        assert_eq!(bare.get(1), None);
        assert_eq!(bare.get(2), None);
        assert_eq!(bare.get(3).map(|m| m.as_str()), Some("c"));

        assert!(!grammar.fragment_regex.is_match("9:12:4"));
    }

    #[test]
    fn placeholder_pattern_matches_id_lists() {
        let grammar = grammar();
        let found = grammar
            .rsub_regex
            .find("{{61003001 61003002}} Lorem")
            .expect("matches");
        assert_eq!(found.as_str(), "{{61003001 61003002}}");
        assert!(grammar.rsub_regex.is_match("{{43009012a}}"));
        assert!(!grammar.rsub_regex.is_match("{{nope}}"));
    }

    #[test]
    fn cache_returns_the_same_grammar() {
        let a = Grammar::cached(Config::default());
        let b = Grammar::cached(Config::default());
        assert!(Arc::ptr_eq(&a, &b));
    }
}
