//! Free-text scanning.
//!
//! A single left-to-right pass finds every reference. Precedence between
//! overlapping book names is carried entirely by branch order inside the
//! grammar, and because matches never overlap, a book name claimed by one
//! reference ("2 Peter 3:1") can never be re-read as part of another
//! ("Peter" alone is not a book).

use crate::grammar::Grammar;
use crate::resolver;
use crate::types::VerseRange;

/// One recognized reference: the book it names, the ranges its tail
/// resolved to, and the byte span of the matched text.
pub(crate) struct ReferenceMatch {
    pub(crate) book: u8,
    pub(crate) ranges: Vec<VerseRange>,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

/// Every resolvable reference in `text`, in order of appearance. Matches
/// whose tails resolve to nothing are dropped, not surfaced.
pub(crate) fn match_all(grammar: &Grammar, text: &str) -> Vec<ReferenceMatch> {
    let mut matches = Vec::new();
    for captures in grammar.pericope_regex.captures_iter(text) {
        let Some(whole) = captures.get(0) else {
            continue;
        };
        let Some(book) = Grammar::book_from_captures(&captures) else {
            continue;
        };
        let Some(reference) = captures.name("ref") else {
            continue;
        };
        let ranges = resolver::parse_reference(book, reference.as_str(), grammar);
        if ranges.is_empty() {
            continue;
        }

        // The grammar may consume one closing paren so parenthesized
        // references are claimed whole. The paren belongs to the prose
        // (the span itself can never contain the opener), so hand it back.
        let mut end = whole.end();
        let slice = &text[whole.start()..end];
        if let Some(stripped) = slice.strip_suffix(')') {
            end = whole.start() + stripped.trim_end().len();
        }

        matches.push(ReferenceMatch {
            book,
            ranges,
            start: whole.start(),
            end,
        });
    }
    matches
}
