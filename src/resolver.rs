//! Reference resolution: normalized chapter/verse text to verse ranges.
//!
//! Resolution is deliberately forgiving. Out-of-bounds chapters and verses
//! are clamped into range rather than rejected, inverted ranges collapse,
//! and segments that cannot be read are skipped without disturbing the
//! carried state. Explicit construction APIs are the strict path.

use crate::books;
use crate::grammar::Grammar;
use crate::types::{Verse, VerseRange};

/// A segment's chapter/verse/letter split, before validation. `chapter`
/// and `verse` may be filled in from the carried defaults.
struct Fragment {
    chapter: Option<u16>,
    verse: Option<u16>,
    letter: Option<char>,
}

/// Resolve a raw reference tail (e.g. `"2:6a-9b, 11"`) against a book.
/// Returns one range per readable comma/semicolon segment; an empty vector
/// means the tail contained nothing resolvable.
pub(crate) fn parse_reference(book: u8, reference: &str, grammar: &Grammar) -> Vec<VerseRange> {
    let normalized = grammar.normalize(reference);

    // Single-chapter books are cited by verse alone, so "Philemon 8"
    // reads as chapter 1, verse 8.
    let mut default_chapter: Option<u16> = if books::has_chapters(book) {
        None
    } else {
        Some(1)
    };
    let mut default_verse: Option<u16> = None;

    let mut ranges = Vec::new();
    for segment in normalized.split([',', ';']) {
        // Anything past a second hyphen is noise.
        let mut tokens = segment.split('-');
        let low_token = tokens.next().unwrap_or_default();
        let high_token = tokens.next().unwrap_or(low_token);

        let Some(low) = parse_fragment(grammar, low_token, default_chapter, default_verse) else {
            continue;
        };

        // A low token without a verse ("Mark 3") opens a chapter range.
        let chapter_range = low.verse.is_none();
        let low_chapter = clamp_chapter(book, low.chapter.unwrap_or(1));
        let low_verse = match low.verse {
            Some(verse) => clamp_verse(book, low_chapter, verse),
            None => 1,
        };
        let Ok(mut begin) = Verse::new(book, low_chapter, low_verse, low.letter) else {
            continue;
        };

        let mut end = if high_token == low_token && !chapter_range {
            begin
        } else {
            let (high_default_chapter, high_default_verse) = if chapter_range {
                (None, None)
            } else {
                (Some(low_chapter), Some(low_verse))
            };
            // An unreadable high token ("Luke 2-a" has no verse for the
            // bare letter to attach to) falls back to the low reading
            // instead of discarding the whole segment.
            let high = parse_fragment(grammar, high_token, high_default_chapter, high_default_verse)
                .unwrap_or_else(|| Fragment {
                    chapter: Some(low_chapter),
                    verse: if chapter_range { None } else { Some(low_verse) },
                    letter: begin.letter(),
                });
            let mut high_chapter = clamp_chapter(book, high.chapter.unwrap_or(1));
            // Treat Mark 3-1 as Mark 3-3 (a whole-chapter reference).
            if high_chapter < low_chapter {
                high_chapter = low_chapter;
            }
            let (high_verse, high_letter) = match high.verse {
                Some(verse) => (clamp_verse(book, high_chapter, verse), high.letter),
                None => (books::max_verse(book, high_chapter).unwrap_or(1), None),
            };
            let Ok(high) = Verse::new(book, high_chapter, high_verse, high_letter) else {
                continue;
            };
            high
        };

        // An inverted pair ("3:10-5") collapses onto its first verse.
        if end < begin {
            end = begin;
        }

        // An 'a' opening a multi-verse range is redundant, as is the
        // maximum letter closing one.
        if begin.letter() == Some('a') && end.id() > begin.id() {
            begin = begin.with_letter(None);
        }
        if end.letter() == Some(grammar.max_letter) && end.id() > begin.id() {
            end = end.with_letter(None);
        }

        default_chapter = Some(end.chapter());
        default_verse = Some(end.verse());

        let Ok(range) = VerseRange::new(begin, end) else {
            continue;
        };
        ranges.push(range);
    }
    ranges
}

/// Read one token into a fragment, borrowing missing coordinates from the
/// carried defaults. A lone number with no chapter in scope is a chapter.
/// `None` when the token is unreadable or resolves to nothing at all.
fn parse_fragment(
    grammar: &Grammar,
    token: &str,
    default_chapter: Option<u16>,
    default_verse: Option<u16>,
) -> Option<Fragment> {
    if token.is_empty() {
        return None;
    }
    let captures = grammar.fragment_regex.captures(token)?;
    let mut chapter: Option<u16> = captures.get(1).and_then(|m| m.as_str().parse().ok());
    let mut verse: Option<u16> = captures.get(2).and_then(|m| m.as_str().parse().ok());
    let mut letter: Option<char> = captures.get(3).and_then(|m| m.as_str().chars().next());

    if chapter.is_none() {
        chapter = default_chapter;
    }
    if chapter.is_none() {
        chapter = verse.take();
    }
    if verse.is_none() {
        verse = default_verse;
    }
    if verse.is_none() {
        letter = None;
    }
    chapter?;
    Some(Fragment {
        chapter,
        verse,
        letter,
    })
}

fn clamp_chapter(book: u8, chapter: u16) -> u16 {
    chapter.clamp(1, books::chapter_count(book).unwrap_or(1))
}

fn clamp_verse(book: u8, chapter: u16, verse: u16) -> u16 {
    verse.clamp(1, books::max_verse(book, chapter).unwrap_or(1))
}
