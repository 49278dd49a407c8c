//! Verse coordinates and closed verse ranges.

use std::cmp::Ordering;
use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::books;
use crate::config::DEFAULT_MAX_LETTER;
use crate::error::Error;

/// A single verse coordinate: book, chapter, verse, and an optional
/// sub-verse letter ("John 9:12a"). Immutable once constructed; every
/// constructor validates against the canon tables.
///
/// A bare verse is not equal to its 'a' partial, but the two order
/// adjacently (the whole verse first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Verse {
    book: u8,
    chapter: u16,
    verse: u16,
    letter: Option<char>,
}

impl Verse {
    /// Build a verse, validating every coordinate.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidBook`, `Error::InvalidChapter`,
    /// `Error::InvalidVerse`, or `Error::InvalidLetter` for out-of-bounds
    /// coordinates.
    pub fn new(book: u8, chapter: u16, verse: u16, letter: Option<char>) -> Result<Self, Error> {
        let chapters = books::chapter_count(book).ok_or(Error::InvalidBook {
            book: u32::from(book),
        })?;
        if chapter < 1 || chapter > chapters {
            return Err(Error::InvalidChapter { book, chapter });
        }
        let verses = books::max_verse(book, chapter).unwrap_or(0);
        if verse < 1 || verse > verses {
            return Err(Error::InvalidVerse {
                book,
                chapter,
                verse,
            });
        }
        if let Some(letter) = letter
            && !letter.is_ascii_lowercase()
        {
            return Err(Error::InvalidLetter { letter });
        }
        Ok(Self {
            book,
            chapter,
            verse,
            letter,
        })
    }

    /// Build a verse from its canonical numeric id
    /// (`book * 1_000_000 + chapter * 1_000 + verse`).
    ///
    /// # Errors
    ///
    /// Returns the same coordinate errors as [`Verse::new`].
    pub fn from_id(id: u32) -> Result<Self, Error> {
        let book = id / 1_000_000;
        let chapter = (id % 1_000_000) / 1_000;
        let verse = id % 1_000;
        let book = u8::try_from(book).map_err(|_| Error::InvalidBook { book })?;
        Self::new(book, chapter as u16, verse as u16, None)
    }

    /// Parse a canonical id string, e.g. `"45003004"` or `"45003004a"`.
    ///
    /// # Errors
    ///
    /// Returns `Error::MalformedId` when the input is not digits plus an
    /// optional trailing letter, or a coordinate error when it is out of
    /// bounds.
    pub fn parse(input: &str) -> Result<Self, Error> {
        let malformed = || Error::MalformedId {
            input: input.to_string(),
        };
        let (digits, letter) = match input.chars().last() {
            Some(c) if c.is_ascii_lowercase() => (&input[..input.len() - 1], Some(c)),
            Some(_) => (input, None),
            None => return Err(malformed()),
        };
        let id: u32 = digits.parse().map_err(|_| malformed())?;
        let whole = Self::from_id(id)?;
        Ok(Self {
            letter,
            ..whole
        })
    }

    /// Book number, 1 (Genesis) through 66 (Revelation).
    pub fn book(&self) -> u8 {
        self.book
    }

    /// Chapter number within the book, 1-based.
    pub fn chapter(&self) -> u16 {
        self.chapter
    }

    /// Verse number within the chapter, 1-based.
    pub fn verse(&self) -> u16 {
        self.verse
    }

    /// Sub-verse letter, if this is a letter partial.
    pub fn letter(&self) -> Option<char> {
        self.letter
    }

    /// Whether this coordinate cites a sub-fragment of a verse.
    pub fn is_partial(&self) -> bool {
        self.letter.is_some()
    }

    /// Canonical numeric id. The letter does not participate: a partial
    /// shares the id of its whole verse.
    pub fn id(&self) -> u32 {
        u32::from(self.book) * 1_000_000 + u32::from(self.chapter) * 1_000 + u32::from(self.verse)
    }

    /// Canonical id string — the numeric id with the letter appended for
    /// partials ("45003004a"). This is the interchange representation.
    pub fn id_string(&self) -> String {
        let id = self.id();
        match self.letter {
            Some(letter) => format!("{id}{letter}"),
            None => id.to_string(),
        }
    }

    /// The next coordinate in canonical order, using the default maximum
    /// sub-verse letter. `None` only after the final verse of the final
    /// book.
    pub fn next(&self) -> Option<Self> {
        self.next_with_max(DEFAULT_MAX_LETTER)
    }

    /// Successor under a specific maximum letter: a partial advances to the
    /// next letter until the maximum, then to the next whole verse; a whole
    /// verse advances through chapter and book boundaries.
    pub(crate) fn next_with_max(&self, max_letter: char) -> Option<Self> {
        if let Some(letter) = self.letter
            && letter < max_letter
        {
            let letter = char::from(letter as u8 + 1);
            return Some(Self {
                letter: Some(letter),
                ..*self
            });
        }
        let verses = books::max_verse(self.book, self.chapter)?;
        if self.verse < verses {
            return Some(Self {
                book: self.book,
                chapter: self.chapter,
                verse: self.verse + 1,
                letter: None,
            });
        }
        let chapters = books::chapter_count(self.book)?;
        if self.chapter < chapters {
            return Some(Self {
                book: self.book,
                chapter: self.chapter + 1,
                verse: 1,
                letter: None,
            });
        }
        if self.book < 66 {
            return Some(Self {
                book: self.book + 1,
                chapter: 1,
                verse: 1,
                letter: None,
            });
        }
        None
    }

    /// Replace the letter without revalidating the other coordinates.
    pub(crate) fn with_letter(self, letter: Option<char>) -> Self {
        Self { letter, ..self }
    }

    /// Comparison key: a missing letter sorts as 'a', with the whole verse
    /// breaking the tie ahead of its 'a' partial.
    fn sort_key(&self) -> (u8, u16, u16, char, bool) {
        (
            self.book,
            self.chapter,
            self.verse,
            self.letter.unwrap_or('a'),
            self.letter.is_some(),
        )
    }
}

impl Ord for Verse {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for Verse {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Verse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id_string())
    }
}

impl Serialize for Verse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.id_string())
    }
}

impl<'de> Deserialize<'de> for Verse {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(D::Error::custom)
    }
}

/// A closed, inclusive interval of verse coordinates, `begin <= end` by
/// construction.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct VerseRange {
    begin: Verse,
    end: Verse,
}

impl VerseRange {
    /// Build a range.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidRange` when `begin` follows `end`.
    pub fn new(begin: Verse, end: Verse) -> Result<Self, Error> {
        if begin > end {
            return Err(Error::InvalidRange {
                begin: begin.id_string(),
                end: end.id_string(),
            });
        }
        Ok(Self { begin, end })
    }

    /// A range covering a single coordinate.
    pub fn point(verse: Verse) -> Self {
        Self {
            begin: verse,
            end: verse,
        }
    }

    /// First coordinate of the range.
    pub fn begin(&self) -> Verse {
        self.begin
    }

    /// Last coordinate of the range.
    pub fn end(&self) -> Verse {
        self.end
    }

    /// Lazy iterator over every coordinate the range spans, in canonical
    /// order. Letter partials appear only where the range itself begins or
    /// ends on one. Restartable: each call yields a fresh iterator.
    pub fn verses(&self) -> Verses {
        Verses {
            upcoming: Some(self.begin),
            end: self.end,
            max_letter: DEFAULT_MAX_LETTER,
        }
    }

    /// Whether two ranges share any coordinate.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.end >= other.begin && self.begin <= other.end
    }
}

impl fmt::Debug for VerseRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.begin.id_string(), self.end.id_string())
    }
}

/// Iterator produced by [`VerseRange::verses`].
pub struct Verses {
    upcoming: Option<Verse>,
    end: Verse,
    max_letter: char,
}

impl Iterator for Verses {
    type Item = Verse;

    fn next(&mut self) -> Option<Verse> {
        let current = self.upcoming.take()?;
        if current > self.end {
            return None;
        }
        // The successor of a whole verse is the next whole verse, which
        // skips past an end that is a letter partial of the current one
        // (3:12 steps to 3:13, overshooting an end of 3:12a). Step onto
        // the end itself in that case so it is still yielded.
        self.upcoming = match current.next_with_max(self.max_letter) {
            Some(successor) if successor > self.end && current < self.end => Some(self.end),
            successor => successor,
        };
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(id: u32) -> Verse {
        Verse::from_id(id).expect("valid id")
    }

    #[test]
    fn construction_validates_bounds() {
        assert!(Verse::new(1, 1, 1, None).is_ok());
        assert!(matches!(
            Verse::new(67, 1, 1, None),
            Err(Error::InvalidBook { book: 67 })
        ));
        assert!(matches!(
            Verse::new(1, 51, 1, None),
            Err(Error::InvalidChapter { .. })
        ));
        assert!(matches!(
            Verse::new(1, 1, 32, None),
            Err(Error::InvalidVerse { .. })
        ));
        assert!(matches!(
            Verse::new(1, 1, 1, Some('A')),
            Err(Error::InvalidLetter { .. })
        ));
    }

    #[test]
    fn id_round_trip() {
        let verse = v(45_003_004);
        assert_eq!(verse.id(), 45_003_004);
        assert_eq!(verse.id_string(), "45003004");

        let partial = Verse::parse("45003004a").expect("valid id");
        assert_eq!(partial.letter(), Some('a'));
        assert_eq!(partial.id(), 45_003_004);
        assert_eq!(partial.id_string(), "45003004a");

        assert!(Verse::parse("45003004!").is_err());
        assert!(Verse::parse("").is_err());
        assert!(Verse::parse("999999999").is_err());
    }

    #[test]
    fn next_advances_within_a_chapter() {
        assert_eq!(v(1_003_001).next(), Some(v(1_003_002)));
    }

    #[test]
    fn next_rolls_into_the_following_chapter() {
        assert_eq!(v(1_009_029).next(), Some(v(1_010_001)));
    }

    #[test]
    fn next_crosses_book_boundaries() {
        assert_eq!(v(39_004_006).next(), Some(v(40_001_001)));
        assert_eq!(v(66_022_021).next(), None);
    }

    #[test]
    fn next_walks_letters_up_to_the_maximum() {
        let partial = Verse::parse("43009012a").expect("valid id");
        let b = partial.next().expect("has successor");
        assert_eq!(b.letter(), Some('b'));
        let d = Verse::parse("43009012d").expect("valid id");
        assert_eq!(d.next(), Some(v(43_009_013)));
    }

    #[test]
    fn ordering_treats_missing_letter_as_a() {
        let whole = v(43_009_012);
        let a = whole.with_letter(Some('a'));
        let b = whole.with_letter(Some('b'));
        assert!(whole < a);
        assert!(a < b);
        assert!(b < v(43_009_013));
        assert_ne!(whole, a);
    }

    #[test]
    fn range_rejects_inverted_bounds() {
        assert!(VerseRange::new(v(1_002_001), v(1_001_001)).is_err());
    }

    #[test]
    fn iteration_is_gap_free_across_chapters() {
        let range = VerseRange::new(v(19_122_006), v(19_124_002)).expect("valid range");
        let ids: Vec<u32> = range.verses().map(|verse| verse.id()).collect();
        assert_eq!(
            ids,
            vec![
                19_122_006, 19_122_007, 19_122_008, 19_122_009, 19_123_001, 19_123_002,
                19_123_003, 19_123_004, 19_124_001, 19_124_002,
            ]
        );
    }

    #[test]
    fn iteration_agrees_with_next() {
        let range = VerseRange::new(v(43_012_048), v(43_013_002)).expect("valid range");
        let verses: Vec<Verse> = range.verses().collect();
        for pair in verses.windows(2) {
            assert_eq!(pair[0].next(), Some(pair[1]));
            assert!(pair[0] < pair[1]);
        }
        assert_eq!(verses.first(), Some(&range.begin()));
        assert_eq!(verses.last(), Some(&range.end()));
    }

    #[test]
    fn iteration_yields_letter_partials_at_the_edges() {
        let begin = Verse::parse("43009012b").expect("valid id");
        let end = v(43_009_013);
        let range = VerseRange::new(begin, end).expect("valid range");
        let rendered: Vec<String> = range.verses().map(|verse| verse.id_string()).collect();
        assert_eq!(
            rendered,
            vec!["43009012b", "43009012c", "43009012d", "43009013"]
        );
    }

    #[test]
    fn iteration_reaches_a_partial_end_on_the_same_verse() {
        let end = Verse::parse("41003012a").expect("valid id");
        let range = VerseRange::new(v(41_003_012), end).expect("valid range");
        let rendered: Vec<String> = range.verses().map(|verse| verse.id_string()).collect();
        assert_eq!(rendered, vec!["41003012", "41003012a"]);

        // The same overshoot happens when the partial sits one verse on.
        let end = Verse::parse("41003013a").expect("valid id");
        let range = VerseRange::new(v(41_003_012), end).expect("valid range");
        let rendered: Vec<String> = range.verses().map(|verse| verse.id_string()).collect();
        assert_eq!(rendered, vec!["41003012", "41003013", "41003013a"]);
    }

    #[test]
    fn iteration_restarts() {
        let range = VerseRange::new(v(1_001_001), v(1_001_003)).expect("valid range");
        assert_eq!(range.verses().count(), 3);
        assert_eq!(range.verses().count(), 3);
    }

    #[test]
    fn overlap_is_symmetric() {
        let a = VerseRange::new(v(40_003_005), v(40_003_008)).expect("valid range");
        let b = VerseRange::new(v(40_003_008), v(40_003_015)).expect("valid range");
        let c = VerseRange::new(v(40_004_001), v(40_004_002)).expect("valid range");
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn serde_uses_id_strings() {
        let verse = Verse::parse("45003004a").expect("valid id");
        let json = serde_json::to_string(&verse).expect("serializes");
        assert_eq!(json, "\"45003004a\"");
        let back: Verse = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(back, verse);
    }
}
