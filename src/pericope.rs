//! The resolved reference value: one book, one or more ranges within it.

use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeStruct as _;
use serde::{Serialize, Serializer};

use crate::books;
use crate::config::Config;
use crate::error::Error;
use crate::formatter::{self, FormatOptions};
use crate::grammar::Grammar;
use crate::scanner::{self, ReferenceMatch};
use crate::types::{Verse, VerseRange};

/// A Bible reference resolved to concrete coordinates: a single book and
/// an ordered list of verse ranges within it.
///
/// Equality and hashing consider only the book and the ranges; the
/// original matched text, when present, is provenance.
#[derive(Debug, Clone)]
pub struct Pericope {
    book: u8,
    original_string: Option<String>,
    ranges: Vec<VerseRange>,
}

impl Pericope {
    /// Build a pericope from an explicit book and range list.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyVerseCollection` when `ranges` is empty,
    /// `Error::InvalidBook` for a book outside 1..=66, and
    /// `Error::MixedBooks` when any range lies in a different book.
    pub fn new(book: u8, ranges: Vec<VerseRange>) -> Result<Self, Error> {
        if books::book_name(book).is_none() {
            return Err(Error::InvalidBook {
                book: u32::from(book),
            });
        }
        if ranges.is_empty() {
            return Err(Error::EmptyVerseCollection);
        }
        for range in &ranges {
            for bound in [range.begin().book(), range.end().book()] {
                if bound != book {
                    return Err(Error::MixedBooks {
                        first: book,
                        second: bound,
                    });
                }
            }
        }
        Ok(Self {
            book,
            original_string: None,
            ranges,
        })
    }

    /// Build a pericope covering a single range.
    pub fn from_range(range: VerseRange) -> Self {
        Self {
            book: range.begin().book(),
            original_string: None,
            ranges: vec![range],
        }
    }

    /// Build a pericope from an unordered collection of verses.
    ///
    /// The collection is sorted and de-duplicated, the book is taken from
    /// the earliest verse, verses from any other book are dropped, and
    /// consecutive verses merge into ranges.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyVerseCollection` when nothing usable remains.
    pub fn from_verses(verses: impl IntoIterator<Item = Verse>) -> Result<Self, Error> {
        let mut verses: Vec<Verse> = verses.into_iter().collect();
        verses.sort_unstable();
        verses.dedup();
        let first = *verses.first().ok_or(Error::EmptyVerseCollection)?;
        verses.retain(|verse| verse.book() == first.book());

        let mut ranges = Vec::new();
        let mut begin = first;
        let mut end = first;
        for &verse in &verses[1..] {
            if end.next() == Some(verse) {
                end = verse;
            } else {
                ranges.push(VerseRange::new(begin, end)?);
                begin = verse;
                end = verse;
            }
        }
        ranges.push(VerseRange::new(begin, end)?);
        Ok(Self {
            book: first.book(),
            original_string: None,
            ranges,
        })
    }

    /// Build a pericope from canonical numeric ids. Ids that name no valid
    /// verse are dropped silently, as are duplicates and ids from a book
    /// other than the collection's earliest.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyVerseCollection` when no valid ids remain.
    pub fn from_verse_ids(ids: &[u32]) -> Result<Self, Error> {
        Self::from_verses(ids.iter().filter_map(|&id| Verse::from_id(id).ok()))
    }

    pub(crate) fn from_match(found: ReferenceMatch, text: &str) -> Self {
        Self {
            book: found.book,
            original_string: Some(text[found.start..found.end].to_string()),
            ranges: found.ranges,
        }
    }

    /// Every pericope in `text`, in order of appearance.
    pub fn parse_all(text: &str) -> Vec<Self> {
        Self::parse_all_with(text, Config::default())
    }

    /// [`Pericope::parse_all`] under a specific configuration.
    pub fn parse_all_with(text: &str, config: Config) -> Vec<Self> {
        let grammar = Grammar::cached(config);
        scanner::match_all(&grammar, text)
            .into_iter()
            .map(|found| Self::from_match(found, text))
            .collect()
    }

    /// The first pericope in `text`, if any.
    pub fn parse_one(text: &str) -> Option<Self> {
        Self::parse_one_with(text, Config::default())
    }

    /// [`Pericope::parse_one`] under a specific configuration.
    pub fn parse_one_with(text: &str, config: Config) -> Option<Self> {
        let grammar = Grammar::cached(config);
        scanner::match_all(&grammar, text)
            .into_iter()
            .next()
            .map(|found| Self::from_match(found, text))
    }

    /// Book number, 1 through 66.
    pub fn book(&self) -> u8 {
        self.book
    }

    /// Canonical display name of the book.
    pub fn book_name(&self) -> &'static str {
        books::book_name(self.book).unwrap_or_default()
    }

    /// Whether the book cites chapter numbers. Single-chapter books
    /// (Obadiah, Philemon, ...) are cited by verse alone.
    pub fn has_chapters(&self) -> bool {
        books::has_chapters(self.book)
    }

    /// The matched text this pericope was recognized in, when it came
    /// from text.
    pub fn original_string(&self) -> Option<&str> {
        self.original_string.as_deref()
    }

    /// The resolved ranges, in declaration order.
    pub fn ranges(&self) -> &[VerseRange] {
        &self.ranges
    }

    /// Every verse coordinate the pericope spans, range by range.
    pub fn verses(&self) -> impl Iterator<Item = Verse> + '_ {
        self.ranges.iter().flat_map(VerseRange::verses)
    }

    /// Whether two pericopes cite the same book and share any verse.
    pub fn intersects(&self, other: &Self) -> bool {
        if self.book != other.book {
            return false;
        }
        self.ranges
            .iter()
            .any(|mine| other.ranges.iter().any(|theirs| mine.overlaps(theirs)))
    }

    /// Render with explicit formatting options.
    pub fn format(&self, options: &FormatOptions) -> String {
        let reference = formatter::format_reference(self.book, &self.ranges, options);
        format!("{} {reference}", self.book_name())
    }
}

impl fmt::Display for Pericope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(&FormatOptions::default()))
    }
}

impl PartialEq for Pericope {
    fn eq(&self, other: &Self) -> bool {
        self.book == other.book && self.ranges == other.ranges
    }
}

impl Eq for Pericope {}

impl std::hash::Hash for Pericope {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.book.hash(state);
        self.ranges.hash(state);
    }
}

impl FromStr for Pericope {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Error> {
        Self::parse_one(text).ok_or_else(|| Error::NoReferenceFound {
            text: text.to_string(),
        })
    }
}

impl Serialize for Pericope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Pericope", 4)?;
        state.serialize_field("book", &self.book)?;
        state.serialize_field("book_name", self.book_name())?;
        state.serialize_field("reference", &self.to_string())?;
        let ids: Vec<String> = self.verses().map(|verse| verse.id_string()).collect();
        state.serialize_field("verse_ids", &ids)?;
        state.end()
    }
}
