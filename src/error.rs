/// Crate-level error type.
///
/// Boundary violations found while resolving text-derived references are
/// never surfaced here — they are clamped into range as a deliberate
/// permissiveness policy for noisy human input. These variants cover the
/// explicit construction APIs, where bad coordinates fail fast.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A verse or range collection was empty or contained nothing usable.
    #[error("no valid verses in collection")]
    EmptyVerseCollection,

    /// Book number outside 1..=66.
    #[error("{book} is not a valid book")]
    InvalidBook {
        /// The out-of-range book number.
        book: u32,
    },

    /// Chapter number outside the book's chapter range.
    #[error("{chapter} is not a valid chapter of book {book}")]
    InvalidChapter {
        /// Book the chapter was checked against.
        book: u8,
        /// The out-of-range chapter number.
        chapter: u16,
    },

    /// Sub-verse letter outside `a..=z`.
    #[error("`{letter}` is not a valid sub-verse letter")]
    InvalidLetter {
        /// The rejected letter.
        letter: char,
    },

    /// A range's begin coordinate follows its end coordinate.
    #[error("invalid range: {begin} > {end}")]
    InvalidRange {
        /// Canonical id string of the begin coordinate.
        begin: String,
        /// Canonical id string of the end coordinate.
        end: String,
    },

    /// Verse number outside the chapter's verse range.
    #[error("{verse} is not a valid verse of {book} {chapter}")]
    InvalidVerse {
        /// Book the verse was checked against.
        book: u8,
        /// Chapter the verse was checked against.
        chapter: u16,
        /// The out-of-range verse number.
        verse: u16,
    },

    /// A verse id string that is not `book*1_000_000 + chapter*1_000 +
    /// verse` with an optional letter suffix.
    #[error("malformed verse id: `{input}`")]
    MalformedId {
        /// The input that failed to parse.
        input: String,
    },

    /// A pericope's ranges named more than one book.
    #[error("ranges span multiple books ({first} and {second})")]
    MixedBooks {
        /// Book of the first range.
        first: u8,
        /// The conflicting book.
        second: u8,
    },

    /// Construction from text found no recognizable reference.
    #[error("no reference found in `{text}`")]
    NoReferenceFound {
        /// The text that was scanned.
        text: String,
    },
}
