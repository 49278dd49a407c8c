//! Recognize Bible references in free text, resolve them to canonical
//! verse coordinates, and render them back as normalized strings.
//!
//! ```
//! let pericope = pericope::parse_one("as Paul wrote in rom. 3:6-11 ...").unwrap();
//! assert_eq!(pericope.to_string(), "Romans 3:6–11");
//! assert_eq!(pericope.verses().next().unwrap().id(), 45_003_006);
//! ```
//!
//! Recognition is permissive: abbreviations, common misspellings, stray
//! punctuation, and out-of-bounds chapter or verse numbers all resolve to
//! something sensible. The explicit constructors ([`Verse::new`],
//! [`Pericope::new`]) are the strict path and fail fast instead.

pub mod books;
mod config;
mod error;
mod formatter;
mod grammar;
mod pericope;
mod resolver;
mod scanner;
mod segmenter;
mod types;

pub use config::Config;
pub use error::Error;
pub use formatter::FormatOptions;
pub use pericope::Pericope;
pub use segmenter::{
    Extraction, Segment, extract, extract_with, rsub, rsub_with, split, split_with, sub, sub_with,
};
pub use types::{Verse, VerseRange, Verses};

/// Every reference in `text`, in order of appearance.
pub fn parse(text: &str) -> Vec<Pericope> {
    Pericope::parse_all(text)
}

/// The first reference in `text`, if any.
pub fn parse_one(text: &str) -> Option<Pericope> {
    Pericope::parse_one(text)
}
