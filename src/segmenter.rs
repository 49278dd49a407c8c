//! Splitting prose around references, and the `{{id}}` substitution pair.

use crate::config::Config;
use crate::grammar::Grammar;
use crate::pericope::Pericope;
use crate::scanner;
use crate::types::Verse;

/// One piece of segmented text: either literal prose or a recognized
/// reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Prose between references, byte-for-byte as it appeared.
    Text(String),
    /// A recognized and resolved reference.
    Reference(Pericope),
}

/// Text with its references pulled out, as produced by [`extract`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// The prose with every reference removed.
    pub text: String,
    /// The references, in order of appearance.
    pub pericopes: Vec<Pericope>,
}

/// Split `text` into alternating prose and reference segments.
///
/// Concatenating the segments (substituting each reference with its
/// original matched text) reproduces the input exactly.
pub fn split(text: &str) -> Vec<Segment> {
    split_with(text, Config::default())
}

/// [`split`] under a specific configuration.
pub fn split_with(text: &str, config: Config) -> Vec<Segment> {
    let grammar = Grammar::cached(config);
    let mut segments = Vec::new();
    let mut cursor = 0;
    for found in scanner::match_all(&grammar, text) {
        if found.start > cursor {
            segments.push(Segment::Text(text[cursor..found.start].to_string()));
        }
        cursor = found.end;
        segments.push(Segment::Reference(Pericope::from_match(found, text)));
    }
    if cursor < text.len() {
        segments.push(Segment::Text(text[cursor..].to_string()));
    }
    segments
}

/// Partition `text` into its prose and its references.
pub fn extract(text: &str) -> Extraction {
    extract_with(text, Config::default())
}

/// [`extract`] under a specific configuration.
pub fn extract_with(text: &str, config: Config) -> Extraction {
    let mut prose = String::new();
    let mut pericopes = Vec::new();
    for segment in split_with(text, config) {
        match segment {
            Segment::Text(literal) => prose.push_str(&literal),
            Segment::Reference(pericope) => pericopes.push(pericope),
        }
    }
    Extraction {
        text: prose,
        pericopes,
    }
}

/// Replace every reference in `text` with a `{{...}}` placeholder of
/// space-joined canonical verse ids.
pub fn sub(text: &str) -> String {
    sub_with(text, Config::default())
}

/// [`sub`] under a specific configuration.
pub fn sub_with(text: &str, config: Config) -> String {
    let mut out = String::new();
    for segment in split_with(text, config) {
        match segment {
            Segment::Text(literal) => out.push_str(&literal),
            Segment::Reference(pericope) => {
                out.push_str("{{");
                for (i, verse) in pericope.verses().enumerate() {
                    if i > 0 {
                        out.push(' ');
                    }
                    out.push_str(&verse.id_string());
                }
                out.push_str("}}");
            }
        }
    }
    out
}

/// Undo [`sub`]: render every `{{...}}` placeholder back into a canonical
/// textual reference. Placeholders whose ids name no valid verses are
/// left untouched.
pub fn rsub(text: &str) -> String {
    rsub_with(text, Config::default())
}

/// [`rsub`] under a specific configuration.
pub fn rsub_with(text: &str, config: Config) -> String {
    let grammar = Grammar::cached(config);
    grammar
        .rsub_regex
        .replace_all(text, |captures: &regex::Captures<'_>| {
            let verses = captures[1]
                .split_whitespace()
                .filter_map(|token| Verse::parse(token).ok());
            match Pericope::from_verses(verses) {
                Ok(pericope) => pericope.to_string(),
                Err(_) => captures[0].to_string(),
            }
        })
        .into_owned()
}
