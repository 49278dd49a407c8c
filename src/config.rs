use crate::error::Error;

/// Recognition configuration.
///
/// The only tunable is the maximum recognized sub-verse letter: with the
/// default `'d'`, "John 9:12a" through "9:12d" parse as letter partials and
/// anything beyond is ignored. The configuration is passed explicitly into
/// grammar construction; compiled grammars are cached per distinct value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Config {
    max_letter: char,
}

/// Maximum sub-verse letter used when no explicit configuration is given.
pub(crate) const DEFAULT_MAX_LETTER: char = 'd';

impl Config {
    /// Build a configuration with the given maximum sub-verse letter.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidLetter` unless the letter is ASCII lowercase.
    pub fn new(max_letter: char) -> Result<Self, Error> {
        if !max_letter.is_ascii_lowercase() {
            return Err(Error::InvalidLetter { letter: max_letter });
        }
        Ok(Self { max_letter })
    }

    /// The maximum sub-verse letter this configuration recognizes.
    pub fn max_letter(&self) -> char {
        self.max_letter
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_letter: DEFAULT_MAX_LETTER,
        }
    }
}
