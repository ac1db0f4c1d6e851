//! Error types for Toaq normalization.
//!
//! The normalizer is total over its input except for one case: a function
//! word whose tone is fixed by the lexicon, written with a different tone.
//! Guessing the intended tone there could silently change headword identity,
//! so the call fails and the caller decides what to do with the record.
//!
//! ## Error Categories
//!
//! - **Malformed function-word tone**: the only error [`normalize`](crate::normalize) raises
//! - **Overlapping particle**: an orthography lists one form under two tone categories
//! - **Invalid orthography**: any other inconsistency in a custom orthography
//!
//! ## Examples
//!
//! ```rust
//! use toaq_latin::{normalize, Error};
//!
//! let result = normalize("da lâ");
//! assert!(result.is_ok());
//!
//! match normalize("da lı") {
//!     Err(Error::MalformedFunctionWordTone { base, .. }) => assert_eq!(base, "lı"),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

use crate::lexicon::ToneClass;
use thiserror::Error;

/// Represents everything that can go wrong while building or running a normalizer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A lexically-toned function word carrying a tone it does not take.
    #[error(
        "Disallowed tone on function word '{word}': '{base}' is only written as {}",
        .allowed.join(", ")
    )]
    MalformedFunctionWordTone {
        word: String,
        base: String,
        allowed: Vec<String>,
    },

    /// A particle form listed under two tone categories.
    #[error("Particle '{form}' is listed as both {first} and {second}")]
    OverlappingParticle {
        form: String,
        first: ToneClass,
        second: ToneClass,
    },

    /// Any other inconsistency in an orthography definition.
    #[error("Invalid orthography: {0}")]
    InvalidOrthography(String),
}

impl Error {
    /// Creates a function-word tone error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toaq_latin::Error;
    ///
    /// let err = Error::malformed_function_word_tone("lı", "lı", ["lî"]);
    /// assert!(err.to_string().contains("only written as lî"));
    /// ```
    pub fn malformed_function_word_tone<I, S>(word: &str, base: &str, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Error::MalformedFunctionWordTone {
            word: word.to_string(),
            base: base.to_string(),
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    pub fn overlapping_particle(form: &str, first: ToneClass, second: ToneClass) -> Self {
        Error::OverlappingParticle {
            form: form.to_string(),
            first,
            second,
        }
    }

    pub fn invalid_orthography(msg: &str) -> Self {
        Error::InvalidOrthography(msg.to_string())
    }

    /// The offending token, for errors raised while normalizing text.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        match self {
            Error::MalformedFunctionWordTone { word, .. } => Some(word),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
