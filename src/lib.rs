//! # toaq_latin
//!
//! Orthographic normalization for Toaq written in the Latin alphabet.
//!
//! ## What does it do?
//!
//! Toaq text in the wild is written many ways: with legacy letters (`x` for
//! the glottal stop, dotted `i`), with carons where the current orthography
//! uses diaereses, with the tone of most words left out, and with length
//! marks dropped. This crate brings all of it to one canonical spelling, so
//! that dictionary keys, search indexes and corpus tooling agree on how a
//! word is written.
//!
//! ## Key Features
//!
//! - **Canonical codepoints**: legacy letters substituted, marks ordered,
//!   output always NFC
//! - **Tone restoration**: contentives get the default tone, toneless
//!   particles lose stray tones, lexically-toned particles are checked
//! - **Length marks**: macrons restored on every non-initial syllable
//! - **Direct quotation**: `mo … teo` spans are normalized on their own
//! - **Versioned orthographies**: the particle lexicon and quote markers are
//!   data, loadable with serde
//!
//! ## Quick Start
//!
//! ```rust
//! use toaq_latin::{lemma_of, normalize};
//!
//! // Running text: tones and length marks restored.
//! assert_eq!(normalize("Pu jadi da").unwrap(), "Pủ jảdī da");
//!
//! // A single unmarked word is a citation form.
//! assert_eq!(normalize("JADI").unwrap(), "jadī");
//!
//! // Lookup keys drop tone entirely.
//! assert_eq!(lemma_of("Jảdı"), "jadī");
//! ```
//!
//! ### Custom orthographies
//!
//! ```rust
//! use toaq_latin::{Normalizer, Orthography, OrthographyVersion, ToneMark};
//!
//! let legacy = Normalizer::for_version(OrthographyVersion::Legacy);
//! assert_eq!(legacy.normalize("da go").unwrap(), "da go");
//!
//! let acute = Normalizer::new(Orthography::new().with_default_tone(ToneMark::Acute)).unwrap();
//! assert_eq!(acute.normalize("da go").unwrap(), "da gó");
//! ```
//!
//! ## Errors
//!
//! Normalization only fails when a lexically-toned particle is written with
//! a tone it does not take; see [`Error`].
//!
//! ## Thread Safety
//!
//! A [`Normalizer`] is immutable once built. The free functions in this
//! module share one default instance, built on first use.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`normalize_text.rs`** - Normalizing running text and quotations
//! - **`lemma_keys.rs`** - Building dictionary lookup keys
//! - **`custom_orthography.rs`** - Loading an orthography from JSON
//!
//! Run any example with: `cargo run --example <name>`

pub mod charset;
pub mod diacritics;
pub mod error;
pub mod lexicon;
pub mod normalizer;
pub mod orthography;
pub mod phonotactics;
pub mod quote;
pub mod token;
pub mod tone;

pub use charset::ToneMark;
pub use diacritics::{canonicalize, diacriticless, replace_carons};
pub use error::{Error, Result};
pub use lexicon::{ParticleLexicon, ToneClass};
pub use normalizer::{Normalized, Normalizer};
pub use orthography::{Orthography, OrthographyVersion};
pub use quote::{QuoteSpan, SpanKind};
pub use tone::{restore_macrons, WordRole};

use std::sync::LazyLock;

static DEFAULT: LazyLock<Normalizer> = LazyLock::new(Normalizer::default);

/// Normalizes `text` under the current orthography.
///
/// # Examples
///
/// ```rust
/// use toaq_latin::normalize;
///
/// assert_eq!(normalize("da go").unwrap(), "da gỏ");
/// assert_eq!(normalize("jádı").unwrap(), "jádī");
/// assert_eq!(normalize("ǎ").unwrap(), "ä");
/// ```
///
/// # Errors
///
/// Returns [`Error::MalformedFunctionWordTone`] if a lexically-toned function
/// word carries a tone it does not take.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn normalize(text: &str) -> Result<String> {
    DEFAULT.normalize(text)
}

/// The lookup key of `text` under the current orthography.
///
/// ```rust
/// use toaq_latin::lemma_of;
///
/// assert_eq!(lemma_of("Ruqshảo"), "ruqshāo");
/// ```
#[must_use]
pub fn lemma_of(text: &str) -> String {
    DEFAULT.lemma_of(text)
}

/// Whether `text` can be a dictionary headword under the current orthography.
///
/// ```rust
/// use toaq_latin::is_a_lemma;
///
/// assert!(is_a_lemma("jadī"));
/// assert!(is_a_lemma("tou-"));
/// assert!(is_a_lemma("mâ"));
/// assert!(!is_a_lemma("jadı"));
/// ```
#[must_use]
pub fn is_a_lemma(text: &str) -> bool {
    DEFAULT.is_lemma(text)
}

/// Whether `text` has the shape of a contentive in citation form.
#[must_use]
pub fn is_a_contentive_lemma(text: &str) -> bool {
    phonotactics::is_contentive_lemma(text)
}

/// Whether `text` has the shape of a contentive as written in prose.
///
/// ```rust
/// use toaq_latin::is_an_inflected_contentive;
///
/// assert!(is_an_inflected_contentive("jảdī"));
/// assert!(!is_an_inflected_contentive("jảdỉ"));
/// ```
#[must_use]
pub fn is_an_inflected_contentive(text: &str) -> bool {
    phonotactics::is_inflected_contentive(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_functions_match_default_normalizer() {
        let normalizer = Normalizer::default();
        for text in ["da go", "Mo jadı teo da", "JADI", "ǎ", "pu  sa\tpoq"] {
            assert_eq!(normalize(text), normalizer.normalize(text));
            assert_eq!(lemma_of(text), normalizer.lemma_of(text));
        }
    }

    #[test]
    fn test_normalize_examples() {
        assert_eq!(normalize("da go").unwrap(), "da gỏ");
        assert_eq!(normalize("jádı").unwrap(), "jádī");
        assert_eq!(normalize("ǎ").unwrap(), "ä");
    }

    #[test]
    fn test_lexical_tone_error() {
        assert!(matches!(
            normalize("pu lı da"),
            Err(Error::MalformedFunctionWordTone { .. })
        ));
        assert!(normalize("pu lủ da").is_ok());
    }

    #[test]
    fn test_lemma_predicates() {
        assert!(is_a_lemma("sıa"));
        assert!(is_a_contentive_lemma("ruqshāo"));
        assert!(!is_a_contentive_lemma("ruqshao"));
        assert!(is_an_inflected_contentive("rủqshāo"));
    }

    #[test]
    fn test_reexports() {
        assert_eq!(canonicalize("xao"), "ao");
        assert_eq!(restore_macrons("jadı"), "jadī");
        assert_eq!(replace_carons("ǔ"), "ü");
        assert_eq!(diacriticless("Jảdī"), "jadı");
    }
}
