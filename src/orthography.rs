//! Orthography configuration.
//!
//! An [`Orthography`] bundles everything that changed between revisions of
//! the written language: the particle lexicon, the direct-quotation markers,
//! the legacy letter table and the tone restored on unmarked contentives.
//! The built-in revisions are named by [`OrthographyVersion`]; anything else
//! can be assembled with the `with_*` builders or deserialized from data.
//!
//! ## Examples
//!
//! ```rust
//! use toaq_latin::{Orthography, OrthographyVersion, ToneMark};
//!
//! let current = Orthography::new();
//! assert_eq!(current.version, OrthographyVersion::Current);
//!
//! let custom = Orthography::for_version(OrthographyVersion::Legacy)
//!     .with_default_tone(ToneMark::Acute)
//!     .with_quote_markers(["mo", "lu"], ["teo"]);
//! assert!(custom.validate().is_err()); // "lu" is a lexically-toned base
//! ```

use crate::charset::{classify, fold_initial, CharClass, ToneMark};
use crate::diacritics::{bare_form, canonicalize, LetterSubstitution, LEGACY_LETTERS};
use crate::error::{Error, Result};
use crate::lexicon::ParticleLexicon;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// The built-in orthography revisions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrthographyVersion {
    #[default]
    Current,
    /// The revision before `go` became a contentive.
    Legacy,
}

/// Configuration for a [`Normalizer`](crate::Normalizer).
///
/// # Examples
///
/// ```rust
/// use toaq_latin::{Normalizer, Orthography, ToneMark};
///
/// let orthography = Orthography::new().with_default_tone(ToneMark::Acute);
/// let normalizer = Normalizer::new(orthography).unwrap();
/// assert_eq!(normalizer.normalize("da pu").unwrap(), "da pú");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Orthography {
    pub version: OrthographyVersion,
    pub lexicon: ParticleLexicon,
    /// Bare forms of the words opening a direct quotation.
    pub quote_openers: IndexSet<String>,
    /// Bare forms of the words closing a direct quotation.
    pub quote_closers: IndexSet<String>,
    pub substitutions: Vec<LetterSubstitution>,
    /// Tone given to a contentive whose main vowel is unmarked.
    pub default_tone: ToneMark,
}

impl Default for Orthography {
    fn default() -> Self {
        Self::for_version(OrthographyVersion::Current)
    }
}

impl Orthography {
    /// The current orthography.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// One of the built-in revisions.
    #[must_use]
    pub fn for_version(version: OrthographyVersion) -> Self {
        let lexicon = match version {
            OrthographyVersion::Current => ParticleLexicon::current(),
            OrthographyVersion::Legacy => ParticleLexicon::legacy(),
        };
        Orthography {
            version,
            lexicon,
            quote_openers: IndexSet::from(["mo".to_string()]),
            quote_closers: IndexSet::from(["teo".to_string()]),
            substitutions: LEGACY_LETTERS.to_vec(),
            default_tone: ToneMark::Hook,
        }
    }

    #[must_use]
    pub fn with_lexicon(mut self, lexicon: ParticleLexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    /// Replaces the quotation markers. Forms are reduced to their bare
    /// spelling, so `mó` and `mo` name the same marker.
    #[must_use]
    pub fn with_quote_markers<O, C, S, T>(mut self, openers: O, closers: C) -> Self
    where
        O: IntoIterator<Item = S>,
        C: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        self.quote_openers = openers.into_iter().map(|s| marker_key(s.as_ref())).collect();
        self.quote_closers = closers.into_iter().map(|s| marker_key(s.as_ref())).collect();
        self
    }

    #[must_use]
    pub fn with_substitution(mut self, from: char, to: char) -> Self {
        self.substitutions.retain(|sub| sub.from != from);
        self.substitutions.push(LetterSubstitution::new(from, to));
        self
    }

    #[must_use]
    pub fn with_default_tone(mut self, tone: ToneMark) -> Self {
        self.default_tone = tone;
        self
    }

    /// Brings hand-written data into canonical spelling: lexicon entries and
    /// quote markers are canonicalized, markers reduced to bare forms.
    #[must_use]
    pub fn canonicalized(mut self) -> Self {
        self.lexicon = self.lexicon.canonicalized();
        self.quote_openers = self.quote_openers.iter().map(|s| marker_key(s)).collect();
        self.quote_closers = self.quote_closers.iter().map(|s| marker_key(s)).collect();
        self
    }

    /// Checks the orthography for internal consistency.
    ///
    /// # Errors
    ///
    /// - [`Error::OverlappingParticle`] if the lexicon's categories overlap
    /// - [`Error::InvalidOrthography`] if a quote marker set is empty, a form
    ///   is both an opener and a closer, a marker is a lexically-toned base,
    ///   the default tone is the legacy caron, or a substitution maps onto a
    ///   codepoint outside the charset
    pub fn validate(&self) -> Result<()> {
        self.lexicon.validate()?;

        if self.quote_openers.is_empty() || self.quote_closers.is_empty() {
            return Err(Error::invalid_orthography(
                "at least one opening and one closing quote marker is required",
            ));
        }
        if let Some(both) = self.quote_openers.intersection(&self.quote_closers).next() {
            return Err(Error::invalid_orthography(&format!(
                "'{both}' is both an opening and a closing quote marker"
            )));
        }
        let families = self.lexicon.lexical_families();
        if let Some(marker) = self
            .quote_openers
            .iter()
            .chain(self.quote_closers.iter())
            .find(|m| families.contains_key(*m))
        {
            return Err(Error::invalid_orthography(&format!(
                "quote marker '{marker}' is a lexically-toned function word"
            )));
        }

        if self.default_tone.is_legacy() {
            return Err(Error::invalid_orthography(&format!(
                "the {} is not a tone of the current orthography",
                self.default_tone
            )));
        }

        for sub in &self.substitutions {
            let classes = classify(sub.to);
            let in_charset = classes.contains(CharClass::StandardVowel)
                || classes.contains(CharClass::StandardConsonant);
            if !in_charset {
                return Err(Error::invalid_orthography(&format!(
                    "substitution '{}' -> '{}' leaves the charset",
                    sub.from, sub.to
                )));
            }
        }
        Ok(())
    }
}

fn marker_key(form: &str) -> String {
    fold_initial(&bare_form(&canonicalize(form.trim())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_versions_validate() {
        assert!(Orthography::new().validate().is_ok());
        assert!(Orthography::for_version(OrthographyVersion::Legacy)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_defaults() {
        let orthography = Orthography::default();
        assert_eq!(orthography.version, OrthographyVersion::Current);
        assert_eq!(orthography.default_tone, ToneMark::Hook);
        assert!(orthography.quote_openers.contains("mo"));
        assert!(orthography.quote_closers.contains("teo"));
        assert_eq!(orthography.substitutions, LEGACY_LETTERS);
    }

    #[test]
    fn test_markers_are_reduced_to_bare_forms() {
        let orthography = Orthography::new().with_quote_markers(["Mó"], ["tẻo"]);
        assert!(orthography.quote_openers.contains("mo"));
        assert!(orthography.quote_closers.contains("teo"));
    }

    #[test]
    fn test_shared_marker_is_rejected() {
        let orthography = Orthography::new().with_quote_markers(["mo"], ["mo"]);
        assert!(matches!(
            orthography.validate(),
            Err(Error::InvalidOrthography(_))
        ));
    }

    #[test]
    fn test_empty_markers_are_rejected() {
        let orthography = Orthography::new().with_quote_markers(["mo"], Vec::<String>::new());
        assert!(orthography.validate().is_err());
    }

    #[test]
    fn test_caron_default_tone_is_rejected() {
        let orthography = Orthography::new().with_default_tone(ToneMark::Caron);
        assert!(orthography.validate().is_err());
    }

    #[test]
    fn test_substitution_must_stay_in_charset() {
        let good = Orthography::new().with_substitution('w', 'o');
        assert!(good.validate().is_ok());
        assert_eq!(
            good.substitutions.iter().filter(|s| s.from == 'w').count(),
            1
        );

        let bad = Orthography::new().with_substitution('w', '#');
        assert!(bad.validate().is_err());
    }
}
