//! The closed-class particle lexicon.
//!
//! Every particle falls in exactly one [`ToneClass`]:
//!
//! - **Toneless**: never carries a tone; any tone written on it is dropped.
//! - **Grammatical**: its tone comes from syntax, so the normalizer leaves
//!   whatever the writer put there and never restores a default.
//! - **Lexical**: its tone is part of its identity (`mả` and `mâ` are two
//!   different words); any other tone on the same base is an error.
//!
//! Forms are stored in canonical NFC spelling with a lowercase first letter,
//! which is also the key lookups use.

use crate::charset::fold_initial;
use crate::diacritics::{bare_form, canonicalize};
use crate::error::{Error, Result};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_normalization::UnicodeNormalization;

const QUANTIFIERS: &[&str] = &["sa", "sıa", "tu", "ja", "ke", "hı", "co", "baq", "hoı"];
const CONJUNCTIONS: &[&str] = &["ru", "ra", "ro", "rı", "roı"];
const ILLOCUTIONS: &[&str] = &["da", "ba", "ka", "moq"];
const LINKERS: &[&str] = &["fı", "cu", "ta"];
const SENTENCE_PREFIXES: &[&str] = &["je", "keo", "tıu"];
const PREFIXES: &[&str] = &["ku", "tou", "beı"];
const TERMINATORS: &[&str] = &["na", "ga", "ceı"];
const PRENEX_MARKERS: &[&str] = &["bı", "pa"];
const FREEMOD_PREFIXES: &[&str] = &["ju", "la"];
const OTHER_TONELESS: &[&str] = &["to", "kıo", "kı", "teo", "hu"];

const GRAMMATICALLY_TONED: &[&str] = &["po", "jeı", "mea", "mı", "shu", "mo"];

const LEXICALLY_TONED: &[&str] = &["mả", "mâ", "tỉo", "tîo", "lủ", "lú", "lü", "lũ", "lî"];

const INTERJECTIONS: &[&str] = &[
    "m\u{0304}",
    "m\u{0301}",
    "m\u{0308}",
    "m\u{0309}",
    "m\u{0302}",
    "m\u{0300}",
    "m\u{0303}",
];

/// How a particle's tone is determined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToneClass {
    Toneless,
    Grammatical,
    Lexical,
}

impl fmt::Display for ToneClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ToneClass::Toneless => "toneless",
            ToneClass::Grammatical => "grammatically toned",
            ToneClass::Lexical => "lexically toned",
        })
    }
}

/// Particles partitioned by [`ToneClass`], plus the prefix and interjection
/// forms accepted as lemmas.
///
/// # Examples
///
/// ```rust
/// use toaq_latin::lexicon::{ParticleLexicon, ToneClass};
///
/// let lexicon = ParticleLexicon::current();
/// assert_eq!(lexicon.tone_class("da"), Some(ToneClass::Toneless));
/// assert_eq!(lexicon.tone_class("Mo"), Some(ToneClass::Grammatical));
/// assert_eq!(lexicon.tone_class("mâ"), Some(ToneClass::Lexical));
/// assert_eq!(lexicon.tone_class("jadī"), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleLexicon {
    pub toneless: IndexSet<String>,
    pub grammatical: IndexSet<String>,
    pub lexical: IndexSet<String>,
    /// Toneless particles that may also be written as hyphenated prefixes.
    pub prefixes: IndexSet<String>,
    pub interjections: IndexSet<String>,
}

impl Default for ParticleLexicon {
    fn default() -> Self {
        Self::current()
    }
}

fn set_of(groups: &[&[&str]]) -> IndexSet<String> {
    groups
        .iter()
        .flat_map(|group| group.iter())
        .map(|form| form.nfc().collect::<String>())
        .collect()
}

impl ParticleLexicon {
    /// The lexicon of the current orthography.
    #[must_use]
    pub fn current() -> Self {
        ParticleLexicon {
            toneless: set_of(&[
                QUANTIFIERS,
                OTHER_TONELESS,
                CONJUNCTIONS,
                ILLOCUTIONS,
                LINKERS,
                SENTENCE_PREFIXES,
                PREFIXES,
                TERMINATORS,
                PRENEX_MARKERS,
                FREEMOD_PREFIXES,
            ]),
            grammatical: set_of(&[GRAMMATICALLY_TONED]),
            lexical: set_of(&[LEXICALLY_TONED]),
            prefixes: set_of(&[PREFIXES]),
            interjections: set_of(&[INTERJECTIONS]),
        }
    }

    /// The lexicon of the earlier orthography, in which `go` was still a
    /// toneless linker rather than a contentive.
    #[must_use]
    pub fn legacy() -> Self {
        let mut lexicon = Self::current();
        lexicon.toneless.insert("go".to_string());
        lexicon
    }

    /// An empty lexicon, for building one from scratch.
    #[must_use]
    pub fn empty() -> Self {
        ParticleLexicon {
            toneless: IndexSet::new(),
            grammatical: IndexSet::new(),
            lexical: IndexSet::new(),
            prefixes: IndexSet::new(),
            interjections: IndexSet::new(),
        }
    }

    /// Looks `form` up exactly (tone marks included), folding only the
    /// first letter's case.
    #[must_use]
    pub fn tone_class(&self, form: &str) -> Option<ToneClass> {
        let key = fold_initial(form);
        if self.toneless.contains(&key) {
            Some(ToneClass::Toneless)
        } else if self.grammatical.contains(&key) {
            Some(ToneClass::Grammatical)
        } else if self.lexical.contains(&key) {
            Some(ToneClass::Lexical)
        } else {
            None
        }
    }

    /// Whether `form` is literally a grammatically- or lexically-toned entry.
    #[must_use]
    pub fn is_toned_entry(&self, form: &str) -> bool {
        matches!(
            self.tone_class(form),
            Some(ToneClass::Grammatical | ToneClass::Lexical)
        )
    }

    /// Whether `form` is any particle or interjection in the lexicon.
    #[must_use]
    pub fn contains(&self, form: &str) -> bool {
        self.tone_class(form).is_some() || self.interjections.contains(&fold_initial(form))
    }

    /// Whether `form` is a prefix particle written with its trailing hyphen,
    /// as in `tou-`.
    #[must_use]
    pub fn is_prefix_form(&self, form: &str) -> bool {
        form.strip_suffix('-')
            .is_some_and(|base| self.prefixes.contains(&fold_initial(base)))
    }

    /// Groups the lexically-toned entries by their bare (toneless) form.
    #[must_use]
    pub fn lexical_families(&self) -> IndexMap<String, IndexSet<String>> {
        let mut families: IndexMap<String, IndexSet<String>> = IndexMap::new();
        for form in &self.lexical {
            families
                .entry(bare_form(form))
                .or_default()
                .insert(form.clone());
        }
        families
    }

    /// Iterates over every categorized form with its class.
    pub fn forms(&self) -> impl Iterator<Item = (&str, ToneClass)> {
        let toneless = self.toneless.iter().map(|f| (f.as_str(), ToneClass::Toneless));
        let grammatical = self
            .grammatical
            .iter()
            .map(|f| (f.as_str(), ToneClass::Grammatical));
        let lexical = self.lexical.iter().map(|f| (f.as_str(), ToneClass::Lexical));
        toneless.chain(grammatical).chain(lexical)
    }

    /// Rewrites every entry into canonical spelling with a lowercase first
    /// letter, so hand-written data such as `"bi"` matches `bı`.
    #[must_use]
    pub fn canonicalized(self) -> Self {
        let canon = |set: IndexSet<String>| -> IndexSet<String> {
            set.into_iter()
                .map(|form| fold_initial(&canonicalize(form.trim())))
                .collect()
        };
        ParticleLexicon {
            toneless: canon(self.toneless),
            grammatical: canon(self.grammatical),
            lexical: canon(self.lexical),
            prefixes: canon(self.prefixes),
            interjections: canon(self.interjections),
        }
    }

    /// Checks that the three tone categories are disjoint, that no entry is
    /// empty, and that every prefix is a toneless particle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OverlappingParticle`] for a form in two categories and
    /// [`Error::InvalidOrthography`] for the other defects.
    pub fn validate(&self) -> Result<()> {
        let mut seen: IndexMap<&str, ToneClass> = IndexMap::new();
        for (form, class) in self.forms() {
            if form.is_empty() {
                return Err(Error::invalid_orthography("empty particle form"));
            }
            if let Some(first) = seen.insert(form, class) {
                if first != class {
                    return Err(Error::overlapping_particle(form, first, class));
                }
            }
        }
        if let Some(prefix) = self.prefixes.iter().find(|p| !self.toneless.contains(*p)) {
            return Err(Error::invalid_orthography(&format!(
                "prefix '{prefix}' is not a toneless particle"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lexicons_are_valid() {
        assert!(ParticleLexicon::current().validate().is_ok());
        assert!(ParticleLexicon::legacy().validate().is_ok());
    }

    #[test]
    fn test_go_differs_between_versions() {
        assert_eq!(ParticleLexicon::current().tone_class("go"), None);
        assert_eq!(
            ParticleLexicon::legacy().tone_class("go"),
            Some(ToneClass::Toneless)
        );
    }

    #[test]
    fn test_quote_markers_are_particles() {
        let lexicon = ParticleLexicon::current();
        assert_eq!(lexicon.tone_class("mo"), Some(ToneClass::Grammatical));
        assert_eq!(lexicon.tone_class("teo"), Some(ToneClass::Toneless));
    }

    #[test]
    fn test_lookup_is_exact_on_tone() {
        let lexicon = ParticleLexicon::current();
        assert_eq!(lexicon.tone_class("dả"), None);
        assert!(lexicon.is_toned_entry("lú"));
        assert!(!lexicon.is_toned_entry("lu"));
    }

    #[test]
    fn test_lookup_folds_first_letter_only() {
        let lexicon = ParticleLexicon::current();
        assert_eq!(lexicon.tone_class("Sıa"), Some(ToneClass::Toneless));
        assert_eq!(lexicon.tone_class("SIA"), None);
    }

    #[test]
    fn test_interjections_and_prefixes() {
        let lexicon = ParticleLexicon::current();
        assert!(lexicon.contains("ḿ"));
        assert!(lexicon.contains("m\u{0309}"));
        assert!(lexicon.is_prefix_form("tou-"));
        assert!(!lexicon.is_prefix_form("tou"));
        assert!(!lexicon.is_prefix_form("da-"));
    }

    #[test]
    fn test_lexical_families() {
        let families = ParticleLexicon::current().lexical_families();
        let ma: Vec<&str> = families["ma"].iter().map(String::as_str).collect();
        assert_eq!(ma, vec!["mả", "mâ"]);
        assert_eq!(families["lu"].len(), 4);
        assert!(families["tıo"].contains("tîo"));
        assert!(families.get("da").is_none());
    }

    #[test]
    fn test_overlap_is_rejected() {
        let mut lexicon = ParticleLexicon::current();
        lexicon.grammatical.insert("da".to_string());
        assert_eq!(
            lexicon.validate(),
            Err(Error::overlapping_particle(
                "da",
                ToneClass::Toneless,
                ToneClass::Grammatical
            ))
        );
    }

    #[test]
    fn test_prefix_must_be_toneless() {
        let mut lexicon = ParticleLexicon::current();
        lexicon.prefixes.insert("po".to_string());
        assert!(matches!(
            lexicon.validate(),
            Err(Error::InvalidOrthography(_))
        ));
    }

    #[test]
    fn test_canonicalized_entries() {
        let mut lexicon = ParticleLexicon::empty();
        lexicon.toneless.insert("Bi".to_string());
        lexicon.lexical.insert("ma\u{0302}".to_string());
        let lexicon = lexicon.canonicalized();
        assert!(lexicon.toneless.contains("bı"));
        assert!(lexicon.lexical.contains("mâ"));
    }
}
