//! The normalization engine.
//!
//! A [`Normalizer`] owns an [`Orthography`] and the tables derived from it.
//! It holds no mutable state, so one instance can be shared freely between
//! threads; the crate-root functions use a process-wide default instance.
//!
//! ## Pipeline
//!
//! 1. Canonicalize codepoints ([`crate::diacritics`]), then trim whitespace
//!    and leading apostrophes.
//! 2. If the input has no whitespace and no tone mark it is a citation form:
//!    lowercase it and settle the length marks of each word. Nothing else
//!    happens.
//! 3. Otherwise it is running text: runs of spaces and tabs collapse, the
//!    text is split into host and quoted spans ([`crate::quote`]), every host
//!    word gets its tone and length marks restored ([`crate::tone`]), and
//!    every quoted span goes through the whole pipeline again on its own.
//!
//! ## Examples
//!
//! ```rust
//! use toaq_latin::Normalizer;
//!
//! let normalizer = Normalizer::default();
//! assert_eq!(normalizer.normalize("da go").unwrap(), "da gỏ");
//! assert_eq!(normalizer.normalize("Jadı").unwrap(), "jadī");
//! assert_eq!(normalizer.normalize("mo jadı teo").unwrap(), "mo jadī teo");
//! ```

use crate::diacritics::{bare_form, canonicalize_with, diacriticless};
use crate::error::Result;
use crate::lexicon::ToneClass;
use crate::orthography::{Orthography, OrthographyVersion};
use crate::phonotactics;
use crate::quote::{segment, SpanKind};
use crate::token::{segments, Segment};
use crate::tone::{restore_length_marks, restore_macrons, ToneRules, WordRole};
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use tracing::{info, warn};

/// The outcome of [`Normalizer::normalize_with_report`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Normalized {
    pub text: String,
    /// Whether `text` differs from the input.
    pub changed: bool,
}

/// Normalizes Toaq text under one orthography.
#[derive(Clone, Debug)]
pub struct Normalizer {
    orthography: Orthography,
    families: IndexMap<String, IndexSet<String>>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::for_version(OrthographyVersion::Current)
    }
}

impl Normalizer {
    /// Builds a normalizer for a custom orthography.
    ///
    /// The orthography is canonicalized first, so hand-written data may use
    /// legacy spellings.
    ///
    /// # Errors
    ///
    /// Returns the first error found by [`Orthography::validate`].
    pub fn new(orthography: Orthography) -> Result<Self> {
        let orthography = orthography.canonicalized();
        orthography.validate()?;
        Ok(Self::from_valid(orthography))
    }

    /// Builds a normalizer for one of the built-in revisions.
    #[must_use]
    pub fn for_version(version: OrthographyVersion) -> Self {
        Self::from_valid(Orthography::for_version(version))
    }

    fn from_valid(orthography: Orthography) -> Self {
        let families = orthography.lexicon.lexical_families();
        Normalizer {
            orthography,
            families,
        }
    }

    #[must_use]
    pub fn orthography(&self) -> &Orthography {
        &self.orthography
    }

    fn rules(&self) -> ToneRules<'_> {
        ToneRules {
            lexicon: &self.orthography.lexicon,
            families: &self.families,
            default_tone: self.orthography.default_tone,
        }
    }

    /// Codepoint canonicalization only, with this orthography's letter table.
    #[must_use]
    pub fn canonicalize(&self, text: &str) -> String {
        canonicalize_with(text, &self.orthography.substitutions)
    }

    /// Brings `text` into canonical orthographic form.
    ///
    /// The result is idempotent: normalizing it again returns it unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedFunctionWordTone`](crate::Error::MalformedFunctionWordTone)
    /// if a lexically-toned function word is written with a tone it does not
    /// take. Nothing else fails.
    pub fn normalize(&self, text: &str) -> Result<String> {
        let canonical = self.canonicalize(text);
        let canonical = trim_text(&canonical);
        if phonotactics::is_lemma_shaped(canonical) {
            return Ok(self.normalize_citation(canonical));
        }
        let normalized = self.normalize_running_text(&collapse_blanks(canonical))?;
        // A lone toned particle can lose its tone and become a citation form.
        if phonotactics::is_lemma_shaped(&normalized) {
            Ok(self.normalize_citation(&normalized))
        } else {
            Ok(normalized)
        }
    }

    fn normalize_citation(&self, text: &str) -> String {
        let lowered = self.canonicalize(&text.to_lowercase());
        let unmarked = bare_form(&lowered);
        restore_macrons(&unmarked)
    }

    fn normalize_running_text(&self, text: &str) -> Result<String> {
        let spans = segment(
            text,
            &self.orthography.quote_openers,
            &self.orthography.quote_closers,
        );
        let mut out = String::with_capacity(text.len() + 16);
        for span in spans {
            match span.kind {
                SpanKind::Host => out.push_str(&self.normalize_host(&span.text)?),
                SpanKind::Quoted => {
                    let core = span.text.trim();
                    let Some(lead) = span.text.find(|c: char| !c.is_whitespace()) else {
                        out.push_str(&span.text);
                        continue;
                    };
                    out.push_str(&span.text[..lead]);
                    out.push_str(&self.normalize(core)?);
                    out.push_str(&span.text[lead + core.len()..]);
                }
            }
        }
        Ok(out)
    }

    fn normalize_host(&self, text: &str) -> Result<String> {
        let rules = self.rules();
        let mut out = String::with_capacity(text.len() + 8);
        for piece in segments(text) {
            match piece {
                Segment::Word(word) => {
                    let toned = rules.restore(word.text)?;
                    out.push_str(&restore_length_marks(&toned));
                }
                Segment::Gap(gap) => out.push_str(gap),
            }
        }
        Ok(out)
    }

    /// A lookup key for `text`: lowercase, every tone mark removed, length
    /// marks settled. No tone restoration happens.
    ///
    /// ```rust
    /// use toaq_latin::Normalizer;
    ///
    /// let normalizer = Normalizer::default();
    /// assert_eq!(normalizer.lemma_of("Jảdı"), "jadī");
    /// assert_eq!(normalizer.lemma_of("JADI"), "jadī");
    /// ```
    #[must_use]
    pub fn lemma_of(&self, text: &str) -> String {
        let canonical = self.canonicalize(text);
        restore_macrons(&diacriticless(&canonical))
    }

    /// Whether `text` can be a dictionary headword under this orthography.
    #[must_use]
    pub fn is_lemma(&self, text: &str) -> bool {
        phonotactics::is_lemma(text, &self.orthography.lexicon)
    }

    #[must_use]
    pub fn is_contentive_lemma(&self, text: &str) -> bool {
        phonotactics::is_contentive_lemma(text)
    }

    /// The tone category of a particle, if `text` is one.
    #[must_use]
    pub fn tone_class(&self, text: &str) -> Option<ToneClass> {
        self.orthography.lexicon.tone_class(text)
    }

    /// How tone restoration would treat the single word `word`.
    #[must_use]
    pub fn word_role(&self, word: &str) -> WordRole {
        self.rules().role(&self.canonicalize(word))
    }

    /// Normalizes `text` and reports whether anything changed, logging the
    /// before and after forms when it did.
    ///
    /// # Errors
    ///
    /// Same as [`Normalizer::normalize`].
    pub fn normalize_with_report(&self, text: &str) -> Result<Normalized> {
        let normalized = self.normalize(text)?;
        let changed = normalized != text;
        if changed {
            info!(from = text, to = %normalized, "normalized");
        }
        Ok(Normalized {
            text: normalized,
            changed,
        })
    }

    /// Normalizes every record independently. A failing record is logged and
    /// reported in place; it never stops the batch.
    pub fn normalize_batch<'a, I>(&self, records: I) -> Vec<Result<String>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                let result = self.normalize(record);
                if let Err(err) = &result {
                    warn!(index, record, token = err.token(), "skipping record: {err}");
                }
                result
            })
            .collect()
    }
}

/// Trims whitespace from both ends and apostrophes from the start, until
/// neither is left: whitespace can hide a leading apostrophe from one trim.
fn trim_text(text: &str) -> &str {
    text.trim_start_matches(|c: char| c.is_whitespace() || c == '\'')
        .trim_end()
}

/// Collapses runs of spaces and tabs to one space. Other whitespace, line
/// breaks included, is kept.
fn collapse_blanks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_blank = false;
    for c in text.chars() {
        if c == ' ' || c == '\t' {
            if !in_blank {
                out.push(' ');
            }
            in_blank = true;
        } else {
            out.push(c);
            in_blank = false;
        }
    }
    out
}
