//! Tone and length restoration for individual words.
//!
//! Sparse writing leaves out the tone of most contentives and the macron on
//! every syllable after the first. Restoration puts both back:
//!
//! 1. The word's bare form (no tone or length marks) is looked up in the
//!    particle lexicon.
//! 2. Toneless particles come out bare.
//! 3. A base belonging to a lexically-toned particle must end up as one of
//!    that particle's spellings (after default-tone restoration if it was
//!    unmarked); anything else is [`Error::MalformedFunctionWordTone`].
//! 4. Grammatically-toned particles are left exactly as written.
//! 5. Anything else is a contentive: if its main vowel (the first vowel,
//!    after an optional initial consonant and `h`) is unmarked, it receives
//!    the default tone.
//!
//! Independently, [`restore_length_marks`] gives the macron to the first
//! vowel of every non-initial syllable that has no mark of its own.

use crate::charset::{classify, fold_initial, fold_word, CharClass, ToneMark, COMBINING_MACRON};
use crate::diacritics::{compose, letters, Letter};
use crate::error::{Error, Result};
use crate::lexicon::ParticleLexicon;
use crate::token::{segments, Segment};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How a word's tone is handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordRole {
    /// A toneless particle.
    Toneless,
    /// A particle whose tone comes from syntax.
    Grammatical,
    /// A particle whose tone is part of its identity.
    Lexical,
    /// An open-class word.
    Contentive,
    /// No main vowel could be found; the word is passed through.
    Unrecognized,
}

/// Per-call view of the tables tone restoration consults.
pub(crate) struct ToneRules<'a> {
    pub lexicon: &'a ParticleLexicon,
    pub families: &'a IndexMap<String, IndexSet<String>>,
    pub default_tone: ToneMark,
}

struct Analysis {
    letters: Vec<Letter>,
    bare: Vec<Letter>,
    main_vowel: usize,
    key: String,
    role: WordRole,
}

impl<'a> ToneRules<'a> {
    fn analyze(&self, word: &str) -> Option<Analysis> {
        let letters = letters(word);
        let main_vowel = main_vowel_index(&letters)?;

        let mut bare = letters.clone();
        for letter in bare.iter_mut().filter(|l| l.is_vowel()) {
            letter.strip_tone_and_length();
        }
        let bare_word = compose(&bare);
        let key = fold_initial(&bare_word);

        let toneless = self.lexicon.toneless.contains(&fold_word(&bare_word));
        let role = if toneless && !self.lexicon.is_toned_entry(word) {
            WordRole::Toneless
        } else if self.families.contains_key(&key) {
            WordRole::Lexical
        } else if self.lexicon.grammatical.contains(&key) {
            WordRole::Grammatical
        } else {
            WordRole::Contentive
        };

        Some(Analysis {
            letters,
            bare,
            main_vowel,
            key,
            role,
        })
    }

    pub fn role(&self, word: &str) -> WordRole {
        self.analyze(word)
            .map_or(WordRole::Unrecognized, |analysis| analysis.role)
    }

    /// Restores the tone of one word.
    pub fn restore(&self, word: &str) -> Result<String> {
        let Some(analysis) = self.analyze(word) else {
            return Ok(word.to_string());
        };
        let Analysis {
            letters,
            bare,
            main_vowel,
            key,
            role,
        } = analysis;

        match role {
            WordRole::Toneless => Ok(compose(&bare)),
            WordRole::Lexical => {
                let candidate = if letters[main_vowel].has_tone() {
                    compose(&letters)
                } else {
                    self.with_default_tone(bare, main_vowel)
                };
                let family = &self.families[&key];
                if family.contains(&fold_initial(&candidate)) {
                    Ok(candidate)
                } else {
                    debug!(word, base = %key, "disallowed tone on function word");
                    Err(Error::malformed_function_word_tone(
                        word,
                        &key,
                        family.iter().cloned(),
                    ))
                }
            }
            WordRole::Grammatical => Ok(word.to_string()),
            WordRole::Contentive if !letters[main_vowel].marks.is_empty() => Ok(word.to_string()),
            WordRole::Contentive => Ok(self.with_default_tone(letters, main_vowel)),
            WordRole::Unrecognized => Ok(word.to_string()),
        }
    }

    fn with_default_tone(&self, mut letters: Vec<Letter>, main_vowel: usize) -> String {
        letters[main_vowel]
            .marks
            .insert(0, self.default_tone.combining());
        compose(&letters)
    }
}

fn is_onset(letter: &Letter) -> bool {
    classify(letter.base).contains(CharClass::Initial)
}

/// Index of the main vowel: the first letter, or the one after an initial
/// consonant, or the one after an initial consonant and `h`.
fn main_vowel_index(letters: &[Letter]) -> Option<usize> {
    let mut i = 0;
    if letters.first().is_some_and(is_onset) {
        i = 1;
        let digraph = letters.get(1).is_some_and(|l| l.folded() == 'h')
            && letters.get(2).is_some_and(Letter::is_vowel);
        if digraph {
            i = 2;
        }
    }
    letters.get(i).filter(|l| l.is_vowel()).map(|_| i)
}

/// Gives the macron to the first vowel of every syllable after the first
/// that carries no mark.
///
/// ```rust
/// use toaq_latin::tone::restore_length_marks;
///
/// assert_eq!(restore_length_marks("jádı"), "jádī");
/// assert_eq!(restore_length_marks("kupaka"), "kupākā");
/// assert_eq!(restore_length_marks("chuq"), "chuq");
/// ```
#[must_use]
pub fn restore_length_marks(word: &str) -> String {
    let mut letters = letters(word);
    let mut nucleus_seen = false;
    let mut i = 0;
    while i < letters.len() {
        if letters[i].is_vowel() {
            nucleus_seen = true;
            i += 1;
            continue;
        }
        if nucleus_seen && is_onset(&letters[i]) {
            let mut j = i + 1;
            if letters.get(j).is_some_and(|l| l.folded() == 'h') {
                j += 1;
            }
            if let Some(vowel) = letters.get_mut(j) {
                if vowel.is_vowel() && vowel.marks.is_empty() {
                    vowel.marks.push(COMBINING_MACRON);
                }
            }
            i = j;
            continue;
        }
        i += 1;
    }
    compose(&letters)
}

/// Applies [`restore_length_marks`] to every word of `text`.
#[must_use]
pub fn restore_macrons(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    for segment in segments(text) {
        match segment {
            Segment::Word(word) => out.push_str(&restore_length_marks(word.text)),
            Segment::Gap(gap) => out.push_str(gap),
        }
    }
    out
}
