//! Codepoint-level canonicalization.
//!
//! [`canonicalize`] maps any string onto the canonical charset without
//! changing its segmentation. The steps run in a fixed order, each relying on
//! the previous one:
//!
//! 1. Legacy letters are substituted (`x` and curly apostrophes become `'`,
//!    `i` becomes `ı`, `ȷ` becomes `j`, ...). See [`LEGACY_LETTERS`].
//! 2. Apostrophes at the very start of the string are dropped; a
//!    word-initial glottal stop is never phonemic.
//! 3. The string is decomposed (NFD) into base letters and combining marks.
//! 4. Within each letter, tone marks are moved ahead of every other mark.
//! 5. Carons on vowels become diaereses.
//! 6. The string is recomposed (NFC). Canonical reordering sorts marks of
//!    different combining classes again, so step 4 only decides the order of
//!    marks sharing a class: `ı̣́` comes out as `ị` followed by U+0301.
//!
//! Dotless `ı` has no precomposed toned forms, so a toned `ı` is written with
//! the dotted base (`í`, `ỉ`, ...) and an untoned `i` is always rewritten to `ı`.
//!
//! ```rust
//! use toaq_latin::diacritics::canonicalize;
//!
//! assert_eq!(canonicalize("ǎ"), "ä");
//! assert_eq!(canonicalize("’Jadi"), "Jadı");
//! assert_eq!(canonicalize("ı\u{0301}"), "í");
//! ```

use crate::charset::{
    fold_case, is_combining_mark, is_vowel, is_word_char, ToneMark, COMBINING_MACRON,
};
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// A one-letter rewrite applied before decomposition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LetterSubstitution {
    pub from: char,
    pub to: char,
}

impl LetterSubstitution {
    #[must_use]
    pub const fn new(from: char, to: char) -> Self {
        LetterSubstitution { from, to }
    }
}

/// Substitutions for legacy spellings and look-alike letters.
pub const LEGACY_LETTERS: &[LetterSubstitution] = &[
    LetterSubstitution::new('\u{2019}', '\''),
    LetterSubstitution::new('\u{2018}', '\''),
    LetterSubstitution::new('\u{02BC}', '\''),
    LetterSubstitution::new('`', '\''),
    LetterSubstitution::new('x', '\''),
    LetterSubstitution::new('i', 'ı'),
    LetterSubstitution::new('\u{0456}', 'ı'),
    LetterSubstitution::new('w', 'u'),
    LetterSubstitution::new('v', 'u'),
    LetterSubstitution::new('ȷ', 'j'),
];

/// Punctuation that survives [`diacriticless`].
const KEPT_PUNCTUATION: &str = "'_()«»,;.…!?-";

/// A base codepoint with the combining marks attached to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Letter {
    pub base: char,
    pub marks: Vec<char>,
}

impl Letter {
    pub fn is_vowel(&self) -> bool {
        is_vowel(self.base)
    }

    pub fn folded(&self) -> char {
        fold_case(self.base)
    }

    pub fn tone(&self) -> Option<ToneMark> {
        self.marks.iter().find_map(|m| ToneMark::from_combining(*m))
    }

    pub fn has_tone(&self) -> bool {
        self.tone().is_some()
    }

    /// Drops tone and length marks, keeping any others.
    pub fn strip_tone_and_length(&mut self) {
        self.marks
            .retain(|m| ToneMark::from_combining(*m).is_none() && *m != COMBINING_MACRON);
    }
}

/// Splits `s` into decomposed letters.
pub(crate) fn letters(s: &str) -> Vec<Letter> {
    let mut out: Vec<Letter> = Vec::with_capacity(s.len());
    for c in s.nfd() {
        if is_combining_mark(c) {
            if let Some(last) = out.last_mut() {
                last.marks.push(c);
                continue;
            }
        }
        out.push(Letter {
            base: c,
            marks: Vec::new(),
        });
    }
    out
}

/// Reassembles letters into NFC text, settling the dotted/dotless `i`.
pub(crate) fn compose(letters: &[Letter]) -> String {
    let mut s = String::with_capacity(letters.len() * 2);
    for letter in letters {
        let base = match letter.base {
            'i' | 'ı' if letter.marks.is_empty() => 'ı',
            'i' | 'ı' => 'i',
            c => c,
        };
        s.push(base);
        s.extend(letter.marks.iter());
    }
    s.nfc().collect()
}

/// Canonicalizes `s` with the built-in [`LEGACY_LETTERS`] table.
#[must_use]
pub fn canonicalize(s: &str) -> String {
    canonicalize_with(s, LEGACY_LETTERS)
}

/// Canonicalizes `s` with a caller-supplied substitution table.
///
/// Substitutions are matched case-insensitively; an uppercase source letter
/// maps to the uppercase of its replacement.
#[must_use]
pub fn canonicalize_with(s: &str, substitutions: &[LetterSubstitution]) -> String {
    let substituted: String = s.chars().map(|c| substitute(c, substitutions)).collect();
    let elided = substituted.trim_start_matches('\'');

    let mut letters = letters(elided);
    for letter in &mut letters {
        reorder_marks(&mut letter.marks);
        if letter.is_vowel() {
            replace_caron(&mut letter.marks);
        }
    }
    compose(&letters)
}

fn substitute(c: char, substitutions: &[LetterSubstitution]) -> char {
    if let Some(sub) = substitutions.iter().find(|sub| sub.from == c) {
        return sub.to;
    }
    if c.is_uppercase() {
        let lower = c.to_lowercase().next().unwrap_or(c);
        if let Some(sub) = substitutions.iter().find(|sub| sub.from == lower) {
            return match sub.to {
                'ı' => 'I',
                to => to.to_uppercase().next().unwrap_or(to),
            };
        }
    }
    c
}

fn reorder_marks(marks: &mut [char]) {
    marks.sort_by_key(|m| u8::from(ToneMark::from_combining(*m).is_none()));
}

fn replace_caron(marks: &mut [char]) {
    for mark in marks.iter_mut() {
        if *mark == ToneMark::Caron.combining() {
            *mark = ToneMark::Diaeresis.combining();
        }
    }
}

/// Rewrites caron vowels to their diaeresis spelling, leaving everything
/// else as it is.
///
/// ```rust
/// use toaq_latin::diacritics::replace_carons;
///
/// assert_eq!(replace_carons("bǒ tǔ"), "bö tü");
/// ```
#[must_use]
pub fn replace_carons(s: &str) -> String {
    let mut letters = letters(s);
    for letter in letters.iter_mut().filter(|l| l.is_vowel()) {
        replace_caron(&mut letter.marks);
    }
    compose(&letters)
}

/// `s` with every vowel stripped of tone and length marks. Case is kept.
#[must_use]
pub fn bare_form(s: &str) -> String {
    let mut letters = letters(s);
    for letter in letters.iter_mut().filter(|l| l.is_vowel()) {
        letter.strip_tone_and_length();
    }
    compose(&letters)
}

/// Whether any vowel in `s` carries a tone mark.
#[must_use]
pub fn has_tone_mark(s: &str) -> bool {
    letters(s).iter().any(|l| l.is_vowel() && l.has_tone())
}

/// A lowercase, mark-free rendering of `s`, reduced to letters, digits,
/// whitespace and ordinary punctuation. Whitespace runs collapse to one space.
///
/// ```rust
/// use toaq_latin::diacritics::diacriticless;
///
/// assert_eq!(diacriticless("  Jảdī  “ga”! "), "jadı ga!");
/// ```
#[must_use]
pub fn diacriticless(s: &str) -> String {
    let lowered = canonicalize(s).to_lowercase();
    let mut kept: Vec<Letter> = Vec::with_capacity(lowered.len());
    for mut letter in letters(&lowered) {
        let c = letter.base;
        if c.is_whitespace() {
            if kept.last().is_some_and(|l| l.base == ' ') {
                continue;
            }
            letter.base = ' ';
        } else if !(is_word_char(c) || c.is_alphanumeric() || KEPT_PUNCTUATION.contains(c)) {
            continue;
        }
        letter.marks.clear();
        kept.push(letter);
    }
    compose(&kept).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caron_becomes_diaeresis() {
        assert_eq!(canonicalize("ǎ"), "ä");
        assert_eq!(canonicalize("Ǒ"), "Ö");
        assert_eq!(canonicalize("a\u{030C}"), "ä");
        assert_eq!(canonicalize("ǐ"), "ï");
    }

    #[test]
    fn test_legacy_letters() {
        assert_eq!(canonicalize("jaxı"), "ja'ı");
        assert_eq!(canonicalize("ru\u{2019}a"), "ru'a");
        assert_eq!(canonicalize("ȷı"), "jı");
        assert_eq!(canonicalize("jadi"), "jadı");
        assert_eq!(canonicalize("Ia"), "Ia");
        assert_eq!(canonicalize("aXa"), "a'a");
        assert_eq!(canonicalize("Wa"), "Ua");
    }

    #[test]
    fn test_leading_apostrophe_only() {
        assert_eq!(canonicalize("'ao"), "ao");
        assert_eq!(canonicalize("xao"), "ao");
        assert_eq!(canonicalize("ru 'ao"), "ru 'ao");
        assert_eq!(canonicalize("''a"), "a");
    }

    #[test]
    fn test_toned_i_uses_dotted_base() {
        assert_eq!(canonicalize("ı\u{0301}"), "í");
        assert_eq!(canonicalize("i\u{0309}"), "ỉ");
        assert_eq!(canonicalize("ı\u{0304}"), "ī");
        assert_eq!(canonicalize("ỉ"), "ỉ");
    }

    #[test]
    fn test_mark_order_is_normalized() {
        let a = canonicalize("a\u{0323}\u{0301}");
        let b = canonicalize("a\u{0301}\u{0323}");
        assert_eq!(a, b);

        let c = canonicalize("o\u{0304}\u{0301}");
        let d = canonicalize("o\u{0301}\u{0304}");
        assert_eq!(c, d);
    }

    #[test]
    fn test_foreign_text_survives() {
        assert_eq!(canonicalize("日本 123 ❤"), "日本 123 ❤");
        assert_eq!(canonicalize(""), "");
        assert_eq!(canonicalize("«?!»"), "«?!»");
    }

    #[test]
    fn test_segmentation_is_kept() {
        let input = "Jí  dủ\tsa\nhóa";
        let output = canonicalize(input);
        assert_eq!(
            input.split_whitespace().count(),
            output.split_whitespace().count()
        );
    }

    #[test]
    fn test_bare_form() {
        assert_eq!(bare_form("Jảdī"), "Jadı");
        assert_eq!(bare_form("mâ"), "ma");
        assert_eq!(bare_form("tỉo"), "tıo");
        assert_eq!(bare_form("ạ\u{0301}"), "ạ");
    }

    #[test]
    fn test_has_tone_mark() {
        assert!(has_tone_mark("jảdī"));
        assert!(has_tone_mark("ä"));
        assert!(!has_tone_mark("jadī"));
        assert!(!has_tone_mark(""));
    }

    #[test]
    fn test_diacriticless() {
        assert_eq!(diacriticless("Jảdī"), "jadı");
        assert_eq!(diacriticless("’Ao  ké"), "ao ke");
        assert_eq!(diacriticless("#sa*"), "sa");
    }
}
