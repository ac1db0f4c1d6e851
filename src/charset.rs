//! Character-class tables for Latin-script Toaq.
//!
//! Membership is enumerated explicitly rather than derived from Unicode
//! general categories: the apostrophe is a consonant, `ı` is the ordinary
//! vowel letter, macron-marked vowels are length-marked rather than toned,
//! and a handful of letters (`i`, `ȷ`, caron vowels) are accepted on input
//! but never produced on output.
//!
//! ## Classes
//!
//! | Class | Members |
//! |-------|---------|
//! | [`CharClass::Vowel`] | every vowel letter, plain or marked, including `i` and caron vowels |
//! | [`CharClass::StandardVowel`] | vowels of the canonical charset (no `i`, no carons) |
//! | [`CharClass::Consonant`] | `'bcdfghjȷklmnprstzq` |
//! | [`CharClass::StandardConsonant`] | consonants of the canonical charset (no `ȷ`) |
//! | [`CharClass::Initial`] | consonants that may open a syllable (no `q`) |
//! | [`CharClass::ToneMark`] | combining tone diacritics, see [`ToneMark`] |
//! | [`CharClass::OtherMark`] | any other combining diacritic, the macron included |
//! | [`CharClass::Control`] | private-use quote markers inserted by the segmenter |
//!
//! ## Examples
//!
//! ```rust
//! use toaq_latin::charset::{classify, CharClass};
//!
//! assert!(classify('ả').contains(CharClass::StandardVowel));
//! assert!(classify('\'').contains(CharClass::Initial));
//! assert!(!classify('q').contains(CharClass::Initial));
//! assert!(classify('\u{0301}').contains(CharClass::ToneMark));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Every vowel letter accepted on input.
pub const VOWELS: &str = "aeiıouyāēīōūȳáéíóúýäëïöüÿǎěǐǒǔảẻỉỏủỷâêîôûŷàèìòùỳãẽĩõũỹ";

/// Vowel letters of the canonical charset.
pub const STANDARD_VOWELS: &str = "aeıouyāēīōūȳáéíóúýäëïöüÿảẻỉỏủỷâêîôûŷàèìòùỳãẽĩõũỹ";

/// Unmarked vowels of the canonical charset.
pub const PLAIN_VOWELS: &str = "aeıouy";

/// Every consonant letter accepted on input.
pub const CONSONANTS: &str = "'bcdfghjȷklmnprstzq";

/// Consonants that may open a syllable.
pub const INITIALS: &str = "'bcdfghjȷklmnprstz";

/// Consonant letters of the canonical charset.
pub const STANDARD_CONSONANTS: &str = "'bcdfghjklmnprstzq";

/// Syllable-opening consonants of the canonical charset.
pub const STANDARD_INITIALS: &str = "'bcdfghjklmnprstz";

/// Combining macron, the length mark.
pub const COMBINING_MACRON: char = '\u{0304}';

/// Combining dot below, a vowel-quality mark that must follow any tone mark.
pub const COMBINING_DOT_BELOW: char = '\u{0323}';

/// Private-use character opening a quoted span in marked text.
pub const QUOTE_OPEN_MARKER: char = '\u{E000}';

/// Private-use character closing a quoted span in marked text.
pub const QUOTE_CLOSE_MARKER: char = '\u{E001}';

/// A class a codepoint can belong to. A codepoint may be in several.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    Vowel,
    StandardVowel,
    Consonant,
    StandardConsonant,
    Initial,
    ToneMark,
    OtherMark,
    Control,
}

impl CharClass {
    /// All classes, in declaration order.
    pub const ALL: [CharClass; 8] = [
        CharClass::Vowel,
        CharClass::StandardVowel,
        CharClass::Consonant,
        CharClass::StandardConsonant,
        CharClass::Initial,
        CharClass::ToneMark,
        CharClass::OtherMark,
        CharClass::Control,
    ];

    const fn bit(self) -> u8 {
        match self {
            CharClass::Vowel => 1 << 0,
            CharClass::StandardVowel => 1 << 1,
            CharClass::Consonant => 1 << 2,
            CharClass::StandardConsonant => 1 << 3,
            CharClass::Initial => 1 << 4,
            CharClass::ToneMark => 1 << 5,
            CharClass::OtherMark => 1 << 6,
            CharClass::Control => 1 << 7,
        }
    }
}

/// The set of classes a single codepoint belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CharClasses(u8);

impl CharClasses {
    /// The empty set: the codepoint is foreign to the charset.
    pub const EMPTY: CharClasses = CharClasses(0);

    #[must_use]
    pub const fn contains(self, class: CharClass) -> bool {
        self.0 & class.bit() != 0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    const fn with(self, class: CharClass) -> Self {
        CharClasses(self.0 | class.bit())
    }

    /// Iterates over the member classes in declaration order.
    pub fn iter(self) -> impl Iterator<Item = CharClass> {
        CharClass::ALL
            .into_iter()
            .filter(move |class| self.contains(*class))
    }
}

/// Tone diacritics, named after the mark rather than the contour it spells.
///
/// [`ToneMark::Caron`] is the pre-revision spelling of [`ToneMark::Diaeresis`];
/// it is recognised on input and rewritten by the diacritic transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToneMark {
    Acute,
    Diaeresis,
    /// Hook above: the falling tone, restored on unmarked contentives.
    Hook,
    Circumflex,
    Grave,
    Tilde,
    Caron,
}

impl ToneMark {
    pub const ALL: [ToneMark; 7] = [
        ToneMark::Acute,
        ToneMark::Diaeresis,
        ToneMark::Hook,
        ToneMark::Circumflex,
        ToneMark::Grave,
        ToneMark::Tilde,
        ToneMark::Caron,
    ];

    /// The combining codepoint for this mark.
    #[must_use]
    pub const fn combining(self) -> char {
        match self {
            ToneMark::Acute => '\u{0301}',
            ToneMark::Diaeresis => '\u{0308}',
            ToneMark::Hook => '\u{0309}',
            ToneMark::Circumflex => '\u{0302}',
            ToneMark::Grave => '\u{0300}',
            ToneMark::Tilde => '\u{0303}',
            ToneMark::Caron => '\u{030C}',
        }
    }

    #[must_use]
    pub const fn from_combining(c: char) -> Option<ToneMark> {
        match c {
            '\u{0301}' => Some(ToneMark::Acute),
            '\u{0308}' => Some(ToneMark::Diaeresis),
            '\u{0309}' => Some(ToneMark::Hook),
            '\u{0302}' => Some(ToneMark::Circumflex),
            '\u{0300}' => Some(ToneMark::Grave),
            '\u{0303}' => Some(ToneMark::Tilde),
            '\u{030C}' => Some(ToneMark::Caron),
            _ => None,
        }
    }

    /// Whether this mark only survives in text written before the
    /// caron-to-diaeresis revision.
    #[must_use]
    pub const fn is_legacy(self) -> bool {
        matches!(self, ToneMark::Caron)
    }
}

impl fmt::Display for ToneMark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ToneMark::Acute => "acute",
            ToneMark::Diaeresis => "diaeresis",
            ToneMark::Hook => "hook",
            ToneMark::Circumflex => "circumflex",
            ToneMark::Grave => "grave",
            ToneMark::Tilde => "tilde",
            ToneMark::Caron => "caron",
        };
        f.write_str(name)
    }
}

/// Folds a letter to the case the tables are written in.
///
/// Uppercase `I` folds to `ı`, since `ı` is the letter it capitalises.
#[must_use]
pub fn fold_case(c: char) -> char {
    match c {
        'I' => 'ı',
        c if c.is_uppercase() => c.to_lowercase().next().unwrap_or(c),
        c => c,
    }
}

/// Lowercases the first letter only, the form particle lookups use.
#[must_use]
pub fn fold_initial(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut folded = String::with_capacity(s.len());
            folded.push(fold_case(first));
            folded.push_str(chars.as_str());
            folded
        }
        None => String::new(),
    }
}

/// Folds every letter of `s`, so `SIA` and `Sıa` both become `sıa`.
#[must_use]
pub fn fold_word(s: &str) -> String {
    s.chars().map(fold_case).collect()
}

/// Reports the classes of `c`. Letters are looked up case-insensitively.
#[must_use]
pub fn classify(c: char) -> CharClasses {
    if let Some(classes) = mark_classes(c) {
        return classes;
    }
    let c = fold_case(c);
    let mut classes = CharClasses::EMPTY;
    match c {
        'a' | 'e' | 'ı' | 'o' | 'u' | 'y'
        | 'ā' | 'ē' | 'ī' | 'ō' | 'ū' | 'ȳ'
        | 'á' | 'é' | 'í' | 'ó' | 'ú' | 'ý'
        | 'ä' | 'ë' | 'ï' | 'ö' | 'ü' | 'ÿ'
        | 'ả' | 'ẻ' | 'ỉ' | 'ỏ' | 'ủ' | 'ỷ'
        | 'â' | 'ê' | 'î' | 'ô' | 'û' | 'ŷ'
        | 'à' | 'è' | 'ì' | 'ò' | 'ù' | 'ỳ'
        | 'ã' | 'ẽ' | 'ĩ' | 'õ' | 'ũ' | 'ỹ' => {
            classes = classes.with(CharClass::Vowel).with(CharClass::StandardVowel);
        }
        'i' | 'ǎ' | 'ě' | 'ǐ' | 'ǒ' | 'ǔ' => {
            classes = classes.with(CharClass::Vowel);
        }
        '\'' | 'b' | 'c' | 'd' | 'f' | 'g' | 'h' | 'j' | 'k' | 'l' | 'm' | 'n' | 'p' | 'r'
        | 's' | 't' | 'z' => {
            classes = classes
                .with(CharClass::Consonant)
                .with(CharClass::StandardConsonant)
                .with(CharClass::Initial);
        }
        'q' => {
            classes = classes
                .with(CharClass::Consonant)
                .with(CharClass::StandardConsonant);
        }
        'ȷ' => {
            classes = classes.with(CharClass::Consonant).with(CharClass::Initial);
        }
        _ => {}
    }
    classes
}

fn mark_classes(c: char) -> Option<CharClasses> {
    if c == QUOTE_OPEN_MARKER || c == QUOTE_CLOSE_MARKER {
        return Some(CharClasses::EMPTY.with(CharClass::Control));
    }
    if ToneMark::from_combining(c).is_some() {
        return Some(CharClasses::EMPTY.with(CharClass::ToneMark));
    }
    if is_combining_mark(c) {
        return Some(CharClasses::EMPTY.with(CharClass::OtherMark));
    }
    None
}

/// Whether `c` is in the combining diacritical marks block.
#[must_use]
pub fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

#[must_use]
pub fn is_vowel(c: char) -> bool {
    classify(c).contains(CharClass::Vowel)
}

#[must_use]
pub fn is_initial(c: char) -> bool {
    classify(c).contains(CharClass::Initial)
}

/// Whether `c` can be part of a word token: a letter of the charset or a
/// combining mark riding on one.
#[must_use]
pub fn is_word_char(c: char) -> bool {
    let classes = classify(c);
    classes.contains(CharClass::Vowel)
        || classes.contains(CharClass::Consonant)
        || classes.contains(CharClass::ToneMark)
        || classes.contains(CharClass::OtherMark)
}
