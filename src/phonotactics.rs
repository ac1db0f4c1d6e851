//! Word-shape predicates.
//!
//! A contentive lemma is an optional initial consonant (with an optional
//! `h` forming `ch`/`sh`), a run of plain vowels, an optional final `q`, and
//! then any number of further syllables whose first vowel carries the macron:
//!
//! ```text
//! (C h?)? V+ q? ( C h? V̄ V* q? )*
//! ```
//!
//! All predicates compose their input to NFC first and otherwise take it as
//! written: they do not canonicalize legacy spellings or fold case.

use crate::diacritics::has_tone_mark;
use crate::lexicon::ParticleLexicon;
use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static CONTENTIVE_LEMMA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[bcdfghjklmnprstz]h?)?[aeıouy]+q?(?:['bcdfghjklmnprstz]h?[āēīōūȳ][aeıouy]*q?)*$")
        .expect("Invalid contentive lemma regex")
});

/// Like a lemma, but the first vowel may carry any tone (or a legacy caron),
/// as contentives do in running text.
static INFLECTED_CONTENTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:[bcdfghjklmnprstz]h?)?[aeiıouyāēīōūȳáéíóúýäëïöüÿǎěǐǒǔảẻỉỏủỷâêîôûŷàèìòùỳãẽĩõũỹ][aeıouy]*q?(?:['bcdfghjklmnprstz]h?[āēīōūȳ][aeıouy]*q?)*$",
    )
    .expect("Invalid inflected contentive regex")
});

static INTERJECTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[áéíóúýäëïöüÿảẻỉỏủỷâêîôûŷàèìòùỳãẽĩõũỹ][aeıouy]*$")
        .expect("Invalid interjection regex")
});

fn composed(s: &str) -> String {
    s.nfc().collect()
}

/// Whether `s` has the shape of an open-class root in citation form.
///
/// ```rust
/// use toaq_latin::is_a_contentive_lemma;
///
/// assert!(is_a_contentive_lemma("jadī"));
/// assert!(is_a_contentive_lemma("shaq"));
/// assert!(!is_a_contentive_lemma("jadı"));
/// assert!(!is_a_contentive_lemma("jảdī"));
/// ```
#[must_use]
pub fn is_contentive_lemma(s: &str) -> bool {
    CONTENTIVE_LEMMA.is_match(&composed(s))
}

/// Whether `s` has the shape of a contentive as written in prose: a lemma
/// whose first syllable may be toned.
#[must_use]
pub fn is_inflected_contentive(s: &str) -> bool {
    INFLECTED_CONTENTIVE.is_match(&composed(s))
}

/// Whether `s` has the shape of a vocalic interjection: one toned vowel,
/// optionally followed by plain vowels.
#[must_use]
pub fn is_interjection(s: &str) -> bool {
    INTERJECTION.is_match(&composed(s))
}

/// Whether `s` can be a dictionary headword: a contentive lemma, a
/// hyphenated prefix, a particle or interjection of `lexicon`, or a
/// vocalic interjection.
#[must_use]
pub fn is_lemma(s: &str, lexicon: &ParticleLexicon) -> bool {
    let s = composed(s);
    is_contentive_lemma(&s)
        || lexicon.is_prefix_form(&s)
        || lexicon.contains(&s)
        || is_interjection(&s)
}

/// Whether a whole input should be treated as a single citation form rather
/// than running text: it has no whitespace and no tone-marked vowel.
#[must_use]
pub fn is_lemma_shaped(s: &str) -> bool {
    !s.chars().any(char::is_whitespace) && !has_tone_mark(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contentive_lemmas() {
        for word in ["a", "jı", "pu", "hao", "jadī", "chuq", "shao", "ruqshāo", "ka'ō"] {
            assert!(is_contentive_lemma(word), "{word}");
        }
    }

    #[test]
    fn test_non_lemmas() {
        // An apostrophe is only ever a non-initial onset.
        for word in ["", "jī", "jadı", "Jadī", "jảdī", "ja dī", "'a", "qa", "xa", "jadīī"] {
            assert!(!is_contentive_lemma(word), "{word}");
        }
    }

    #[test]
    fn test_decomposed_input_is_composed_first() {
        assert!(is_contentive_lemma("jadi\u{0304}"));
        assert!(is_interjection("a\u{0301}"));
    }

    #[test]
    fn test_inflected_contentives() {
        assert!(is_inflected_contentive("jảdī"));
        assert!(is_inflected_contentive("jádī"));
        assert!(is_inflected_contentive("jadī"));
        assert!(!is_inflected_contentive("jảdỉ"));
    }

    #[test]
    fn test_interjections() {
        assert!(is_interjection("ä"));
        assert!(is_interjection("ảo"));
        assert!(!is_interjection("a"));
        assert!(!is_interjection("ảdo"));
    }

    #[test]
    fn test_is_lemma() {
        let lexicon = ParticleLexicon::current();
        assert!(is_lemma("jadī", &lexicon));
        assert!(is_lemma("sıa", &lexicon));
        assert!(is_lemma("mâ", &lexicon));
        assert!(is_lemma("tou-", &lexicon));
        assert!(is_lemma("ḿ", &lexicon));
        assert!(is_lemma("ä", &lexicon));
        assert!(!is_lemma("", &lexicon));
        assert!(!is_lemma("da ba", &lexicon));
        assert!(!is_lemma("jadı", &lexicon));
    }

    #[test]
    fn test_lemma_shape() {
        assert!(is_lemma_shaped("jadı"));
        assert!(is_lemma_shaped("Jadı."));
        assert!(is_lemma_shaped(""));
        assert!(!is_lemma_shaped("da go"));
        assert!(!is_lemma_shaped("jádı"));
        assert!(!is_lemma_shaped("ä"));
    }
}
