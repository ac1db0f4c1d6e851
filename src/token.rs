//! Word tokenization of running text.
//!
//! A word is a maximal run of charset letters (apostrophe included) and the
//! combining marks riding on them. Everything between words is kept as a
//! gap so text can be reassembled byte for byte.

use crate::charset::is_word_char;

/// A word and its byte offset in the text it was cut from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WordToken<'a> {
    pub text: &'a str,
    pub offset: usize,
}

impl<'a> WordToken<'a> {
    /// Byte offset just past the word.
    #[must_use]
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }
}

/// A piece of running text: a word or the gap between two words.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    Word(WordToken<'a>),
    Gap(&'a str),
}

/// Cuts `text` into alternating words and gaps.
///
/// ```rust
/// use toaq_latin::token::{segments, Segment};
///
/// let pieces = segments("Jí, dủ!");
/// assert_eq!(pieces.len(), 4);
/// assert!(matches!(pieces[0], Segment::Word(w) if w.text == "Jí"));
/// assert_eq!(pieces[1], Segment::Gap(", "));
/// ```
#[must_use]
pub fn segments(text: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut in_word = false;

    for (i, c) in text.char_indices() {
        let is_word = is_word_char(c);
        if i > start && is_word != in_word {
            out.push(piece(text, start, i, in_word));
            start = i;
        }
        in_word = is_word;
    }
    if start < text.len() {
        out.push(piece(text, start, text.len(), in_word));
    }
    out
}

fn piece(text: &str, start: usize, end: usize, is_word: bool) -> Segment<'_> {
    let slice = &text[start..end];
    if is_word {
        Segment::Word(WordToken {
            text: slice,
            offset: start,
        })
    } else {
        Segment::Gap(slice)
    }
}

/// The words of `text`, in order.
pub fn words(text: &str) -> impl Iterator<Item = WordToken<'_>> {
    segments(text).into_iter().filter_map(|segment| match segment {
        Segment::Word(word) => Some(word),
        Segment::Gap(_) => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reassemble(pieces: &[Segment<'_>]) -> String {
        pieces
            .iter()
            .map(|p| match p {
                Segment::Word(w) => w.text,
                Segment::Gap(g) => g,
            })
            .collect()
    }

    #[test]
    fn test_reassembles_exactly() {
        for text in ["", " ", "da", " da ", "Mo jadı teo, da.", "ru'a 12 ❤ ḿ"] {
            assert_eq!(reassemble(&segments(text)), text);
        }
    }

    #[test]
    fn test_apostrophe_is_part_of_words() {
        let found: Vec<&str> = words("ru'a hao").map(|w| w.text).collect();
        assert_eq!(found, vec!["ru'a", "hao"]);
    }

    #[test]
    fn test_offsets() {
        let found: Vec<(usize, usize)> = words("Jí dủ").map(|w| (w.offset, w.end())).collect();
        assert_eq!(found, vec![(0, 3), (4, 8)]);
    }

    #[test]
    fn test_digits_split_words() {
        let found: Vec<&str> = words("sa2da").map(|w| w.text).collect();
        assert_eq!(found, vec!["sa", "da"]);
    }
}
