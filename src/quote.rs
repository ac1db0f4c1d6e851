//! Direct-quotation segmentation.
//!
//! `mo … teo` encloses quoted material. Both markers are ordinary words and
//! are only recognised as whole words; their tone is ignored, so `Mó` opens a
//! quote as well as `mo` does. Quotes nest: every opener inside a quote needs
//! its own closer.
//!
//! Segmentation runs in two passes. [`mark_quotes`] brackets each outermost
//! quoted region with private-use control characters, then [`split_marked`]
//! cuts the marked text into [`QuoteSpan`]s and drops the controls. The
//! marker words themselves stay in the surrounding host text.
//!
//! An opener without a closer quotes the rest of the text; truncated input
//! is common enough that this is not an error.
//!
//! ```rust
//! use toaq_latin::quote::{segment, SpanKind};
//! use toaq_latin::Orthography;
//!
//! let orthography = Orthography::new();
//! let spans = segment(
//!     "Jí mó da teo da",
//!     &orthography.quote_openers,
//!     &orthography.quote_closers,
//! );
//! let kinds: Vec<SpanKind> = spans.iter().map(|s| s.kind).collect();
//! assert_eq!(kinds, vec![SpanKind::Host, SpanKind::Quoted, SpanKind::Host]);
//! assert_eq!(spans[1].text, " da ");
//! ```

use crate::charset::{fold_initial, QUOTE_CLOSE_MARKER, QUOTE_OPEN_MARKER};
use crate::diacritics::bare_form;
use crate::token::words;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanKind {
    /// Text in the voice of the sentence, normalized word by word.
    Host,
    /// Quoted material, normalized as a text of its own.
    Quoted,
}

/// A contiguous piece of text and how it is to be normalized.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteSpan {
    pub kind: SpanKind,
    pub text: String,
}

impl QuoteSpan {
    fn new(kind: SpanKind, text: &str) -> Self {
        QuoteSpan {
            kind,
            text: text.to_string(),
        }
    }
}

/// Finds the item closing a bracket that was opened just before `items`.
///
/// Nested openers must be closed before the match is found. Returns `None`
/// when depth never returns to zero.
///
/// ```rust
/// use toaq_latin::quote::matching_close;
///
/// let items = ['a', '(', 'b', ')', ')', 'c'];
/// assert_eq!(matching_close(&items, |c| *c == '(', |c| *c == ')'), Some(4));
/// assert_eq!(matching_close(&items[..4], |c| *c == '(', |c| *c == ')'), None);
/// ```
pub fn matching_close<T>(
    items: &[T],
    is_open: impl Fn(&T) -> bool,
    is_close: impl Fn(&T) -> bool,
) -> Option<usize> {
    let mut depth = 0usize;
    for (i, item) in items.iter().enumerate() {
        if is_open(item) {
            depth += 1;
        } else if is_close(item) {
            if depth == 0 {
                return Some(i);
            }
            depth -= 1;
        }
    }
    None
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Marker {
    Open,
    Close,
    Plain,
}

/// Brackets every outermost quoted region of `text` with
/// [`QUOTE_OPEN_MARKER`] and [`QUOTE_CLOSE_MARKER`].
///
/// Control characters already present in `text` are removed first.
#[must_use]
pub fn mark_quotes(text: &str, openers: &IndexSet<String>, closers: &IndexSet<String>) -> String {
    let clean: String = text
        .chars()
        .filter(|c| *c != QUOTE_OPEN_MARKER && *c != QUOTE_CLOSE_MARKER)
        .collect();
    let tokens: Vec<_> = words(&clean).collect();
    let markers: Vec<Marker> = tokens
        .iter()
        .map(|token| {
            let key = fold_initial(&bare_form(token.text));
            if openers.contains(&key) {
                Marker::Open
            } else if closers.contains(&key) {
                Marker::Close
            } else {
                Marker::Plain
            }
        })
        .collect();

    let mut out = String::with_capacity(clean.len() + 6);
    let mut cursor = 0;
    let mut i = 0;
    while i < tokens.len() {
        if markers[i] != Marker::Open {
            i += 1;
            continue;
        }
        let start = tokens[i].end();
        out.push_str(&clean[cursor..start]);
        out.push(QUOTE_OPEN_MARKER);

        let close = matching_close(
            &markers[i + 1..],
            |m| *m == Marker::Open,
            |m| *m == Marker::Close,
        );
        match close {
            Some(k) => {
                let closer = &tokens[i + 1 + k];
                out.push_str(&clean[start..closer.offset]);
                out.push(QUOTE_CLOSE_MARKER);
                cursor = closer.offset;
                i += k + 2;
            }
            None => {
                warn!(
                    opener = tokens[i].text,
                    offset = tokens[i].offset,
                    "unmatched quote marker; quoting the rest of the text"
                );
                out.push_str(&clean[start..]);
                out.push(QUOTE_CLOSE_MARKER);
                cursor = clean.len();
                break;
            }
        }
    }
    out.push_str(&clean[cursor..]);
    out
}

/// Cuts text produced by [`mark_quotes`] into spans, dropping the controls.
///
/// Empty host spans are omitted; a quoted span is always reported, even when
/// empty. An opening control without its close quotes the rest of the text.
#[must_use]
pub fn split_marked(marked: &str) -> Vec<QuoteSpan> {
    let chars: Vec<(usize, char)> = marked.char_indices().collect();
    let mut spans = Vec::new();
    let mut host_start = 0;
    let mut i = 0;

    while i < chars.len() {
        let (offset, c) = chars[i];
        if c != QUOTE_OPEN_MARKER {
            i += 1;
            continue;
        }
        push_host(&mut spans, &marked[host_start..offset]);
        let inner_start = offset + c.len_utf8();
        let close = matching_close(
            &chars[i + 1..],
            |(_, c)| *c == QUOTE_OPEN_MARKER,
            |(_, c)| *c == QUOTE_CLOSE_MARKER,
        );
        match close {
            Some(k) => {
                let (close_offset, close_char) = chars[i + 1 + k];
                spans.push(QuoteSpan::new(
                    SpanKind::Quoted,
                    &strip_controls(&marked[inner_start..close_offset]),
                ));
                host_start = close_offset + close_char.len_utf8();
                i += k + 2;
            }
            None => {
                spans.push(QuoteSpan::new(
                    SpanKind::Quoted,
                    &strip_controls(&marked[inner_start..]),
                ));
                host_start = marked.len();
                break;
            }
        }
    }
    push_host(&mut spans, &marked[host_start..]);
    spans
}

fn push_host(spans: &mut Vec<QuoteSpan>, text: &str) {
    let text = strip_controls(text);
    if !text.is_empty() {
        spans.push(QuoteSpan::new(SpanKind::Host, &text));
    }
}

fn strip_controls(text: &str) -> String {
    text.chars()
        .filter(|c| *c != QUOTE_OPEN_MARKER && *c != QUOTE_CLOSE_MARKER)
        .collect()
}

/// Splits `text` into host and quoted spans.
#[must_use]
pub fn segment(text: &str, openers: &IndexSet<String>, closers: &IndexSet<String>) -> Vec<QuoteSpan> {
    split_marked(&mark_quotes(text, openers, closers))
}
