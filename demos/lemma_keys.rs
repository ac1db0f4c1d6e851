//! Building dictionary lookup keys.
//!
//! Run with: cargo run --example lemma_keys

use indexmap::IndexMap;
use toaq_latin::{is_a_lemma, lemma_of};

fn main() {
    let headwords = ["jảdī", "Jadı", "JÁDI", "ruqshảo", "Ruqshao", "mâ", "mả"];

    // Spellings that differ only in tone, case or length marks share a key.
    let mut index: IndexMap<String, Vec<&str>> = IndexMap::new();
    for word in headwords {
        index.entry(lemma_of(word)).or_default().push(word);
    }

    for (key, spellings) in &index {
        let marker = if is_a_lemma(key) { "lemma" } else { "     " };
        println!("{marker} {key:<10} <- {}", spellings.join(", "));
    }
}
