//! Normalizing running Toaq text, quotations included.
//!
//! Run with: cargo run --example normalize_text
//!
//! Set `RUST_LOG=toaq_latin=debug` to see what the normalizer logs.

use std::error::Error;
use toaq_latin::{normalize, Normalizer};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let inputs = [
        "da go",
        "Pu jadi ru chuq da.",
        "Jí mó pu jaxi teo ru’a",
        "bǒ tǔ",
        "pu mo jadı", // unmatched opener: the rest is quoted
    ];
    for input in inputs {
        println!("{input:<28} => {}", normalize(input)?);
    }

    // A wrongly toned function word fails just that record.
    let normalizer = Normalizer::default();
    let records = ["da mâ", "da má", "jadı"];
    for (record, result) in records.iter().zip(normalizer.normalize_batch(records)) {
        match result {
            Ok(text) => println!("{record:<28} => {text}"),
            Err(err) => println!("{record:<28} !! {err}"),
        }
    }

    Ok(())
}
