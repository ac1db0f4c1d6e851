//! Loading an orthography from JSON.
//!
//! Run with: cargo run --example custom_orthography

use std::error::Error;
use toaq_latin::{Normalizer, Orthography, OrthographyVersion, ToneMark};

const ORTHOGRAPHY: &str = r#"{
    "version": "legacy",
    "default_tone": "acute",
    "quote_openers": ["mo", "lu"],
    "quote_closers": ["teo"]
}"#;

fn main() -> Result<(), Box<dyn Error>> {
    // "lu" is lexically toned, so it cannot open a quotation.
    let orthography: Orthography = serde_json::from_str(ORTHOGRAPHY)?;
    match Normalizer::new(orthography) {
        Ok(_) => println!("unexpectedly valid"),
        Err(err) => println!("rejected: {err}"),
    }

    let orthography = Orthography::for_version(OrthographyVersion::Legacy)
        .with_default_tone(ToneMark::Acute)
        .with_substitution('v', 'u');
    println!("{}", serde_json::to_string_pretty(&orthography)?);

    let normalizer = Normalizer::new(orthography)?;
    for input in ["da go", "pu jadi", "va"] {
        println!("{input:<10} => {}", normalizer.normalize(input)?);
    }

    Ok(())
}
