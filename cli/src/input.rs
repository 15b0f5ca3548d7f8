//! Sequence input from stdin.
//!
//! Accepts either a JSON array (`[1, 2, 3]`) or numbers separated by
//! whitespace and/or commas.

use std::io::Read;

use anyhow::{Context, Result};

use summit_core::Samples;

pub fn read_samples(mut reader: impl Read) -> Result<Samples<f64>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_samples(&text)
}

pub fn parse_samples(text: &str) -> Result<Samples<f64>> {
    let trimmed = text.trim();
    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed).context("invalid JSON sequence");
    }

    let values = trimmed
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<f64>()
                .with_context(|| format!("invalid number {token:?}"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Samples::new(values)?)
}
