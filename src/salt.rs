//! Salt generation for agreement key derivation.
//!
//! Not a secret and not required to be uniform: it only needs to differ
//! between sessions. Length is random in `2..=64` characters before
//! punctuation is dropped.

use rand::{rngs::OsRng, Rng};
use uuid::Uuid;

use crate::batch;
use crate::error::{Error, Result};

/// Upper bound for the random position count (`u8::MAX / 4`).
pub const MAX_UPPER_BOUND: u8 = u8::MAX / 4;

/// Random identifier: a v4 UUID in hyphenated form (36 chars, 4 hyphens).
fn identifier() -> String {
    Uuid::new_v4().hyphenated().to_string()
}

/// One salt character for `position`, or `None` if the draw hit punctuation.
fn sample(position: u8) -> Option<char> {
    let source = identifier();
    let offset = OsRng.gen_range(0..source.len());
    pick(&source, offset, position)
}

fn pick(source: &str, offset: usize, position: u8) -> Option<char> {
    let symbol = source.get(offset..)?.chars().next()?;
    if symbol.is_ascii_punctuation() {
        return None;
    }
    Some(if position % 2 == 0 {
        symbol.to_ascii_uppercase()
    } else {
        symbol.to_ascii_lowercase()
    })
}

/// Draw every position concurrently and join the kept characters in
/// position order.
pub async fn generate() -> Result<Vec<u8>> {
    let upper_bound: u8 = OsRng.gen_range(1..=MAX_UPPER_BOUND);

    let characters = batch::gather(0..=upper_bound, |position| async move { sample(position) }).await;
    let salt: String = characters.into_iter().flatten().collect();

    if salt.is_empty() {
        return Err(Error::Randomness);
    }
    Ok(salt.into_bytes())
}
