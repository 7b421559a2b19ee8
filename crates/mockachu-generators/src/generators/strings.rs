//! String and numeric-string producers.

use crate::data::strings::{SENTENCES, WORDS};
use crate::generators::pick;
use rand::Rng;

pub fn random_sentence<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    *pick(rng, SENTENCES)
}

pub fn random_word<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    *pick(rng, WORDS)
}

/// Exactly `length` characters drawn uniformly from `alphabet`.
///
/// Alphabets are ASCII, so byte indexing is safe.
pub fn random_chars<R: Rng + ?Sized>(rng: &mut R, alphabet: &str, length: usize) -> String {
    let bytes = alphabet.as_bytes();
    (0..length)
        .map(|_| bytes[rng.random_range(0..bytes.len())] as char)
        .collect()
}

/// Exactly `length` decimal digits.
pub fn random_digits<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    random_chars(rng, crate::data::strings::DIGITS, length)
}

/// ISBN-10 shape: group, 5-digit publisher, 3-digit title, check digit.
pub fn random_isbn<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{}-{:05}-{:03}-{}",
        rng.random_range(0..=9),
        rng.random_range(0..=99_999),
        rng.random_range(0..=999),
        rng.random_range(0..=9)
    )
}
