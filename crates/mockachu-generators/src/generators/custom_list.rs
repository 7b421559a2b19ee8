//! User-supplied custom lists.
//!
//! Lists arrive as one string; commas, semicolons and newlines all act as
//! separators and may be mixed freely.

use crate::generators::pick;
use rand::Rng;

/// Split a custom-list parameter into trimmed, non-empty items.
pub fn parse_items(raw: &str) -> Vec<String> {
    raw.lines()
        .flat_map(|line| line.split([',', ';']))
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Uniform pick; an empty list yields the empty string.
pub fn random_item<'a, R: Rng + ?Sized>(rng: &mut R, items: &'a [String]) -> &'a str {
    if items.is_empty() {
        ""
    } else {
        pick(rng, items).as_str()
    }
}

/// Round-robin pick by row index; an empty list yields the empty string.
pub fn sequential_item(items: &[String], index: u64) -> &str {
    if items.is_empty() {
        ""
    } else {
        &items[(index % items.len() as u64) as usize]
    }
}
