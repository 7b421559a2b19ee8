//! Financial data: currencies, cards, IBANs and banks.

use crate::data::money::{BANKS, CARD_TYPES, CURRENCIES, IBAN_FORMATS};
use crate::data::Currency;
use crate::generators::{pick, strings};
use crate::pattern;
use chrono::{Datelike, Utc};
use rand::Rng;

/// Placeholder vocabulary for `RANDOM_CURRENCY_PATTERN`.
pub const PATTERN_KEYS: &[&str] = &["currency", "code"];

/// Pattern used when the request omits one.
pub const DEFAULT_PATTERN: &str = "{currency} ({code})";

pub fn sample_currency<R: Rng + ?Sized>(rng: &mut R) -> &'static Currency {
    pick(rng, CURRENCIES)
}

pub fn currency_and_code(currency: &Currency) -> String {
    format!("{} ({})", currency.currency, currency.code)
}

/// Render a currency through a `{currency} ({code})`-style template.
pub fn format_pattern(currency: &Currency, template: &str) -> String {
    pattern::substitute(template, |key| match key {
        "currency" => Some(currency.currency.to_string()),
        "code" => Some(currency.code.to_string()),
        _ => None,
    })
}

/// Brand names accepted by `RANDOM_CREDIT_CARD_NUMBER_BY_BRAND`.
pub fn brand_names() -> Vec<&'static str> {
    CARD_TYPES.iter().map(|card| card.brand).collect()
}

pub fn brand_exists(brand: &str) -> bool {
    CARD_TYPES
        .iter()
        .any(|card| card.brand.eq_ignore_ascii_case(brand))
}

pub fn random_card_brand<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(rng, CARD_TYPES).brand
}

/// Card number for the given brand (random brand when `None`); digits fill
/// the `X` slots of one of the brand's masks.
pub fn random_card_number<R: Rng + ?Sized>(rng: &mut R, brand: Option<&str>) -> String {
    let card = match brand {
        Some(name) => CARD_TYPES
            .iter()
            .find(|card| card.brand.eq_ignore_ascii_case(name))
            .unwrap_or_else(|| pick(rng, CARD_TYPES)),
        None => pick(rng, CARD_TYPES),
    };
    let mask = pick(rng, card.patterns);
    pattern::fill_mask(mask, 'X', rng)
}

/// IBAN: country prefix, 2 check digits, 4 uppercase alphanumerics, then
/// digits up to the country's total length.
pub fn random_iban<R: Rng + ?Sized>(rng: &mut R) -> String {
    let format = pick(rng, IBAN_FORMATS);
    let bban_digits = format.length.saturating_sub(8);
    format!(
        "{}{}{}{}",
        format.country_code,
        strings::random_digits(rng, 2),
        strings::random_chars(rng, crate::data::strings::ALNUM_UPPERCASE, 4),
        strings::random_digits(rng, bban_digits)
    )
}

pub fn random_cvv<R: Rng + ?Sized>(rng: &mut R) -> String {
    rng.random_range(100..=999).to_string()
}

/// `MM/YY` expiry one to ten years in the future.
pub fn random_expiry_date<R: Rng + ?Sized>(rng: &mut R) -> String {
    let year = Utc::now().year() + rng.random_range(1..=10);
    let month = rng.random_range(1..=12);
    format!("{month:02}/{:02}", year % 100)
}

pub fn random_bank<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    *pick(rng, BANKS)
}
