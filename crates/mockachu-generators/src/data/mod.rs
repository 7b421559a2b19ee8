//! Embedded datasets backing the table-lookup generators.
//!
//! Lists are compiled into the binary; generators sample them uniformly.
//! Entries that belong together (a city and its country codes, a card brand
//! and its number masks) are kept in one record so correlated fields within
//! a row stay consistent.

pub mod biology;
pub mod cars;
pub mod cinema;
pub mod colors;
pub mod files;
pub mod geo;
pub mod it;
pub mod money;
pub mod person;
pub mod strings;

/// One world-cities record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct City {
    pub city: &'static str,
    pub country: &'static str,
    pub iso_code_2: &'static str,
    pub iso_code_3: &'static str,
}

/// A currency with its ISO 4217 code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Currency {
    pub currency: &'static str,
    pub code: &'static str,
}

/// A card brand and the number masks it issues (`X` = digit slot).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardType {
    pub brand: &'static str,
    pub patterns: &'static [&'static str],
}

/// IBAN shape for one country: prefix and total length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IbanFormat {
    pub country_code: &'static str,
    pub length: usize,
}

/// A named color with its hex value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub name: &'static str,
    pub hex: &'static str,
}

/// A car brand and its models.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarBrand {
    pub brand: &'static str,
    pub models: &'static [&'static str],
}
