//! Geographic data with per-row consistency.
//!
//! One city record is drawn per row; city, country and ISO codes within a
//! row always describe the same place.

use crate::data::geo::{CITIES, TIMEZONES};
use crate::data::City;
use crate::generators::pick;
use crate::pattern;
use rand::Rng;

/// Placeholder vocabulary for `RANDOM_GEO_DATA_PATTERN`.
pub const PATTERN_KEYS: &[&str] = &["city", "country", "iso_code_2", "iso_code_3"];

/// Pattern used when the request omits one.
pub const DEFAULT_PATTERN: &str = "{city}, {country} ({iso_code_2})";

/// Draw a random world-cities record.
pub fn sample_city<R: Rng + ?Sized>(rng: &mut R) -> &'static City {
    pick(rng, CITIES)
}

pub fn random_timezone<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    *pick(rng, TIMEZONES)
}

/// Pick a city restricted to the given countries. An empty filter, or one
/// matching nothing, falls back to the row's location.
pub fn city_by_countries<R: Rng + ?Sized>(
    rng: &mut R,
    countries: &[String],
    fallback: &'static City,
) -> &'static str {
    if countries.is_empty() {
        return fallback.city;
    }
    let matching: Vec<&'static City> = CITIES
        .iter()
        .filter(|city| countries.iter().any(|c| c == city.country))
        .collect();
    match matching.is_empty() {
        true => fallback.city,
        false => pick(rng, &matching).city,
    }
}

/// Render a location through a `{city}, {country}`-style template.
pub fn format_pattern(location: &City, template: &str) -> String {
    pattern::substitute(template, |key| match key {
        "city" => Some(location.city.to_string()),
        "country" => Some(location.country.to_string()),
        "iso_code_2" => Some(location.iso_code_2.to_string()),
        "iso_code_3" => Some(location.iso_code_3.to_string()),
        _ => None,
    })
}
