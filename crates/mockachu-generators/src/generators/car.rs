//! Car data with per-row consistency.

use crate::data::cars::CARS;
use crate::generators::pick;
use crate::pattern;
use rand::Rng;

/// Placeholder vocabulary for `RANDOM_CAR_MODEL_PATTERN`.
pub const PATTERN_KEYS: &[&str] = &["brand", "model", "vin"];

/// Pattern used when the request omits one.
pub const DEFAULT_PATTERN: &str = "{brand} {model}";

/// The correlated car attributes of one row.
#[derive(Debug, Clone)]
pub struct CarSample {
    pub brand: &'static str,
    pub model: &'static str,
    pub vin: String,
}

impl CarSample {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let entry = pick(rng, CARS);
        Self {
            brand: entry.brand,
            model: *pick(rng, entry.models),
            vin: random_vin(rng),
        }
    }

    pub fn brand_and_model(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }

    /// Render through a `{brand} {model}`-style template.
    pub fn format_pattern(&self, template: &str) -> String {
        pattern::substitute(template, |key| match key {
            "brand" => Some(self.brand.to_string()),
            "model" => Some(self.model.to_string()),
            "vin" => Some(self.vin.clone()),
            _ => None,
        })
    }
}

/// 17-character VIN: 3-letter WMI, 6 alphanumeric VDS chars, one check
/// digit, 8 alphanumeric VIS chars.
pub fn random_vin<R: Rng + ?Sized>(rng: &mut R) -> String {
    const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    const ALNUM: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    const DIGITS: &[u8] = b"0123456789";

    let mut vin = String::with_capacity(17);
    for _ in 0..3 {
        vin.push(*pick(rng, LETTERS) as char);
    }
    for _ in 0..6 {
        vin.push(*pick(rng, ALNUM) as char);
    }
    vin.push(*pick(rng, DIGITS) as char);
    for _ in 0..8 {
        vin.push(*pick(rng, ALNUM) as char);
    }
    vin
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sample_brand_owns_model() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let car = CarSample::sample(&mut rng);
            let entry = CARS.iter().find(|c| c.brand == car.brand).unwrap();
            assert!(entry.models.contains(&car.model));
            assert_eq!(car.vin.len(), 17);
        }
    }

    #[test]
    fn test_format_pattern() {
        let car = CarSample {
            brand: "Toyota",
            model: "Corolla",
            vin: "ABC123".to_string(),
        };
        assert_eq!(car.format_pattern("{brand}/{model}"), "Toyota/Corolla");
        assert_eq!(car.brand_and_model(), "Toyota Corolla");
    }
}
