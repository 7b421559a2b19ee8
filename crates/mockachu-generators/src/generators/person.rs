//! Person data with per-row consistency.
//!
//! One [`PersonSample`] is drawn per row, so a row's first name, last name,
//! full name, username, email and gender all describe the same person.

use crate::data::person::{EMAIL_DOMAINS, FEMALE_FIRST_NAMES, LAST_NAMES, MALE_FIRST_NAMES};
use crate::generators::pick;
use rand::Rng;

/// The correlated person attributes of one row.
#[derive(Debug, Clone)]
pub struct PersonSample {
    pub gender: &'static str,
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub email_domain: &'static str,
    pub age: i64,
    pub weight: i64,
    pub height: i64,
}

impl PersonSample {
    /// Draw a fresh person: gender first, then a gender-appropriate first
    /// name, plus independent body attributes.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let gender = *pick(rng, &["Male", "Female"]);
        let first_name = if gender == "Male" {
            *pick(rng, MALE_FIRST_NAMES)
        } else {
            *pick(rng, FEMALE_FIRST_NAMES)
        };
        Self {
            gender,
            first_name,
            last_name: *pick(rng, LAST_NAMES),
            email_domain: *pick(rng, EMAIL_DOMAINS),
            age: rng.random_range(15..=70),
            weight: rng.random_range(55..=120),
            height: rng.random_range(150..=210),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn username(&self) -> String {
        format!(
            "{}.{}",
            self.first_name.to_lowercase(),
            self.last_name.to_lowercase()
        )
    }

    pub fn email(&self) -> String {
        format!("{}@{}", self.username(), self.email_domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sample_is_internally_consistent() {
        let mut rng = StdRng::seed_from_u64(42);
        let person = PersonSample::sample(&mut rng);

        assert!(person.full_name().starts_with(person.first_name));
        assert!(person.full_name().ends_with(person.last_name));
        assert!(person
            .email()
            .starts_with(&person.first_name.to_lowercase()));
        assert!(person.email().ends_with(person.email_domain));
        assert!((15..=70).contains(&person.age));
        assert!((55..=120).contains(&person.weight));
        assert!((150..=210).contains(&person.height));
    }

    #[test]
    fn test_gender_matches_name_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let person = PersonSample::sample(&mut rng);
            let pool: &[&str] = if person.gender == "Male" {
                MALE_FIRST_NAMES
            } else {
                FEMALE_FIRST_NAMES
            };
            assert!(pool.contains(&person.first_name));
        }
    }
}
