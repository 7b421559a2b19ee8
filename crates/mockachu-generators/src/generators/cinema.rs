//! Movie and series lookups.

use crate::data::cinema::{MOVIES, SERIES};
use crate::generators::pick;
use rand::Rng;

pub fn random_movie<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    *pick(rng, MOVIES)
}

pub fn random_serie<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    *pick(rng, SERIES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_values_come_from_datasets() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(MOVIES.contains(&random_movie(&mut rng)));
        assert!(SERIES.contains(&random_serie(&mut rng)));
    }
}
