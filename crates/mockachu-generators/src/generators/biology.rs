//! Animal and plant lookups.

use crate::data::biology::{ANIMALS, PLANTS};
use crate::generators::pick;
use rand::Rng;

pub fn random_animal<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    *pick(rng, ANIMALS)
}

pub fn random_plant<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    *pick(rng, PLANTS)
}
