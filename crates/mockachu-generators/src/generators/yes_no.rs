//! Boolean-flavored values in their various spellings.

use crate::generators::pick;
use mockachu_core::Value;
use rand::Rng;

/// "true" or "false" as a string, not a boolean.
pub fn random_boolean<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    *pick(rng, &["true", "false"])
}

pub fn random_bit<R: Rng + ?Sized>(rng: &mut R) -> Value {
    Value::Int(rng.random_range(0..=1))
}

pub fn random_yes_no<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    *pick(rng, &["yes", "no"])
}

pub fn random_y_n<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    *pick(rng, &["y", "n"])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_outputs_are_well_formed() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            assert!(["true", "false"].contains(&random_boolean(&mut rng)));
            assert!(matches!(random_bit(&mut rng), Value::Int(0) | Value::Int(1)));
            assert!(["yes", "no"].contains(&random_yes_no(&mut rng)));
            assert!(["y", "n"].contains(&random_y_n(&mut rng)));
        }
    }
}
