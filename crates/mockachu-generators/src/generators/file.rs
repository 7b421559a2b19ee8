//! File names, extensions and MIME types.

use crate::data::files::{FILE_EXTENSIONS, MIME_TYPES};
use crate::data::strings::MIXED_CASE;
use crate::generators::{pick, strings};
use rand::Rng;

/// Ten random letters plus a random extension.
pub fn random_file_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{}{}",
        strings::random_chars(rng, MIXED_CASE, 10),
        pick(rng, FILE_EXTENSIONS)
    )
}

pub fn random_file_extension<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    *pick(rng, FILE_EXTENSIONS)
}

pub fn random_mime_type<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    *pick(rng, MIME_TYPES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_file_name_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let name = random_file_name(&mut rng);
        let dot = name.find('.').unwrap();
        assert_eq!(dot, 10);
        assert!(FILE_EXTENSIONS.contains(&&name[dot..]));
    }

    #[test]
    fn test_mime_type_has_subtype() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(random_mime_type(&mut rng).contains('/'));
    }
}
