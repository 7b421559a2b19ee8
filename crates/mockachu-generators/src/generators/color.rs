//! Color values from the common and HTML palettes.

use crate::data::colors::{COMMON_COLORS, HTML_COLORS};
use crate::data::Color;
use crate::generators::pick;
use crate::pattern;
use rand::Rng;

/// Placeholder vocabulary for the color pattern actions.
pub const PATTERN_KEYS: &[&str] = &["name", "hex"];

/// Pattern used when the request omits one.
pub const DEFAULT_PATTERN: &str = "{name} ({hex})";

/// Which palette an action samples from.
#[derive(Debug, Clone, Copy)]
pub enum Palette {
    Common,
    Html,
}

pub fn sample<R: Rng + ?Sized>(rng: &mut R, palette: Palette) -> &'static Color {
    match palette {
        Palette::Common => pick(rng, COMMON_COLORS),
        Palette::Html => pick(rng, HTML_COLORS),
    }
}

pub fn name_with_hex(color: &Color) -> String {
    format!("{} - {}", color.name, color.hex)
}

/// Render a color through a `{name} ({hex})`-style template.
pub fn format_pattern(color: &Color, template: &str) -> String {
    pattern::substitute(template, |key| match key {
        "name" => Some(color.name.to_string()),
        "hex" => Some(color.hex.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sample_palettes() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(COMMON_COLORS.contains(sample(&mut rng, Palette::Common)));
        assert!(HTML_COLORS.contains(sample(&mut rng, Palette::Html)));
    }

    #[test]
    fn test_format_pattern() {
        let color = &COMMON_COLORS[0];
        assert_eq!(
            format_pattern(color, DEFAULT_PATTERN),
            format!("{} ({})", color.name, color.hex)
        );
        assert_eq!(name_with_hex(color), format!("{} - {}", color.name, color.hex));
    }
}
