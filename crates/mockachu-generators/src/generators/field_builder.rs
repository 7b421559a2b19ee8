//! Composite fields built from the other fields of the row.
//!
//! `FIELD_JOIN` renders a template like `"{first}.{last}@example.com"`
//! against the row generated so far. A `{name:0Nd}` spec zero-pads
//! digit-only values. Null row values (and fields not generated yet, which
//! can only be later join fields) render as the empty string.

use crate::pattern::{self, Segment};
use mockachu_core::Row;

/// Render a join template against the row's generated values.
pub fn join(template: &str, row: &Row) -> String {
    let mut out = String::with_capacity(template.len());
    for segment in pattern::parse(template) {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Placeholder { name, spec } => {
                let rendered = row.get(name).map(|value| value.render()).unwrap_or_default();
                out.push_str(&apply_spec(&rendered, spec));
            }
        }
    }
    out
}

/// Apply a `0Nd` zero-padding spec to digit-only values; anything else
/// passes through untouched.
fn apply_spec(value: &str, spec: Option<&str>) -> String {
    let Some(spec) = spec else {
        return value.to_string();
    };
    let padded = spec
        .strip_prefix('0')
        .and_then(|rest| rest.strip_suffix('d'))
        .and_then(|width| width.parse::<usize>().ok())
        .filter(|_| !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()));
    match padded {
        Some(width) if width > value.len() => {
            format!("{}{}", "0".repeat(width - value.len()), value)
        }
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockachu_core::Value;

    fn row(entries: &[(&str, Value)]) -> Row {
        entries
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn test_join_simple_fields() {
        let row = row(&[
            ("first", Value::Str("ada".into())),
            ("last", Value::Str("lovelace".into())),
        ]);
        assert_eq!(
            join("{first}.{last}@example.com", &row),
            "ada.lovelace@example.com"
        );
    }

    #[test]
    fn test_join_renders_null_as_empty() {
        let row = row(&[("a", Value::Null), ("b", Value::Str("x".into()))]);
        assert_eq!(join("{a}-{b}", &row), "-x");
    }

    #[test]
    fn test_join_zero_pads_digits() {
        let numeric = row(&[("id", Value::Int(42))]);
        assert_eq!(join("{id:05d}", &numeric), "00042");
        // Spec ignored for non-digit values
        let textual = row(&[("id", Value::Str("abc".into()))]);
        assert_eq!(join("{id:05d}", &textual), "abc");
    }

    #[test]
    fn test_join_literal_only_template() {
        assert_eq!(join("constant", &Row::new()), "constant");
    }
}
