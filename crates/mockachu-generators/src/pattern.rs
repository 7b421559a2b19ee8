//! Pattern substitution engine.
//!
//! Two template forms appear throughout the generators:
//!
//! - named tokens delimited by `{` and `}`, e.g. `"{city}, {country}"`,
//!   resolved against a key set (generator keys or row field names);
//! - digit masks, e.g. `"+1-___-___-____"`, where each mask character is
//!   independently replaced by one random digit.
//!
//! Literal characters always pass through unchanged. Unknown placeholder
//! names are rejected at field-resolution time (see `registry::resolve`),
//! never mid-row.

use rand::Rng;

/// One parsed piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Literal text, copied through verbatim.
    Literal(&'a str),
    /// `{name}` or `{name:spec}` token.
    Placeholder {
        name: &'a str,
        spec: Option<&'a str>,
    },
}

/// Parse a template into literal and placeholder segments.
///
/// An unmatched `{`, or an empty `{}`, is treated as literal text.
pub fn parse(template: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let Some(close) = rest[open..].find('}') else {
            break;
        };
        let close = open + close;
        let inner = &rest[open + 1..close];

        let (name, spec) = match inner.split_once(':') {
            Some((name, spec)) => (name, Some(spec)),
            None => (inner, None),
        };

        // Token names are word-like; anything else is literal text
        // (including the `{` itself, so scanning resumes after it).
        let is_token = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !is_token {
            segments.push(Segment::Literal(&rest[..open + 1]));
            rest = &rest[open + 1..];
            continue;
        }

        if open > 0 {
            segments.push(Segment::Literal(&rest[..open]));
        }
        segments.push(Segment::Placeholder { name, spec });
        rest = &rest[close + 1..];
    }

    if !rest.is_empty() {
        segments.push(Segment::Literal(rest));
    }
    segments
}

/// The placeholder names referenced by a template, in order of appearance.
pub fn placeholders(template: &str) -> Vec<&str> {
    parse(template)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Placeholder { name, .. } => Some(name),
            Segment::Literal(_) => None,
        })
        .collect()
}

/// Replace `{name}` tokens via `resolve`; placeholders the resolver does
/// not know are kept as literal text. A template without placeholders
/// comes back unchanged.
pub fn substitute<F>(template: &str, resolve: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::with_capacity(template.len());
    for segment in parse(template) {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Placeholder { name, spec } => match resolve(name) {
                Some(value) => out.push_str(&value),
                None => {
                    out.push('{');
                    out.push_str(name);
                    if let Some(spec) = spec {
                        out.push(':');
                        out.push_str(spec);
                    }
                    out.push('}');
                }
            },
        }
    }
    out
}

/// Replace every occurrence of `mask` with one independent random digit,
/// preserving all other characters.
pub fn fill_mask<R: Rng + ?Sized>(template: &str, mask: char, rng: &mut R) -> String {
    template
        .chars()
        .map(|c| {
            if c == mask {
                char::from_digit(rng.random_range(0..10), 10).unwrap()
            } else {
                c
            }
        })
        .collect()
}
