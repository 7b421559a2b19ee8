//! Mockachu library
//!
//! Synthetic structured-data generation: declarative field specifications
//! in, serialized datasets out.
//!
//! # Pipeline
//!
//! ```text
//! GenerationRequest (fields, rows, format)
//!        │
//!        ▼  validate          request limits, fail-fast
//!        ▼  resolve           registry lookup + parameter validation
//!        ▼  produce           one independent draw per field per row
//!        ▼  serialize         JSON / CSV / XML / SQL / HTML
//!     Vec<u8>
//! ```
//!
//! Every request is processed synchronously start to finish. The registry
//! is static and read-only, so concurrent callers only share immutable
//! state; each call owns its RNG.
//!
//! # Example
//!
//! ```rust
//! use mockachu::{generate, GenerationRequest};
//!
//! let request = GenerationRequest::from_yaml(r#"
//! rows: 3
//! format: JSON
//! fields:
//!   - name: n
//!     generator: STRING_GENERATOR
//!     action: RANDOM_NUMBER
//!     parameters: [1, 5]
//! "#).unwrap();
//!
//! let bytes = generate(&request, Some(42)).unwrap();
//! let parsed: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
//! assert_eq!(parsed.as_array().unwrap().len(), 3);
//! ```

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

pub use mockachu_core::{
    Action, FieldSpec, GenerateError, GenerationRequest, Generator, OutputFormat, ParamValue, Row,
    Value, MAX_FIELDS, MAX_ROWS,
};
pub use mockachu_formats::serialize;
pub use mockachu_generators::registry::{list_all, BoundField, RegistryListing};

/// Validate a request and bind every field against the registry.
///
/// This is the fail-fast half of the pipeline: any limit violation,
/// unknown (generator, action) pair, bad parameter or unknown placeholder
/// is reported here, before a single row exists.
pub fn resolve_request(request: &GenerationRequest) -> Result<Vec<BoundField>, GenerateError> {
    request.validate()?;

    let names: Vec<&str> = request.fields.iter().map(|f| f.name.as_str()).collect();
    request
        .fields
        .iter()
        .map(|field| mockachu_generators::resolve(field, &names))
        .collect()
}

/// Generate the rows of a request with the given RNG.
pub fn generate_rows(
    request: &GenerationRequest,
    rng: &mut StdRng,
) -> Result<Vec<Row>, GenerateError> {
    let bound = resolve_request(request)?;
    debug!(
        fields = bound.len(),
        rows = request.rows,
        "request resolved, producing rows"
    );
    Ok(mockachu_generators::produce(&bound, request.rows, rng))
}

/// Run the full pipeline: validate, resolve, produce, serialize.
///
/// `seed` makes the run reproducible; `None` seeds from the OS.
pub fn generate(
    request: &GenerationRequest,
    seed: Option<u64>,
) -> Result<Vec<u8>, GenerateError> {
    let started = std::time::Instant::now();
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let rows = generate_rows(request, &mut rng)?;
    let bytes = serialize(&rows, request.format)?;

    info!(
        rows = rows.len(),
        fields = request.fields.len(),
        format = %request.format,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "dataset generated"
    );
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_request_fails_fast_on_bad_field() {
        // Second field is invalid; the error carries its name.
        let request = GenerationRequest::from_yaml(
            r#"
rows: 10
format: JSON
fields:
  - name: ok
    generator: GEO_GENERATOR
    action: RANDOM_CITY
  - name: broken
    generator: STRING_GENERATOR
    action: RANDOM_NUMBER
    parameters: [9, 1]
"#,
        )
        .unwrap();

        match resolve_request(&request).unwrap_err() {
            GenerateError::InvalidRange { field, min, max } => {
                assert_eq!(field, "broken");
                assert_eq!((min.as_str(), max.as_str()), ("9", "1"));
            }
            other => panic!("expected InvalidRange, got {other:?}"),
        }
    }

    #[test]
    fn test_generate_is_reproducible_with_seed() {
        let request = GenerationRequest::from_yaml(
            r#"
rows: 5
format: JSON
fields:
  - name: id
    generator: IT_GENERATOR
    action: RANDOM_UUID_LOWERCASE
  - name: city
    generator: GEO_GENERATOR
    action: RANDOM_CITY
"#,
        )
        .unwrap();

        assert_eq!(
            generate(&request, Some(7)).unwrap(),
            generate(&request, Some(7)).unwrap()
        );
    }
}
