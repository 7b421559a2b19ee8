//! Generator registry, field resolver and row producer for mockachu.
//!
//! This crate turns declarative [`mockachu_core::FieldSpec`]s into rows of
//! generated values:
//!
//! ```text
//! FieldSpec (name, generator, action, parameters)
//!        │
//!        ▼  registry::resolve  (fail-fast validation)
//!   BoundField
//!        │
//!        ▼  producer::produce  (one RowContext per row)
//!       Row { field name → Value }
//! ```
//!
//! The registry is a static lookup table built into the binary; resolution
//! validates parameter arity, types, ranges and pattern placeholders before
//! any generation work begins, so a request either fully succeeds or fails
//! with one descriptive error.
//!
//! # Example
//!
//! ```rust
//! use mockachu_core::{Action, FieldSpec, Generator, ParamValue};
//! use mockachu_generators::{producer, registry};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let spec = FieldSpec::new("n", Generator::StringGenerator, Action::RandomNumber)
//!     .with_parameters(vec![ParamValue::Int(1), ParamValue::Int(5)]);
//! let bound = registry::resolve(&spec, &[]).unwrap();
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let rows = producer::produce(&[bound], 3, &mut rng);
//! assert_eq!(rows.len(), 3);
//! ```

pub mod data;
pub mod generators;
pub mod pattern;
pub mod producer;
pub mod registry;

// Re-exports for convenience
pub use producer::{produce, RowContext};
pub use registry::{list_all, lookup, resolve, BoundArgs, BoundField, RegistryListing};
