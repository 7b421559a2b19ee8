//! Core types for the mockachu data generation pipeline.
//!
//! This crate provides the foundational types shared by the generator,
//! format and CLI layers:
//!
//! - [`Generator`] / [`Action`] - the closed identifier vocabulary
//! - [`Value`] / [`Row`] - generated values and ordered output rows
//! - [`FieldSpec`] / [`GenerationRequest`] - declarative request model
//! - [`GenerateError`] - the single error type of the pipeline
//!
//! # Architecture
//!
//! ```text
//! mockachu-core (this crate)
//!    │
//!    ├─── mockachu-generators  (registry, resolver, row producer)
//!    ├─── mockachu-formats     (JSON/CSV/XML/SQL/HTML serializers)
//!    └─── mockachu             (pipeline wiring + CLI)
//! ```
//!
//! # Example
//!
//! ```rust
//! use mockachu_core::{GenerationRequest, OutputFormat};
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
//! assert_eq!(request.rows, 3);
//! assert_eq!(request.format, OutputFormat::Json);
//! ```

pub mod error;
pub mod request;
pub mod types;
pub mod values;

// Re-exports for convenience
pub use error::GenerateError;
pub use request::{FieldSpec, GenerationRequest, ParamValue, MAX_FIELDS, MAX_ROWS};
pub use types::{Action, Generator, OutputFormat, ParamName};
pub use values::{Row, Value};
