//! Error type for the generation pipeline.
//!
//! Every failure is a validation failure detected before row generation
//! begins; the pipeline either fully succeeds or fails with one descriptive
//! error. Variants carry enough context (field name, generator, action) to
//! be rendered as a user-facing message at the CLI or HTTP boundary.

/// Error type for request validation, field resolution and generation.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// Generator identifier not present in the registry.
    #[error("Unknown generator: {0}")]
    UnknownGenerator(String),

    /// Action not supported by the named generator.
    #[error("Generator {generator} has no action {action}")]
    UnknownAction { generator: String, action: String },

    /// Parameter count or type does not match the action's schema.
    #[error("Invalid parameter for field '{field}': {reason}")]
    InvalidParameter { field: String, reason: String },

    /// Range parameters with min > max.
    #[error("Invalid range for field '{field}': {min} > {max}")]
    InvalidRange {
        field: String,
        min: String,
        max: String,
    },

    /// Pattern template references a placeholder with no resolver mapping.
    #[error("Unknown placeholder '{{{placeholder}}}' in pattern for field '{field}'")]
    UnknownPlaceholder { field: String, placeholder: String },

    /// Row or field counts exceed the configured maxima.
    #[error("Request too large: {0}")]
    RequestTooLarge(String),

    /// A request must declare at least one field.
    #[error("Request must declare at least one field")]
    EmptyFields,

    /// Output format identifier not recognized.
    #[error("Unknown output format: {0}")]
    UnknownFormat(String),

    /// Error reading a request file.
    #[error("Failed to read request file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing a YAML request.
    #[error("Failed to parse YAML request: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Error parsing a JSON request.
    #[error("Failed to parse JSON request: {0}")]
    Json(#[from] serde_json::Error),
}
