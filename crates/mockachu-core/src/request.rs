//! Declarative generation requests.
//!
//! A request names the output fields (generator + action + parameters),
//! the number of rows and the output format. Requests are usually decoded
//! from a YAML or JSON body; the CLI loads them from a file.

use crate::error::GenerateError;
use crate::types::{Action, Generator, OutputFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Maximum number of rows in a single request.
pub const MAX_ROWS: u64 = 100_000;

/// Maximum number of fields in a single request.
pub const MAX_FIELDS: usize = 50;

/// A primitive parameter value carried by a [`FieldSpec`].
///
/// Parameters are positional; each action declares the names and kinds it
/// accepts. Numeric strings coerce to numbers during resolution, so
/// loosely-typed clients can send every parameter as a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Int(i64),
    Float(f64),
    Str(String),
}

impl ParamValue {
    /// Coerce to an integer: integers pass through, integral floats and
    /// numeric strings convert, everything else is rejected.
    pub fn coerce_i64(&self) -> Option<i64> {
        match self {
            ParamValue::Int(i) => Some(*i),
            ParamValue::Float(f) if f.fract() == 0.0 => Some(*f as i64),
            ParamValue::Str(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Coerce to a float: any number passes, numeric strings convert.
    pub fn coerce_f64(&self) -> Option<f64> {
        match self {
            ParamValue::Int(i) => Some(*i as f64),
            ParamValue::Float(f) => Some(*f),
            ParamValue::Str(s) => s.trim().parse().ok(),
        }
    }

    /// The string form of the parameter, if it is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

/// Declarative description of one output field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Output key. Must be non-empty; need not be unique across fields.
    pub name: String,

    /// Generator family that produces this field.
    pub generator: Generator,

    /// Action within the generator.
    pub action: Action,

    /// Per-row probability (0-100) that this field is emitted as null.
    /// Clamped to [0, 100] during resolution.
    #[serde(default)]
    pub nullable_percentage: i64,

    /// Positional parameters for the action.
    #[serde(default)]
    pub parameters: Vec<ParamValue>,
}

impl FieldSpec {
    /// Create a field spec with no parameters and no nullability.
    pub fn new(name: impl Into<String>, generator: Generator, action: Action) -> Self {
        Self {
            name: name.into(),
            generator,
            action,
            nullable_percentage: 0,
            parameters: Vec::new(),
        }
    }

    /// Attach positional parameters.
    pub fn with_parameters(mut self, parameters: Vec<ParamValue>) -> Self {
        self.parameters = parameters;
        self
    }

    /// Set the nullable percentage.
    pub fn with_nullable(mut self, percentage: i64) -> Self {
        self.nullable_percentage = percentage;
        self
    }
}

/// A full generation request: fields, row count and output format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Ordered field specifications (1..=50 entries).
    pub fields: Vec<FieldSpec>,

    /// Number of rows to generate (1..=100_000).
    pub rows: u64,

    /// Output format for serialization.
    pub format: OutputFormat,
}

impl GenerationRequest {
    /// Parse a request from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, GenerateError> {
        let request: GenerationRequest = serde_yaml::from_str(yaml)?;
        Ok(request)
    }

    /// Parse a request from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, GenerateError> {
        let request: GenerationRequest = serde_json::from_str(json)?;
        Ok(request)
    }

    /// Load a request from a file. `.json` files parse as JSON, anything
    /// else as YAML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, GenerateError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&content),
            _ => Self::from_yaml(&content),
        }
    }

    /// Validate the request limits before any generation work begins.
    ///
    /// The pipeline never emits partial output: a request that fails here
    /// produces no rows at all.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.fields.is_empty() {
            return Err(GenerateError::EmptyFields);
        }
        if self.fields.len() > MAX_FIELDS {
            return Err(GenerateError::RequestTooLarge(format!(
                "{} fields requested, maximum is {MAX_FIELDS}",
                self.fields.len()
            )));
        }
        if self.rows == 0 {
            return Err(GenerateError::RequestTooLarge(
                "at least one row must be requested".to_string(),
            ));
        }
        if self.rows > MAX_ROWS {
            return Err(GenerateError::RequestTooLarge(format!(
                "{} rows requested, maximum is {MAX_ROWS}",
                self.rows
            )));
        }
        for field in &self.fields {
            if field.name.is_empty() {
                return Err(GenerateError::InvalidParameter {
                    field: String::new(),
                    reason: "field name must be non-empty".to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(rows: u64, fields: Vec<FieldSpec>) -> GenerationRequest {
        GenerationRequest {
            fields,
            rows,
            format: OutputFormat::Json,
        }
    }

    fn number_field() -> FieldSpec {
        FieldSpec::new("n", Generator::StringGenerator, Action::RandomNumber)
            .with_parameters(vec![ParamValue::Int(1), ParamValue::Int(5)])
    }

    #[test]
    fn test_parse_yaml_request() {
        let yaml = r#"
rows: 3
format: JSON
fields:
  - name: n
    generator: STRING_GENERATOR
    action: RANDOM_NUMBER
    parameters: [1, 5]
  - name: city
    generator: GEO_GENERATOR
    action: RANDOM_CITY
    nullable_percentage: 20
"#;
        let request = GenerationRequest::from_yaml(yaml).unwrap();
        assert_eq!(request.rows, 3);
        assert_eq!(request.fields.len(), 2);
        assert_eq!(request.fields[0].action, Action::RandomNumber);
        assert_eq!(request.fields[1].nullable_percentage, 20);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_parse_json_request() {
        let json = r#"{
            "fields": [
                {"name": "n", "generator": "STRING_GENERATOR", "action": "RANDOM_NUMBER", "parameters": [1, 5]}
            ],
            "rows": 3,
            "format": "JSON"
        }"#;
        let request = GenerationRequest::from_json(json).unwrap();
        assert_eq!(request.rows, 3);
        assert_eq!(request.fields[0].generator, Generator::StringGenerator);
    }

    #[test]
    fn test_unknown_generator_rejected_at_parse() {
        let json = r#"{
            "fields": [{"name": "x", "generator": "NOPE_GENERATOR", "action": "RANDOM_NUMBER"}],
            "rows": 1,
            "format": "JSON"
        }"#;
        assert!(GenerationRequest::from_json(json).is_err());
    }

    #[test]
    fn test_validate_rejects_zero_rows() {
        let r = request(0, vec![number_field()]);
        assert!(matches!(
            r.validate(),
            Err(GenerateError::RequestTooLarge(_))
        ));
    }

    #[test]
    fn test_validate_rejects_too_many_rows() {
        let r = request(MAX_ROWS + 1, vec![number_field()]);
        assert!(matches!(
            r.validate(),
            Err(GenerateError::RequestTooLarge(_))
        ));
    }

    #[test]
    fn test_validate_rejects_empty_fields() {
        let r = request(10, vec![]);
        assert!(matches!(r.validate(), Err(GenerateError::EmptyFields)));
    }

    #[test]
    fn test_validate_rejects_empty_field_name() {
        let mut field = number_field();
        field.name.clear();
        let r = request(10, vec![field]);
        assert!(matches!(
            r.validate(),
            Err(GenerateError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_param_value_coercion() {
        assert_eq!(ParamValue::Int(7).coerce_i64(), Some(7));
        assert_eq!(ParamValue::Float(7.0).coerce_i64(), Some(7));
        assert_eq!(ParamValue::Str("7".into()).coerce_i64(), Some(7));
        assert_eq!(ParamValue::Float(7.5).coerce_i64(), None);
        assert_eq!(ParamValue::Str("abc".into()).coerce_i64(), None);

        assert_eq!(ParamValue::Int(2).coerce_f64(), Some(2.0));
        assert_eq!(ParamValue::Str("2.5".into()).coerce_f64(), Some(2.5));
    }
}
