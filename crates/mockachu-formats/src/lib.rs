//! Output serializers for generated rows.
//!
//! [`serialize`] renders an ordered sequence of rows into one of the five
//! supported formats. Serialization is deterministic for a fixed row
//! sequence: field order inside a row is declaration order, and no
//! serializer reorders or timestamps its output.

pub mod csv;
pub mod html;
pub mod json;
pub mod sql;
pub mod xml;

use mockachu_core::{GenerateError, OutputFormat, Row};

/// Serialize rows into the requested format.
pub fn serialize(rows: &[Row], format: OutputFormat) -> Result<Vec<u8>, GenerateError> {
    match format {
        OutputFormat::Json => json::to_json(rows),
        OutputFormat::Csv => csv::to_csv(rows),
        OutputFormat::Xml => Ok(xml::to_xml(rows).into_bytes()),
        OutputFormat::Sql => Ok(sql::to_sql(rows).into_bytes()),
        OutputFormat::Html => Ok(html::to_html(rows).into_bytes()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockachu_core::Value;

    fn sample_rows() -> Vec<Row> {
        vec![
            Row::from_iter([
                ("name".to_string(), Value::Str("Ada".into())),
                ("age".to_string(), Value::Int(36)),
            ]),
            Row::from_iter([
                ("name".to_string(), Value::Null),
                ("age".to_string(), Value::Int(41)),
            ]),
        ]
    }

    #[test]
    fn test_serialize_dispatches_all_formats() {
        let rows = sample_rows();
        for format in OutputFormat::ALL {
            let bytes = serialize(&rows, format).unwrap();
            assert!(!bytes.is_empty(), "{format} output empty");
        }
    }

    #[test]
    fn test_serialization_is_deterministic() {
        let rows = sample_rows();
        for format in OutputFormat::ALL {
            assert_eq!(
                serialize(&rows, format).unwrap(),
                serialize(&rows, format).unwrap(),
                "{format} output not deterministic"
            );
        }
    }
}
