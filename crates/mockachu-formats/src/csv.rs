//! CSV serialization via the `csv` crate.
//!
//! The header row comes from the first row's field names; nulls render as
//! empty fields; quoting and escaping follow the crate's RFC 4180 rules.

use mockachu_core::{GenerateError, Row};
use std::io;

pub fn to_csv(rows: &[Row]) -> Result<Vec<u8>, GenerateError> {
    let mut writer = ::csv::Writer::from_writer(Vec::new());

    if let Some(first) = rows.first() {
        writer.write_record(first.keys()).map_err(io_error)?;
        for row in rows {
            writer
                .write_record(row.values().map(|value| value.render()))
                .map_err(io_error)?;
        }
    }

    writer
        .into_inner()
        .map_err(|e| GenerateError::Io(io::Error::other(e)))
}

fn io_error(e: ::csv::Error) -> GenerateError {
    GenerateError::Io(io::Error::other(e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockachu_core::Value;

    fn output(rows: &[Row]) -> String {
        String::from_utf8(to_csv(rows).unwrap()).unwrap()
    }

    #[test]
    fn test_header_and_null_rendering() {
        let rows = vec![
            Row::from_iter([
                ("name".to_string(), Value::Str("Ada".into())),
                ("age".to_string(), Value::Int(36)),
            ]),
            Row::from_iter([
                ("name".to_string(), Value::Null),
                ("age".to_string(), Value::Int(41)),
            ]),
        ];
        assert_eq!(output(&rows), "name,age\nAda,36\n,41\n");
    }

    #[test]
    fn test_fields_with_delimiters_are_quoted() {
        let rows = vec![Row::from_iter([
            ("a".to_string(), Value::Str("x,y".into())),
            ("b".to_string(), Value::Str("line\nbreak".into())),
            ("c".to_string(), Value::Str("has \"quotes\"".into())),
        ])];
        let out = output(&rows);
        assert!(out.contains("\"x,y\""));
        assert!(out.contains("\"line\nbreak\""));
        assert!(out.contains("\"has \"\"quotes\"\"\""));
    }
}
