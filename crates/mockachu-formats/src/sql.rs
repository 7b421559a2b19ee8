//! SQL serialization: batched INSERT statements.
//!
//! Strings are single-quoted with embedded quotes doubled; numbers and
//! booleans go unquoted; nulls become `NULL`. The header comments are a
//! pure function of the rows, keeping the output deterministic.

use mockachu_core::{Row, Value};

const TABLE_NAME: &str = "mock_data";
const BATCH_SIZE: usize = 1000;

pub fn to_sql(rows: &[Row]) -> String {
    let mut out = String::new();
    out.push_str("-- Mock data export\n");
    out.push_str(&format!("-- Record count: {}\n\n", rows.len()));

    let Some(first) = rows.first() else {
        return out;
    };
    let columns: Vec<&String> = first.keys().collect();

    out.push_str(&format!("-- CREATE TABLE IF NOT EXISTS `{TABLE_NAME}` (\n"));
    for column in &columns {
        out.push_str(&format!("--   {} TEXT,\n", quote_ident(column)));
    }
    out.push_str("-- );\n\n");

    let column_list = columns
        .iter()
        .map(|c| quote_ident(c))
        .collect::<Vec<_>>()
        .join(", ");

    for batch in rows.chunks(BATCH_SIZE) {
        out.push_str(&format!(
            "INSERT INTO `{TABLE_NAME}` ({column_list}) VALUES\n"
        ));
        for (i, row) in batch.iter().enumerate() {
            let tuple = row
                .values()
                .map(sql_literal)
                .collect::<Vec<_>>()
                .join(", ");
            let terminator = if i == batch.len() - 1 { ";\n\n" } else { ",\n" };
            out.push_str(&format!("  ({tuple}){terminator}"));
        }
    }
    out
}

fn quote_ident(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

fn sql_literal(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        Value::Int(i) => i.to_string(),
        Value::Float(f) => f.to_string(),
        Value::Str(s) => format!("'{}'", s.replace('\'', "''")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, value: Value) -> Row {
        Row::from_iter([(name.to_string(), value)])
    }

    #[test]
    fn test_insert_statement_shape() {
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
        let sql = to_sql(&rows);
        assert!(sql.contains("INSERT INTO `mock_data` (`name`, `age`) VALUES\n"));
        assert!(sql.contains("  ('Ada', 36),\n"));
        assert!(sql.contains("  (NULL, 41);\n"));
        assert!(sql.contains("-- Record count: 2"));
    }

    #[test]
    fn test_string_quotes_are_escaped() {
        let sql = to_sql(&[row("quote", Value::Str("O'Brien".into()))]);
        assert!(sql.contains("('O''Brien')"));
    }

    #[test]
    fn test_batching_splits_statements() {
        let rows: Vec<Row> = (0..BATCH_SIZE + 1)
            .map(|i| row("n", Value::Int(i as i64)))
            .collect();
        let sql = to_sql(&rows);
        assert_eq!(sql.matches("INSERT INTO").count(), 2);
    }
}
