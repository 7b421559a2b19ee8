//! JSON serialization: an array of objects with explicit nulls.

use mockachu_core::{GenerateError, Row};

/// Compact JSON, key order = field declaration order.
pub fn to_json(rows: &[Row]) -> Result<Vec<u8>, GenerateError> {
    Ok(serde_json::to_vec(rows)?)
}

/// Pretty-printed variant for human consumption.
pub fn to_json_pretty(rows: &[Row]) -> Result<Vec<u8>, GenerateError> {
    Ok(serde_json::to_vec_pretty(rows)?)
}
