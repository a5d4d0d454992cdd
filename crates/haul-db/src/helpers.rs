//! Row parsing and parameter normalization helpers shared by the repos.

use crate::error::DatabaseError;

/// Read a nullable TEXT column as stored. An empty string stays `Some("")`.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
/// You must use `get::<Option<String>>()` for nullable columns.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    Ok(row.get::<Option<String>>(idx)?)
}

/// Read a nullable 0/1 INTEGER column as a tri-state boolean.
///
/// # Errors
///
/// Returns `DatabaseError::InvalidState` for values other than 0 and 1.
pub fn get_opt_bool(row: &libsql::Row, idx: i32) -> Result<Option<bool>, DatabaseError> {
    match row.get::<Option<i64>>(idx)? {
        None => Ok(None),
        Some(0) => Ok(Some(false)),
        Some(1) => Ok(Some(true)),
        Some(other) => Err(DatabaseError::InvalidState(format!(
            "boolean column {idx} holds {other}"
        ))),
    }
}

/// Build `?1, ?2, ...` for an `IN (...)` clause with `count` parameters.
#[must_use]
pub fn placeholders(count: usize) -> String {
    (1..=count)
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ")
}
