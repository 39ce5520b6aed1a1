//! SQLite value conversion functions.
//!
//! Pure functions for converting between rusqlite values and the
//! storage-neutral types in `roster_core::storage`.

use roster_core::storage::{Row, SqlValue};
use rusqlite::types::{Type, Value, ValueRef};

/// Convert a bound parameter into a rusqlite value.
pub fn to_sqlite_value(value: SqlValue) -> Value {
    match value {
        SqlValue::Null => Value::Null,
        SqlValue::Integer(v) => Value::Integer(v),
        SqlValue::Text(v) => Value::Text(v),
    }
}

/// Convert a column value read from SQLite.
///
/// The members table only stores integers and text; anything else is a
/// column type error.
pub fn from_sqlite_value(
    idx: usize,
    column: &str,
    value: ValueRef<'_>,
) -> rusqlite::Result<SqlValue> {
    match value {
        ValueRef::Null => Ok(SqlValue::Null),
        ValueRef::Integer(v) => Ok(SqlValue::Integer(v)),
        ValueRef::Text(bytes) => std::str::from_utf8(bytes)
            .map(|s| SqlValue::Text(s.to_string()))
            .map_err(rusqlite::Error::Utf8Error),
        ValueRef::Real(_) => Err(rusqlite::Error::InvalidColumnType(
            idx,
            column.to_string(),
            Type::Real,
        )),
        ValueRef::Blob(_) => Err(rusqlite::Error::InvalidColumnType(
            idx,
            column.to_string(),
            Type::Blob,
        )),
    }
}

/// Convert a SQLite row into a [`Row`] using the statement's column names.
pub fn row_to_generic(row: &rusqlite::Row<'_>, columns: &[String]) -> rusqlite::Result<Row> {
    let mut values = Vec::with_capacity(columns.len());
    for (idx, column) in columns.iter().enumerate() {
        values.push(from_sqlite_value(idx, column, row.get_ref(idx)?)?);
    }
    Ok(Row::new(columns.to_vec(), values))
}
