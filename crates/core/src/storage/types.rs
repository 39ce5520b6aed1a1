use std::fmt;

use super::RowError;

/// A single positional parameter or column value exchanged with the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Text(String),
}

impl SqlValue {
    fn kind(&self) -> &'static str {
        match self {
            SqlValue::Null => "null",
            SqlValue::Integer(_) => "integer",
            SqlValue::Text(_) => "text",
        }
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Integer(value)
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Null => f.write_str("NULL"),
            SqlValue::Integer(value) => write!(f, "{value}"),
            SqlValue::Text(value) => write!(f, "'{value}'"),
        }
    }
}

/// A query template with its positional parameters.
///
/// Placeholders are `?` and are bound left to right, so `params[i]` always
/// belongs to the i-th `?` in `sql`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<SqlValue>,
}

impl Statement {
    /// Creates a statement with no parameters.
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    /// Appends a positional parameter.
    pub fn bind(mut self, value: impl Into<SqlValue>) -> Self {
        self.params.push(value.into());
        self
    }

    /// Number of `?` placeholders in the template.
    pub fn placeholder_count(&self) -> usize {
        self.sql.matches('?').count()
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)?;
        if self.params.is_empty() {
            return Ok(());
        }
        f.write_str(" [")?;
        for (idx, param) in self.params.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{param}")?;
        }
        f.write_str("]")
    }
}

/// One row of a result set, with values in column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    columns: Vec<String>,
    values: Vec<SqlValue>,
}

impl Row {
    pub fn new(columns: Vec<String>, values: Vec<SqlValue>) -> Self {
        Self { columns, values }
    }

    /// Looks up a value by column name.
    pub fn get(&self, column: &str) -> Result<&SqlValue, RowError> {
        self.columns
            .iter()
            .position(|c| c == column)
            .and_then(|idx| self.values.get(idx))
            .ok_or_else(|| RowError::MissingColumn(column.to_string()))
    }

    pub fn get_i64(&self, column: &str) -> Result<i64, RowError> {
        match self.get(column)? {
            SqlValue::Integer(value) => Ok(*value),
            other => Err(RowError::UnexpectedType {
                column: column.to_string(),
                expected: "integer",
                found: other.kind(),
            }),
        }
    }

    pub fn get_text(&self, column: &str) -> Result<&str, RowError> {
        match self.get(column)? {
            SqlValue::Text(value) => Ok(value),
            other => Err(RowError::UnexpectedType {
                column: column.to_string(),
                expected: "text",
                found: other.kind(),
            }),
        }
    }
}

/// Outcome of a statement that writes to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutationSummary {
    pub rows_affected: u64,
    /// Identifier of the most recently inserted row on this connection.
    /// Only meaningful after an INSERT.
    pub last_insert_id: i64,
}
