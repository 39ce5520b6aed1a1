use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::storage::{Row, RowError};

/// Storage format of `joined_date`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A member record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Serialized as `YYYY-MM-DD`.
    pub joined_date: NaiveDate,
}

impl Member {
    /// Decodes a row with columns `id, name, email, joined_date`.
    pub fn from_row(row: &Row) -> Result<Self, RowError> {
        let joined_date = row.get_text("joined_date")?;

        Ok(Self {
            id: row.get_i64("id")?,
            name: row.get_text("name")?.to_string(),
            email: row.get_text("email")?.to_string(),
            joined_date: parse_date(joined_date).map_err(|e| RowError::InvalidValue {
                column: "joined_date".to_string(),
                reason: e.to_string(),
            })?,
        })
    }
}

/// Validated input for a new member. The id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    pub name: String,
    pub email: String,
    pub joined_date: NaiveDate,
}

/// The subset of mutable fields an update touches.
///
/// `joined_date` is deliberately absent: it never changes after creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberChanges {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl MemberChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

/// Formats a date the way it is stored.
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parses a stored `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
}
