//! SQLite schema definitions.
//!
//! Member queries live in `roster_core::member`; this module only provisions
//! the table they run against.

/// SQL statement to create all tables.
///
/// `AUTOINCREMENT` keeps SQLite from handing out the id of a deleted member
/// again.
pub const CREATE_TABLES: &str = r#"
-- Members table
CREATE TABLE IF NOT EXISTS members (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    joined_date TEXT NOT NULL
);

-- Index for the default listing order
CREATE INDEX IF NOT EXISTS idx_members_joined_date ON members(joined_date);
"#;

/// Cheap round trip used by the health probe.
pub const PING: &str = "SELECT 1 AS ok";

pub const COUNT_MEMBERS: &str = "SELECT COUNT(*) AS count FROM members";
