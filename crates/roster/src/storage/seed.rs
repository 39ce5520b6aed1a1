//! Demo data for local development.

use chrono::NaiveDate;
use roster_core::member::{insert_member, NewMember};
use roster_core::storage::{Result, Row, StorageError, StorageGateway, Statement};

use super::sqlite::schema;

/// The three sample members, oldest first so they get ids 1, 2, 3.
pub fn demo_members() -> Vec<NewMember> {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).expect("valid demo date");

    vec![
        NewMember {
            name: "Alice Johnson".to_string(),
            email: "alice@example.com".to_string(),
            joined_date: date(2024, 1, 15),
        },
        NewMember {
            name: "Bob Smith".to_string(),
            email: "bob@example.com".to_string(),
            joined_date: date(2024, 2, 20),
        },
        NewMember {
            name: "Carol White".to_string(),
            email: "carol@example.com".to_string(),
            joined_date: date(2024, 3, 10),
        },
    ]
}

fn member_count(rows: &[Row]) -> Result<i64> {
    let row = rows
        .first()
        .ok_or_else(|| StorageError::Other("member count returned no rows".to_string()))?;
    row.get_i64("count")
        .map_err(|e| StorageError::Other(format!("member count: {e}")))
}

/// Inserts [`demo_members`] when the table is empty.
///
/// Returns the number of members inserted.
pub async fn seed_if_empty(gateway: &dyn StorageGateway) -> Result<usize> {
    let rows = gateway.query(Statement::new(schema::COUNT_MEMBERS)).await?;
    let existing = member_count(&rows)?;

    if existing > 0 {
        tracing::debug!(existing, "Members table not empty, skipping seed");
        return Ok(0);
    }

    let members = demo_members();
    for member in &members {
        gateway.execute(insert_member(member)).await?;
    }

    tracing::info!(count = members.len(), "Seeded demo members");
    Ok(members.len())
}
