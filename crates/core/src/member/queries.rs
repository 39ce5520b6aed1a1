//! SQL statements for the `members` table.
//!
//! Pure data and statement builders, no I/O. Values always travel as bound
//! parameters; only column names from [`UPDATABLE_COLUMNS`] are spliced into
//! SQL text.

use super::error::MemberError;
use super::types::{format_date, MemberChanges, NewMember};
use crate::storage::{SqlValue, Statement};

/// Columns an update may touch, in the order they appear in the SET list.
pub const UPDATABLE_COLUMNS: [&str; 2] = ["name", "email"];

pub const SELECT_ALL_MEMBERS: &str =
    "SELECT id, name, email, joined_date FROM members ORDER BY joined_date DESC";

pub const SELECT_MEMBER_BY_ID: &str =
    "SELECT id, name, email, joined_date FROM members WHERE id = ?";

pub const INSERT_MEMBER: &str = "INSERT INTO members (name, email, joined_date) VALUES (?, ?, ?)";

pub const DELETE_MEMBER: &str = "DELETE FROM members WHERE id = ?";

/// Binds a path identifier for comparison against the integer `id` column.
///
/// Numeric ids bind as integers. Anything else binds as text, which never
/// equals an integer key, so the statement simply matches no rows.
pub fn id_param(id: &str) -> SqlValue {
    match id.parse::<i64>() {
        Ok(value) => SqlValue::Integer(value),
        Err(_) => SqlValue::Text(id.to_string()),
    }
}

pub fn list_members() -> Statement {
    Statement::new(SELECT_ALL_MEMBERS)
}

pub fn get_member(id: &str) -> Statement {
    Statement::new(SELECT_MEMBER_BY_ID).bind(id_param(id))
}

pub fn insert_member(member: &NewMember) -> Statement {
    Statement::new(INSERT_MEMBER)
        .bind(member.name.as_str())
        .bind(member.email.as_str())
        .bind(format_date(&member.joined_date))
}

/// Builds an UPDATE touching only the fields present in `changes`.
///
/// Each present field adds one `column = ?` and one parameter, in
/// [`UPDATABLE_COLUMNS`] order. The id is always the last parameter.
pub fn update_member(id: &str, changes: &MemberChanges) -> Result<Statement, MemberError> {
    let values = [changes.name.as_ref(), changes.email.as_ref()];

    let mut assignments = Vec::with_capacity(UPDATABLE_COLUMNS.len());
    let mut params = Vec::with_capacity(UPDATABLE_COLUMNS.len() + 1);

    for (column, value) in UPDATABLE_COLUMNS.iter().zip(values) {
        if let Some(value) = value {
            assignments.push(format!("{column} = ?"));
            params.push(SqlValue::Text(value.clone()));
        }
    }

    if assignments.is_empty() {
        return Err(MemberError::NoFieldsToUpdate);
    }

    params.push(id_param(id));

    Ok(Statement {
        sql: format!("UPDATE members SET {} WHERE id = ?", assignments.join(", ")),
        params,
    })
}

pub fn delete_member(id: &str) -> Statement {
    Statement::new(DELETE_MEMBER).bind(id_param(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn text(s: &str) -> SqlValue {
        SqlValue::Text(s.to_string())
    }

    #[test]
    fn test_id_param_numeric() {
        assert_eq!(id_param("42"), SqlValue::Integer(42));
        assert_eq!(id_param("-1"), SqlValue::Integer(-1));
    }

    #[test]
    fn test_id_param_non_numeric_stays_text() {
        assert_eq!(id_param("abc"), text("abc"));
        assert_eq!(id_param("1.5"), text("1.5"));
        assert_eq!(id_param(""), text(""));
    }

    #[test]
    fn test_list_orders_by_joined_date_desc() {
        assert!(list_members().sql.ends_with("ORDER BY joined_date DESC"));
        assert!(list_members().params.is_empty());
    }

    #[test]
    fn test_insert_binds_name_email_date() {
        let member = NewMember {
            name: "David Brown".to_string(),
            email: "david@example.com".to_string(),
            joined_date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
        };
        let stmt = insert_member(&member);

        assert_eq!(stmt.placeholder_count(), 3);
        assert_eq!(
            stmt.params,
            vec![
                text("David Brown"),
                text("david@example.com"),
                text("2024-04-01")
            ]
        );
    }

    #[test]
    fn test_update_name_only() {
        let changes = MemberChanges {
            name: Some("Alice Cooper".to_string()),
            email: None,
        };
        let stmt = update_member("1", &changes).unwrap();

        assert_eq!(stmt.sql, "UPDATE members SET name = ? WHERE id = ?");
        assert_eq!(stmt.params, vec![text("Alice Cooper"), SqlValue::Integer(1)]);
    }

    #[test]
    fn test_update_email_only() {
        let changes = MemberChanges {
            name: None,
            email: Some("bob@new.example.com".to_string()),
        };
        let stmt = update_member("2", &changes).unwrap();

        assert_eq!(stmt.sql, "UPDATE members SET email = ? WHERE id = ?");
        assert_eq!(
            stmt.params,
            vec![text("bob@new.example.com"), SqlValue::Integer(2)]
        );
    }

    #[test]
    fn test_update_both_fields_in_fixed_order() {
        let changes = MemberChanges {
            name: Some("Carol Black".to_string()),
            email: Some("carol@new.example.com".to_string()),
        };
        let stmt = update_member("3", &changes).unwrap();

        assert_eq!(stmt.sql, "UPDATE members SET name = ?, email = ? WHERE id = ?");
        assert_eq!(
            stmt.params,
            vec![
                text("Carol Black"),
                text("carol@new.example.com"),
                SqlValue::Integer(3)
            ]
        );
        assert_eq!(stmt.placeholder_count(), stmt.params.len());
    }

    #[test]
    fn test_update_never_touches_joined_date() {
        let changes = MemberChanges {
            name: Some("x".to_string()),
            email: Some("y".to_string()),
        };
        let stmt = update_member("1", &changes).unwrap();
        assert!(!stmt.sql.contains("joined_date"));
    }

    #[test]
    fn test_update_values_are_not_interpolated() {
        let changes = MemberChanges {
            name: Some("Robert'); DROP TABLE members;--".to_string()),
            email: None,
        };
        let stmt = update_member("1", &changes).unwrap();

        assert!(!stmt.sql.contains("DROP"));
        assert_eq!(stmt.params[0], text("Robert'); DROP TABLE members;--"));
    }

    #[test]
    fn test_update_without_fields_is_rejected() {
        assert_eq!(
            update_member("1", &MemberChanges::default()),
            Err(MemberError::NoFieldsToUpdate)
        );
    }

    #[test]
    fn test_delete_binds_id() {
        let stmt = delete_member("4");
        assert_eq!(stmt.sql, DELETE_MEMBER);
        assert_eq!(stmt.params, vec![SqlValue::Integer(4)]);
    }
}
