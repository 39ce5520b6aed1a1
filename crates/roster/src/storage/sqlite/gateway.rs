//! SQLite gateway implementation.
//!
//! Implements `roster_core::storage::StorageGateway` on top of a single
//! `tokio_rusqlite` connection. Statements run one at a time on the
//! connection's background thread.

use async_trait::async_trait;
use rusqlite::params_from_iter;
use tokio_rusqlite::Connection;

use roster_core::storage::{MutationSummary, Result, Row, StorageError, StorageGateway, Statement};

use super::conversions::{row_to_generic, to_sqlite_value};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// Rejects statements whose parameter list does not line up with the template.
fn check_arity(statement: &Statement) -> Result<()> {
    let expected = statement.placeholder_count();
    if expected != statement.params.len() {
        return Err(StorageError::Other(format!(
            "statement expects {expected} parameters, got {}: {statement}",
            statement.params.len()
        )));
    }
    Ok(())
}

fn log_failure(statement: &str, error: StorageError) -> StorageError {
    tracing::debug!(%statement, %error, "Statement failed");
    error
}

/// SQLite-backed [`StorageGateway`].
pub struct SqliteGateway {
    conn: Connection,
}

impl SqliteGateway {
    /// Opens (or creates) a file-based database and provisions the schema.
    ///
    /// The path `:memory:` opens a private in-memory database.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| StorageError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a gateway over an in-memory database.
    ///
    /// Useful for testing - data is lost when the gateway is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| StorageError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(map_tokio_rusqlite_error)
    }
}

#[async_trait]
impl StorageGateway for SqliteGateway {
    async fn query(&self, statement: Statement) -> Result<Vec<Row>> {
        check_arity(&statement)?;
        tracing::trace!(%statement, "query");
        let display = statement.to_string();
        let Statement { sql, params } = statement;

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(&sql).map_err(wrap_err)?;
                let columns: Vec<String> = stmt
                    .column_names()
                    .iter()
                    .map(|name| name.to_string())
                    .collect();

                let mut rows = stmt
                    .query(params_from_iter(params.into_iter().map(to_sqlite_value)))
                    .map_err(wrap_err)?;

                let mut result = Vec::new();
                while let Some(row) = rows.next().map_err(wrap_err)? {
                    result.push(row_to_generic(row, &columns).map_err(wrap_err)?);
                }
                Ok(result)
            })
            .await
            .map_err(|e| log_failure(&display, map_tokio_rusqlite_error(e)))
    }

    async fn execute(&self, statement: Statement) -> Result<MutationSummary> {
        check_arity(&statement)?;
        tracing::trace!(%statement, "execute");
        let display = statement.to_string();
        let Statement { sql, params } = statement;

        self.conn
            .call(move |conn| {
                let rows_affected = conn
                    .execute(&sql, params_from_iter(params.into_iter().map(to_sqlite_value)))
                    .map_err(wrap_err)?;

                Ok(MutationSummary {
                    rows_affected: rows_affected as u64,
                    last_insert_id: conn.last_insert_rowid(),
                })
            })
            .await
            .map_err(|e| log_failure(&display, map_tokio_rusqlite_error(e)))
    }
}
