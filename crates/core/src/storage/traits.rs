use async_trait::async_trait;

use super::{MutationSummary, Result, Row, Statement};

/// Parameterized access to a SQL-capable store.
///
/// Implementations own all store-specific error inspection and report
/// uniqueness violations as [`StorageError::UniqueViolation`](super::StorageError).
#[async_trait]
pub trait StorageGateway: Send + Sync {
    /// Runs a read statement and returns every row it produces.
    async fn query(&self, statement: Statement) -> Result<Vec<Row>>;

    /// Runs a write statement and reports what it changed.
    async fn execute(&self, statement: Statement) -> Result<MutationSummary>;
}
