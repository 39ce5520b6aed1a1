mod error;
mod traits;
mod types;

pub use error::{Result, RowError, StorageError};
pub use traits::StorageGateway;
pub use types::{MutationSummary, Row, SqlValue, Statement};
