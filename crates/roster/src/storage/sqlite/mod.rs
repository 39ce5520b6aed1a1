//! SQLite storage backend.
//!
//! Implements the gateway trait from `roster_core::storage` using `rusqlite`
//! for synchronous operations and `tokio-rusqlite` for async wrapping.

mod conversions;
mod error;
mod gateway;
pub mod schema;

pub use gateway::SqliteGateway;
