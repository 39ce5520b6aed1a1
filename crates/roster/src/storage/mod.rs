//! Storage backend implementations.
//!
//! Concrete implementations of the gateway trait defined in
//! `roster_core::storage`, plus demo data seeding.

mod seed;
pub mod sqlite;

pub use seed::seed_if_empty;
pub use sqlite::SqliteGateway;
