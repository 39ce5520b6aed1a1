//! Functional core of the roster service.
//!
//! Domain types, request validation, SQL statement construction and the
//! member operations. Storage and time are reached only through the
//! [`storage::StorageGateway`] and [`clock::Clock`] traits.

pub mod clock;
pub mod member;
pub mod serde;
pub mod storage;
