pub mod error;
pub mod health;
pub mod members;

pub use error::{method_not_allowed, route_not_found, ApiError};
