//! Shared application state passed to all request handlers.

use std::sync::Arc;

use roster_core::clock::Clock;
use roster_core::member::MemberService;
use roster_core::storage::StorageGateway;

/// Shared application state.
///
/// Cloned for each request. Holds no mutable data of its own; all member
/// state lives in the store behind the gateway.
#[derive(Clone)]
pub struct AppState {
    /// Member operations.
    pub members: MemberService,
    /// Raw gateway handle, used by the health probe.
    pub gateway: Arc<dyn StorageGateway>,
}

impl AppState {
    pub fn new(gateway: Arc<dyn StorageGateway>, clock: Arc<dyn Clock>) -> Self {
        Self {
            members: MemberService::new(gateway.clone(), clock),
            gateway,
        }
    }
}
