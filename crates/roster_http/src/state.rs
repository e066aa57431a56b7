//! Shared application state for request handlers.

use crate::error::ApiError;
use rusqlite::Connection;
use std::sync::{Arc, Mutex, MutexGuard};

/// Handler state: the backing store is the single shared mutable resource.
///
/// Handlers lock the connection for the duration of one operation and build
/// request-scoped repositories/services on top of it; there is no other
/// cross-request mutable state.
#[derive(Clone)]
pub struct AppState {
    db: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Wraps a migrated/ready connection (see `roster_core::db::open_db`).
    pub fn new(conn: Connection) -> Self {
        Self {
            db: Arc::new(Mutex::new(conn)),
        }
    }

    /// Locks the store connection for one request-scoped operation.
    pub fn conn(&self) -> Result<MutexGuard<'_, Connection>, ApiError> {
        self.db
            .lock()
            .map_err(|_| ApiError::Internal("store connection lock poisoned".to_string()))
    }
}
