//! Shared application state for all routes. One facade per process, created at startup.

use crate::service::Facade;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct AppState {
    pub facade: Arc<Facade>,
}

impl AppState {
    pub fn new(facade: Facade) -> Self {
        Self {
            facade: Arc::new(facade),
        }
    }
}
