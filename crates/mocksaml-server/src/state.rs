//! Application state management.

use std::sync::Arc;

use mocksaml_protocol::endpoints::IdpState;

use crate::config::ServerConfig;

/// Application state shared across all request handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,

    /// Identity provider endpoint state.
    pub idp: IdpState,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(config: ServerConfig, idp: IdpState) -> Self {
        Self {
            config: Arc::new(config),
            idp,
        }
    }

    /// Gets the state for the IdP endpoint.
    pub fn idp_state(&self) -> IdpState {
        self.idp.clone()
    }

    /// Returns the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
