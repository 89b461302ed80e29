//! Endpoint state.

use std::sync::Arc;

use crate::idp::MockIdp;

/// State shared by the IdP endpoint.
#[derive(Clone, Debug)]
pub struct IdpState {
    /// The identity provider, immutable after startup.
    pub idp: Arc<MockIdp>,
}

impl IdpState {
    /// Creates the endpoint state.
    pub fn new(idp: MockIdp) -> Self {
        Self { idp: Arc::new(idp) }
    }
}
