//! IdP router configuration.

use axum::{routing::any, Router};

use super::auth::saml_auth;
use super::state::IdpState;

/// Path of the authentication endpoint.
pub const SAML_AUTH_PATH: &str = "/api/saml/auth";

/// Creates the IdP router.
///
/// # Endpoints
///
/// | Method | Path             | Handler     | Description                          |
/// |--------|------------------|-------------|--------------------------------------|
/// | any    | `/api/saml/auth` | `saml_auth` | Issue a signed response (POST only)  |
///
/// Every method is routed so that the pipeline itself answers non-POST
/// requests with 405 and its own message.
pub fn idp_router() -> Router<IdpState> {
    Router::new().route(SAML_AUTH_PATH, any(saml_auth))
}
