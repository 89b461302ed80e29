//! Router configuration.
//!
//! Combines the IdP endpoint with health and info routes.

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use mocksaml_protocol::endpoints::{idp_router, SAML_AUTH_PATH};

use crate::state::AppState;

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    let idp = idp_router().with_state(state.idp_state());

    let health = Router::new()
        .route("/health", get(health_check))
        .route("/health/live", get(liveness_check));

    let info = Router::new()
        .route("/", get(root))
        .with_state(state);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(idp)
        .merge(health)
        .merge(info)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Server information response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerInfo {
    name: &'static str,
    version: &'static str,
    entity_id: String,
    auth_endpoint: &'static str,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<&'static str>,
}

/// Root endpoint handler.
async fn root(State(state): State<AppState>) -> Json<ServerInfo> {
    Json(ServerInfo {
        name: "mocksaml",
        version: env!("CARGO_PKG_VERSION"),
        entity_id: state.config().entity_id.clone(),
        auth_endpoint: SAML_AUTH_PATH,
    })
}

/// Basic health check.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: Some(env!("CARGO_PKG_VERSION")),
    })
}

/// Kubernetes liveness probe.
async fn liveness_check() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check() {
        let response = health_check().await;
        assert_eq!(response.0.status, "healthy");
        assert_eq!(response.0.version, Some(env!("CARGO_PKG_VERSION")));
    }

    #[tokio::test]
    async fn test_liveness_check() {
        assert_eq!(liveness_check().await, StatusCode::OK);
    }
}
