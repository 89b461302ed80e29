//! Authentication endpoint.

use axum::{
    body::Bytes,
    extract::{RawQuery, State},
    http::{header, HeaderMap, Method, StatusCode},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

use crate::bindings::PostForm;
use crate::idp::{AuthRequest, IdpError, IdpResult};

use super::state::IdpState;

/// Query parameters of the authentication endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct AuthQuery {
    /// Tenant namespace used to derive the issuer entity ID.
    pub namespace: Option<String>,
}

/// Handler for `/api/saml/auth`.
///
/// Answers with the auto-posting HTML form, or a plain-text error.
pub async fn saml_auth(
    State(state): State<IdpState>,
    method: Method,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    match handle_saml_auth(&state, &method, query.as_deref(), &headers, &body) {
        Ok(form) => Html(form.render()).into_response(),
        Err(e) => e.into_response(),
    }
}

fn handle_saml_auth(
    state: &IdpState,
    method: &Method,
    raw_query: Option<&str>,
    headers: &HeaderMap,
    body: &[u8],
) -> IdpResult<PostForm> {
    state.idp.check_method(method)?;
    let query = decode_query(raw_query)?;
    let request = decode_body(headers, body)?;
    state.idp.authenticate(query.namespace.as_deref(), request)
}

/// Decodes the query string. Runs after the method check so that a bad
/// query on a non-POST request still answers 405.
pub fn decode_query(raw_query: Option<&str>) -> IdpResult<AuthQuery> {
    raw_query.map_or_else(
        || Ok(AuthQuery::default()),
        |raw| serde_urlencoded::from_str(raw).map_err(|e| IdpError::MalformedBody(e.to_string())),
    )
}

/// Decodes a JSON or form-urlencoded body; JSON is assumed when the content
/// type says neither.
pub fn decode_body(headers: &HeaderMap, body: &[u8]) -> IdpResult<AuthRequest> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(AuthRequest::default());
    }

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    if content_type.starts_with("application/x-www-form-urlencoded") {
        serde_urlencoded::from_bytes(body).map_err(|e| IdpError::MalformedBody(e.to_string()))
    } else {
        serde_json::from_slice(body).map_err(|e| IdpError::MalformedBody(e.to_string()))
    }
}

impl IntoResponse for IdpError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, self.body()).into_response()
    }
}
