//! Common test utilities and fixtures.

use std::sync::{Arc, Mutex};

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use mocksaml_protocol::{AssertionFields, AssertionSigner, ClaimMap, SamlError, SamlResult};
use mocksaml_server::{Server, ServerConfig};

pub const KEY_PEM: &str = include_str!("../../../mocksaml-protocol/testdata/idp-key.pem");
pub const CERT_PEM: &str = include_str!("../../../mocksaml-protocol/testdata/idp-cert.pem");

pub const CANNED_XML: &str =
    r#"<?xml version="1.0" encoding="UTF-8"?><samlp:Response ID="_fake">signed</samlp:Response>"#;

/// Signer that records its inputs and returns [`CANNED_XML`].
#[derive(Default)]
pub struct FakeSigner {
    calls: Mutex<Vec<AssertionFields>>,
    fail: bool,
}

impl FakeSigner {
    /// A signer that rejects every request.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn last(&self) -> Option<AssertionFields> {
        self.calls.lock().unwrap().last().cloned()
    }

    pub fn count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl AssertionSigner for FakeSigner {
    fn sign_assertion(&self, fields: &AssertionFields) -> SamlResult<String> {
        self.calls.lock().unwrap().push(fields.clone());
        if self.fail {
            return Err(SamlError::SignatureCreation("key rejected".to_string()));
        }
        Ok(CANNED_XML.to_string())
    }
}

/// Builds a router backed by a [`FakeSigner`].
pub fn fake_app(claim_data: Option<ClaimMap>) -> (Router, Arc<FakeSigner>) {
    fake_app_with(claim_data, FakeSigner::default())
}

pub fn fake_app_with(claim_data: Option<ClaimMap>, signer: FakeSigner) -> (Router, Arc<FakeSigner>) {
    let mut config = ServerConfig::for_testing(KEY_PEM, CERT_PEM);
    config.claim_data = claim_data;

    let signer = Arc::new(signer);
    let server = Server::with_signer(config, signer.clone());
    (server.test_router(), signer)
}

/// A collected response.
pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: String,
    pub body: String,
}

impl TestResponse {
    /// Returns the `value` of the hidden input called `name`.
    pub fn form_field(&self, name: &str) -> Option<String> {
        let marker = format!(r#"name="{name}" value=""#);
        let start = self.body.find(&marker)? + marker.len();
        let end = start + self.body[start..].find('"')?;
        Some(self.body[start..end].to_string())
    }
}

pub async fn send(app: Router, request: Request<Body>) -> TestResponse {
    let response = app.oneshot(request).await.unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    TestResponse {
        status,
        content_type,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> TestResponse {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_form(app: Router, uri: &str, body: &str) -> TestResponse {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn get(app: Router, uri: &str) -> TestResponse {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// A complete request body for `email` with `claims`.
pub fn auth_body(email: &str, claims: &str) -> serde_json::Value {
    serde_json::json!({
        "email": email,
        "audience": "https://sp.example.com",
        "acsUrl": "https://sp.example.com/acs",
        "id": "_req-42",
        "relayState": "relay-state-1",
        "claims": claims,
    })
}
