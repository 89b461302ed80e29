//! Tests for `/api/saml/auth` driven through the router with a fake signer.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use serde_json::json;

use mocksaml_protocol::{derive_user, ClaimMap, HttpPostBinding};

use crate::common::*;

const AUTH: &str = "/api/saml/auth";

#[tokio::test]
async fn alice_receives_auto_post_form() {
    let (app, signer) = fake_app(None);

    let response = post_json(app, AUTH, auth_body("alice@example.com", "{}")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.content_type.starts_with("text/html"));
    assert!(response.body.contains(r#"action="https://sp.example.com/acs""#));
    assert_eq!(response.form_field("RelayState").as_deref(), Some("relay-state-1"));

    let saml_response = response.form_field("SAMLResponse").unwrap();
    let decoded = HttpPostBinding::decode_response(Some(&saml_response), None).unwrap();
    assert_eq!(decoded.xml, CANNED_XML);

    let fields = signer.last().unwrap();
    let user = derive_user("alice@example.com");
    assert_eq!(fields.claims.raw, user.to_claims());
    assert_eq!(fields.claims.email, "alice@example.com");
    assert_eq!(fields.issuer, "https://saml.example.com/entityid");
    assert_eq!(fields.audience, "https://sp.example.com");
    assert_eq!(fields.request_id, "_req-42");
    assert_eq!(
        fields.claims.raw.get("firstName").and_then(|v| v.as_str()),
        Some("alice")
    );
}

#[tokio::test]
async fn foreign_domain_is_denied() {
    let (app, signer) = fake_app(None);

    let response = post_json(app, AUTH, auth_body("bob@evil.com", "{}")).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body, "bob@evil.com denied access");
    assert!(response.content_type.starts_with("text/plain"));
    assert_eq!(signer.count(), 0);
}

#[tokio::test]
async fn invalid_claims_are_echoed() {
    let (app, signer) = fake_app(None);

    let response = post_json(app, AUTH, auth_body("alice@example.com", "not-json")).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body, "Invalid claims: not-json");
    assert_eq!(signer.count(), 0);
}

#[tokio::test]
async fn request_claims_overlay_identity() {
    let (app, signer) = fake_app(None);

    let response = post_json(
        app,
        AUTH,
        auth_body("carol@example.org", r#"{"role":"admin","email":"eve@example.com"}"#),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    let fields = signer.last().unwrap();
    assert_eq!(fields.claims.raw.get("role"), Some(&json!("admin")));
    assert_eq!(fields.claims.raw.get("email"), Some(&json!("eve@example.com")));
    assert_eq!(fields.claims.email, "carol@example.org");
}

#[tokio::test]
async fn non_post_methods_are_rejected() {
    for method in [Method::GET, Method::PUT, Method::DELETE] {
        let (app, signer) = fake_app(None);
        let request = Request::builder()
            .method(method.clone())
            .uri(AUTH)
            .body(Body::from("{not json"))
            .unwrap();

        let response = send(app, request).await;

        assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.body, format!("Method {method} Not Allowed"));
        assert_eq!(signer.count(), 0);
    }
}

#[tokio::test]
async fn get_reports_method_name() {
    let (app, _) = fake_app(None);
    let response = get(app, AUTH).await;
    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.body, "Method GET Not Allowed");
}

#[tokio::test]
async fn form_encoded_body_is_accepted() {
    let (app, signer) = fake_app(None);

    let response = post_form(
        app,
        AUTH,
        "email=alice%40example.com&audience=https%3A%2F%2Fsp&acsUrl=https%3A%2F%2Fsp%2Facs&id=_r&relayState=&claims=",
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.form_field("RelayState").as_deref(), Some(""));
    assert_eq!(signer.last().unwrap().acs_url, "https://sp/acs");
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let (app, signer) = fake_app(None);
    let request = Request::builder()
        .method(Method::POST)
        .uri(AUTH)
        .header("content-type", "application/json")
        .body(Body::from("{\"email\":"))
        .unwrap();

    let response = send(app, request).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body.starts_with("Malformed request body"));
    assert_eq!(signer.count(), 0);
}

#[tokio::test]
async fn namespace_selects_issuer() {
    let (app, signer) = fake_app(None);

    let response = post_json(
        app,
        "/api/saml/auth?namespace=acme",
        auth_body("alice@example.com", ""),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(signer.last().unwrap().issuer, "https://saml.example.com/entityid/acme");
}

#[tokio::test]
async fn bad_query_is_checked_after_method() {
    let (app, signer) = fake_app(None);
    let uri = "/api/saml/auth?namespace=a&namespace=b";

    let response = get(app.clone(), uri).await;
    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.body, "Method GET Not Allowed");

    let response = post_json(app, uri, auth_body("alice@example.com", "")).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body.starts_with("Malformed request body"));
    assert_eq!(signer.count(), 0);
}

#[tokio::test]
async fn configured_defaults_apply_without_request_claims() {
    let defaults = ClaimMap::parse(r#"{"tier":"gold"}"#).unwrap();
    let (app, signer) = fake_app(Some(defaults));

    post_json(app.clone(), AUTH, auth_body("alice@example.com", "{}")).await;
    assert_eq!(signer.last().unwrap().claims.raw.get("tier"), Some(&json!("gold")));

    post_json(app, AUTH, auth_body("alice@example.com", r#"{"role":"admin"}"#)).await;
    let fields = signer.last().unwrap();
    assert_eq!(fields.claims.raw.get("role"), Some(&json!("admin")));
    assert!(fields.claims.raw.get("tier").is_none());
}

#[tokio::test]
async fn signing_failure_is_server_error() {
    let (app, signer) = fake_app_with(None, FakeSigner::failing());

    let response = post_json(app, AUTH, auth_body("alice@example.com", "{}")).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body, "Failed to sign SAML response");
    assert_eq!(signer.count(), 1);
}

#[tokio::test]
async fn health_and_info_routes() {
    let (app, _) = fake_app(None);

    let health = get(app.clone(), "/health").await;
    assert_eq!(health.status, StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&health.body).unwrap();
    assert_eq!(body["status"], "healthy");

    assert_eq!(get(app.clone(), "/health/live").await.status, StatusCode::OK);

    let info = get(app, "/").await;
    let body: serde_json::Value = serde_json::from_str(&info.body).unwrap();
    assert_eq!(body["name"], "mocksaml");
    assert_eq!(body["entityId"], "https://saml.example.com/entityid");
    assert_eq!(body["authEndpoint"], AUTH);
}
