//! HTTP-level tests for the mock IdP server.

mod auth_endpoint;
mod common;
mod live_server;
mod signed_response;
