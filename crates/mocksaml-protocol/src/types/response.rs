//! SAML Response types.
//!
//! Response messages sent by the identity provider to a service provider.

use chrono::{DateTime, Utc};

use super::{Assertion, Status};

/// SAML Response.
#[derive(Debug, Clone)]
pub struct Response {
    /// Unique identifier for this response.
    pub id: String,

    /// Version of the SAML protocol (always "2.0").
    pub version: String,

    /// Timestamp when this response was issued.
    pub issue_instant: DateTime<Utc>,

    /// The entity ID of the identity provider that issued this response.
    pub issuer: String,

    /// The ID of the request this response is for.
    pub in_response_to: Option<String>,

    /// The URL where this response was sent.
    pub destination: Option<String>,

    /// The status of the response.
    pub status: Status,

    /// The assertions in this response.
    pub assertions: Vec<Assertion>,
}

impl Response {
    /// Creates a new success response.
    #[must_use]
    pub fn success(issuer: impl Into<String>) -> Self {
        Self {
            id: format!("_id{}", uuid::Uuid::new_v4()),
            version: "2.0".to_string(),
            issue_instant: Utc::now(),
            issuer: issuer.into(),
            in_response_to: None,
            destination: None,
            status: Status::success(),
            assertions: Vec::new(),
        }
    }
}

/// Builder for creating SAML responses with assertions.
pub struct ResponseBuilder {
    response: Response,
}

impl ResponseBuilder {
    /// Creates a new response builder.
    #[must_use]
    pub fn new(issuer: impl Into<String>) -> Self {
        Self {
            response: Response::success(issuer),
        }
    }

    /// Sets the request ID this response is for. Empty IDs are ignored.
    #[must_use]
    pub fn in_response_to(mut self, request_id: impl Into<String>) -> Self {
        let request_id = request_id.into();
        self.response.in_response_to = (!request_id.is_empty()).then_some(request_id);
        self
    }

    /// Sets the destination URL.
    #[must_use]
    pub fn destination(mut self, url: impl Into<String>) -> Self {
        self.response.destination = Some(url.into());
        self
    }

    /// Adds an assertion.
    #[must_use]
    pub fn assertion(mut self, assertion: Assertion) -> Self {
        self.response.assertions.push(assertion);
        self
    }

    /// Builds the response.
    #[must_use]
    pub fn build(self) -> Response {
        self.response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_builder() {
        let response = ResponseBuilder::new("https://idp.example.com")
            .in_response_to("_req123")
            .destination("https://sp.example.com/acs")
            .assertion(Assertion::new("https://idp.example.com"))
            .build();

        assert_eq!(response.status, Status::success());
        assert_eq!(response.in_response_to.as_deref(), Some("_req123"));
        assert_eq!(response.destination.as_deref(), Some("https://sp.example.com/acs"));
        assert_eq!(response.assertions.len(), 1);
    }

    #[test]
    fn empty_request_id_is_omitted() {
        let response = ResponseBuilder::new("https://idp.example.com")
            .in_response_to("")
            .build();
        assert!(response.in_response_to.is_none());
    }
}
