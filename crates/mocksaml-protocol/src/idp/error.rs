//! Pipeline errors.

use thiserror::Error;

use crate::error::SamlError;

/// Result type for the request pipeline.
pub type IdpResult<T> = Result<T, IdpError>;

/// Terminal outcomes of an authentication request other than success.
#[derive(Debug, Error)]
pub enum IdpError {
    /// The request did not use POST.
    #[error("Method {0} Not Allowed")]
    MethodNotAllowed(String),

    /// The body could not be decoded at all.
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// The `claims` field is not a serialized JSON object; carries the raw text.
    #[error("Invalid claims: {0}")]
    InvalidClaims(String),

    /// The email is outside the domain allow-list.
    #[error("{0} denied access")]
    AccessDenied(String),

    /// The assertion could not be signed.
    #[error("failed to sign SAML response: {0}")]
    Signing(#[from] SamlError),
}

impl IdpError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::MalformedBody(_) => 400,
            Self::InvalidClaims(_) | Self::AccessDenied(_) => 403,
            Self::MethodNotAllowed(_) => 405,
            Self::Signing(_) => 500,
        }
    }

    /// Returns the plain-text body reported to the caller.
    ///
    /// Signing failures indicate misconfiguration, so their detail stays in
    /// the server log.
    #[must_use]
    pub fn body(&self) -> String {
        match self {
            Self::Signing(_) => "Failed to sign SAML response".to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_and_body() {
        let err = IdpError::MethodNotAllowed("GET".to_string());
        assert_eq!(err.http_status(), 405);
        assert_eq!(err.body(), "Method GET Not Allowed");

        let err = IdpError::InvalidClaims("not-json".to_string());
        assert_eq!(err.http_status(), 403);
        assert_eq!(err.body(), "Invalid claims: not-json");

        let err = IdpError::AccessDenied("bob@evil.com".to_string());
        assert_eq!(err.http_status(), 403);
        assert_eq!(err.body(), "bob@evil.com denied access");

        assert_eq!(IdpError::MalformedBody("eof".to_string()).http_status(), 400);
    }

    #[test]
    fn signing_detail_is_not_exposed() {
        let err: IdpError = SamlError::Crypto("bad key".to_string()).into();
        assert_eq!(err.http_status(), 500);
        assert_eq!(err.body(), "Failed to sign SAML response");
        assert!(err.to_string().contains("bad key"));
    }
}
