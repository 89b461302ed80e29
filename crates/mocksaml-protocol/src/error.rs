//! SAML error types.
//!
//! Errors raised while building, signing, encoding or decoding SAML messages.

use thiserror::Error;

use mocksaml_crypto::SignatureError;

/// Result type for SAML operations.
pub type SamlResult<T> = Result<T, SamlError>;

/// SAML protocol errors.
#[derive(Debug, Error)]
pub enum SamlError {
    /// Invalid SAML message format or content.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// XML signature creation failed.
    #[error("signature creation failed: {0}")]
    SignatureCreation(String),

    /// Key material could not be parsed.
    #[error("crypto error: {0}")]
    Crypto(String),

    /// Base64 decoding error.
    #[error("base64 decode error: {0}")]
    Base64Decode(String),
}

impl From<base64::DecodeError> for SamlError {
    fn from(err: base64::DecodeError) -> Self {
        Self::Base64Decode(err.to_string())
    }
}

impl From<SignatureError> for SamlError {
    fn from(err: SignatureError) -> Self {
        match err {
            SignatureError::InvalidKey(msg) => Self::Crypto(msg),
            SignatureError::Signing(msg) => Self::SignatureCreation(msg),
        }
    }
}
