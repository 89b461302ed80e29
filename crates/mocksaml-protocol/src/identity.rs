//! Identity derivation.
//!
//! The mock IdP has no user store: every subject is derived from the email
//! address on the request.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::claims::ClaimMap;

/// Identity derived from an email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Hex-encoded SHA-256 of the email address.
    pub id: String,
    /// Email address as supplied.
    pub email: String,
    /// Local part of the email.
    pub first_name: String,
    /// Local part of the email.
    pub last_name: String,
}

impl User {
    /// Returns the identity fields as the base claim layer.
    #[must_use]
    pub fn to_claims(&self) -> ClaimMap {
        let mut claims = ClaimMap::new();
        claims.insert("id", Value::String(self.id.clone()));
        claims.insert("email", Value::String(self.email.clone()));
        claims.insert("firstName", Value::String(self.first_name.clone()));
        claims.insert("lastName", Value::String(self.last_name.clone()));
        claims
    }
}

/// Derives a [`User`] from an email address.
///
/// The ID is stable across calls and processes. Both name fields are the
/// part of the email before the first `@` (the whole string when there is none).
#[must_use]
pub fn derive_user(email: &str) -> User {
    let local_part = email.split('@').next().unwrap_or_default().to_string();
    User {
        id: mocksaml_crypto::sha256_hex(email.as_bytes()),
        email: email.to_string(),
        first_name: local_part.clone(),
        last_name: local_part,
    }
}
