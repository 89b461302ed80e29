//! Inbound authentication request.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// The simulated login submitted to the IdP.
///
/// Every field defaults to the empty string when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuthRequest {
    /// Email of the user logging in.
    pub email: String,
    /// Audience URI of the service provider.
    pub audience: String,
    /// Assertion consumer service URL.
    pub acs_url: String,
    /// ID of the SP's AuthnRequest.
    pub id: String,
    /// Opaque state returned to the SP untouched.
    pub relay_state: String,
    /// Extra claims as serialized JSON. A JSON body may also send an object,
    /// which is re-serialized.
    #[serde(deserialize_with = "claims_text")]
    pub claims: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ClaimsField {
    Text(String),
    Object(Map<String, Value>),
}

fn claims_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<ClaimsField>::deserialize(deserializer)? {
        None => String::new(),
        Some(ClaimsField::Text(text)) => text,
        Some(ClaimsField::Object(map)) => Value::Object(map).to_string(),
    })
}
