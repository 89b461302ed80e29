//! SAML bindings.
//!
//! Only the HTTP-POST binding is implemented: the identity provider hands the
//! browser an HTML form that auto-submits the base64-encoded Response to the
//! service provider's assertion consumer service.
//!
//! # Usage
//!
//! ```rust,ignore
//! use mocksaml_protocol::bindings::HttpPostBinding;
//!
//! let form = HttpPostBinding::encode_response(&signed_xml, "https://sp.example.com/acs", "relay");
//! let html = form.render();
//! ```

mod post;

pub use post::*;

/// Form parameter carrying the base64-encoded Response.
pub const SAML_RESPONSE_PARAM: &str = "SAMLResponse";

/// Form parameter carrying the opaque SP state.
pub const RELAY_STATE_PARAM: &str = "RelayState";

/// Decoded SAML binding message.
#[derive(Debug, Clone)]
pub struct DecodedMessage {
    /// The decoded XML message.
    pub xml: String,
    /// The RelayState if present.
    pub relay_state: Option<String>,
}
