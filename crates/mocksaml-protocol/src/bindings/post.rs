//! HTTP-POST Binding implementation.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{SamlError, SamlResult};

use super::{DecodedMessage, RELAY_STATE_PARAM, SAML_RESPONSE_PARAM};

/// A hidden form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    /// Input name.
    pub name: String,
    /// Input value, unescaped.
    pub value: String,
}

impl FormField {
    /// Creates a form field.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// An auto-submitting form addressed to an assertion consumer service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostForm {
    /// Form action URL.
    pub action: String,
    /// Hidden fields in document order.
    pub fields: Vec<FormField>,
}

impl PostForm {
    /// Returns the value of the first field named `name`.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    /// Renders the form as an HTML document.
    #[must_use]
    pub fn render(&self) -> String {
        render_auto_post_form(&self.action, &self.fields)
    }
}

/// Renders an HTML page that POSTs `fields` to `action` on load.
///
/// Browsers without JavaScript get a visible submit button instead.
#[must_use]
pub fn render_auto_post_form(action: &str, fields: &[FormField]) -> String {
    let inputs: String = fields
        .iter()
        .map(|field| {
            format!(
                r#"
        <input type="hidden" name="{}" value="{}"/>"#,
                html_escape(&field.name),
                html_escape(&field.value)
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>SAML POST Binding</title>
</head>
<body onload="document.forms[0].submit()">
    <noscript>
        <p>JavaScript is disabled. Click the button below to continue.</p>
    </noscript>
    <form method="post" action="{}">{}
        <noscript>
            <input type="submit" value="Continue"/>
        </noscript>
    </form>
</body>
</html>"#,
        html_escape(action),
        inputs
    )
}

/// HTTP-POST binding encoder/decoder.
pub struct HttpPostBinding;

impl HttpPostBinding {
    /// Packages a SAML response for the HTTP-POST binding.
    ///
    /// `RelayState` is always present, even when empty, and precedes
    /// `SAMLResponse`.
    #[must_use]
    pub fn encode_response(xml: &str, acs_url: &str, relay_state: &str) -> PostForm {
        PostForm {
            action: acs_url.to_string(),
            fields: vec![
                FormField::new(RELAY_STATE_PARAM, relay_state),
                FormField::new(SAML_RESPONSE_PARAM, STANDARD.encode(xml)),
            ],
        }
    }

    /// Decodes a Response from HTTP-POST form data, as the SP would.
    pub fn decode_response(
        saml_response: Option<&str>,
        relay_state: Option<&str>,
    ) -> SamlResult<DecodedMessage> {
        let encoded = saml_response.ok_or_else(|| {
            SamlError::InvalidRequest(format!("No {SAML_RESPONSE_PARAM} parameter"))
        })?;

        let decoded = STANDARD.decode(encoded)?;
        let xml = String::from_utf8(decoded)
            .map_err(|e| SamlError::InvalidRequest(format!("Invalid UTF-8 in message: {e}")))?;

        Ok(DecodedMessage {
            xml,
            relay_state: relay_state.map(String::from),
        })
    }
}

/// Escapes HTML special characters.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
