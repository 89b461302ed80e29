//! XML serialization for SAML responses.
//!
//! Output is written directly in exclusive canonical form (C14N 1.0 without
//! comments): namespace declarations come first, attributes are emitted in
//! lexical order, empty elements use start/end tag pairs, there is no
//! whitespace between elements and text is escaped the way C14N escapes it.
//! The canonical octets of any element are therefore exactly its serialized
//! text, which is what the signer digests.

use chrono::{DateTime, Utc};

use super::{Assertion, AttributeStatement, AuthnStatement, Conditions, Response, Subject};
use super::{SAMLP_NS, SAML_NS};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Escapes character data the way C14N does.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\r' => out.push_str("&#xD;"),
            c => out.push(c),
        }
    }
    out
}

/// Escapes an attribute value the way C14N does.
#[must_use]
pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '"' => out.push_str("&quot;"),
            '\t' => out.push_str("&#x9;"),
            '\n' => out.push_str("&#xA;"),
            '\r' => out.push_str("&#xD;"),
            c => out.push(c),
        }
    }
    out
}

/// Returns the first character that XML 1.0 does not allow anywhere in a document.
///
/// Escaping cannot represent these, so a document containing one is not well-formed.
#[must_use]
pub fn find_invalid_char(s: &str) -> Option<char> {
    s.chars().find(|&c| !is_xml_char(c))
}

const fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}

fn timestamp(t: &DateTime<Utc>) -> String {
    t.format(TIMESTAMP_FORMAT).to_string()
}

/// Minimal writer; callers pass attributes already in canonical order.
#[derive(Default)]
struct XmlWriter {
    buf: String,
}

impl XmlWriter {
    fn open(&mut self, name: &str, attrs: &[(&str, String)]) {
        self.buf.push('<');
        self.buf.push_str(name);
        for (key, value) in attrs {
            self.buf.push(' ');
            self.buf.push_str(key);
            self.buf.push_str("=\"");
            self.buf.push_str(&escape_attr(value));
            self.buf.push('"');
        }
        self.buf.push('>');
    }

    fn close(&mut self, name: &str) {
        self.buf.push_str("</");
        self.buf.push_str(name);
        self.buf.push('>');
    }

    fn text(&mut self, text: &str) {
        self.buf.push_str(&escape_text(text));
    }

    fn element(&mut self, name: &str, attrs: &[(&str, String)], text: &str) {
        self.open(name, attrs);
        self.text(text);
        self.close(name);
    }

    fn raw(&mut self, xml: &str) {
        self.buf.push_str(xml);
    }

    fn finish(self) -> String {
        self.buf
    }
}

/// Serializes an assertion as a standalone `saml:Assertion` element.
#[must_use]
pub fn assertion_to_xml(assertion: &Assertion) -> String {
    let mut w = XmlWriter::default();
    w.open(
        "saml:Assertion",
        &[
            ("xmlns:saml", SAML_NS.to_string()),
            ("ID", assertion.id.clone()),
            ("IssueInstant", timestamp(&assertion.issue_instant)),
            ("Version", assertion.version.clone()),
        ],
    );
    w.element("saml:Issuer", &[], &assertion.issuer);

    if let Some(subject) = &assertion.subject {
        write_subject(&mut w, subject);
    }
    if let Some(conditions) = &assertion.conditions {
        write_conditions(&mut w, conditions);
    }
    if let Some(statement) = &assertion.authn_statement {
        write_authn_statement(&mut w, statement);
    }
    if let Some(statement) = &assertion.attribute_statement {
        write_attribute_statement(&mut w, statement);
    }

    w.close("saml:Assertion");
    w.finish()
}

fn write_subject(w: &mut XmlWriter, subject: &Subject) {
    w.open("saml:Subject", &[]);
    if let Some(name_id) = &subject.name_id {
        let attrs: Vec<(&str, String)> = name_id
            .format
            .iter()
            .map(|format| ("Format", format.clone()))
            .collect();
        w.element("saml:NameID", &attrs, &name_id.value);
    }
    for confirmation in &subject.subject_confirmations {
        w.open("saml:SubjectConfirmation", &[("Method", confirmation.method.clone())]);
        if let Some(data) = &confirmation.subject_confirmation_data {
            let mut attrs = Vec::new();
            if let Some(in_response_to) = &data.in_response_to {
                attrs.push(("InResponseTo", in_response_to.clone()));
            }
            if let Some(not_on_or_after) = &data.not_on_or_after {
                attrs.push(("NotOnOrAfter", timestamp(not_on_or_after)));
            }
            if let Some(recipient) = &data.recipient {
                attrs.push(("Recipient", recipient.clone()));
            }
            w.element("saml:SubjectConfirmationData", &attrs, "");
        }
        w.close("saml:SubjectConfirmation");
    }
    w.close("saml:Subject");
}

fn write_conditions(w: &mut XmlWriter, conditions: &Conditions) {
    let mut attrs = Vec::new();
    if let Some(not_before) = &conditions.not_before {
        attrs.push(("NotBefore", timestamp(not_before)));
    }
    if let Some(not_on_or_after) = &conditions.not_on_or_after {
        attrs.push(("NotOnOrAfter", timestamp(not_on_or_after)));
    }
    w.open("saml:Conditions", &attrs);
    for restriction in &conditions.audience_restrictions {
        w.open("saml:AudienceRestriction", &[]);
        for audience in &restriction.audiences {
            w.element("saml:Audience", &[], audience);
        }
        w.close("saml:AudienceRestriction");
    }
    w.close("saml:Conditions");
}

fn write_authn_statement(w: &mut XmlWriter, statement: &AuthnStatement) {
    let mut attrs = vec![("AuthnInstant", timestamp(&statement.authn_instant))];
    if let Some(session_index) = &statement.session_index {
        attrs.push(("SessionIndex", session_index.clone()));
    }
    w.open("saml:AuthnStatement", &attrs);
    w.open("saml:AuthnContext", &[]);
    w.element("saml:AuthnContextClassRef", &[], &statement.authn_context_class_ref);
    w.close("saml:AuthnContext");
    w.close("saml:AuthnStatement");
}

fn write_attribute_statement(w: &mut XmlWriter, statement: &AttributeStatement) {
    w.open("saml:AttributeStatement", &[]);
    for attribute in &statement.attributes {
        w.open("saml:Attribute", &[("Name", attribute.name.clone())]);
        for value in &attribute.values {
            w.element("saml:AttributeValue", &[], value);
        }
        w.close("saml:Attribute");
    }
    w.close("saml:AttributeStatement");
}

/// Serializes a response as a complete XML document.
#[must_use]
pub fn response_to_xml(response: &Response) -> String {
    let mut w = XmlWriter::default();
    w.raw(r#"<?xml version="1.0" encoding="UTF-8"?>"#);

    let mut attrs = vec![
        ("xmlns:saml", SAML_NS.to_string()),
        ("xmlns:samlp", SAMLP_NS.to_string()),
    ];
    if let Some(destination) = &response.destination {
        attrs.push(("Destination", destination.clone()));
    }
    attrs.push(("ID", response.id.clone()));
    if let Some(in_response_to) = &response.in_response_to {
        attrs.push(("InResponseTo", in_response_to.clone()));
    }
    attrs.push(("IssueInstant", timestamp(&response.issue_instant)));
    attrs.push(("Version", response.version.clone()));
    w.open("samlp:Response", &attrs);

    w.element("saml:Issuer", &[], &response.issuer);
    w.open("samlp:Status", &[]);
    w.element(
        "samlp:StatusCode",
        &[("Value", response.status.status_code.value.clone())],
        "",
    );
    w.close("samlp:Status");

    for assertion in &response.assertions {
        w.raw(&assertion_to_xml(assertion));
    }

    w.close("samlp:Response");
    w.finish()
}
