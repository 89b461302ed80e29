//! SAML Assertion types.
//!
//! Assertions contain statements about a subject made by an issuer.

use chrono::{DateTime, Duration, Utc};
use serde_json::Value;

use super::{AuthnContextClass, NameId};

/// SAML Assertion.
///
/// A package of information that supplies one or more statements made
/// by a SAML authority (the issuer).
#[derive(Debug, Clone)]
pub struct Assertion {
    /// Unique identifier for this assertion.
    pub id: String,

    /// Version of the SAML protocol (always "2.0").
    pub version: String,

    /// Timestamp when this assertion was issued.
    pub issue_instant: DateTime<Utc>,

    /// The entity ID of the identity provider that issued this assertion.
    pub issuer: String,

    /// The subject of this assertion.
    pub subject: Option<Subject>,

    /// Conditions that must be evaluated for the assertion to be valid.
    pub conditions: Option<Conditions>,

    /// Authentication statement describing how the subject authenticated.
    pub authn_statement: Option<AuthnStatement>,

    /// Attribute statement containing attributes about the subject.
    pub attribute_statement: Option<AttributeStatement>,
}

impl Assertion {
    /// Creates a new assertion.
    #[must_use]
    pub fn new(issuer: impl Into<String>) -> Self {
        Self {
            id: format!("_id{}", uuid::Uuid::new_v4()),
            version: "2.0".to_string(),
            issue_instant: Utc::now(),
            issuer: issuer.into(),
            subject: None,
            conditions: None,
            authn_statement: None,
            attribute_statement: None,
        }
    }

    /// Sets the subject.
    #[must_use]
    pub fn with_subject(mut self, subject: Subject) -> Self {
        self.subject = Some(subject);
        self
    }

    /// Sets the conditions.
    #[must_use]
    pub fn with_conditions(mut self, conditions: Conditions) -> Self {
        self.conditions = Some(conditions);
        self
    }

    /// Sets the authentication statement.
    #[must_use]
    pub fn with_authn_statement(mut self, statement: AuthnStatement) -> Self {
        self.authn_statement = Some(statement);
        self
    }

    /// Sets the attribute statement.
    ///
    /// An empty statement is dropped; the schema requires at least one attribute.
    #[must_use]
    pub fn with_attribute_statement(mut self, statement: AttributeStatement) -> Self {
        self.attribute_statement = (!statement.attributes.is_empty()).then_some(statement);
        self
    }
}

/// Subject of an assertion.
#[derive(Debug, Clone)]
pub struct Subject {
    /// The name identifier for the subject.
    pub name_id: Option<NameId>,

    /// Subject confirmation data.
    pub subject_confirmations: Vec<SubjectConfirmation>,
}

impl Subject {
    /// Creates a new subject with a name ID.
    #[must_use]
    pub fn new(name_id: NameId) -> Self {
        Self {
            name_id: Some(name_id),
            subject_confirmations: Vec::new(),
        }
    }

    /// Adds a subject confirmation.
    #[must_use]
    pub fn with_confirmation(mut self, confirmation: SubjectConfirmation) -> Self {
        self.subject_confirmations.push(confirmation);
        self
    }
}

/// Subject confirmation.
#[derive(Debug, Clone)]
pub struct SubjectConfirmation {
    /// The confirmation method.
    pub method: String,

    /// Additional confirmation data.
    pub subject_confirmation_data: Option<SubjectConfirmationData>,
}

impl SubjectConfirmation {
    /// Bearer confirmation method URI.
    pub const BEARER: &'static str = "urn:oasis:names:tc:SAML:2.0:cm:bearer";

    /// Creates a bearer confirmation.
    #[must_use]
    pub fn bearer() -> Self {
        Self {
            method: Self::BEARER.to_string(),
            subject_confirmation_data: None,
        }
    }

    /// Sets the confirmation data.
    #[must_use]
    pub fn with_data(mut self, data: SubjectConfirmationData) -> Self {
        self.subject_confirmation_data = Some(data);
        self
    }
}

/// Subject confirmation data.
#[derive(Debug, Clone, Default)]
pub struct SubjectConfirmationData {
    /// The request ID that this assertion responds to.
    pub in_response_to: Option<String>,

    /// Time after which the subject can no longer be confirmed.
    pub not_on_or_after: Option<DateTime<Utc>>,

    /// The location to which the assertion can be presented.
    pub recipient: Option<String>,
}

impl SubjectConfirmationData {
    /// Creates new subject confirmation data for a request.
    ///
    /// An empty request ID leaves `InResponseTo` out (IdP-initiated flow).
    #[must_use]
    pub fn for_request(request_id: impl Into<String>, recipient: impl Into<String>) -> Self {
        let request_id = request_id.into();
        Self {
            in_response_to: (!request_id.is_empty()).then_some(request_id),
            recipient: Some(recipient.into()),
            not_on_or_after: Some(Utc::now() + Duration::minutes(5)),
        }
    }
}

/// Conditions for assertion validity.
#[derive(Debug, Clone, Default)]
pub struct Conditions {
    /// Time before which the assertion is not valid.
    pub not_before: Option<DateTime<Utc>>,

    /// Time at or after which the assertion is not valid.
    pub not_on_or_after: Option<DateTime<Utc>>,

    /// Audience restrictions.
    pub audience_restrictions: Vec<AudienceRestriction>,
}

impl Conditions {
    /// Creates new conditions valid from now for the given number of minutes.
    #[must_use]
    pub fn with_validity(validity_minutes: i64) -> Self {
        let now = Utc::now();
        Self {
            not_before: Some(now),
            not_on_or_after: Some(now + Duration::minutes(validity_minutes)),
            audience_restrictions: Vec::new(),
        }
    }

    /// Adds an audience restriction.
    #[must_use]
    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience_restrictions.push(AudienceRestriction {
            audiences: vec![audience.into()],
        });
        self
    }
}

/// Audience restriction.
#[derive(Debug, Clone, Default)]
pub struct AudienceRestriction {
    /// List of valid audiences.
    pub audiences: Vec<String>,
}

/// Authentication statement.
#[derive(Debug, Clone)]
pub struct AuthnStatement {
    /// The time of authentication.
    pub authn_instant: DateTime<Utc>,

    /// The session index (for session management).
    pub session_index: Option<String>,

    /// The authentication context class reference.
    pub authn_context_class_ref: String,
}

impl AuthnStatement {
    /// Creates a new authentication statement.
    #[must_use]
    pub fn new(context_class: AuthnContextClass) -> Self {
        Self {
            authn_instant: Utc::now(),
            session_index: Some(format!("_session{}", uuid::Uuid::new_v4())),
            authn_context_class_ref: context_class.uri().to_string(),
        }
    }
}

/// Attribute statement.
#[derive(Debug, Clone, Default)]
pub struct AttributeStatement {
    /// List of attributes.
    pub attributes: Vec<Attribute>,
}

impl AttributeStatement {
    /// Creates an attribute statement from claim name/value pairs, keeping their order.
    #[must_use]
    pub fn from_claims<'a>(claims: impl IntoIterator<Item = (&'a String, &'a Value)>) -> Self {
        let attributes = claims
            .into_iter()
            .map(|(name, value)| Attribute::from_claim(name, value))
            .collect();
        Self { attributes }
    }
}

/// SAML Attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// The attribute name.
    pub name: String,

    /// The attribute values.
    pub values: Vec<String>,
}

impl Attribute {
    /// Creates an attribute from a JSON claim value.
    ///
    /// Strings are used verbatim, arrays become one value per element,
    /// `null` becomes an empty value and anything else uses its JSON text.
    #[must_use]
    pub fn from_claim(name: impl Into<String>, value: &Value) -> Self {
        let values = match value {
            Value::Array(items) => items.iter().map(claim_text).collect(),
            other => vec![claim_text(other)],
        };
        Self {
            name: name.into(),
            values,
        }
    }
}

fn claim_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
