//! Assertion issuance.

use crate::error::{SamlError, SamlResult};
use crate::types::xml::{find_invalid_char, response_to_xml};
use crate::types::{
    Assertion, AttributeStatement, AuthnContextClass, AuthnStatement, Conditions, NameId,
    ResponseBuilder, Subject, SubjectConfirmation, SubjectConfirmationData,
};

use super::{AssertionFields, AssertionSigner, XmlSigner};

/// Assertion validity window in minutes.
const ASSERTION_VALIDITY_MINUTES: i64 = 5;

/// [`AssertionSigner`] that issues a Response with one signed assertion.
///
/// The NameID is the assertion-level email. Every merged claim becomes an
/// attribute, in merge order.
#[derive(Debug)]
pub struct XmlAssertionSigner {
    signer: XmlSigner,
}

impl XmlAssertionSigner {
    /// Wraps a configured [`XmlSigner`].
    #[must_use]
    pub fn new(signer: XmlSigner) -> Self {
        Self { signer }
    }

    /// Builds the unsigned response and returns it with the assertion ID.
    ///
    /// Fails when a field carries a character that cannot appear in XML.
    fn build(fields: &AssertionFields) -> SamlResult<(String, String)> {
        let confirmation = SubjectConfirmation::bearer().with_data(
            SubjectConfirmationData::for_request(&fields.request_id, &fields.acs_url),
        );

        let assertion = Assertion::new(&fields.issuer)
            .with_subject(Subject::new(NameId::email(&fields.claims.email)).with_confirmation(confirmation))
            .with_conditions(
                Conditions::with_validity(ASSERTION_VALIDITY_MINUTES).with_audience(&fields.audience),
            )
            .with_authn_statement(AuthnStatement::new(AuthnContextClass::PasswordProtectedTransport))
            .with_attribute_statement(AttributeStatement::from_claims(&fields.claims.raw));
        let assertion_id = assertion.id.clone();

        let response = ResponseBuilder::new(&fields.issuer)
            .in_response_to(&fields.request_id)
            .destination(&fields.acs_url)
            .assertion(assertion)
            .build();

        let xml = response_to_xml(&response);
        if let Some(c) = find_invalid_char(&xml) {
            return Err(SamlError::SignatureCreation(format!(
                "character U+{:04X} is not allowed in XML",
                u32::from(c)
            )));
        }
        Ok((xml, assertion_id))
    }
}

impl AssertionSigner for XmlAssertionSigner {
    fn sign_assertion(&self, fields: &AssertionFields) -> SamlResult<String> {
        let (xml, assertion_id) = Self::build(fields)?;
        self.signer.sign(&xml, &assertion_id)
    }
}
