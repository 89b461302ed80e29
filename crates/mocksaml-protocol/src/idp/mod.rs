//! Authentication request pipeline.
//!
//! A request flows through five stages and stops at the first failure:
//!
//! 1. Validation - POST only, claims must parse, email domain must be allowed
//! 2. Identity - [`derive_user`]
//! 3. Claims - [`ClaimMerger`]
//! 4. Signing - an [`AssertionSigner`]
//! 5. Packaging - [`HttpPostBinding`]

mod entity_id;
mod error;
mod request;

pub use entity_id::*;
pub use error::*;
pub use request::*;

use std::sync::Arc;

use axum::http::Method;

use crate::bindings::{HttpPostBinding, PostForm};
use crate::claims::{ClaimMap, ClaimMerger};
use crate::identity::derive_user;
use crate::signature::{AssertionFields, AssertionSigner};

/// Email suffixes the mock IdP will issue assertions for.
pub const ALLOWED_EMAIL_SUFFIXES: [&str; 2] = ["@example.com", "@example.org"];

/// Returns true if `email` ends with an allowed suffix (case-sensitive).
#[must_use]
pub fn is_allowed_email(email: &str) -> bool {
    ALLOWED_EMAIL_SUFFIXES
        .iter()
        .any(|suffix| email.ends_with(suffix))
}

/// Static pipeline configuration.
#[derive(Debug, Clone)]
pub struct IdpConfig {
    /// Issuer entity ID template, see [`entity_id`].
    pub entity_id_template: String,
    /// Claim merger carrying the default claim set.
    pub merger: ClaimMerger,
}

impl IdpConfig {
    /// Creates a configuration without default claims.
    #[must_use]
    pub fn new(entity_id_template: impl Into<String>) -> Self {
        Self {
            entity_id_template: entity_id_template.into(),
            merger: ClaimMerger::default(),
        }
    }

    /// Sets the default claim set.
    #[must_use]
    pub fn with_default_claims(mut self, defaults: Option<ClaimMap>) -> Self {
        self.merger = ClaimMerger::new(defaults);
        self
    }
}

/// The mock identity provider.
pub struct MockIdp {
    config: IdpConfig,
    signer: Arc<dyn AssertionSigner>,
}

impl MockIdp {
    /// Creates an identity provider.
    pub fn new(config: IdpConfig, signer: Arc<dyn AssertionSigner>) -> Self {
        Self { config, signer }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &IdpConfig {
        &self.config
    }

    /// Rejects anything but POST.
    pub fn check_method(&self, method: &Method) -> IdpResult<()> {
        if *method == Method::POST {
            Ok(())
        } else {
            Err(IdpError::MethodNotAllowed(method.to_string()))
        }
    }

    /// Runs the whole pipeline for a request received with `method`.
    pub fn handle(
        &self,
        method: &Method,
        namespace: Option<&str>,
        request: AuthRequest,
    ) -> IdpResult<PostForm> {
        self.check_method(method)?;
        self.authenticate(namespace, request)
    }

    /// Runs the pipeline for a request already known to be a POST.
    pub fn authenticate(&self, namespace: Option<&str>, request: AuthRequest) -> IdpResult<PostForm> {
        let claims = validate(&request)?;

        let user = derive_user(&request.email);
        let merged = self.config.merger.merge(&user, &claims);

        let fields = AssertionFields {
            issuer: entity_id(&self.config.entity_id_template, namespace),
            audience: request.audience,
            acs_url: request.acs_url,
            request_id: request.id,
            claims: merged,
        };

        let xml = self.signer.sign_assertion(&fields).map_err(|e| {
            tracing::error!(error = %e, issuer = %fields.issuer, "Failed to sign SAML response");
            IdpError::from(e)
        })?;

        tracing::info!(
            email = %user.email,
            issuer = %fields.issuer,
            "User {} logged in, sending SAML response",
            user.email
        );

        Ok(HttpPostBinding::encode_response(&xml, &fields.acs_url, &request.relay_state))
    }
}

impl std::fmt::Debug for MockIdp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockIdp")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Parses the claims and applies the domain allow-list.
fn validate(request: &AuthRequest) -> IdpResult<ClaimMap> {
    tracing::debug!(claims = %request.claims, "Received claims");

    let claims = ClaimMap::parse(&request.claims).map_err(|e| {
        tracing::warn!(error = %e, "Rejected request with invalid claims");
        IdpError::InvalidClaims(request.claims.clone())
    })?;

    if !is_allowed_email(&request.email) {
        tracing::warn!(email = %request.email, "Rejected email outside the allowed domains");
        return Err(IdpError::AccessDenied(request.email.clone()));
    }

    Ok(claims)
}
