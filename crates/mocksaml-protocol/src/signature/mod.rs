//! XML Signature support.
//!
//! The identity provider signs the assertion it issues with an enveloped
//! XML-DSig signature (exclusive C14N, RSA PKCS#1 v1.5).
//!
//! # Signing Algorithms
//!
//! - RSA-SHA256 (default)
//! - RSA-SHA384
//! - RSA-SHA512

mod assertion;
mod signer;

pub use assertion::*;
pub use signer::*;

use mocksaml_crypto::RsaAlgorithm;

use crate::claims::AssertionClaims;
use crate::error::SamlResult;
use crate::types::{digest_algorithms, signature_algorithms};

/// Signature algorithm selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignatureAlgorithm {
    /// RSA with SHA-256.
    #[default]
    RsaSha256,
    /// RSA with SHA-384.
    RsaSha384,
    /// RSA with SHA-512.
    RsaSha512,
}

impl SignatureAlgorithm {
    /// Returns the URI for this signature algorithm.
    #[must_use]
    pub const fn uri(&self) -> &'static str {
        match self {
            Self::RsaSha256 => signature_algorithms::RSA_SHA256,
            Self::RsaSha384 => signature_algorithms::RSA_SHA384,
            Self::RsaSha512 => signature_algorithms::RSA_SHA512,
        }
    }

    /// Returns the corresponding digest algorithm URI.
    #[must_use]
    pub const fn digest_uri(&self) -> &'static str {
        match self {
            Self::RsaSha256 => digest_algorithms::SHA256,
            Self::RsaSha384 => digest_algorithms::SHA384,
            Self::RsaSha512 => digest_algorithms::SHA512,
        }
    }

    /// Parses an algorithm from its JWA-style name (`RS256`, `RS384`, `RS512`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_uppercase().as_str() {
            "RS256" => Some(Self::RsaSha256),
            "RS384" => Some(Self::RsaSha384),
            "RS512" => Some(Self::RsaSha512),
            _ => None,
        }
    }

    /// Returns the digest of `data` under this algorithm's hash.
    #[must_use]
    pub fn digest(&self, data: &[u8]) -> Vec<u8> {
        match self {
            Self::RsaSha256 => mocksaml_crypto::sha256(data),
            Self::RsaSha384 => mocksaml_crypto::sha384(data),
            Self::RsaSha512 => mocksaml_crypto::sha512(data),
        }
    }
}

impl From<SignatureAlgorithm> for RsaAlgorithm {
    fn from(alg: SignatureAlgorithm) -> Self {
        match alg {
            SignatureAlgorithm::RsaSha256 => Self::Rs256,
            SignatureAlgorithm::RsaSha384 => Self::Rs384,
            SignatureAlgorithm::RsaSha512 => Self::Rs512,
        }
    }
}

/// Signature configuration.
#[derive(Debug, Clone, Copy)]
pub struct SignatureConfig {
    /// The signature algorithm.
    pub algorithm: SignatureAlgorithm,
    /// Whether to embed the X.509 certificate in `KeyInfo`.
    pub include_certificate: bool,
}

impl Default for SignatureConfig {
    fn default() -> Self {
        Self {
            algorithm: SignatureAlgorithm::RsaSha256,
            include_certificate: true,
        }
    }
}

/// Everything needed to issue one signed assertion.
#[derive(Debug, Clone)]
pub struct AssertionFields {
    /// Entity ID of the issuing IdP.
    pub issuer: String,
    /// Audience the assertion is restricted to.
    pub audience: String,
    /// Assertion consumer service URL; also the response destination.
    pub acs_url: String,
    /// ID of the originating AuthnRequest, empty for IdP-initiated flows.
    pub request_id: String,
    /// Merged claims and the assertion-level email.
    pub claims: AssertionClaims,
}

/// Produces a signed SAML Response document.
///
/// The request pipeline only depends on this trait, so tests can substitute
/// a signer that needs no key material.
pub trait AssertionSigner: Send + Sync {
    /// Builds and signs a SAML Response carrying one assertion.
    fn sign_assertion(&self, fields: &AssertionFields) -> SamlResult<String>;
}
