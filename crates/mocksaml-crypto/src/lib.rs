//! # mocksaml-crypto
//!
//! Cryptographic primitives for the mock SAML identity provider, backed by aws-lc-rs.
//!
//! SAML 2.0 interoperability still leans on SHA-256 (both for the
//! `rsa-sha256` signature method and for stable subject identifiers), so the
//! digest set here starts at SHA-256 rather than SHA-384.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod hash;
pub mod signature;

pub use hash::{sha256, sha256_hex, sha384, sha512};
pub use signature::{rsa_modulus_len, rsa_sign, RsaAlgorithm, SignatureError};
