//! SAML 2.0 identity provider core for the mock IdP.
//!
//! This crate turns a simulated authentication request into a signed SAML
//! Response delivered through the HTTP-POST binding:
//!
//! - **Request validation** - Method check, claims parsing and the email domain allow-list
//! - **Identity derivation** - Stable subject identifiers computed from the email address
//! - **Claim merging** - Identity, request and default claim sets layered by precedence
//! - **XML signature** - Enveloped XML-DSig over the generated assertion
//! - **POST binding** - Base64 encoding and the auto-submitting HTML form
//!
//! # Architecture
//!
//! - [`types`] - Core SAML types and their XML serialization
//! - [`identity`] - The [`User`] derived from an email address
//! - [`claims`] - Claim maps and the [`ClaimMerger`]
//! - [`signature`] - XML signature creation and the [`AssertionSigner`] seam
//! - [`bindings`] - HTTP-POST binding
//! - [`idp`] - The request pipeline ([`MockIdp`])
//! - [`endpoints`] - Axum HTTP handler for the pipeline
//! - [`error`] - Error types for SAML operations
//!
//! # Example
//!
//! ```rust,ignore
//! use mocksaml_protocol::endpoints::{idp_router, IdpState};
//! use axum::Router;
//!
//! let app = Router::new()
//!     .merge(idp_router())
//!     .with_state(IdpState::new(idp));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod bindings;
pub mod claims;
pub mod endpoints;
pub mod error;
pub mod identity;
pub mod idp;
pub mod signature;
pub mod types;

pub use bindings::{HttpPostBinding, PostForm};
pub use claims::{AssertionClaims, ClaimMap, ClaimMerger};
pub use error::{SamlError, SamlResult};
pub use identity::{derive_user, User};
pub use idp::{AuthRequest, IdpConfig, IdpError, IdpResult, MockIdp};
pub use signature::{AssertionFields, AssertionSigner, XmlAssertionSigner};
