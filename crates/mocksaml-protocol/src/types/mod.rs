//! SAML 2.0 types and data structures.
//!
//! This module contains the SAML types the identity provider emits:
//! responses, assertions and their statements, plus their XML serialization.

mod assertion;
mod constants;
mod name_id;
mod response;
mod status;
pub mod xml;

pub use assertion::*;
pub use constants::*;
pub use name_id::*;
pub use response::*;
pub use status::*;
