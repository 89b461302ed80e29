//! HTTP endpoint for the mock IdP.
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

mod auth;
mod router;
mod state;

pub use auth::*;
pub use router::*;
pub use state::*;
