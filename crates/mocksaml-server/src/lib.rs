//! # mocksaml-server
//!
//! Axum server for the mock SAML identity provider.
//!
//! This crate wires the IdP pipeline from `mocksaml-protocol` to HTTP:
//! - `/api/saml/auth` issues signed SAML Responses through an auto-posting form
//! - `/health` and `/health/live` for probes
//! - `/` reports the server version and issuer
//!
//! ## Usage
//!
//! ```ignore
//! use mocksaml_server::{Server, ServerConfig};
//!
//! let config = ServerConfig::from_env()?;
//! let server = Server::new(config)?;
//! server.run().await?;
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod config;
pub mod router;
pub mod state;

pub use config::ServerConfig;
pub use router::create_router;
pub use state::AppState;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;

use mocksaml_protocol::endpoints::IdpState;
use mocksaml_protocol::signature::{SignatureConfig, XmlSigner};
use mocksaml_protocol::{AssertionSigner, IdpConfig, MockIdp, XmlAssertionSigner};

/// The mock IdP server.
pub struct Server {
    state: AppState,
}

impl Server {
    /// Creates a new server instance.
    ///
    /// Fails if the configured key material cannot be used for signing.
    pub fn new(config: ServerConfig) -> anyhow::Result<Self> {
        let signer = XmlSigner::from_pem(&config.private_key, Some(&config.public_key))
            .context("invalid signing key material")?
            .with_config(SignatureConfig {
                algorithm: config.signature_algorithm,
                ..SignatureConfig::default()
            });

        tracing::info!(
            algorithm = config.signature_algorithm.uri(),
            "Signing key loaded"
        );

        Ok(Self::with_signer(config, Arc::new(XmlAssertionSigner::new(signer))))
    }

    /// Creates a server that signs with the given signer.
    pub fn with_signer(config: ServerConfig, signer: Arc<dyn AssertionSigner>) -> Self {
        let idp_config = IdpConfig::new(config.entity_id.clone())
            .with_default_claims(config.claim_data.clone());
        let idp = IdpState::new(MockIdp::new(idp_config, signer));

        Self {
            state: AppState::new(config, idp),
        }
    }

    /// Runs the server.
    ///
    /// This starts the HTTP server and blocks until it receives a shutdown signal.
    pub async fn run(self) -> anyhow::Result<()> {
        let listener = self.bind().await?;
        self.serve(listener).await
    }

    /// Binds the configured address.
    pub async fn bind(&self) -> anyhow::Result<TcpListener> {
        let addr: SocketAddr = self
            .state
            .config()
            .bind_address()
            .parse()
            .context("invalid bind address")?;
        TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))
    }

    /// Serves on an already bound listener until a shutdown signal arrives.
    pub async fn serve(self, listener: TcpListener) -> anyhow::Result<()> {
        let app = create_router(self.state);

        tracing::info!("Server listening on http://{}", listener.local_addr()?);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }

    /// Returns the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        self.state.config()
    }

    /// Creates a test router without starting the server.
    pub fn test_router(&self) -> Router {
        create_router(self.state.clone())
    }
}

/// Waits for a shutdown signal.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
