//! Server configuration.
//!
//! Configuration is loaded from environment variables with sensible defaults.
//! A `.env` file in the working directory is honoured.

use std::fmt;

use anyhow::Context;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use mocksaml_protocol::signature::SignatureAlgorithm;
use mocksaml_protocol::ClaimMap;

/// Default issuer entity ID.
pub const DEFAULT_ENTITY_ID: &str = "https://saml.example.com/entityid";

/// Server configuration.
#[derive(Clone)]
pub struct ServerConfig {
    /// Server host to bind to.
    pub host: String,

    /// Server port.
    pub port: u16,

    /// Issuer entity ID template.
    pub entity_id: String,

    /// PEM-encoded RSA private key.
    pub private_key: String,

    /// PEM-encoded X.509 certificate matching the private key.
    pub public_key: String,

    /// Claims used when a request supplies none.
    pub claim_data: Option<ClaimMap>,

    /// Signature algorithm for assertions.
    pub signature_algorithm: SignatureAlgorithm,

    /// Log filter.
    pub log_level: String,
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if it exists
        let _ = dotenvy::dotenv();

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let host = var("MOCKSAML_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = var("MOCKSAML_PORT")
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(4000);

        let entity_id = var("ENTITY_ID").unwrap_or_else(|| DEFAULT_ENTITY_ID.to_string());

        let private_key = var("PRIVATE_KEY")
            .ok_or_else(|| anyhow::anyhow!("PRIVATE_KEY environment variable is required"))
            .and_then(|v| decode_pem("PRIVATE_KEY", &v))?;

        let public_key = var("PUBLIC_KEY")
            .ok_or_else(|| anyhow::anyhow!("PUBLIC_KEY environment variable is required"))
            .and_then(|v| decode_pem("PUBLIC_KEY", &v))?;

        let claim_data = var("CLAIM_DATA")
            .map(|raw| ClaimMap::parse(&raw).context("CLAIM_DATA must be a JSON object"))
            .transpose()?
            .filter(|claims| !claims.is_empty());

        let signature_algorithm = match var("MOCKSAML_SIGNATURE_ALGORITHM") {
            Some(name) => SignatureAlgorithm::from_name(&name).ok_or_else(|| {
                anyhow::anyhow!(
                    "MOCKSAML_SIGNATURE_ALGORITHM must be RS256, RS384 or RS512, got {name}"
                )
            })?,
            None => SignatureAlgorithm::default(),
        };

        let log_level = var("RUST_LOG").unwrap_or_else(|| "info".to_string());

        Ok(Self {
            host,
            port,
            entity_id,
            private_key,
            public_key,
            claim_data,
            signature_algorithm,
            log_level,
        })
    }

    /// Creates a configuration for testing with the given key material.
    #[must_use]
    pub fn for_testing(private_key: &str, public_key: &str) -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0, // Random port
            entity_id: DEFAULT_ENTITY_ID.to_string(),
            private_key: private_key.to_string(),
            public_key: public_key.to_string(),
            claim_data: None,
            signature_algorithm: SignatureAlgorithm::default(),
            log_level: "debug".to_string(),
        }
    }

    /// Returns the bind address.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("entity_id", &self.entity_id)
            .field("private_key", &"<redacted>")
            .field("public_key", &format_args!("<{} bytes>", self.public_key.len()))
            .field("claim_data", &self.claim_data)
            .field("signature_algorithm", &self.signature_algorithm)
            .field("log_level", &self.log_level)
            .finish()
    }
}

/// Accepts PEM text, PEM with literal `\n` escapes or base64-encoded PEM.
fn decode_pem(name: &str, value: &str) -> anyhow::Result<String> {
    let value = value.trim();

    if value.starts_with("-----BEGIN") {
        return Ok(value.replace("\\n", "\n"));
    }

    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    let decoded = STANDARD
        .decode(compact)
        .with_context(|| format!("{name} is neither PEM nor base64-encoded PEM"))?;
    let pem = String::from_utf8(decoded).with_context(|| format!("{name} is not valid UTF-8"))?;

    anyhow::ensure!(
        pem.trim_start().starts_with("-----BEGIN"),
        "{name} does not decode to a PEM block"
    );
    Ok(pem)
}
