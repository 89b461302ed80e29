//! Tests against a server bound to a real socket.

use std::time::Duration;

use mocksaml_server::{Server, ServerConfig};

use crate::common::*;

#[tokio::test]
async fn serves_auth_endpoint_over_tcp() -> anyhow::Result<()> {
    let server = Server::new(ServerConfig::for_testing(KEY_PEM, CERT_PEM))?;
    let listener = server.bind().await?;
    let base_url = format!("http://{}", listener.local_addr()?);

    tokio::spawn(async move {
        if let Err(e) = server.serve(listener).await {
            tracing::error!("Server error: {}", e);
        }
    });

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()?;

    let response = client
        .post(format!("{base_url}/api/saml/auth"))
        .form(&[
            ("email", "alice@example.com"),
            ("audience", "https://sp.example.com"),
            ("acsUrl", "https://sp.example.com/acs"),
            ("id", "_req-1"),
            ("relayState", "xyz"),
            ("claims", ""),
        ])
        .send()
        .await?;

    assert_eq!(response.status().as_u16(), 200);
    let body = response.text().await?;
    assert!(body.contains(r#"name="RelayState" value="xyz""#));
    assert!(body.contains(r#"name="SAMLResponse""#));

    let response = client.get(format!("{base_url}/api/saml/auth")).send().await?;
    assert_eq!(response.status().as_u16(), 405);
    assert_eq!(response.text().await?, "Method GET Not Allowed");

    let health: serde_json::Value = client.get(format!("{base_url}/health")).send().await?.json().await?;
    assert_eq!(health["status"], "healthy");

    Ok(())
}
