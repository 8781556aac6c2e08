//! HTTP download capability
//!
//! The fetcher only needs "GET a URL and decode the body as JSON". That
//! capability is the [`Downloader`] trait, so tests can answer requests from
//! memory and the binary can use [`ReqwestDownloader`].

use crate::config::GeoNodeConfig;
use crate::domain::FetchError;
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use serde_json::Value;
use std::time::Duration;

/// GET-and-decode-JSON capability
#[async_trait]
pub trait Downloader: Send + Sync {
    /// Issues one GET to `url` and decodes the body as JSON
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] if the request fails, the server answers with a
    /// non-success status, or the body is not JSON.
    async fn get_json(&self, url: &str) -> Result<Value, FetchError>;
}

/// [`Downloader`] backed by `reqwest`
///
/// # Example
///
/// ```no_run
/// use mimu_harvester::adapters::geonode::{Downloader, ReqwestDownloader};
/// use mimu_harvester::config::GeoNodeConfig;
///
/// # async fn example() -> mimu_harvester::domain::Result<()> {
/// let downloader = ReqwestDownloader::new(&GeoNodeConfig::default())?;
/// let body = downloader.get_json("http://geonode.themimu.info/api/layers").await?;
/// # Ok(())
/// # }
/// ```
pub struct ReqwestDownloader {
    client: Client,
}

impl ReqwestDownloader {
    /// Builds the HTTP client with the configured timeout
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the client cannot be built.
    pub fn new(config: &GeoNodeConfig) -> crate::domain::Result<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(30))
            .user_agent(concat!("mimu-harvester/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                crate::domain::HarvestError::Configuration(format!(
                    "Failed to build HTTP client: {e}"
                ))
            })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Downloader for ReqwestDownloader {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        tracing::debug!(url = %url, "Sending GET request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::ConnectionFailed {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(url = %url, status = status.as_u16(), "GET request failed");
            return Err(FetchError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| FetchError::InvalidResponse {
                url: url.to_string(),
                message: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_json_decodes_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/layers")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"objects": []}"#)
            .create_async()
            .await;

        let downloader = ReqwestDownloader::new(&GeoNodeConfig::default()).unwrap();
        let body = downloader
            .get_json(&format!("{}/api/layers", server.url()))
            .await
            .unwrap();

        assert_eq!(body, serde_json::json!({"objects": []}));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_json_reports_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/layers")
            .with_status(503)
            .create_async()
            .await;

        let downloader = ReqwestDownloader::new(&GeoNodeConfig::default()).unwrap();
        let err = downloader
            .get_json(&format!("{}/api/layers", server.url()))
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::HttpStatus { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_get_json_rejects_non_json_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/layers")
            .with_status(200)
            .with_body("<html>maintenance</html>")
            .create_async()
            .await;

        let downloader = ReqwestDownloader::new(&GeoNodeConfig::default()).unwrap();
        let err = downloader
            .get_json(&format!("{}/api/layers", server.url()))
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::InvalidResponse { .. }));
    }
}
