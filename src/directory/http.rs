//! HTTP-backed directory services.
//!
//! This module implements the [`DirectoryServices`] trait against a single
//! base URL exposing `/users`, `/companies/{id}`, and `/status`.

use crate::directory::service::{DirectoryServices, ServiceError};
use crate::models::{Company, Status, User};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Directory services reached over HTTP.
pub struct HttpDirectoryClient {
    base_url: String,
    timeout_seconds: u64,
    client: reqwest::Client,
}

impl HttpDirectoryClient {
    /// Create a client for the given base URL with a per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout_seconds: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.into(),
            timeout_seconds,
            client,
        }
    }

    /// Join the base URL with an endpoint path.
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Issue a GET request and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ServiceError> {
        let url = self.endpoint(path);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                ServiceError::Timeout {
                    url: url.clone(),
                    seconds: self.timeout_seconds,
                }
            } else if e.is_connect() {
                ServiceError::Connect { url: url.clone() }
            } else {
                ServiceError::Request {
                    url: url.clone(),
                    message: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::Upstream {
                url,
                status: status.as_u16(),
                body,
            });
        }

        response.json::<T>().await.map_err(|e| ServiceError::Decode {
            url,
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl DirectoryServices for HttpDirectoryClient {
    async fn fetch_users(&self) -> Result<Vec<User>, ServiceError> {
        self.get_json("users").await
    }

    async fn fetch_company_by_id(&self, id: u64) -> Result<Company, ServiceError> {
        self.get_json(&format!("companies/{}", id)).await
    }

    async fn fetch_status(&self) -> Result<Status, ServiceError> {
        self.get_json("status").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_paths() {
        let client = HttpDirectoryClient::new("http://localhost:8080", 30);
        assert_eq!(client.endpoint("users"), "http://localhost:8080/users");
        assert_eq!(
            client.endpoint("companies/1"),
            "http://localhost:8080/companies/1"
        );
    }

    #[test]
    fn test_endpoint_tolerates_trailing_slash() {
        let client = HttpDirectoryClient::new("http://localhost:8080/", 30);
        assert_eq!(client.endpoint("status"), "http://localhost:8080/status");
    }

    #[test]
    fn test_unreachable_service_maps_to_connect_error() {
        // Port 1 is never listening; the connection is refused immediately.
        let client = HttpDirectoryClient::new("http://127.0.0.1:1", 1);
        let err = tokio_test::block_on(client.fetch_status()).unwrap_err();
        assert!(matches!(err, ServiceError::Connect { .. }));
    }
}
