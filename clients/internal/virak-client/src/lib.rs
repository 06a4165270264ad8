// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Virak Cloud API Client Library
//!
//! This client provides typed access to the Virak Cloud public REST API:
//! zones, instances (with snapshots and volumes), networks, DNS, Kubernetes
//! clusters, object storage buckets, user and finance endpoints.
//!
//! ## Usage
//!
//! ```ignore
//! use virak_client::Client;
//!
//! let client = Client::builder("https://public-api.virakcloud.com", token)
//!     .timeout(std::time::Duration::from_secs(30))
//!     .build()?;
//!
//! let zones = client.list_zones().await?;
//! let instances = client.list_instances(&zones[0].id).await?;
//! ```
//!
//! Every request carries `Authorization: Bearer <token>`. Successful
//! responses wrap their payload as `{"data": ...}`, which the client unwraps.

mod api;
pub mod endpoints;
pub mod error;
pub mod types;

use std::time::Duration;

use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

pub use endpoints::Endpoint;
pub use error::Error;
pub use types::*;

/// Production API endpoint
pub const DEFAULT_BASE_URL: &str = "https://public-api.virakcloud.com";

/// Default per-request deadline
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Convenience alias for results from this crate
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Builder for [`Client`]
pub struct ClientBuilder {
    base_url: String,
    token: SecretString,
    timeout: Duration,
    user_agent: String,
}

impl ClientBuilder {
    /// Per-request deadline covering connect, send and body read
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// `User-Agent` header sent with every request
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn build(self) -> Result<Client> {
        let base_url = Url::parse(&self.base_url).map_err(|source| Error::InvalidUrl {
            url: self.base_url.clone(),
            source,
        })?;

        // Only the first install wins; later calls return Err and are ignored
        let _ = rustls::crypto::ring::default_provider().install_default();

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .build()
            .map_err(Error::Client)?;

        Ok(Client {
            http,
            base_url,
            token: self.token,
        })
    }
}

/// Authenticated Virak Cloud API client
///
/// The client is stateless apart from the bearer token and base URL; each
/// method issues exactly one HTTP request.
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    token: SecretString,
}

impl Client {
    /// Create a client with default settings
    ///
    /// # Arguments
    /// * `base_url` - API base URL (e.g., "https://public-api.virakcloud.com")
    /// * `token` - API token sent as a bearer credential
    pub fn new(base_url: &str, token: impl Into<String>) -> Result<Self> {
        Self::builder(base_url, token).build()
    }

    pub fn builder(base_url: &str, token: impl Into<String>) -> ClientBuilder {
        ClientBuilder {
            base_url: base_url.to_string(),
            token: SecretString::from(token.into()),
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("virak-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Append the endpoint to the base URL path one encoded segment at a
    /// time. Dot segments are refused rather than resolved.
    fn url(&self, path: &Endpoint, query: &[(&str, String)]) -> Result<Url> {
        let invalid = || Error::InvalidPath {
            path: path.to_string(),
        };
        if path.segments().any(|s| s == "." || s == "..") {
            return Err(invalid());
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| invalid())?
            .pop_if_empty()
            .extend(path.segments());
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }

    /// Send a request and return the raw success body
    async fn send(
        &self,
        method: Method,
        path: &Endpoint,
        query: &[(&str, String)],
        body: Option<serde_json::Value>,
    ) -> Result<Vec<u8>> {
        let url = self.url(path, query)?;
        let mut request = self
            .http
            .request(method.clone(), url)
            .bearer_auth(self.token.expose_secret())
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(body) = body {
            let bytes = serde_json::to_vec(&body).map_err(Error::Encode)?;
            request = request
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(bytes);
        }

        let transport = |source: reqwest::Error| {
            if source.is_timeout() {
                Error::Timeout {
                    path: path.to_string(),
                }
            } else {
                Error::Transport {
                    path: path.to_string(),
                    source,
                }
            }
        };

        let response = request.send().await.map_err(transport)?;
        let status = response.status();
        tracing::debug!(%method, %path, status = status.as_u16(), "api response");

        let bytes = response.bytes().await.map_err(transport)?;
        if !status.is_success() {
            let text = String::from_utf8_lossy(&bytes);
            let message = error::api_message(status, &text);
            tracing::warn!(%method, %path, status = status.as_u16(), %message, "api error");
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(bytes.to_vec())
    }

    /// Send a request and decode the `data` member of the response
    async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &Endpoint,
        query: &[(&str, String)],
        body: Option<serde_json::Value>,
    ) -> Result<T> {
        let bytes = self.send(method, path, query, body).await?;
        let envelope: Envelope<T> =
            serde_json::from_slice(&bytes).map_err(|source| Error::Decode {
                path: path.to_string(),
                source,
            })?;
        Ok(envelope.data)
    }

    /// Send a request whose response carries nothing the caller needs
    async fn execute(
        &self,
        method: Method,
        path: &Endpoint,
        body: Option<serde_json::Value>,
    ) -> Result<()> {
        self.send(method, path, &[], body).await.map(|_| ())
    }

    async fn get<T: DeserializeOwned>(&self, path: &Endpoint) -> Result<T> {
        self.call(Method::GET, path, &[], None).await
    }

    async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &Endpoint,
        query: &[(&str, String)],
    ) -> Result<T> {
        self.call(Method::GET, path, query, None).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &Endpoint, body: &B) -> Result<T> {
        self.call(Method::POST, path, &[], Some(to_json(body)?)).await
    }
}

fn to_json<B: Serialize>(body: &B) -> Result<serde_json::Value> {
    serde_json::to_value(body).map_err(Error::Encode)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_path() {
        let client = Client::new("https://api.example.com/v1/", "t").unwrap();
        let url = client.url(&endpoints::zones(), &[]).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/v1/zones");
    }

    #[test]
    fn test_url_encodes_query() {
        let client = Client::new("https://api.example.com", "t").unwrap();
        let url = client
            .url(
                &endpoints::finance_expenses(),
                &[("type", "instance".to_string()), ("q", "a b".to_string())],
            )
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.example.com/finance/expenses?type=instance&q=a+b"
        );
    }

    #[test]
    fn test_url_escapes_segments() {
        let client = Client::new("https://api.example.com", "t").unwrap();
        let url = client
            .url(&endpoints::dns_record("example.com", "a/b?c#d", "A", "50%"), &[])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.example.com/dns/domains/example.com/records/a%2Fb%3Fc%23d/A/50%25"
        );
    }

    #[test]
    fn test_url_refuses_dot_segments() {
        let client = Client::new("https://api.example.com", "t").unwrap();
        let err = client.url(&endpoints::dns_domain(".."), &[]).unwrap_err();
        assert!(matches!(err, Error::InvalidPath { .. }));
        assert!(client.url(&endpoints::dns_records("."), &[]).is_err());
    }

    #[test]
    fn test_invalid_base_url() {
        let err = Client::new("not a url", "t").err().unwrap();
        assert!(matches!(err, Error::InvalidUrl { .. }));
    }
}
