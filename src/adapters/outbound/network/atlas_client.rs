use crate::application::read_models::TreeView;
use crate::ports::outbound::TopologyClient;
use crate::shared::error::AtlasError;
use crate::shared::Result;
use crate::topology::domain::{FederatedAppManifest, SavedApp};
use async_trait::async_trait;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use std::time::Duration;

/// Body of an error response from the server
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Outcome of one attempt
enum Attempt {
    Done(Response),
    /// Worth trying again (connection failure or 5xx)
    Transient(String),
}

/// AtlasHttpClient adapter for the server's HTTP API
///
/// Implements the TopologyClient port with an async reqwest client.
/// Connection failures and 5xx answers are retried with a linear backoff;
/// 4xx answers are returned immediately.
pub struct AtlasHttpClient {
    client: reqwest::Client,
    base_url: String,
    max_retries: u32,
}

impl AtlasHttpClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(AtlasError::Config {
                message: format!(
                    "Server URL '{}' must start with http:// or https://",
                    base_url
                ),
            }
            .into());
        }

        let user_agent = format!("federation-atlas/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url,
            max_retries: 3,
        })
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries.max(1);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send_with_retry(
        &self,
        url: &str,
        build: impl Fn() -> RequestBuilder,
    ) -> Result<Response> {
        let mut last_error = String::new();

        for attempt in 1..=self.max_retries {
            match Self::attempt(build()).await {
                Attempt::Done(response) => return Ok(response),
                Attempt::Transient(details) => {
                    tracing::debug!(target: "atlas::cli", url, attempt, error = %details, "Request failed");
                    last_error = details;
                    if attempt < self.max_retries {
                        tokio::time::sleep(Duration::from_millis(200 * attempt as u64)).await;
                    }
                }
            }
        }

        Err(AtlasError::RemoteRequest {
            url: url.to_string(),
            details: format!("{} (after {} attempts)", last_error, self.max_retries),
        }
        .into())
    }

    async fn attempt(request: RequestBuilder) -> Attempt {
        match request.send().await {
            Ok(response) if response.status().is_server_error() => {
                let status = response.status();
                Attempt::Transient(format!("server answered {}", status))
            }
            Ok(response) => Attempt::Done(response),
            Err(e) => Attempt::Transient(e.to_string()),
        }
    }

    /// Turns a non-success answer into an error carrying the server's message
    async fn rejection(url: &str, response: Response) -> anyhow::Error {
        let status = response.status();
        let details = match response.json::<ErrorBody>().await {
            Ok(body) => format!("{}: {}", status, body.error),
            Err(_) => status.to_string(),
        };
        AtlasError::RemoteRequest {
            url: url.to_string(),
            details,
        }
        .into()
    }
}

#[async_trait]
impl TopologyClient for AtlasHttpClient {
    async fn publish(&self, manifest: &FederatedAppManifest) -> Result<SavedApp> {
        let url = format!("{}/api/apps", self.base_url);
        let response = self
            .send_with_retry(&url, || self.client.post(&url).json(manifest))
            .await?;

        if !response.status().is_success() {
            return Err(Self::rejection(&url, response).await);
        }

        let saved: SavedApp = response.json().await.map_err(|e| AtlasError::RemoteRequest {
            url: url.clone(),
            details: format!("unexpected response body: {}", e),
        })?;
        tracing::info!(target: "atlas::cli", app = %saved.name, id = %saved.id, "Published manifest");
        Ok(saved)
    }

    async fn fetch_tree(&self, host: &str, max_depth: Option<usize>) -> Result<TreeView> {
        let mut url = format!(
            "{}/api/tree?host={}",
            self.base_url,
            urlencoding::encode(host)
        );
        if let Some(depth) = max_depth {
            url.push_str(&format!("&depth={}", depth));
        }

        let response = self
            .send_with_retry(&url, || self.client.get(&url))
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(AtlasError::HostNotFound {
                host: host.to_string(),
            }
            .into()),
            status if status.is_success() => {
                response.json().await.map_err(|e| {
                    AtlasError::RemoteRequest {
                        url: url.clone(),
                        details: format!("unexpected response body: {}", e),
                    }
                    .into()
                })
            }
            _ => Err(Self::rejection(&url, response).await),
        }
    }
}
