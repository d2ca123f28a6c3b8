use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::GithubError;

pub mod repository;
pub mod search;

pub const GITHUB_HOST: &str = "https://api.github.com";
pub(crate) const UA: &str = "github-backend-api/1.0";

/// Handle to the upstream API.
///
/// Holds no per-request state, so it is cheap to clone into every handler.
#[derive(Debug, Clone)]
pub struct GithubClient {
    host: String,
    http_client: Client,
}

impl Default for GithubClient {
    fn default() -> Self {
        Self::new(GITHUB_HOST)
    }
}

impl GithubClient {
    pub fn new(host: impl Into<String>) -> Self {
        Self::with_http_client(host, Client::new())
    }

    pub fn with_http_client(host: impl Into<String>, http_client: Client) -> Self {
        let mut host = host.into();
        while host.ends_with('/') {
            host.pop();
        }

        Self { host, http_client }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.http_client
            .get(format!("{}{}", self.host, path))
            .header(reqwest::header::USER_AGENT, UA)
    }
}

/// Translates the upstream status, keeping the response only on 200.
async fn check_status(resp: Response, not_found: &'static str) -> Result<Response, GithubError> {
    match resp.status() {
        StatusCode::OK => Ok(resp),
        StatusCode::NOT_FOUND => Err(GithubError::NotFound(not_found)),
        StatusCode::TOO_MANY_REQUESTS => Err(GithubError::RateLimited),
        status => Err(GithubError::Upstream {
            status: status.as_u16(),
            body: resp.text().await?,
        }),
    }
}

async fn decode_body<T>(resp: Response, operation: &str) -> Result<T, GithubError>
where
    T: DeserializeOwned,
{
    let raw_data = resp.text().await?;
    if cfg!(debug_assertions) {
        tracing::debug!("[Github API] {operation}, resp={raw_data}");
    }

    Ok(serde_json::from_str(&raw_data)?)
}
