//! REST client for the HR API.
//!
//! One shared base URL plus per-call path templates. There is no retry,
//! caching or de-duplication: every call goes to the network and a failure
//! is returned to the caller as an [`ApiError`].

mod announcements;
mod attendance;
mod auth;
mod leave;
mod people;
mod tasks;

use std::time::{Duration, Instant};

use platform_api::{ApiError, ApiResult};
use reqwest::{Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use tracing::debug;
use uuid::Uuid;

pub use platform_api;

const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Clone, Debug)]
pub struct HrClient {
    http: reqwest::Client,
    base: String,
}

impl HrClient {
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        let trimmed = config.base_url.trim().trim_end_matches('/');
        let parsed = Url::parse(trimmed)
            .map_err(|err| ApiError::invalid(format!("invalid API base URL `{trimmed}`: {err}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::invalid(format!(
                "API base URL must be http or https, got `{}`",
                parsed.scheme()
            )));
        }
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("hr-portal/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ApiError::internal)?;
        Ok(Self {
            http,
            base: trimmed.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Send one request and turn any non-2xx answer into an error.
    async fn send(
        &self,
        method: Method,
        path: &str,
        build: impl FnOnce(RequestBuilder) -> RequestBuilder,
    ) -> ApiResult<Response> {
        let request_id = Uuid::new_v4();
        let started = Instant::now();
        let request = self
            .http
            .request(method.clone(), self.url(path))
            .header(REQUEST_ID_HEADER, request_id.to_string());
        let response = build(request).send().await.map_err(|err| {
            debug!(%method, path, %request_id, error = %err, "request failed");
            ApiError::internal(err)
        })?;

        let status = response.status();
        debug!(
            %method,
            path,
            %request_id,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "api call"
        );
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_response(status.as_u16(), &body))
    }

    async fn json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let bytes = response.bytes().await.map_err(ApiError::internal)?;
        serde_json::from_slice(&bytes).map_err(ApiError::internal)
    }

    /// Lists answer with `[]`, `null` or nothing at all; all mean "none".
    async fn json_list<T: DeserializeOwned>(response: Response) -> ApiResult<Vec<T>> {
        let bytes = response.bytes().await.map_err(ApiError::internal)?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        let list: Option<Vec<T>> = serde_json::from_slice(&bytes).map_err(ApiError::internal)?;
        Ok(list.unwrap_or_default())
    }

    async fn text(response: Response) -> ApiResult<String> {
        response.text().await.map_err(ApiError::internal)
    }

    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> ApiResult<Vec<T>> {
        let response = self.send(Method::GET, path, |req| req).await?;
        Self::json_list(response).await
    }
}
