//! The HTTP transport seam: a request/response pair plus the [`Transport`]
//! trait the fetch hook issues calls through.

use std::collections::HashMap;

use futures::future::LocalBoxFuture;

pub use reqwest::Method;

/// Header conveying the pre-pagination total on list responses.
pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

/// An HTTP response with headers and payload exposed separately. Header
/// names are lowercased.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResponse {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl FetchResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

/// The single undifferentiated failure surfaced by a fetch: transport
/// errors, HTTP error statuses, and response decoding all end up here.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchError {
    #[error("request failed with status {0}: {1}")]
    Status(u16, String),
    #[error("network error: {0}")]
    Network(String),
    #[error("could not decode response: {0}")]
    Decode(String),
}

/// A request/response client supporting per-call method, params and body
/// overrides.
///
/// Futures are local: the whole fetch stack is single-threaded.
pub trait Transport {
    fn send(
        &self,
        request: FetchRequest,
    ) -> LocalBoxFuture<'static, Result<FetchResponse, FetchError>>;
}

/// The reqwest-backed transport. The base address is per-instance, set
/// once at construction.
pub struct HttpTransport {
    pub address: String,
    pub inner_client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            inner_client: reqwest::Client::new(),
        }
    }
}

impl Transport for HttpTransport {
    fn send(
        &self,
        request: FetchRequest,
    ) -> LocalBoxFuture<'static, Result<FetchResponse, FetchError>> {
        let url = format!("{}{}", self.address, request.url);
        let mut builder = self
            .inner_client
            .request(request.method, url)
            .query(&request.query);
        for (name, value) in request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        Box::pin(async move {
            let response = builder
                .send()
                .await
                .map_err(|e| FetchError::Network(e.to_string()))?;
            let status = response.status().as_u16();
            let headers = response
                .headers()
                .iter()
                .filter_map(|(name, value)| {
                    value
                        .to_str()
                        .ok()
                        .map(|v| (name.as_str().to_ascii_lowercase(), v.to_string()))
                })
                .collect();
            let body = response
                .bytes()
                .await
                .map_err(|e| FetchError::Network(e.to_string()))?
                .to_vec();
            Ok(FetchResponse {
                status,
                headers,
                body,
            })
        })
    }
}
