use reqwest::StatusCode;
use serde::Serialize;

use crate::{Post, PostId, requests, responses};

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// An API client for the posts backend.
///
/// The base address is per-instance; there is no shared mutable default.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            inner_client: reqwest::Client::new(),
        }
    }

    fn format_url(&self, path: &str) -> String {
        format!("{}/posts{path}", &self.address)
    }

    async fn get(&self, path: &str) -> ReqwestResult {
        self.inner_client.get(self.format_url(path)).send().await
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        self.inner_client
            .post(self.format_url(path))
            .json(body)
            .send()
            .await
    }

    async fn put(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        self.inner_client
            .put(self.format_url(path))
            .json(body)
            .send()
            .await
    }

    async fn delete(&self, path: &str) -> ReqwestResult {
        self.inner_client.delete(self.format_url(path)).send().await
    }
}

/// Methods on the posts API
impl APIClient {
    /// List posts, one page at a time. The total across all pages comes
    /// from the `X-Total-Count` response header.
    pub async fn list_posts(
        &self,
        query: &requests::PostQuery,
    ) -> Result<responses::PostList, ClientError> {
        let response = self
            .inner_client
            .get(self.format_url(""))
            .query(&query.to_query_pairs())
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ClientError::APIError(
                response.status(),
                response.text().await?,
            ));
        }
        let total_count = response
            .headers()
            .get(TOTAL_COUNT_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse().ok())
            .unwrap_or(0);
        let posts = response.json().await?;
        Ok(responses::PostList { posts, total_count })
    }

    pub async fn get_post(&self, id: &PostId) -> Result<Post, ClientError> {
        let response = self.get(&format!("/{id}")).await?;
        ok_body(response).await
    }

    pub async fn create_post(
        &self,
        details: &requests::CreatePost,
    ) -> Result<Post, ClientError> {
        let response = self.post("", details).await?;
        ok_body(response).await
    }

    pub async fn update_post(
        &self,
        id: &PostId,
        details: &requests::UpdatePost,
    ) -> Result<Post, ClientError> {
        let response = self.put(&format!("/{id}"), details).await?;
        ok_body(response).await
    }

    pub async fn delete_post(&self, id: &PostId) -> Result<(), ClientError> {
        let response = self.delete(&format!("/{id}")).await?;
        ok_empty(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

/// Check that a response is OK and deserialize its body.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(response.json::<T>().await?)
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(())
}
