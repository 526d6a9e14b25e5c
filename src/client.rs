//! HTTP client for one resource endpoint

use std::marker::PhantomData;

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::{
    config::AppConfig,
    error::{api_error, AppError, AppResult},
    resources::Resource,
};

/// Thin wrapper around `{base_url}` and `{base_url}/{id}`
///
/// Every call is a single request; failures are returned as-is, never retried.
pub struct ResourceClient<R: Resource> {
    http: Client,
    base_url: String,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> Clone for ResourceClient<R> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> ResourceClient<R> {
    /// Client for `R` on the configured API origin
    pub fn new(http: Client, config: &AppConfig) -> Self {
        Self::with_base_url(http, config.endpoint(R::BASE_PATH))
    }

    pub fn with_base_url(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            _resource: PhantomData,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn list(&self) -> AppResult<Vec<R::Record>> {
        let response = self.send(self.request(Method::GET, None)).await?;
        decode(response).await
    }

    pub async fn get(&self, id: i32) -> AppResult<R::Record> {
        let response = self.send(self.request(Method::GET, Some(id))).await?;
        decode(response).await
    }

    pub async fn create(&self, payload: &R::Payload) -> AppResult<R::Record> {
        let response = self
            .send(self.request(Method::POST, None).json(payload))
            .await?;
        decode(response).await
    }

    pub async fn update(&self, id: i32, payload: &R::Payload) -> AppResult<R::Record> {
        let response = self
            .send(self.request(Method::PUT, Some(id)).json(payload))
            .await?;
        decode(response).await
    }

    /// The API echoes the deleted record; the body is ignored.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.send(self.request(Method::DELETE, Some(id))).await?;
        Ok(())
    }

    fn request(&self, method: Method, id: Option<i32>) -> RequestBuilder {
        let url = match id {
            Some(id) => format!("{}/{}", self.base_url, id),
            None => self.base_url.clone(),
        };
        tracing::debug!("{} {}", method, url);
        self.http.request(method, url)
    }

    /// Send a request and turn non-2xx answers into `AppError::Api`
    async fn send(&self, request: RequestBuilder) -> AppResult<Response> {
        let response = request.send().await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::debug!("{} responded {}: {}", self.base_url, status, body);
        Err(api_error(status.as_u16(), &body))
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> AppResult<T> {
    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| AppError::UnexpectedResponse(e.to_string()))
}
