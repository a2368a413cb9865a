//! Network execution of `HttpRequest` values.
//!
//! # Design
//! `Transport` is the single I/O seam of the crate. It reports any received
//! response as data, whatever its status; only failures to obtain a response
//! are errors. Status interpretation stays in `ApiClient::parse_json`.
//!
//! The request timeout is enforced here, around the transport future, so
//! every remote call is cancelled once it elapses regardless of which
//! `Transport` implementation is in use.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, error, trace};

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Run `request` on `transport`, failing with `ApiError::Timeout` once `timeout` elapses.
pub async fn execute<T>(transport: &T, request: HttpRequest, timeout: Duration) -> Result<HttpResponse, ApiError>
where
    T: Transport + ?Sized,
{
    let method = request.method.as_str();
    let url = request.url.clone();
    debug!(method, url = %url, "Making API request");

    let result = match tokio::time::timeout(timeout, transport.send(request)).await {
        Ok(result) => result,
        Err(_) => Err(ApiError::Timeout(timeout)),
    };

    match &result {
        Ok(response) if response.is_success() => {
            trace!(url = %url, status = response.status, bytes = response.body.len(), "API response received");
        }
        Ok(response) => {
            error!(url = %url, status = response.status, "API response not OK");
        }
        Err(err) => {
            error!(url = %url, error = %err, "API request failed");
        }
    }
    result
}

/// `Transport` over a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(Self { client })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(HttpResponse { status, headers, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Stalled;

    #[async_trait]
    impl Transport for Stalled {
        async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, ApiError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Err(ApiError::Transport("unreachable".to_string()))
        }
    }

    struct Fixed(u16);

    #[async_trait]
    impl Transport for Fixed {
        async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, ApiError> {
            Ok(HttpResponse {
                status: self.0,
                headers: Vec::new(),
                body: "{}".to_string(),
            })
        }
    }

    fn request() -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: "http://localhost:7031/health".to_string(),
            headers: Vec::new(),
            body: None,
        }
    }

    #[tokio::test]
    async fn timeout_cancels_slow_transport() {
        let err = execute(&Stalled, request(), Duration::from_millis(20))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Timeout(d) if d == Duration::from_millis(20)));
    }

    #[tokio::test]
    async fn non_success_status_is_returned_as_data() {
        let response = execute(&Fixed(500), request(), Duration::from_secs(1)).await.unwrap();
        assert_eq!(response.status, 500);
        assert!(!response.is_success());
    }
}
