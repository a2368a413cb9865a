//! Request builder and response parser for the MotionRepo API.
//!
//! # Design
//! `ApiClient` holds the base URL and the optional bearer token and carries
//! no mutable state between calls. Every operation is split into a `build_*`
//! method that produces an `HttpRequest` and a shared `parse_json` that
//! consumes an `HttpResponse`. A `Transport` executes the round-trip between
//! the two, keeping this module deterministic and free of I/O.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, RequestOptions};
use crate::types::ResourceKind;

const HEALTH_PATH: &str = "/health";

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    auth_token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str, auth_token: Option<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_token,
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(&config.base_url, config.auth_token.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Headers sent with every resource request.
    pub fn default_headers(&self) -> Vec<(String, String)> {
        let mut headers = vec![("content-type".to_string(), "application/json".to_string())];
        if let Some(token) = &self.auth_token {
            headers.push(("authorization".to_string(), format!("Bearer {token}")));
        }
        headers
    }

    /// Build a request for `endpoint`, layering `options` over the defaults.
    ///
    /// A caller header replaces any default header with the same name.
    pub fn build_request(&self, endpoint: &str, options: RequestOptions) -> HttpRequest {
        let mut headers: Vec<(String, String)> = self
            .default_headers()
            .into_iter()
            .filter(|(name, _)| {
                !options
                    .headers
                    .iter()
                    .any(|(override_name, _)| override_name.eq_ignore_ascii_case(name))
            })
            .collect();
        headers.extend(options.headers);

        HttpRequest {
            method: options.method,
            url: format!("{}{endpoint}", self.base_url),
            headers,
            body: options.body,
        }
    }

    pub fn build_list(&self, kind: ResourceKind, page: u32, page_size: u32) -> HttpRequest {
        self.build_request(
            &format!("/{}?page={page}&pageSize={page_size}", kind.path()),
            RequestOptions::default(),
        )
    }

    pub fn build_get(&self, kind: ResourceKind, id: &str) -> HttpRequest {
        self.build_request(
            &format!("/{}/{}", kind.path(), urlencoding::encode(id)),
            RequestOptions::default(),
        )
    }

    pub fn build_search(&self, kind: ResourceKind, query: &str) -> HttpRequest {
        self.build_request(
            &format!("/{}/search?q={}", kind.path(), urlencoding::encode(query)),
            RequestOptions::default(),
        )
    }

    /// The health probe carries no credentials.
    pub fn build_health(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}{HEALTH_PATH}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: None,
        }
    }

    /// Parse a 2xx JSON body into `T`; any other status is an `ApiError::Http`.
    pub fn parse_json<T: DeserializeOwned>(&self, response: HttpResponse) -> Result<T, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }
}

fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    let reason = StatusCode::from_u16(response.status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .unwrap_or("Unknown Status");
    Err(ApiError::Http {
        status: response.status,
        reason: reason.to_string(),
    })
}
