//! The MotionRepo facade: remote reads with a sample-data fallback.
//!
//! # Design
//! The service is in one of two modes. In remote mode every read goes through
//! the transport. In fallback mode every read is served from
//! `sample_data` after a simulated delay. A remote failure moves the service
//! into fallback mode (when fallback is enabled) and the failed read is
//! answered from sample data in the same call. The service never returns to
//! remote mode on its own; `refresh_status` is the only way back.
//!
//! Both mode flags are atomics so a service can be shared by reference across
//! tasks. Concurrent failures all store the same value.

use std::sync::atomic::{AtomicBool, Ordering};

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::client::ApiClient;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::http::RequestOptions;
use crate::probe::check_availability;
use crate::transport::{execute, Transport};
use crate::types::{ApiResponse, Avatar, Motion, PaginatedResponse, Resource, Workout};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;

pub struct MotionRepoService<T: Transport> {
    client: ApiClient,
    transport: T,
    config: ApiConfig,
    using_fallback: AtomicBool,
    remote_available: AtomicBool,
}

impl<T: Transport> MotionRepoService<T> {
    /// Build a service and probe the remote once to pick the starting mode.
    pub async fn connect(config: ApiConfig, transport: T) -> Self {
        let service = Self {
            client: ApiClient::from_config(&config),
            transport,
            config,
            using_fallback: AtomicBool::new(false),
            remote_available: AtomicBool::new(true),
        };
        if service.config.fallback.enabled {
            service.refresh_status().await;
        }
        service
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn is_using_fallback(&self) -> bool {
        self.using_fallback.load(Ordering::SeqCst)
    }

    /// Result of the most recent probe.
    pub fn is_remote_available(&self) -> bool {
        self.remote_available.load(Ordering::SeqCst)
    }

    /// Re-probe the remote and set both flags from the result.
    pub async fn refresh_status(&self) -> bool {
        let available = check_availability(&self.transport, &self.client, &self.config.fallback).await;
        self.remote_available.store(available, Ordering::SeqCst);
        self.using_fallback.store(!available, Ordering::SeqCst);
        if !available {
            self.warn_fallback();
        }
        available
    }

    /// Issue a request to `endpoint` and parse the JSON body.
    ///
    /// Failures are logged by the transport layer and returned unchanged.
    pub async fn request<R: DeserializeOwned>(&self, endpoint: &str, options: RequestOptions) -> Result<R, ApiError> {
        self.fetch(self.client.build_request(endpoint, options)).await
    }

    pub async fn list_workouts(&self, page: u32, page_size: u32) -> Result<PaginatedResponse<Workout>, ApiError> {
        self.list(page, page_size).await
    }

    pub async fn get_workout(&self, id: &str) -> Result<ApiResponse<Workout>, ApiError> {
        self.get(id).await
    }

    pub async fn search_workouts(&self, query: &str) -> Result<PaginatedResponse<Workout>, ApiError> {
        self.search(query).await
    }

    pub async fn list_motions(&self, page: u32, page_size: u32) -> Result<PaginatedResponse<Motion>, ApiError> {
        self.list(page, page_size).await
    }

    pub async fn get_motion(&self, id: &str) -> Result<ApiResponse<Motion>, ApiError> {
        self.get(id).await
    }

    pub async fn search_motions(&self, query: &str) -> Result<PaginatedResponse<Motion>, ApiError> {
        self.search(query).await
    }

    pub async fn list_avatars(&self, page: u32, page_size: u32) -> Result<PaginatedResponse<Avatar>, ApiError> {
        self.list(page, page_size).await
    }

    pub async fn get_avatar(&self, id: &str) -> Result<ApiResponse<Avatar>, ApiError> {
        self.get(id).await
    }

    pub async fn search_avatars(&self, query: &str) -> Result<PaginatedResponse<Avatar>, ApiError> {
        self.search(query).await
    }

    /// One page of `R`, from the remote or the sample data.
    pub async fn list<R: Resource>(&self, page: u32, page_size: u32) -> Result<PaginatedResponse<R>, ApiError> {
        if !self.is_using_fallback() {
            let request = self.client.build_list(R::KIND, page, page_size);
            match self.fetch(request).await {
                Ok(response) => return Ok(response),
                Err(err) => self.downgrade(err)?,
            }
        }
        self.simulate_delay().await;
        Ok(PaginatedResponse::page_of(R::samples(), page, page_size))
    }

    /// A single `R` by id. A missing sample record is a failed envelope, not an error.
    pub async fn get<R: Resource>(&self, id: &str) -> Result<ApiResponse<R>, ApiError> {
        if !self.is_using_fallback() {
            let request = self.client.build_get(R::KIND, id);
            match self.fetch(request).await {
                Ok(response) => return Ok(response),
                Err(err) => self.downgrade(err)?,
            }
        }
        self.simulate_delay().await;
        let found = R::samples().iter().find(|record| record.id() == Some(id));
        Ok(match found {
            Some(record) => ApiResponse::ok(record.clone()),
            None => ApiResponse::failure(R::KIND.not_found_message()),
        })
    }

    /// Every `R` matching `query`, as a single page.
    pub async fn search<R: Resource>(&self, query: &str) -> Result<PaginatedResponse<R>, ApiError> {
        if !self.is_using_fallback() {
            let request = self.client.build_search(R::KIND, query);
            match self.fetch(request).await {
                Ok(response) => return Ok(response),
                Err(err) => self.downgrade(err)?,
            }
        }
        self.simulate_delay().await;
        let needle = query.to_lowercase();
        let matched: Vec<R> = R::samples()
            .iter()
            .filter(|record| record.matches(&needle))
            .cloned()
            .collect();
        Ok(PaginatedResponse::single_page(matched))
    }

    async fn fetch<R: DeserializeOwned>(&self, request: crate::http::HttpRequest) -> Result<R, ApiError> {
        let response = execute(&self.transport, request, self.config.timeout).await?;
        self.client.parse_json(response)
    }

    /// Switch to fallback mode after a remote failure, or hand the error back
    /// when fallback is disabled.
    fn downgrade(&self, err: ApiError) -> Result<(), ApiError> {
        if !self.config.fallback.enabled {
            return Err(err);
        }
        if !self.using_fallback.swap(true, Ordering::SeqCst) {
            debug!(error = %err, "Remote request failed, switching to sample data");
            self.warn_fallback();
        }
        Ok(())
    }

    fn warn_fallback(&self) {
        if self.config.fallback.show_warning {
            warn!(base_url = self.client.base_url(), "Using mock data - API server is not available");
        }
    }

    async fn simulate_delay(&self) {
        let delay = self.config.fallback.delay;
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}
