//! Data-access client for the MotionRepo fitness service.
//!
//! # Overview
//! Fetches workouts, motions and avatars from the remote MotionRepo API and
//! falls back to built-in sample data when the service cannot be reached, so
//! front-end code keeps working against a stable call surface either way.
//!
//! # Design
//! - `ApiClient` builds `HttpRequest` values and parses `HttpResponse` values
//!   without touching the network (host-does-IO pattern).
//! - `Transport` is the only I/O seam; `ReqwestTransport` is the production
//!   implementation and tests script their own.
//! - `MotionRepoService` is the facade. It is constructed explicitly with an
//!   `ApiConfig` (credentials included) rather than living as a global.
//! - `image` resolves screenshot references for presentation code and is not
//!   used by the facade.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod image;
pub mod probe;
pub mod sample_data;
pub mod service;
#[cfg(test)]
mod test_support;
pub mod transport;
pub mod types;

pub use client::ApiClient;
pub use config::{ApiConfig, FallbackConfig};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, RequestOptions};
pub use image::{is_mock_image, placeholder_url, resolve as resolve_image_url};
pub use probe::check_availability;
pub use service::{MotionRepoService, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
pub use transport::{ReqwestTransport, Transport};
pub use types::{ApiResponse, Avatar, Motion, PaginatedResponse, Resource, ResourceKind, Workout};
