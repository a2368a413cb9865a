//! Client configuration.
//!
//! # Design
//! All settings live on an explicit `ApiConfig` handed to the service at
//! construction, including the bearer token. Nothing is read from global
//! state after that point, so two services in one process can point at
//! different hosts or run in different fallback modes.

use std::time::Duration;

use crate::error::ApiError;

pub const DEFAULT_BASE_URL: &str = "https://localhost:7031";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_FALLBACK_DELAY: Duration = Duration::from_millis(500);
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(3);

/// Controls when and how sample data replaces the remote service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackConfig {
    /// When false the service always talks to the remote and surfaces its errors.
    pub enabled: bool,
    /// Log a warning when switching to sample data.
    pub show_warning: bool,
    /// Simulated latency applied to every sample-data read.
    pub delay: Duration,
    /// Upper bound on the health probe.
    pub probe_timeout: Duration,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            show_warning: true,
            delay: DEFAULT_FALLBACK_DELAY,
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
        }
    }
}

impl FallbackConfig {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    /// Applied to every remote request.
    pub timeout: Duration,
    pub auth_token: Option<String>,
    pub fallback: FallbackConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            auth_token: None,
            fallback: FallbackConfig::default(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self::default().with_base_url(base_url)
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_fallback(mut self, fallback: FallbackConfig) -> Self {
        self.fallback = fallback;
        self
    }

    /// Build a config from `MOTIONREPO_*` environment variables.
    ///
    /// Unset variables keep their defaults; malformed values are an error.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ApiError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("MOTIONREPO_API_URL") {
            config = config.with_base_url(&url);
        }
        if let Some(token) = lookup("MOTIONREPO_AUTH_TOKEN").filter(|t| !t.is_empty()) {
            config.auth_token = Some(token);
        }
        if let Some(ms) = parse_var::<u64, _>(&lookup, "MOTIONREPO_API_TIMEOUT_MS")? {
            config.timeout = Duration::from_millis(ms);
        }
        if let Some(enabled) = parse_flag(&lookup, "MOTIONREPO_FALLBACK_ENABLED")? {
            config.fallback.enabled = enabled;
        }
        if let Some(warn) = parse_flag(&lookup, "MOTIONREPO_FALLBACK_WARNING")? {
            config.fallback.show_warning = warn;
        }
        if let Some(ms) = parse_var::<u64, _>(&lookup, "MOTIONREPO_FALLBACK_DELAY_MS")? {
            config.fallback.delay = Duration::from_millis(ms);
        }
        if let Some(ms) = parse_var::<u64, _>(&lookup, "MOTIONREPO_PROBE_TIMEOUT_MS")? {
            config.fallback.probe_timeout = Duration::from_millis(ms);
        }

        Ok(config)
    }
}

fn parse_var<T, F>(lookup: &F, var: &str) -> Result<Option<T>, ApiError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    lookup(var)
        .map(|raw| {
            raw.trim().parse::<T>().map_err(|e| ApiError::Config {
                var: var.to_string(),
                message: e.to_string(),
            })
        })
        .transpose()
}

fn parse_flag<F>(lookup: &F, var: &str) -> Result<Option<bool>, ApiError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var)
        .map(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            other => Err(ApiError::Config {
                var: var.to_string(),
                message: format!("expected a boolean, got {other:?}"),
            }),
        })
        .transpose()
}
