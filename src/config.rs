//! Client configuration.
//!
//! This module defines the runtime configuration for [`TaquillaClient`]:
//! which base URL to talk to and optional endpoint path overrides. The
//! production/development split is an explicit [`Environment`] value chosen
//! by the caller at startup, never a compile-time branch baked into the
//! client.
//!
//! [`TaquillaClient`]: crate::client::TaquillaClient

use serde::Deserialize;
use url::Url;

use crate::error::{ApiError, Result};

/// Base URL used in production deployments.
///
/// Relative on purpose: production traffic goes through the deployment's
/// reverse proxy, which maps `/api` onto the backend origin.
pub const PRODUCTION_BASE_URL: &str = "/api";

/// Base URL used in development, pointing straight at the backend.
pub const DEVELOPMENT_BASE_URL: &str = "https://tickets.grye.org";

/// Deployment environment selecting one of the two well-known base URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    /// Behind the deployment's reverse proxy; requests use the `/api` prefix.
    Production,
    /// Direct calls to the externally hosted backend.
    Development,
}

impl Environment {
    /// Returns the base URL associated with this environment.
    #[must_use]
    pub fn base_url(self) -> &'static str {
        match self {
            Self::Production => PRODUCTION_BASE_URL,
            Self::Development => DEVELOPMENT_BASE_URL,
        }
    }
}

/// Root client configuration.
///
/// Deserializable from TOML for deployments that ship a config file;
/// [`ClientConfig::for_environment`] covers the common two-value case.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Base URL prepended to every endpoint path. Either an absolute
    /// http(s) URL or a `/`-prefixed path handled by a reverse proxy.
    pub base_url: String,

    /// Endpoint path overrides.
    #[serde(default)]
    pub endpoints: EndpointOverrides,
}

impl ClientConfig {
    /// Creates the configuration for a well-known environment.
    #[must_use]
    pub fn for_environment(env: Environment) -> Self {
        Self { base_url: env.base_url().to_owned(), endpoints: EndpointOverrides::default() }
    }

    /// Parses a configuration from TOML.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if the TOML is malformed.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|e| ApiError::Config(format!("invalid TOML: {e}")))
    }

    /// Validates the configuration.
    ///
    /// Checks that the base URL is non-empty and is either a `/`-prefixed
    /// proxy path or a parseable http(s) URL, and that every endpoint
    /// override passes path hygiene checks.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        self.validate_base_url()?;
        self.endpoints.validate()?;
        Ok(())
    }

    fn validate_base_url(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(ApiError::Config("base_url cannot be empty".to_owned()));
        }

        // A reverse-proxied prefix like "/api" is valid as-is.
        if self.base_url.starts_with('/') {
            return Ok(());
        }

        let url = Url::parse(&self.base_url).map_err(|e| {
            ApiError::Config(format!("invalid base_url '{}': {e}", self.base_url))
        })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ApiError::Config(format!(
                "base_url must use http or https, got: {}",
                url.scheme()
            )));
        }

        Ok(())
    }
}

/// Endpoint path overrides.
///
/// Every field is optional; unset fields fall back to the backend's
/// standard paths. Single-resource templates use `{id}` as the placeholder.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EndpointOverrides {
    /// Events list endpoint (default: "/events").
    pub events: Option<String>,

    /// Single event endpoint template (default: "/events/{id}").
    pub event: Option<String>,

    /// Reservation creation endpoint (default: "/reservations").
    pub reservations: Option<String>,

    /// Checkout endpoint (default: "/checkout").
    pub checkout: Option<String>,

    /// Ordered purchase-history candidate paths, tried first to last.
    /// Defaults to the standard discovery list.
    pub purchases: Option<Vec<String>>,
}

impl EndpointOverrides {
    /// Validates every configured override.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if any path is invalid.
    pub fn validate(&self) -> Result<()> {
        let paths = [
            ("events", &self.events),
            ("event", &self.event),
            ("reservations", &self.reservations),
            ("checkout", &self.checkout),
        ];

        for (name, path) in paths {
            if let Some(path) = path {
                validate_endpoint_path(name, path)?;
            }
        }

        if let Some(candidates) = &self.purchases {
            if candidates.is_empty() {
                return Err(ApiError::Config(
                    "purchases candidate list cannot be empty".to_owned(),
                ));
            }
            for path in candidates {
                validate_endpoint_path("purchases", path)?;
            }
        }

        Ok(())
    }
}

/// Validates an endpoint path for hygiene issues.
pub(crate) fn validate_endpoint_path(name: &str, path: &str) -> Result<()> {
    // Path traversal
    if path.contains("..") {
        return Err(ApiError::Config(format!(
            "endpoint '{name}' contains path traversal sequence '..': {path}"
        )));
    }

    // Double slashes can be used for path confusion
    if path.contains("//") {
        return Err(ApiError::Config(format!(
            "endpoint '{name}' contains double slash '//': {path}"
        )));
    }

    if !path.starts_with('/') {
        return Err(ApiError::Config(format!("endpoint '{name}' must start with '/': {path}")));
    }

    Ok(())
}
