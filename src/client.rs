//! HTTP client wrapper and generic request executor.
//!
//! [`TaquillaClient`] owns a preconfigured [`reqwest::Client`] and the
//! resolved base URL, and funnels every API operation through one request
//! executor: JSON headers, ambient cookie credentials, tolerant body
//! parsing and a single normalized error shape.

use std::time::Duration;

use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::config::{ClientConfig, Environment};
use crate::endpoints::EndpointCatalog;
use crate::error::{ApiError, Result};

/// Per-request options for the generic executor.
///
/// The defaults describe a plain GET: no body, no extra headers. Headers
/// set here are merged over the client's defaults and win on conflict.
#[derive(Debug, Default)]
pub struct RequestOptions {
    /// HTTP method (default GET).
    pub method: Method,
    /// JSON request body, serialized once when the options are built.
    pub body: Option<Value>,
    /// Extra headers merged over the default `Content-Type`.
    pub headers: HeaderMap,
}

impl RequestOptions {
    /// Options for a plain GET request.
    #[must_use]
    pub fn get() -> Self {
        Self::default()
    }

    /// Options for a POST request carrying `data` as the JSON body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Serialization` if `data` cannot be encoded.
    pub fn post<T: Serialize + ?Sized>(data: &T) -> Result<Self> {
        Ok(Self {
            method: Method::POST,
            body: Some(serde_json::to_value(data)?),
            headers: HeaderMap::new(),
        })
    }
}

/// Async client for the Taquilla ticketing backend.
///
/// Construct once per process with [`TaquillaClient::new`] or
/// [`TaquillaClient::from_environment`]; the base URL is immutable for the
/// client's lifetime. The underlying connection pool and cookie store are
/// shared across all operations, so the session cookie issued by the
/// backend on login rides along with every call.
#[derive(Debug)]
pub struct TaquillaClient {
    http: reqwest::Client,
    base_url: String,
    catalog: EndpointCatalog,
}

impl TaquillaClient {
    /// Creates a client from a validated configuration.
    ///
    /// A trailing slash on the base URL is trimmed so path concatenation
    /// never doubles a separator.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if the configuration is invalid, or
    /// `ApiError::Network` if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .cookie_store(true)
            .pool_max_idle_per_host(10)
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            catalog: EndpointCatalog::new(&config.endpoints),
        })
    }

    /// Creates a client for a well-known environment.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Network` if the HTTP client cannot be built.
    pub fn from_environment(env: Environment) -> Result<Self> {
        Self::new(ClientConfig::for_environment(env))
    }

    /// Returns the base URL this client was configured with.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn catalog(&self) -> &EndpointCatalog {
        &self.catalog
    }

    /// Executes one request against `base_url + endpoint`.
    ///
    /// This is the escape hatch for endpoints not covered by the catalog
    /// operations; those operations all delegate here. Exactly one network
    /// call is made per invocation: no retries, no redirect-time fallback.
    ///
    /// The response body is parsed tolerantly: an empty or non-JSON body is
    /// treated as absent rather than an error. On a 2xx status the parsed
    /// body is returned, or an empty JSON object when the body was absent,
    /// so a successful call never yields a null value.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Http` with the received status code and parsed
    /// error body for any non-2xx response, or `ApiError::Network` if the
    /// call itself fails.
    #[instrument(skip(self, options), fields(method = %options.method, endpoint))]
    pub async fn request(&self, endpoint: &str, options: RequestOptions) -> Result<Value> {
        let url = format!("{}{}", self.base_url, endpoint);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.extend(options.headers);

        let mut request = self.http.request(options.method, &url).headers(headers);
        if let Some(body) = &options.body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        // Empty and non-JSON bodies are tolerated on success and failure
        // alike; the body is simply absent. A literal JSON `null` collapses
        // to the same absent-body sentinel so success never yields null.
        let body = match response.bytes().await {
            Ok(bytes) => {
                serde_json::from_slice::<Value>(&bytes).ok().filter(|value| !value.is_null())
            }
            Err(_) => None,
        };

        if !status.is_success() {
            debug!(status = status.as_u16(), "backend returned error status");
            return Err(ApiError::Http { status: status.as_u16(), body });
        }

        Ok(body.unwrap_or_else(|| Value::Object(serde_json::Map::new())))
    }
}
