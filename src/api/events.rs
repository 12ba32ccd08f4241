//! Event catalog operations.

use serde_json::Value;
use tracing::{info, instrument};

use crate::client::{RequestOptions, TaquillaClient};
use crate::error::Result;

impl TaquillaClient {
    /// Lists all events.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Http` for non-2xx responses or
    /// `ApiError::Network` if the call fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use taquilla_client::{Environment, TaquillaClient};
    ///
    /// # async fn example() -> taquilla_client::Result<()> {
    /// let client = TaquillaClient::from_environment(Environment::Development)?;
    /// let events = client.get_events().await?;
    /// println!("{events}");
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip(self))]
    pub async fn get_events(&self) -> Result<Value> {
        info!("fetching event list");
        self.request(&self.catalog().events(), RequestOptions::get()).await
    }

    /// Fetches a single event by id.
    ///
    /// Read-only and side-effect free: repeated calls with identical server
    /// state return identical results. The id is interpolated into the path
    /// with no escaping, so callers must supply a URL-safe value.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Http` for non-2xx responses or
    /// `ApiError::Network` if the call fails.
    #[instrument(skip(self))]
    pub async fn get_event(&self, id: &str) -> Result<Value> {
        info!("fetching event details");
        self.request(&self.catalog().event(id), RequestOptions::get()).await
    }
}
