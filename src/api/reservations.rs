//! Reservation operations.

use serde::Serialize;
use serde_json::Value;
use tracing::{info, instrument};

use crate::client::{RequestOptions, TaquillaClient};
use crate::error::Result;

impl TaquillaClient {
    /// Creates a reservation.
    ///
    /// `data` is serialized as the JSON request body exactly once per call;
    /// the backend's response is returned verbatim.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Serialization` if `data` cannot be encoded,
    /// `ApiError::Http` for non-2xx responses, or `ApiError::Network` if
    /// the call fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use serde_json::json;
    /// use taquilla_client::{Environment, TaquillaClient};
    ///
    /// # async fn example() -> taquilla_client::Result<()> {
    /// let client = TaquillaClient::from_environment(Environment::Development)?;
    /// let reservation = client
    ///     .create_reservation(&json!({"event_id": 42, "seat": "A1"}))
    ///     .await?;
    /// println!("{reservation}");
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip(self, data))]
    pub async fn create_reservation<T: Serialize + ?Sized>(&self, data: &T) -> Result<Value> {
        info!("creating reservation");
        self.request(&self.catalog().reservations(), RequestOptions::post(data)?).await
    }
}
