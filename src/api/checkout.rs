//! Checkout operations.

use serde::Serialize;
use serde_json::Value;
use tracing::{info, instrument};

use crate::client::{RequestOptions, TaquillaClient};
use crate::error::Result;

impl TaquillaClient {
    /// Executes a checkout.
    ///
    /// `data` is serialized as the JSON request body; the backend's
    /// response is returned verbatim.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Serialization` if `data` cannot be encoded,
    /// `ApiError::Http` for non-2xx responses, or `ApiError::Network` if
    /// the call fails.
    #[instrument(skip(self, data))]
    pub async fn checkout<T: Serialize + ?Sized>(&self, data: &T) -> Result<Value> {
        info!("starting checkout");
        self.request(&self.catalog().checkout(), RequestOptions::post(data)?).await
    }
}
