//! Purchase history with sequential endpoint discovery.
//!
//! Deployments of the backend expose purchase history under different
//! routes. Rather than hardcoding one path, [`get_purchases`] probes an
//! ordered candidate list and settles on the first route that answers.
//!
//! [`get_purchases`]: crate::client::TaquillaClient::get_purchases

use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::client::{RequestOptions, TaquillaClient};
use crate::error::Result;

impl TaquillaClient {
    /// Fetches the caller's purchase history.
    ///
    /// Probes the configured candidate paths strictly in order, one request
    /// at a time; each candidate is attempted only after the previous one
    /// is known to have answered 404. Candidates are never raced
    /// concurrently, since a route with write side effects on access must
    /// not be hit more than necessary.
    ///
    /// - The first 2xx answer is returned immediately; no further
    ///   candidates are tried.
    /// - A 404 means "this route does not exist on this deployment" and
    ///   advances the scan to the next candidate.
    /// - Any other failure (401, 403, 500, ...) indicates a real backend
    ///   problem and propagates immediately; further guessing is abandoned.
    /// - If every candidate answers 404, the history is treated as empty:
    ///   an empty JSON array is returned and an operator-facing warning is
    ///   logged. Callers never see an error in this case.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Http` when a candidate fails with a status other
    /// than 404, or `ApiError::Network` if a call itself fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use taquilla_client::{Environment, TaquillaClient};
    ///
    /// # async fn example() -> taquilla_client::Result<()> {
    /// let client = TaquillaClient::from_environment(Environment::Development)?;
    /// let purchases = client.get_purchases().await?;
    /// println!("{purchases}");
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip(self))]
    pub async fn get_purchases(&self) -> Result<Value> {
        info!("fetching purchase history");

        for path in self.catalog().purchase_candidates() {
            match self.request(&path, RequestOptions::get()).await {
                Ok(body) => {
                    debug!(path = %path, "purchase history route answered");
                    return Ok(body);
                }
                Err(err) if err.is_not_found() => {
                    debug!(path = %path, "purchase history route not found, trying next candidate");
                }
                Err(err) => return Err(err),
            }
        }

        warn!("no purchase history route answered; returning empty list");
        Ok(Value::Array(Vec::new()))
    }
}
