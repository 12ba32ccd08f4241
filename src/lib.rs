//! Taquilla API client: async HTTP bindings for the Taquilla ticketing
//! backend.
//!
//! This library wraps the backend's JSON-over-HTTP API behind a small,
//! fixed catalog of operations: listing events, creating reservations,
//! running checkout, and fetching purchase history. All requests carry
//! JSON content headers and ambient cookie credentials, and all failures
//! surface as one normalized [`ApiError`] shape.
//!
//! # Architecture
//!
//! ```text
//! Caller
//!     │
//!     │ get_events / create_reservation / checkout / get_purchases
//!     ▼
//! Endpoint catalog (endpoints module)
//!     │
//!     │ resolved path (+ ordered candidates for purchase history)
//!     ▼
//! Request executor (client module)
//!     │
//!     │ JSON + session cookie over HTTPS (or the /api proxy prefix)
//!     ▼
//! Taquilla backend
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use serde_json::json;
//! use taquilla_client::{Environment, TaquillaClient};
//!
//! # async fn example() -> taquilla_client::Result<()> {
//! let client = TaquillaClient::from_environment(Environment::Development)?;
//!
//! let events = client.get_events().await?;
//! println!("events: {events}");
//!
//! let reservation = client
//!     .create_reservation(&json!({"event_id": 42, "seat": "A1"}))
//!     .await?;
//! println!("reserved: {reservation}");
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`client`]: HTTP client wrapper and the generic request executor
//! - [`api`]: the catalog operations (events, reservations, checkout,
//!   purchase history)
//! - [`endpoints`]: logical-operation-to-path resolution
//! - [`config`]: runtime configuration and environment selection
//! - [`error`]: normalized error types
//!
//! # Purchase-History Endpoint Discovery
//!
//! Not every deployment of the backend serves purchase history under the
//! same route. [`TaquillaClient::get_purchases`] probes an ordered list of
//! candidate paths sequentially, short-circuits on the first answer, skips
//! candidates that 404, aborts on any other failure, and falls back to an
//! empty list when no route exists at all.
//!
//! # Error Handling
//!
//! All operations return [`Result<T, ApiError>`](Result). HTTP failures
//! carry the original status code and the server's parsed error body:
//!
//! ```rust,no_run
//! use taquilla_client::{ApiError, Environment, TaquillaClient};
//!
//! # async fn example() {
//! let client = TaquillaClient::from_environment(Environment::Development)
//!     .expect("default configuration is valid");
//!
//! match client.get_event("42").await {
//!     Ok(event) => println!("{event}"),
//!     Err(ApiError::Http { status: 401, .. }) => {
//!         eprintln!("session expired, log in again");
//!     }
//!     Err(ApiError::Http { status, body }) => {
//!         eprintln!("backend error {status}: {body:?}");
//!     }
//!     Err(e) => eprintln!("request failed: {e}"),
//! }
//! # }
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod api;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;

pub use client::{RequestOptions, TaquillaClient};
pub use config::{ClientConfig, Environment};
pub use error::{ApiError, Result};
