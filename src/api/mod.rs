//! Catalog operations exposed by [`TaquillaClient`].
//!
//! Each submodule binds one group of backend operations to the generic
//! request executor in [`crate::client`]:
//!
//! - [`events`]: [`get_events`](crate::TaquillaClient::get_events),
//!   [`get_event`](crate::TaquillaClient::get_event)
//! - [`reservations`]:
//!   [`create_reservation`](crate::TaquillaClient::create_reservation)
//! - [`checkout`]: [`checkout`](crate::TaquillaClient::checkout)
//! - [`purchases`]: [`get_purchases`](crate::TaquillaClient::get_purchases)
//!   with sequential endpoint discovery
//!
//! The backend is schemaless from the client's point of view: operations
//! accept any `Serialize` payload and return the response verbatim as
//! [`serde_json::Value`].
//!
//! [`TaquillaClient`]: crate::TaquillaClient

pub mod checkout;
pub mod events;
pub mod purchases;
pub mod reservations;
