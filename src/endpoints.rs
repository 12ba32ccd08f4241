//! Endpoint catalog.
//!
//! Maps the client's logical operations onto concrete backend paths. The
//! defaults match the backend's standard routes; deployments with diverging
//! routes configure overrides via [`EndpointOverrides`].

use crate::config::EndpointOverrides;

/// Default ordered purchase-history candidate paths.
///
/// Deployments of the backend have shipped purchase history under several
/// different routes. [`get_purchases`] probes these in order and stops at
/// the first one that answers.
///
/// [`get_purchases`]: crate::client::TaquillaClient::get_purchases
pub const PURCHASE_CANDIDATES: [&str; 6] = [
    "/purchases",
    "/purchase",
    "/orders",
    "/sales",
    "/transactions",
    "/users/me/purchases",
];

/// Resolves logical operations to endpoint paths.
#[derive(Debug, Clone, Default)]
pub struct EndpointCatalog {
    overrides: EndpointOverrides,
}

impl EndpointCatalog {
    /// Creates a catalog with the given overrides applied over the defaults.
    #[must_use]
    pub fn new(overrides: &EndpointOverrides) -> Self {
        Self { overrides: overrides.clone() }
    }

    /// Events list path.
    #[must_use]
    pub fn events(&self) -> String {
        self.overrides.events.as_ref().map_or_else(|| "/events".to_owned(), Clone::clone)
    }

    /// Single event path.
    ///
    /// `id` is interpolated directly with no escaping; callers must supply
    /// a URL-safe value.
    #[must_use]
    pub fn event(&self, id: &str) -> String {
        self.overrides.event.as_ref().map_or_else(
            || format!("/events/{id}"),
            |template| template.replace("{id}", id),
        )
    }

    /// Reservation creation path.
    #[must_use]
    pub fn reservations(&self) -> String {
        self.overrides
            .reservations
            .as_ref()
            .map_or_else(|| "/reservations".to_owned(), Clone::clone)
    }

    /// Checkout path.
    #[must_use]
    pub fn checkout(&self) -> String {
        self.overrides.checkout.as_ref().map_or_else(|| "/checkout".to_owned(), Clone::clone)
    }

    /// Ordered purchase-history candidate paths.
    #[must_use]
    pub fn purchase_candidates(&self) -> Vec<String> {
        self.overrides.purchases.as_ref().map_or_else(
            || PURCHASE_CANDIDATES.iter().map(|p| (*p).to_owned()).collect(),
            Clone::clone,
        )
    }
}
