//! Address resolution.
//!
//! Turns free-text addresses into coordinates via an injected
//! [`GeocodingProvider`]. Locations that already carry real coordinates
//! are returned untouched; resolution is skipped by construction, there
//! is no cache structure here.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::{Location, PlanError, ProviderError};

/// Capability contract for address geocoding.
///
/// `Ok(None)` means the provider found no match for the address;
/// `Err` means the provider itself failed (network, auth).
#[async_trait]
pub trait GeocodingProvider: Send + Sync {
    /// Resolve a free-text address to a location.
    async fn geocode(&self, address: &str) -> Result<Option<Location>, ProviderError>;
}

/// Resolves trip endpoints to coordinates.
pub struct GeocodingResolver<'a, G: ?Sized> {
    provider: &'a G,
}

impl<'a, G: GeocodingProvider + ?Sized> GeocodingResolver<'a, G> {
    /// Create a resolver over the given provider.
    pub fn new(provider: &'a G) -> Self {
        Self { provider }
    }

    /// Resolve a location, skipping the provider when coordinates are
    /// already known.
    ///
    /// Fails with [`PlanError::AddressNotFound`] for an empty address or
    /// when the provider reports no match, and with
    /// [`PlanError::ProviderUnavailable`] on transport failure.
    pub async fn resolve(&self, location: &Location) -> Result<Location, PlanError> {
        if location.is_resolved() {
            debug!(address = %location.address, "already resolved, skipping geocode");
            return Ok(location.clone());
        }

        let address = location.address.trim();
        if address.is_empty() {
            return Err(PlanError::AddressNotFound(location.address.clone()));
        }

        match self.provider.geocode(address).await? {
            Some(resolved) => Ok(resolved),
            None => Err(PlanError::AddressNotFound(address.to_string())),
        }
    }
}
