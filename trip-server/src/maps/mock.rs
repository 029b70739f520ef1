//! Mock maps client for testing without API access.
//!
//! Programmable in-memory stand-in for [`MapsClient`](super::MapsClient):
//! canned geocodes, one canned route response, canned place lists per
//! keyword, and call counters for assertions.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{Location, PlaceCandidate, ProviderError};
use crate::geocode::GeocodingProvider;
use crate::itinerary::{DirectionsProvider, RouteQuery, RouteSet};
use crate::recommend::PlaceSearchProvider;

/// Mock maps client serving canned data.
///
/// Useful for development and testing without real maps credentials.
/// Unknown addresses geocode to "no match"; unknown keywords search to
/// an empty result list.
#[derive(Default)]
pub struct MockMapsClient {
    geocodes: HashMap<String, Location>,
    route: Option<RouteSet>,
    places: HashMap<String, Vec<PlaceCandidate>>,
    geocode_calls: Mutex<usize>,
    route_calls: Mutex<usize>,
    search_calls: Mutex<usize>,
}

impl MockMapsClient {
    /// Create an empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a canned geocoding answer.
    pub fn with_geocode(mut self, address: impl Into<String>, location: Location) -> Self {
        self.geocodes.insert(address.into(), location);
        self
    }

    /// Set the canned routing response.
    pub fn with_route(mut self, route: RouteSet) -> Self {
        self.route = Some(route);
        self
    }

    /// Add a canned place list for a search keyword.
    pub fn with_places(mut self, keyword: impl Into<String>, places: Vec<PlaceCandidate>) -> Self {
        self.places.insert(keyword.into(), places);
        self
    }

    /// Number of geocoding calls served.
    pub fn geocode_calls(&self) -> usize {
        *self.geocode_calls.lock().unwrap()
    }

    /// Number of routing calls served.
    pub fn route_calls(&self) -> usize {
        *self.route_calls.lock().unwrap()
    }

    /// Number of place searches served.
    pub fn search_calls(&self) -> usize {
        *self.search_calls.lock().unwrap()
    }
}

#[async_trait]
impl GeocodingProvider for MockMapsClient {
    async fn geocode(&self, address: &str) -> Result<Option<Location>, ProviderError> {
        *self.geocode_calls.lock().unwrap() += 1;
        Ok(self.geocodes.get(address).cloned())
    }
}

#[async_trait]
impl DirectionsProvider for MockMapsClient {
    async fn route(&self, _query: &RouteQuery) -> Result<Option<RouteSet>, ProviderError> {
        *self.route_calls.lock().unwrap() += 1;
        Ok(self.route.clone())
    }
}

#[async_trait]
impl PlaceSearchProvider for MockMapsClient {
    async fn nearby_search(
        &self,
        _location: &Location,
        _category: &str,
        _radius_m: u32,
        keyword: Option<&str>,
    ) -> Result<Vec<PlaceCandidate>, ProviderError> {
        *self.search_calls.lock().unwrap() += 1;
        Ok(keyword
            .and_then(|k| self.places.get(k))
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn geocode_serves_canned_answer() {
        let mock = MockMapsClient::new()
            .with_geocode("Seoul Station", Location::new("Seoul Station", 37.55, 126.97));

        let hit = mock.geocode("Seoul Station").await.unwrap();
        assert!(hit.is_some());

        let miss = mock.geocode("nowhere").await.unwrap();
        assert!(miss.is_none());

        assert_eq!(mock.geocode_calls(), 2);
    }

    #[tokio::test]
    async fn search_serves_per_keyword_lists() {
        let place = PlaceCandidate {
            identity: "p1".to_string(),
            name: "Jagalchi Market".to_string(),
            rating: None,
            review_count: None,
            address: "Busan".to_string(),
            location: Location::new("Busan", 35.1, 129.03),
            image_ref: None,
            price_level: None,
            open_now: None,
            category_tags: Vec::new(),
        };
        let mock = MockMapsClient::new().with_places("market", vec![place]);
        let busan = Location::new("Busan Station", 35.11, 129.04);

        let hits = mock
            .nearby_search(&busan, "restaurant", 5000, Some("market"))
            .await
            .unwrap();
        assert_eq!(hits.len(), 1);

        let misses = mock
            .nearby_search(&busan, "restaurant", 5000, Some("zoo"))
            .await
            .unwrap();
        assert!(misses.is_empty());

        assert_eq!(mock.search_calls(), 2);
    }
}
