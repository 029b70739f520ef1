//! Maps HTTP client.
//!
//! Provides async methods for the geocoding, directions, and
//! nearby-search endpoints, and implements the pipeline's capability
//! contracts on top of them. Handles API-key auth, rate limiting, and
//! conversion to contract types.

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tokio::sync::Semaphore;

use crate::domain::{Location, PlaceCandidate, ProviderError};
use crate::geocode::GeocodingProvider;
use crate::itinerary::{DirectionsProvider, RouteQuery, RouteSet};
use crate::recommend::PlaceSearchProvider;

use super::convert::{convert_directions, convert_geocode_result, convert_place};
use super::error::MapsError;
use super::types::{DirectionsResponse, GeocodeResponse, PlacesResponse};

/// Default base URL for the maps web service.
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Configuration for the maps client.
#[derive(Debug, Clone)]
pub struct MapsConfig {
    /// API key sent with every request
    pub api_key: String,
    /// Base URL for the service (defaults to production)
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl MapsConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// What an application-level status string means for the response body.
#[derive(Debug)]
enum StatusOutcome {
    /// Results are present.
    Ok,
    /// The query matched nothing; not a failure.
    Empty,
}

/// Maps web-service client.
///
/// Uses a semaphore to limit concurrent requests and avoid rate
/// limiting.
#[derive(Debug, Clone)]
pub struct MapsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    semaphore: Arc<Semaphore>,
}

impl MapsClient {
    /// Create a new maps client with the given configuration.
    pub fn new(config: MapsConfig) -> Result<Self, MapsError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// Resolve a free-text address.
    ///
    /// Returns `None` when the service reports no match.
    pub async fn geocode_address(&self, address: &str) -> Result<Option<Location>, MapsError> {
        let response: GeocodeResponse = self
            .get_json("geocode/json", &[("address", address.to_string())])
            .await?;

        match triage(&response.status, response.error_message.as_deref())? {
            StatusOutcome::Ok => Ok(response.results.first().map(convert_geocode_result)),
            StatusOutcome::Empty => Ok(None),
        }
    }

    /// Request a transit route.
    ///
    /// Returns `None` when no route exists between the endpoints.
    pub async fn transit_directions(
        &self,
        query: &RouteQuery,
    ) -> Result<Option<RouteSet>, MapsError> {
        let modes = query
            .modes
            .iter()
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join("|");

        let mut params = vec![
            (
                "origin",
                format!("{},{}", query.origin.lat, query.origin.lng),
            ),
            (
                "destination",
                format!("{},{}", query.destination.lat, query.destination.lng),
            ),
            ("mode", "transit".to_string()),
            ("transit_mode", modes),
            (
                "transit_routing_preference",
                "fewer_transfers".to_string(),
            ),
            ("alternatives", query.alternatives.to_string()),
        ];

        if let Some(departure) = query.departure_time {
            params.push(("departure_time", departure.timestamp().to_string()));
        }

        let response: DirectionsResponse = self.get_json("directions/json", &params).await?;

        match triage(&response.status, response.error_message.as_deref())? {
            StatusOutcome::Ok if !response.routes.is_empty() => {
                Ok(Some(convert_directions(&response)))
            }
            _ => Ok(None),
        }
    }

    /// Search for places near a location.
    ///
    /// An empty list means "no results", not failure.
    pub async fn places_nearby(
        &self,
        location: &Location,
        category: &str,
        radius_m: u32,
        keyword: Option<&str>,
    ) -> Result<Vec<PlaceCandidate>, MapsError> {
        let mut params = vec![
            ("location", format!("{},{}", location.lat, location.lng)),
            ("radius", radius_m.to_string()),
            ("type", category.to_string()),
        ];
        if let Some(keyword) = keyword {
            params.push(("keyword", keyword.to_string()));
        }

        let response: PlacesResponse = self.get_json("place/nearbysearch/json", &params).await?;

        match triage(&response.status, response.error_message.as_deref())? {
            StatusOutcome::Ok => Ok(response.results.iter().map(convert_place).collect()),
            StatusOutcome::Empty => Ok(Vec::new()),
        }
    }

    /// Issue a GET request and parse the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, MapsError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| MapsError::Api {
                status: "CLIENT_CLOSED".to_string(),
                message: Some("semaphore closed".to_string()),
            })?;

        let url = format!("{}/{}", self.base_url, path);

        let response = self
            .http
            .get(&url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(MapsError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(MapsError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MapsError::Api {
                status: status.as_u16().to_string(),
                message: Some(body),
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| MapsError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}

/// Interpret an application-level status string.
fn triage(status: &str, message: Option<&str>) -> Result<StatusOutcome, MapsError> {
    match status {
        "OK" => Ok(StatusOutcome::Ok),
        "ZERO_RESULTS" | "NOT_FOUND" => Ok(StatusOutcome::Empty),
        "OVER_QUERY_LIMIT" => Err(MapsError::RateLimited),
        "REQUEST_DENIED" => Err(MapsError::Unauthorized),
        other => Err(MapsError::Api {
            status: other.to_string(),
            message: message.map(str::to_string),
        }),
    }
}

#[async_trait]
impl GeocodingProvider for MapsClient {
    async fn geocode(&self, address: &str) -> Result<Option<Location>, ProviderError> {
        Ok(self.geocode_address(address).await?)
    }
}

#[async_trait]
impl DirectionsProvider for MapsClient {
    async fn route(&self, query: &RouteQuery) -> Result<Option<RouteSet>, ProviderError> {
        Ok(self.transit_directions(query).await?)
    }
}

#[async_trait]
impl PlaceSearchProvider for MapsClient {
    async fn nearby_search(
        &self,
        location: &Location,
        category: &str,
        radius_m: u32,
        keyword: Option<&str>,
    ) -> Result<Vec<PlaceCandidate>, ProviderError> {
        Ok(self
            .places_nearby(location, category, radius_m, keyword)
            .await?)
    }
}
