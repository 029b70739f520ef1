//! Maps web-service client.
//!
//! HTTP client for a Google-Maps-style web service exposing geocoding,
//! transit directions, and nearby-place search. This is the concrete
//! implementation of all three capability contracts the pipeline
//! consumes; the rest of the crate only ever sees the contract types.
//!
//! Key characteristics of the service:
//! - Application-level errors arrive as a `status` string in an HTTP 200
//!   body (`"ZERO_RESULTS"`, `"OVER_QUERY_LIMIT"`, ...), not as HTTP
//!   status codes
//! - `ZERO_RESULTS` means "nothing matched", which is a result, not a
//!   failure
//! - Authentication is an API key query parameter

mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use client::{MapsClient, MapsConfig};
pub use error::MapsError;
pub use mock::MockMapsClient;
pub use types::{
    DirectionsResponse, GeocodeResponse, PlacesResponse,
};
