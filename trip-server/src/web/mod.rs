//! JSON API for the trip pipeline.
//!
//! The thin surface a presentation layer talks to: submit a trip, poll
//! its status. Rendering is someone else's job.

mod dto;
mod routes;
mod state;

pub use dto::{
    PlanTripRequest, PreferencesBody, RecommendationBody, SegmentBody, SnapshotBody,
    SubmitTripResponse, TripStatusResponse,
};
pub use routes::{AppError, create_router};
pub use state::AppState;
