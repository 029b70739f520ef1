//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tracing::warn;

use super::dto::{ErrorResponse, PlanTripRequest, SubmitTripResponse, TripStatusResponse};
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/trip/plan", post(plan_trip))
        .route("/trip/status", get(trip_status))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Submit a trip for planning.
///
/// Fire-and-forget: responds immediately with the generation assigned
/// to the run; poll `/trip/status` for the outcome.
async fn plan_trip(
    State(state): State<AppState>,
    Json(request): Json<PlanTripRequest>,
) -> Result<(StatusCode, Json<SubmitTripResponse>), AppError> {
    let (trip, preferences) = request
        .into_domain()
        .map_err(|message| AppError::BadRequest { message })?;

    let generation = state.orchestrator.submit(trip, preferences);

    Ok((StatusCode::ACCEPTED, Json(SubmitTripResponse { generation })))
}

/// Current pipeline status.
async fn trip_status(State(state): State<AppState>) -> Json<TripStatusResponse> {
    Json(TripStatusResponse::from_status(
        &state.orchestrator.current_snapshot(),
    ))
}

/// Web-layer errors.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
