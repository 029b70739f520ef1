//! Pipeline error taxonomy.
//!
//! These errors describe why a trip run failed. They are distinct from
//! the provider clients' own error types, which are converted into
//! `ProviderError` at the capability boundary.

/// Transport-level failure reported by a provider.
///
/// Carries a descriptive message only; the pipeline does not branch on
/// the cause of a transport failure, it aborts the run (or, for a
/// per-term place search, drops that term).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("provider unavailable: {0}")]
pub struct ProviderError(pub String);

impl ProviderError {
    /// Create a provider error from any displayable cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Fatal errors for one trip run.
///
/// Any of these transitions the orchestrator to its error state; the run
/// must be restarted by a new submission. There is no automatic retry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// The geocoder found no match for an address
    #[error("address not found: {0}")]
    AddressNotFound(String),

    /// No transit route exists between the resolved locations
    #[error("no transit route found")]
    RouteNotFound,

    /// Transport or auth failure from the geocoding or directions provider
    #[error("provider unavailable: {0}")]
    ProviderUnavailable(String),
}

impl From<ProviderError> for PlanError {
    fn from(err: ProviderError) -> Self {
        PlanError::ProviderUnavailable(err.0)
    }
}
