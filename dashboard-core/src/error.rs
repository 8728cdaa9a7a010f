/// Raised when a snapshot source cannot produce a snapshot.
#[derive(Debug, Clone, thiserror::Error)]
#[error("weather generation failed: {reason}")]
pub struct GenerationFailure {
    pub reason: String,
}

impl GenerationFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

/// Geolocation outcomes other than a position.
///
/// These never reach consumers: the dashboard falls back to its default location instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Location service unavailable")]
    ServiceUnavailable,
}
