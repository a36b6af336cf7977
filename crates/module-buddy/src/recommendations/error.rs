use super::source::SourceError;

/// Error raised while building or scoring a recommendation request.
#[derive(Debug, thiserror::Error)]
pub enum RecommendationError {
    #[error("invalid input for `{field}`: {reason}")]
    InvalidInput { field: String, reason: String },
    #[error(transparent)]
    Source(#[from] SourceError),
}

impl RecommendationError {
    pub(crate) fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
