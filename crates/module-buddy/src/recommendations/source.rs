use std::collections::BTreeSet;

use super::domain::{Candidate, OccupationMatch};

/// Read side of the knowledge graph: lists modules with their scoring attributes.
///
/// Implementations own connection and retry policy. Callers fetch once per
/// request and score the returned snapshot.
pub trait CandidateSource: Send + Sync {
    /// All modules whose title is not in `excluded`.
    fn candidates(&self, excluded: &BTreeSet<String>) -> Result<Vec<Candidate>, SourceError>;

    /// Distinct lecturer display names, sorted.
    fn lecturers(&self) -> Result<Vec<String>, SourceError>;

    /// Distinct occupation names, sorted. Sources without occupation data list none.
    fn occupations(&self) -> Result<Vec<String>, SourceError> {
        Ok(Vec::new())
    }

    /// Modules promoting a skill that `occupation` requires, ordered by module title.
    fn modules_for_occupation(&self, _occupation: &str) -> Result<Vec<OccupationMatch>, SourceError> {
        Ok(Vec::new())
    }
}

/// Error enumeration for candidate source failures.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("candidate source unavailable: {0}")]
    Unavailable(String),
    #[error("candidate source returned malformed data: {0}")]
    Malformed(String),
}
