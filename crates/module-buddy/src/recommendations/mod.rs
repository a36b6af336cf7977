//! Preference-scored module recommendations.
//!
//! Candidates are fetched once from a [`CandidateSource`], thesis-track modules
//! are split off by [`ReservedModules`], and the remainder is ranked by the
//! [`PreferenceScorer`] across five 0/1 preference dimensions.

pub mod domain;
mod error;
pub mod exclusion;
pub mod router;
mod scoring;
pub mod service;
pub mod source;
mod student;
pub mod views;

#[cfg(test)]
mod tests;

pub use domain::{
    AssessmentPreference, Candidate, OccupationMatch, PreferenceDimension, PreferenceProfile,
    ScoredCandidate,
};
pub use error::RecommendationError;
pub use exclusion::{ReservedModules, DEFAULT_RESERVED_MODULES};
pub use router::recommendation_router;
pub use scoring::PreferenceScorer;
pub use service::RecommendationService;
pub use source::{CandidateSource, SourceError};
pub use student::StudentRecord;
pub use views::{
    CareerModules, CareerModulesResponse, ModuleSummary, RecommendationView,
    RecommendationsResponse,
};
