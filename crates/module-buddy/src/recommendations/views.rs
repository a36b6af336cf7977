use serde::{Deserialize, Serialize};

use super::domain::{Candidate, OccupationMatch, PreferenceDimension, ScoredCandidate};

/// Module identity as shown to students.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleSummary {
    pub module_title: String,
    pub module_type: String,
}

impl From<&Candidate> for ModuleSummary {
    fn from(candidate: &Candidate) -> Self {
        Self {
            module_title: candidate.title.clone(),
            module_type: candidate.module_type.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationView {
    pub module: ModuleSummary,
    pub preference_score: u8,
    pub matched: Vec<PreferenceDimension>,
}

impl From<&ScoredCandidate> for RecommendationView {
    fn from(entry: &ScoredCandidate) -> Self {
        Self {
            module: ModuleSummary::from(&entry.candidate),
            preference_score: entry.score,
            matched: entry.matched.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<RecommendationView>,
}

impl RecommendationsResponse {
    pub fn from_ranked(ranked: &[ScoredCandidate]) -> Self {
        Self {
            recommendations: ranked.iter().map(RecommendationView::from).collect(),
        }
    }
}

/// Modules serving one of the student's desired jobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerModules {
    pub occupation: String,
    pub modules: Vec<OccupationMatch>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerModulesResponse {
    pub careers: Vec<CareerModules>,
}
