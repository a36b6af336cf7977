use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

use crate::recommendations::domain::{
    AssessmentPreference, Candidate, OccupationMatch, PreferenceProfile,
};
use crate::recommendations::exclusion::ReservedModules;
use crate::recommendations::service::RecommendationService;
use crate::recommendations::source::{CandidateSource, SourceError};

pub(super) fn days<const N: usize>(values: [&str; N]) -> BTreeSet<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub(super) fn empty_profile() -> PreferenceProfile {
    PreferenceProfile::default()
}

/// Profile that every attribute of [`perfect_match`] satisfies.
pub(super) fn demanding_profile() -> PreferenceProfile {
    PreferenceProfile {
        excluded_candidates: BTreeSet::new(),
        desired_lecturers: vec!["Prof. Dr. Meier".to_string()],
        available_days: days(["Monday", "Thursday"]),
        assessment_type: AssessmentPreference::IndividualAndGroup,
        wants_project_work: true,
        wants_oral_assessment: true,
    }
}

pub(super) fn perfect_match(title: &str) -> Candidate {
    Candidate::new(title, "Core")
        .with_days(["Monday"])
        .with_lecturers(["Meier"])
        .with_assessment_type("group")
        .with_project_work(true)
        .with_oral_assessment(true)
}

pub(super) fn catalog() -> Vec<Candidate> {
    vec![
        perfect_match("Enterprise Architecture"),
        Candidate::new("Data Mining", "Elective")
            .with_days(["Thursday"])
            .with_lecturers(["Huber"])
            .with_assessment_type("individual")
            .with_project_work(false),
        Candidate::new("Master Thesis", "Thesis"),
        Candidate::new("Business Process Management", "Core")
            .with_days(["Friday"])
            .with_lecturers(["Meier"]),
        Candidate::new("Accounting Basics", "Elective"),
    ]
}

#[derive(Default)]
pub(super) struct MemorySource {
    candidates: Vec<Candidate>,
    lecturers: Vec<String>,
    occupation_matches: Vec<OccupationMatch>,
    requests: Mutex<Vec<BTreeSet<String>>>,
}

impl MemorySource {
    pub(super) fn new(candidates: Vec<Candidate>) -> Self {
        Self {
            candidates,
            lecturers: vec!["Anna Meier".to_string(), "Jonas Huber".to_string()],
            occupation_matches: vec![
                occupation_match("Data Mining", "machine learning", "data scientist"),
                occupation_match("Enterprise Architecture", "ArchiMate", "enterprise architect"),
            ],
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn requests(&self) -> Vec<BTreeSet<String>> {
        self.requests.lock().expect("request log poisoned").clone()
    }
}

impl CandidateSource for MemorySource {
    fn candidates(&self, excluded: &BTreeSet<String>) -> Result<Vec<Candidate>, SourceError> {
        self.requests
            .lock()
            .expect("request log poisoned")
            .push(excluded.clone());
        Ok(self
            .candidates
            .iter()
            .filter(|candidate| !excluded.contains(&candidate.title))
            .cloned()
            .collect())
    }

    fn lecturers(&self) -> Result<Vec<String>, SourceError> {
        Ok(self.lecturers.clone())
    }

    fn occupations(&self) -> Result<Vec<String>, SourceError> {
        Ok(self
            .occupation_matches
            .iter()
            .map(|entry| entry.occupation.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect())
    }

    fn modules_for_occupation(&self, occupation: &str) -> Result<Vec<OccupationMatch>, SourceError> {
        Ok(self
            .occupation_matches
            .iter()
            .filter(|entry| entry.occupation == occupation)
            .cloned()
            .collect())
    }
}

pub(super) fn occupation_match(module: &str, skill: &str, occupation: &str) -> OccupationMatch {
    OccupationMatch {
        module_title: module.to_string(),
        skill: skill.to_string(),
        occupation: occupation.to_string(),
    }
}

/// Source that ignores the exclusion set, so the scorer must enforce it.
pub(super) struct LeakySource(pub(super) Vec<Candidate>);

impl CandidateSource for LeakySource {
    fn candidates(&self, _excluded: &BTreeSet<String>) -> Result<Vec<Candidate>, SourceError> {
        Ok(self.0.clone())
    }

    fn lecturers(&self) -> Result<Vec<String>, SourceError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableSource;

impl CandidateSource for UnavailableSource {
    fn candidates(&self, _excluded: &BTreeSet<String>) -> Result<Vec<Candidate>, SourceError> {
        Err(SourceError::Unavailable("graph endpoint unreachable".to_string()))
    }

    fn lecturers(&self) -> Result<Vec<String>, SourceError> {
        Err(SourceError::Unavailable("graph endpoint unreachable".to_string()))
    }
}

pub(super) fn build_service() -> (
    Arc<RecommendationService<MemorySource>>,
    Arc<MemorySource>,
) {
    let source = Arc::new(MemorySource::new(catalog()));
    let service = Arc::new(RecommendationService::new(
        source.clone(),
        ReservedModules::default(),
    ));
    (service, source)
}
