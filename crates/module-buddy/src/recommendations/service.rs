use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::{debug, info};

use super::domain::{Candidate, OccupationMatch, PreferenceProfile, ScoredCandidate};
use super::error::RecommendationError;
use super::exclusion::ReservedModules;
use super::scoring::PreferenceScorer;
use super::source::CandidateSource;
use super::views::CareerModules;

/// Service composing the candidate source, reserved-module split, and scorer.
///
/// Every request fetches one snapshot from the source and scores it in memory;
/// the scorer never sees the source handle.
pub struct RecommendationService<S> {
    source: Arc<S>,
    reserved: ReservedModules,
    scorer: PreferenceScorer,
}

impl<S> RecommendationService<S>
where
    S: CandidateSource + 'static,
{
    pub fn new(source: Arc<S>, reserved: ReservedModules) -> Self {
        Self {
            source,
            reserved,
            scorer: PreferenceScorer::new(),
        }
    }

    /// Rank regular modules for a student, best match first.
    pub fn recommend(
        &self,
        profile: &PreferenceProfile,
    ) -> Result<Vec<ScoredCandidate>, RecommendationError> {
        let snapshot = self.source.candidates(&profile.excluded_candidates)?;
        let fetched = snapshot.len();
        let regular = self.reserved.regular(snapshot);

        let ranked = self.scorer.score(regular, profile)?;
        info!(
            fetched,
            ranked = ranked.len(),
            excluded = profile.excluded_candidates.len(),
            "recommendations ranked"
        );

        Ok(ranked)
    }

    /// Every regular module with a zero score, ordered by title.
    /// Entries are never scored, so `matched` is always empty.
    pub fn overview(&self) -> Result<Vec<ScoredCandidate>, RecommendationError> {
        let snapshot = self.source.candidates(&BTreeSet::new())?;
        let mut listed: Vec<ScoredCandidate> = self
            .reserved
            .regular(snapshot)
            .into_iter()
            .map(|candidate| ScoredCandidate {
                candidate,
                score: 0,
                matched: Vec::new(),
            })
            .collect();
        listed.sort_by(|left, right| left.title().cmp(right.title()));
        debug!(count = listed.len(), "module overview listed");
        Ok(listed)
    }

    /// Thesis-track modules, ordered by title.
    pub fn reserved_modules(&self) -> Result<Vec<Candidate>, RecommendationError> {
        let snapshot = self.source.candidates(&BTreeSet::new())?;
        let mut reserved = self.reserved.reserved(snapshot);
        reserved.sort_by(|left, right| left.title.cmp(&right.title));
        debug!(count = reserved.len(), "reserved modules listed");
        Ok(reserved)
    }

    pub fn lecturers(&self) -> Result<Vec<String>, RecommendationError> {
        Ok(self.source.lecturers()?)
    }

    pub fn occupations(&self) -> Result<Vec<String>, RecommendationError> {
        Ok(self.source.occupations()?)
    }

    /// Modules whose learning outcomes promote a skill `occupation` requires.
    pub fn modules_for_occupation(
        &self,
        occupation: &str,
    ) -> Result<Vec<OccupationMatch>, RecommendationError> {
        let occupation = occupation.trim();
        if occupation.is_empty() {
            return Err(RecommendationError::invalid_input(
                "occupation",
                "occupation must not be blank",
            ));
        }

        let matches = self.source.modules_for_occupation(occupation)?;
        debug!(occupation, count = matches.len(), "occupation modules listed");
        Ok(matches)
    }

    /// One entry per distinct desired job, in the order given. Blank jobs are skipped.
    pub fn career_modules(
        &self,
        desired_jobs: &[String],
    ) -> Result<Vec<CareerModules>, RecommendationError> {
        let mut seen = BTreeSet::new();
        let mut careers = Vec::new();

        for job in desired_jobs.iter().map(|job| job.trim()) {
            if job.is_empty() || !seen.insert(job) {
                continue;
            }
            careers.push(CareerModules {
                occupation: job.to_string(),
                modules: self.source.modules_for_occupation(job)?,
            });
        }

        info!(jobs = careers.len(), "career modules listed");
        Ok(careers)
    }
}
