mod rules;

use super::domain::{Candidate, PreferenceDimension, PreferenceProfile, ScoredCandidate};
use super::error::RecommendationError;
use rules::{score_candidate, PreparedPreferences};
use tracing::debug;

/// Stateless scorer ranking candidates against a preference profile.
///
/// Each of the five [`PreferenceDimension`]s contributes 0 or 1, so scores
/// fall in `0..=5`. Results are ordered by descending score, then ascending
/// title; the sort is stable so exact duplicates keep their input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreferenceScorer;

impl PreferenceScorer {
    pub fn new() -> Self {
        Self
    }

    /// Score and rank `candidates`, dropping any listed in the profile's exclusion set.
    ///
    /// Fails with [`RecommendationError::InvalidInput`] before scoring anything
    /// when a candidate has a blank title.
    pub fn score(
        &self,
        candidates: Vec<Candidate>,
        profile: &PreferenceProfile,
    ) -> Result<Vec<ScoredCandidate>, RecommendationError> {
        validate_candidates(&candidates)?;

        let prefs = PreparedPreferences::new(profile);
        let total = candidates.len();

        let mut ranked: Vec<ScoredCandidate> = candidates
            .into_iter()
            .filter(|candidate| !profile.excluded_candidates.contains(&candidate.title))
            .map(|candidate| {
                let (score, matched) = score_candidate(&candidate, &prefs);
                ScoredCandidate {
                    candidate,
                    score,
                    matched,
                }
            })
            .collect();

        ranked.sort_by(|left, right| {
            right
                .score
                .cmp(&left.score)
                .then_with(|| left.candidate.title.cmp(&right.candidate.title))
        });

        debug!(
            candidates = total,
            ranked = ranked.len(),
            top_score = ?ranked.first().map(|entry| entry.score),
            "ranked candidates against preferences"
        );

        Ok(ranked)
    }

    /// Dimensions a single candidate satisfies, ignoring the exclusion set.
    pub fn matched_dimensions(
        &self,
        candidate: &Candidate,
        profile: &PreferenceProfile,
    ) -> Vec<PreferenceDimension> {
        let prefs = PreparedPreferences::new(profile);
        score_candidate(candidate, &prefs).1
    }
}

fn validate_candidates(candidates: &[Candidate]) -> Result<(), RecommendationError> {
    if let Some(position) = candidates
        .iter()
        .position(|candidate| candidate.title.trim().is_empty())
    {
        return Err(RecommendationError::invalid_input(
            format!("candidates[{position}].title"),
            "candidate title must not be blank",
        ));
    }

    Ok(())
}
