use std::collections::HashSet;

use crate::catalog::canonical_day;

use super::super::domain::{AssessmentPreference, Candidate, PreferenceDimension, PreferenceProfile};

/// Profile fields lower-cased once per request so each candidate check is a lookup.
/// Day names are also expanded ("mon" becomes "monday") on both sides.
pub(crate) struct PreparedPreferences<'a> {
    days: HashSet<String>,
    lecturers: Vec<String>,
    assessment: &'a AssessmentPreference,
    wants_project_work: bool,
    wants_oral_assessment: bool,
}

impl<'a> PreparedPreferences<'a> {
    pub(crate) fn new(profile: &'a PreferenceProfile) -> Self {
        let days = profile
            .available_days
            .iter()
            .map(|day| fold_day(day))
            .filter(|day| !day.is_empty())
            .collect();
        let lecturers = profile
            .desired_lecturers
            .iter()
            .map(|lecturer| fold(lecturer))
            .filter(|lecturer| !lecturer.is_empty())
            .collect();

        Self {
            days,
            lecturers,
            assessment: &profile.assessment_type,
            wants_project_work: profile.wants_project_work,
            wants_oral_assessment: profile.wants_oral_assessment,
        }
    }
}

fn fold(value: &str) -> String {
    value.trim().to_lowercase()
}

fn fold_day(value: &str) -> String {
    canonical_day(value).to_lowercase()
}

/// Evaluate every dimension for one candidate, returning the total and the dimensions hit.
pub(crate) fn score_candidate(
    candidate: &Candidate,
    prefs: &PreparedPreferences<'_>,
) -> (u8, Vec<PreferenceDimension>) {
    let matched: Vec<PreferenceDimension> = PreferenceDimension::ALL
        .into_iter()
        .filter(|dimension| dimension_matches(*dimension, candidate, prefs))
        .collect();

    (matched.len() as u8, matched)
}

fn dimension_matches(
    dimension: PreferenceDimension,
    candidate: &Candidate,
    prefs: &PreparedPreferences<'_>,
) -> bool {
    match dimension {
        PreferenceDimension::Day => day_matches(candidate, prefs),
        PreferenceDimension::Lecturer => lecturer_matches(candidate, prefs),
        PreferenceDimension::AssessmentType => assessment_matches(candidate, prefs.assessment),
        PreferenceDimension::ProjectWork => {
            flag_matches(candidate.has_project_work, prefs.wants_project_work)
        }
        PreferenceDimension::OralAssessment => {
            flag_matches(candidate.has_oral_assessment, prefs.wants_oral_assessment)
        }
    }
}

fn day_matches(candidate: &Candidate, prefs: &PreparedPreferences<'_>) -> bool {
    if prefs.days.is_empty() {
        return false;
    }

    candidate
        .scheduled_days
        .iter()
        .any(|day| prefs.days.contains(&fold_day(day)))
}

// The desired-lecturer text is searched for the stored surname, so
// "Prof. Anna Smith" matches a module taught by "Smith".
fn lecturer_matches(candidate: &Candidate, prefs: &PreparedPreferences<'_>) -> bool {
    if prefs.lecturers.is_empty() {
        return false;
    }

    candidate
        .lecturer_surnames
        .iter()
        .map(|surname| fold(surname))
        .filter(|surname| !surname.is_empty())
        .any(|surname| {
            prefs
                .lecturers
                .iter()
                .any(|lecturer| lecturer.contains(&surname))
        })
}

fn assessment_matches(candidate: &Candidate, wanted: &AssessmentPreference) -> bool {
    let Some(offered) = candidate.assessment_type.as_deref() else {
        return false;
    };
    let offered = fold(offered);

    match wanted {
        AssessmentPreference::Unset => false,
        AssessmentPreference::IndividualAndGroup => matches!(
            offered.as_str(),
            AssessmentPreference::INDIVIDUAL
                | AssessmentPreference::GROUP
                | AssessmentPreference::INDIVIDUAL_AND_GROUP
        ),
        other => offered == fold(other.label()),
    }
}

// Absent metadata never matches; otherwise the stored flag must equal the
// requested one, so "no project work" wanted and offered scores a point.
fn flag_matches(offered: Option<bool>, wanted: bool) -> bool {
    offered == Some(wanted)
}
