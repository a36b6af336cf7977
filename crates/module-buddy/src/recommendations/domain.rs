use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Student preferences a recommendation request is scored against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferenceProfile {
    /// Module titles already completed. These never appear in results.
    pub excluded_candidates: BTreeSet<String>,
    /// Free text such as "Prof. Smith"; matched against stored surnames.
    pub desired_lecturers: Vec<String>,
    pub available_days: BTreeSet<String>,
    pub assessment_type: AssessmentPreference,
    pub wants_project_work: bool,
    pub wants_oral_assessment: bool,
}

/// Requested assessment style. The empty string deserializes to `Unset`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AssessmentPreference {
    #[default]
    Unset,
    Individual,
    Group,
    /// Accepts individual, group, or mixed assessment.
    IndividualAndGroup,
    Other(String),
}

impl AssessmentPreference {
    pub const INDIVIDUAL: &'static str = "individual";
    pub const GROUP: &'static str = "group";
    pub const INDIVIDUAL_AND_GROUP: &'static str = "individual_and_group";

    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.to_lowercase().as_str() {
            "" => Self::Unset,
            Self::INDIVIDUAL => Self::Individual,
            Self::GROUP => Self::Group,
            Self::INDIVIDUAL_AND_GROUP => Self::IndividualAndGroup,
            _ => Self::Other(trimmed.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Unset => "",
            Self::Individual => Self::INDIVIDUAL,
            Self::Group => Self::GROUP,
            Self::IndividualAndGroup => Self::INDIVIDUAL_AND_GROUP,
            Self::Other(value) => value,
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }
}

impl From<String> for AssessmentPreference {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<&str> for AssessmentPreference {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<AssessmentPreference> for String {
    fn from(value: AssessmentPreference) -> Self {
        value.label().to_string()
    }
}

/// Read-only snapshot of a module offering, as fetched from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Unique key for the module.
    pub title: String,
    pub module_type: String,
    #[serde(default)]
    pub scheduled_days: BTreeSet<String>,
    #[serde(default)]
    pub lecturer_surnames: BTreeSet<String>,
    #[serde(default)]
    pub assessment_type: Option<String>,
    #[serde(default)]
    pub has_project_work: Option<bool>,
    #[serde(default)]
    pub has_oral_assessment: Option<bool>,
}

impl Candidate {
    pub fn new(title: impl Into<String>, module_type: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            module_type: module_type.into(),
            scheduled_days: BTreeSet::new(),
            lecturer_surnames: BTreeSet::new(),
            assessment_type: None,
            has_project_work: None,
            has_oral_assessment: None,
        }
    }

    pub fn with_days<I, S>(mut self, days: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scheduled_days.extend(days.into_iter().map(Into::into));
        self
    }

    pub fn with_lecturers<I, S>(mut self, surnames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lecturer_surnames
            .extend(surnames.into_iter().map(Into::into));
        self
    }

    pub fn with_assessment_type(mut self, assessment_type: impl Into<String>) -> Self {
        self.assessment_type = Some(assessment_type.into());
        self
    }

    pub fn with_project_work(mut self, project_work: bool) -> Self {
        self.has_project_work = Some(project_work);
        self
    }

    pub fn with_oral_assessment(mut self, oral_assessment: bool) -> Self {
        self.has_oral_assessment = Some(oral_assessment);
        self
    }
}

/// One of the five independent 0/1 scoring criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferenceDimension {
    Day,
    Lecturer,
    AssessmentType,
    ProjectWork,
    OralAssessment,
}

impl PreferenceDimension {
    pub const ALL: [PreferenceDimension; 5] = [
        PreferenceDimension::Day,
        PreferenceDimension::Lecturer,
        PreferenceDimension::AssessmentType,
        PreferenceDimension::ProjectWork,
        PreferenceDimension::OralAssessment,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            PreferenceDimension::Day => "day",
            PreferenceDimension::Lecturer => "lecturer",
            PreferenceDimension::AssessmentType => "assessment_type",
            PreferenceDimension::ProjectWork => "project_work",
            PreferenceDimension::OralAssessment => "oral_assessment",
        }
    }
}

impl fmt::Display for PreferenceDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ranked output entry. `score` is the number of entries in `matched`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub candidate: Candidate,
    pub score: u8,
    pub matched: Vec<PreferenceDimension>,
}

impl ScoredCandidate {
    pub fn title(&self) -> &str {
        &self.candidate.title
    }
}

/// A module whose learning outcomes promote a skill an occupation requires.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OccupationMatch {
    pub module_title: String,
    pub skill: String,
    pub occupation: String,
}
