use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::domain::{AssessmentPreference, PreferenceProfile};
use super::error::RecommendationError;

const DEFAULT_EXPECTED_SEMESTERS: u8 = 3;

/// Stored student account with the preference answers collected at sign-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudentRecord {
    pub id: String,
    pub name: String,
    pub surname: String,
    pub desired_jobs: Vec<String>,
    pub expected_semesters: u8,
    pub taken_courses: Vec<String>,
    pub desired_lecturers: Vec<String>,
    pub available_days: Vec<String>,
    pub assessment_type: String,
    pub oral_assessment: bool,
    pub project_work: bool,
}

impl Default for StudentRecord {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            surname: String::new(),
            desired_jobs: Vec::new(),
            expected_semesters: DEFAULT_EXPECTED_SEMESTERS,
            taken_courses: Vec::new(),
            desired_lecturers: Vec::new(),
            available_days: Vec::new(),
            assessment_type: String::new(),
            oral_assessment: false,
            project_work: false,
        }
    }
}

impl StudentRecord {
    /// Build a record from loosely-typed JSON, rejecting values of the wrong type.
    ///
    /// Missing keys and `null` fall back to the new-student defaults.
    pub fn from_json(value: &Value) -> Result<Self, RecommendationError> {
        let object = value.as_object().ok_or_else(|| {
            RecommendationError::invalid_input("student", "expected a JSON object")
        })?;
        let defaults = Self::default();

        Ok(Self {
            id: string_field(object, "id")?.unwrap_or(defaults.id),
            name: string_field(object, "name")?.unwrap_or(defaults.name),
            surname: string_field(object, "surname")?.unwrap_or(defaults.surname),
            desired_jobs: string_list_field(object, "desired_jobs")?
                .unwrap_or(defaults.desired_jobs),
            expected_semesters: semesters_field(object)?.unwrap_or(defaults.expected_semesters),
            taken_courses: string_list_field(object, "taken_courses")?
                .unwrap_or(defaults.taken_courses),
            desired_lecturers: string_list_field(object, "desired_lecturers")?
                .unwrap_or(defaults.desired_lecturers),
            available_days: string_list_field(object, "available_days")?
                .unwrap_or(defaults.available_days),
            assessment_type: string_field(object, "assessment_type")?
                .unwrap_or(defaults.assessment_type),
            oral_assessment: bool_field(object, "oral_assessment")?
                .unwrap_or(defaults.oral_assessment),
            project_work: bool_field(object, "project_work")?.unwrap_or(defaults.project_work),
        })
    }

    pub fn preference_profile(&self) -> PreferenceProfile {
        PreferenceProfile::from(self)
    }
}

impl From<&StudentRecord> for PreferenceProfile {
    fn from(student: &StudentRecord) -> Self {
        PreferenceProfile {
            excluded_candidates: student.taken_courses.iter().cloned().collect(),
            desired_lecturers: student.desired_lecturers.clone(),
            available_days: student.available_days.iter().cloned().collect(),
            assessment_type: AssessmentPreference::parse(&student.assessment_type),
            wants_project_work: student.project_work,
            wants_oral_assessment: student.oral_assessment,
        }
    }
}

fn present<'a>(object: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    object.get(field).filter(|value| !value.is_null())
}

fn string_field(
    object: &Map<String, Value>,
    field: &str,
) -> Result<Option<String>, RecommendationError> {
    present(object, field)
        .map(|value| {
            value
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| RecommendationError::invalid_input(field, "expected a string"))
        })
        .transpose()
}

fn bool_field(
    object: &Map<String, Value>,
    field: &str,
) -> Result<Option<bool>, RecommendationError> {
    present(object, field)
        .map(|value| {
            value
                .as_bool()
                .ok_or_else(|| RecommendationError::invalid_input(field, "expected a boolean"))
        })
        .transpose()
}

fn string_list_field(
    object: &Map<String, Value>,
    field: &str,
) -> Result<Option<Vec<String>>, RecommendationError> {
    let Some(value) = present(object, field) else {
        return Ok(None);
    };
    let items = value
        .as_array()
        .ok_or_else(|| RecommendationError::invalid_input(field, "expected a list of strings"))?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                RecommendationError::invalid_input(format!("{field}[{index}]"), "expected a string")
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

fn semesters_field(object: &Map<String, Value>) -> Result<Option<u8>, RecommendationError> {
    present(object, "expected_semesters")
        .map(|value| {
            value
                .as_u64()
                .and_then(|count| u8::try_from(count).ok())
                .ok_or_else(|| {
                    RecommendationError::invalid_input(
                        "expected_semesters",
                        "expected a whole number between 0 and 255",
                    )
                })
        })
        .transpose()
}
