use super::normalizer::{canonical_day, normalize_name};
use serde::{Deserialize, Deserializer};
use std::io::Read;

#[derive(Debug, Deserialize)]
pub(crate) struct ModuleRow {
    #[serde(rename = "Individual Name")]
    pub(crate) individual_name: String,
    #[serde(rename = "Course_Title")]
    pub(crate) title: String,
    #[serde(rename = "Course_Type", default)]
    pub(crate) module_type: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScheduleRow {
    #[serde(rename = "Individual Name")]
    pub(crate) individual_name: String,
    #[serde(rename = "Group_Name", default)]
    pub(crate) group_name: String,
    #[serde(rename = "Day", default, deserialize_with = "empty_string_as_none")]
    pub(crate) day: Option<String>,
    #[serde(rename = "Time", default)]
    pub(crate) time: String,
    #[serde(rename = "Periodicity", default)]
    pub(crate) periodicity: String,
    #[serde(rename = "Semester", default)]
    pub(crate) semester: String,
    #[serde(rename = "Location", default)]
    pub(crate) location: String,
    #[serde(rename = "AY", default)]
    pub(crate) academic_year: String,
    #[serde(
        rename = "Professor_Name",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub(crate) professor_name: Option<String>,
    #[serde(
        rename = "Professor_Surname",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub(crate) professor_surname: Option<String>,
}

/// Entry of `modules_assessments.json`. Flags must be JSON booleans.
#[derive(Debug, Deserialize)]
pub(crate) struct AssessmentEntry {
    pub(crate) module_name: String,
    pub(crate) assessment_type: String,
    pub(crate) project_work: bool,
    pub(crate) oral_assessment: bool,
}

/// Row of the cleaned `occupations.csv`. Skill columns hold comma-separated URIs.
#[derive(Debug, Deserialize)]
pub(crate) struct OccupationRow {
    pub(crate) occupation: String,
    pub(crate) uri: String,
    #[serde(default)]
    pub(crate) description: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub(crate) essential_skills: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub(crate) essential_knowledge: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub(crate) optional_skills: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub(crate) optional_knowledge: Option<String>,
}

/// Row of `skills.csv` or `knowledge.csv`.
#[derive(Debug, Deserialize)]
pub(crate) struct SkillRow {
    pub(crate) uri: String,
    pub(crate) title: String,
    #[serde(default)]
    pub(crate) description: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LearningOutcomeRow {
    #[serde(rename = "Module Title")]
    pub(crate) module: String,
    #[serde(rename = "Learning Outcome")]
    pub(crate) outcome: String,
    #[serde(
        rename = "Promoted skill",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub(crate) promoted_skills: Option<String>,
    #[serde(
        rename = "Promoted knowledge",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub(crate) promoted_knowledge: Option<String>,
}

pub(crate) fn parse_modules<R: Read>(reader: R) -> Result<Vec<ModuleRow>, csv::Error> {
    let mut rows = Vec::new();
    for row in csv_reader(reader).deserialize::<ModuleRow>() {
        let mut row = row?;
        row.individual_name = normalize_name(&row.individual_name);
        row.title = normalize_name(&row.title);
        rows.push(row);
    }
    Ok(rows)
}

pub(crate) fn parse_schedule<R: Read>(reader: R) -> Result<Vec<ScheduleRow>, csv::Error> {
    let mut rows = Vec::new();
    for row in csv_reader(reader).deserialize::<ScheduleRow>() {
        let mut row = row?;
        row.individual_name = normalize_name(&row.individual_name);
        row.day = row.day.as_deref().map(canonical_day);
        rows.push(row);
    }
    Ok(rows)
}

pub(crate) fn parse_assessments<R: Read>(
    reader: R,
) -> Result<Vec<AssessmentEntry>, serde_json::Error> {
    let mut entries: Vec<AssessmentEntry> = serde_json::from_reader(reader)?;
    for entry in &mut entries {
        entry.module_name = normalize_name(&entry.module_name);
    }
    Ok(entries)
}

pub(crate) fn parse_occupations<R: Read>(reader: R) -> Result<Vec<OccupationRow>, csv::Error> {
    let mut rows = Vec::new();
    for row in csv_reader(reader).deserialize::<OccupationRow>() {
        let mut row = row?;
        row.occupation = normalize_name(&row.occupation);
        rows.push(row);
    }
    Ok(rows)
}

pub(crate) fn parse_skills<R: Read>(reader: R) -> Result<Vec<SkillRow>, csv::Error> {
    let mut rows = Vec::new();
    for row in csv_reader(reader).deserialize::<SkillRow>() {
        let mut row = row?;
        row.title = normalize_name(&row.title);
        rows.push(row);
    }
    Ok(rows)
}

pub(crate) fn parse_learning_outcomes<R: Read>(
    reader: R,
) -> Result<Vec<LearningOutcomeRow>, csv::Error> {
    let mut rows = Vec::new();
    for row in csv_reader(reader).deserialize::<LearningOutcomeRow>() {
        let mut row = row?;
        row.module = normalize_name(&row.module);
        rows.push(row);
    }
    Ok(rows)
}

/// Split a comma-separated URI cell, dropping blanks.
pub(crate) fn split_uris(cell: Option<&str>) -> impl Iterator<Item = String> + '_ {
    cell.into_iter()
        .flat_map(|cell| cell.split(','))
        .map(str::trim)
        .filter(|uri| !uri.is_empty())
        .map(str::to_string)
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_uris_trims_and_drops_blanks() {
        let uris: Vec<String> = split_uris(Some(" http://x/s1, ,http://x/s2 ,")).collect();
        assert_eq!(uris, vec!["http://x/s1", "http://x/s2"]);
        assert_eq!(split_uris(None).count(), 0);
    }

    #[test]
    fn learning_outcome_rows_keep_quoted_uri_lists() {
        let rows = parse_learning_outcomes(
            "Module Title,Learning Outcome,Promoted skill,Promoted knowledge\n\
DM,\"Apply clustering, classification\",\"http://x/s1,http://x/s2\",\n"
                .as_bytes(),
        )
        .expect("rows parse");

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].outcome, "Apply clustering, classification");
        assert_eq!(
            rows[0].promoted_skills.as_deref(),
            Some("http://x/s1,http://x/s2")
        );
        assert!(rows[0].promoted_knowledge.is_none());
    }
}
