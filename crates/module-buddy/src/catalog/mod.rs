//! In-memory module catalog loaded from the university's CSV/JSON exports.
//!
//! The catalog joins module descriptions, teaching sessions, and assessment
//! metadata on the module's individual name and serves the result as
//! [`Candidate`] snapshots through [`CandidateSource`]. When the occupation
//! exports are present it also answers which modules prepare for a job.

pub mod dedup;
mod normalizer;
mod parser;
pub mod skills;

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use crate::recommendations::{Candidate, CandidateSource, OccupationMatch, SourceError};
use parser::{AssessmentEntry, ModuleRow, ScheduleRow};

pub use dedup::{dedup_occupations, DedupSummary};
pub(crate) use normalizer::canonical_day;
pub use skills::{Occupation, Requirement, Skill, SkillGraph, SkillKind};

pub const MODULES_FILE: &str = "modules.csv";
pub const SCHEDULE_FILE: &str = "modules_scheduling.csv";
pub const ASSESSMENTS_FILE: &str = "modules_assessments.json";

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid assessment data: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Lecturer {
    pub first_name: String,
    pub surname: String,
}

impl Lecturer {
    pub fn full_name(&self) -> String {
        if self.first_name.is_empty() {
            self.surname.clone()
        } else {
            format!("{} {}", self.first_name, self.surname)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeachingSession {
    pub group_name: String,
    pub day: Option<String>,
    pub time: String,
    pub periodicity: String,
    pub semester: String,
    pub location: String,
    pub academic_year: String,
    pub lecturer: Option<Lecturer>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentInfo {
    pub assessment_type: String,
    pub project_work: bool,
    pub oral_assessment: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogModule {
    pub individual_name: String,
    pub title: String,
    pub module_type: String,
    pub sessions: Vec<TeachingSession>,
    pub assessment: Option<AssessmentInfo>,
}

impl CatalogModule {
    /// Flatten sessions and assessment metadata into a scoring snapshot.
    pub fn to_candidate(&self) -> Candidate {
        let mut candidate = Candidate::new(self.title.clone(), self.module_type.clone())
            .with_days(self.sessions.iter().filter_map(|session| session.day.clone()))
            .with_lecturers(
                self.sessions
                    .iter()
                    .filter_map(|session| session.lecturer.as_ref())
                    .map(|lecturer| lecturer.surname.clone()),
            );

        if let Some(assessment) = &self.assessment {
            candidate = candidate
                .with_assessment_type(assessment.assessment_type.clone())
                .with_project_work(assessment.project_work)
                .with_oral_assessment(assessment.oral_assessment);
        }

        candidate
    }
}

/// Teaching sessions of one module, as listed for timetable views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleSessions {
    pub module_title: String,
    pub teaching_sessions: Vec<TeachingSession>,
}

/// Immutable catalog keyed by module title.
#[derive(Debug, Clone, Default)]
pub struct ModuleCatalog {
    modules: BTreeMap<String, CatalogModule>,
    /// Individual name to title.
    aliases: HashMap<String, String>,
    skills: SkillGraph,
}

impl ModuleCatalog {
    /// Load the three module export files from `dir`, plus the occupation
    /// exports when `occupations.csv` is present.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, CatalogError> {
        let dir = dir.as_ref();
        let mut catalog = Self::from_readers(
            open(dir.join(MODULES_FILE))?,
            open(dir.join(SCHEDULE_FILE))?,
            open(dir.join(ASSESSMENTS_FILE))?,
        )?;
        match SkillGraph::from_dir(dir)? {
            Some(skills) => catalog = catalog.with_skill_graph(skills),
            None => info!(dir = %dir.display(), "no occupation exports, occupation lookup disabled"),
        }
        info!(dir = %dir.display(), modules = catalog.len(), "module catalog loaded");
        Ok(catalog)
    }

    pub fn from_readers<M, S, A>(modules: M, schedule: S, assessments: A) -> Result<Self, CatalogError>
    where
        M: Read,
        S: Read,
        A: Read,
    {
        let mut catalog = Self::default();

        for row in parser::parse_modules(modules)? {
            catalog.insert_module(row);
        }

        for row in parser::parse_schedule(schedule)? {
            let Some(module) = catalog.lookup_mut(&row.individual_name) else {
                warn!(module = %row.individual_name, "schedule row references unknown module");
                continue;
            };
            module.sessions.push(session_from_row(row));
        }

        for entry in parser::parse_assessments(assessments)? {
            let Some(module) = catalog.lookup_mut(&entry.module_name) else {
                warn!(module = %entry.module_name, "assessment entry references unknown module");
                continue;
            };
            module.assessment = Some(assessment_from_entry(entry));
        }

        Ok(catalog)
    }

    /// Attach occupation data. Learning outcomes whose module key matches no
    /// module are logged and never produce hits.
    pub fn with_skill_graph(mut self, skills: SkillGraph) -> Self {
        let unknown: BTreeSet<&str> = skills
            .learning_outcomes()
            .iter()
            .map(|outcome| outcome.module.as_str())
            .filter(|module| self.resolve(module).is_none())
            .collect();
        for module in unknown {
            warn!(module, "learning outcomes reference unknown module");
        }

        self.skills = skills;
        self
    }

    fn insert_module(&mut self, row: ModuleRow) {
        if row.title.is_empty() {
            warn!(module = %row.individual_name, "module row without a title skipped");
            return;
        }
        if self.modules.contains_key(&row.title) || self.aliases.contains_key(&row.individual_name)
        {
            warn!(title = %row.title, "duplicate module row skipped");
            return;
        }

        self.aliases
            .insert(row.individual_name.clone(), row.title.clone());
        self.modules.insert(
            row.title.clone(),
            CatalogModule {
                individual_name: row.individual_name,
                title: row.title,
                module_type: row.module_type,
                sessions: Vec::new(),
                assessment: None,
            },
        );
    }

    fn lookup_mut(&mut self, individual_name: &str) -> Option<&mut CatalogModule> {
        let title = self.aliases.get(individual_name)?;
        self.modules.get_mut(title)
    }

    /// Title for a module key that is either an individual name or a title.
    fn resolve(&self, key: &str) -> Option<&str> {
        self.aliases
            .get(key)
            .map(String::as_str)
            .or_else(|| self.modules.get_key_value(key).map(|(title, _)| title.as_str()))
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn module(&self, title: &str) -> Option<&CatalogModule> {
        self.modules.get(title)
    }

    /// Module titles in ascending order.
    pub fn titles(&self) -> Vec<String> {
        self.modules.keys().cloned().collect()
    }

    /// Distinct "First Last" lecturer names in ascending order.
    pub fn lecturer_names(&self) -> Vec<String> {
        self.modules
            .values()
            .flat_map(|module| module.sessions.iter())
            .filter_map(|session| session.lecturer.as_ref())
            .map(Lecturer::full_name)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn skill_graph(&self) -> &SkillGraph {
        &self.skills
    }

    pub fn occupation_names(&self) -> Vec<String> {
        self.skills.occupation_names()
    }

    /// Modules whose learning outcomes promote a skill the named occupation
    /// requires, one entry per (module, skill), ordered by module title.
    pub fn modules_for_occupation(&self, occupation: &str) -> Vec<OccupationMatch> {
        let matches: BTreeSet<OccupationMatch> = self
            .skills
            .hits_for(occupation)
            .into_iter()
            .filter_map(|hit| {
                Some(OccupationMatch {
                    module_title: self.resolve(&hit.module)?.to_string(),
                    skill: hit.skill,
                    occupation: hit.occupation,
                })
            })
            .collect();

        matches.into_iter().collect()
    }

    /// Sessions grouped per requested module, in title order. Unknown titles
    /// and modules without sessions are omitted.
    pub fn sessions_for<I, S>(&self, titles: I) -> Vec<ModuleSessions>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let requested: BTreeSet<String> = titles
            .into_iter()
            .map(|title| title.as_ref().to_string())
            .collect();

        requested
            .iter()
            .filter_map(|title| self.modules.get(title))
            .filter(|module| !module.sessions.is_empty())
            .map(|module| ModuleSessions {
                module_title: module.title.clone(),
                teaching_sessions: module.sessions.clone(),
            })
            .collect()
    }
}

impl CandidateSource for ModuleCatalog {
    fn candidates(&self, excluded: &BTreeSet<String>) -> Result<Vec<Candidate>, SourceError> {
        Ok(self
            .modules
            .values()
            .filter(|module| !excluded.contains(&module.title))
            .map(CatalogModule::to_candidate)
            .collect())
    }

    fn lecturers(&self) -> Result<Vec<String>, SourceError> {
        Ok(self.lecturer_names())
    }

    fn occupations(&self) -> Result<Vec<String>, SourceError> {
        Ok(self.occupation_names())
    }

    fn modules_for_occupation(&self, occupation: &str) -> Result<Vec<OccupationMatch>, SourceError> {
        Ok(ModuleCatalog::modules_for_occupation(self, occupation))
    }
}

fn open(path: PathBuf) -> Result<File, CatalogError> {
    File::open(&path).map_err(|source| CatalogError::Io { path, source })
}

fn session_from_row(row: ScheduleRow) -> TeachingSession {
    let lecturer = row.professor_surname.map(|surname| Lecturer {
        first_name: row.professor_name.unwrap_or_default(),
        surname,
    });

    TeachingSession {
        group_name: row.group_name,
        day: row.day,
        time: row.time,
        periodicity: row.periodicity,
        semester: row.semester,
        location: row.location,
        academic_year: row.academic_year,
        lecturer,
    }
}

fn assessment_from_entry(entry: AssessmentEntry) -> AssessmentInfo {
    AssessmentInfo {
        assessment_type: entry.assessment_type,
        project_work: entry.project_work,
        oral_assessment: entry.oral_assessment,
    }
}
