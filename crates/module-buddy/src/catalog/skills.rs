//! Occupation lookup over the ESCO exports.
//!
//! Occupations require skills (essential or optional), learning outcomes
//! promote skills, and each learning outcome belongs to a module. Joining the
//! three answers "which modules prepare for this job".

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::io::Read;
use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use super::parser::{self, OccupationRow, SkillRow};
use super::{open, CatalogError};

pub const OCCUPATIONS_FILE: &str = "occupations.csv";
pub const SKILLS_FILE: &str = "skills.csv";
pub const KNOWLEDGE_FILE: &str = "knowledge.csv";
pub const LEARNING_OUTCOMES_FILE: &str = "learning_outcomes_uris.csv";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillKind {
    Skill,
    Knowledge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    Essential,
    Optional,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub uri: String,
    pub title: String,
    pub kind: SkillKind,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Occupation {
    pub name: String,
    pub uri: String,
    pub description: String,
    /// Skill URI to requirement level. Essential wins when a URI is listed twice.
    pub required_skills: BTreeMap<String, Requirement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LearningOutcome {
    /// Module key as written in the export: an individual name or a title.
    pub module: String,
    pub outcome: String,
    pub skill_uris: BTreeSet<String>,
}

/// Module key and skill title for one occupation hit, before module keys are resolved.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct SkillHit {
    pub(crate) module: String,
    pub(crate) skill: String,
    pub(crate) occupation: String,
}

/// Immutable occupation, skill, and learning-outcome tables.
#[derive(Debug, Clone, Default)]
pub struct SkillGraph {
    skills: HashMap<String, Skill>,
    occupations: Vec<Occupation>,
    outcomes: Vec<LearningOutcome>,
}

impl SkillGraph {
    /// Load the occupation exports from `dir`. Returns `None` when
    /// `occupations.csv` is absent; the other three files are then required.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Option<Self>, CatalogError> {
        let dir = dir.as_ref();
        if !dir.join(OCCUPATIONS_FILE).is_file() {
            return Ok(None);
        }

        let graph = Self::from_readers(
            open(dir.join(OCCUPATIONS_FILE))?,
            open(dir.join(SKILLS_FILE))?,
            open(dir.join(KNOWLEDGE_FILE))?,
            open(dir.join(LEARNING_OUTCOMES_FILE))?,
        )?;
        info!(
            occupations = graph.occupations.len(),
            skills = graph.skills.len(),
            learning_outcomes = graph.outcomes.len(),
            "occupation exports loaded"
        );
        Ok(Some(graph))
    }

    pub fn from_readers<O, S, K, L>(
        occupations: O,
        skills: S,
        knowledge: K,
        learning_outcomes: L,
    ) -> Result<Self, CatalogError>
    where
        O: Read,
        S: Read,
        K: Read,
        L: Read,
    {
        let mut graph = Self::default();

        for (rows, kind) in [
            (parser::parse_skills(skills)?, SkillKind::Skill),
            (parser::parse_skills(knowledge)?, SkillKind::Knowledge),
        ] {
            for row in rows {
                graph.insert_skill(row, kind);
            }
        }

        let mut seen_uris = BTreeSet::new();
        for row in parser::parse_occupations(occupations)? {
            if !seen_uris.insert(row.uri.clone()) {
                warn!(uri = %row.uri, "duplicate occupation row skipped");
                continue;
            }
            graph.occupations.push(occupation_from_row(row));
        }
        graph.occupations.sort_by(|left, right| {
            left.name
                .cmp(&right.name)
                .then_with(|| left.uri.cmp(&right.uri))
        });

        for row in parser::parse_learning_outcomes(learning_outcomes)? {
            let skill_uris = parser::split_uris(row.promoted_skills.as_deref())
                .chain(parser::split_uris(row.promoted_knowledge.as_deref()))
                .collect();
            graph.outcomes.push(LearningOutcome {
                module: row.module,
                outcome: row.outcome,
                skill_uris,
            });
        }

        Ok(graph)
    }

    fn insert_skill(&mut self, row: SkillRow, kind: SkillKind) {
        if self.skills.contains_key(&row.uri) {
            warn!(uri = %row.uri, "duplicate skill row skipped");
            return;
        }
        self.skills.insert(
            row.uri.clone(),
            Skill {
                uri: row.uri,
                title: row.title,
                kind,
                description: row.description,
            },
        );
    }

    pub fn skill(&self, uri: &str) -> Option<&Skill> {
        self.skills.get(uri)
    }

    pub fn occupations(&self) -> &[Occupation] {
        &self.occupations
    }

    pub fn learning_outcomes(&self) -> &[LearningOutcome] {
        &self.outcomes
    }

    /// Distinct occupation names in ascending order.
    pub fn occupation_names(&self) -> Vec<String> {
        self.occupations
            .iter()
            .map(|occupation| occupation.name.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Every (module key, skill title) pair where a learning outcome of the
    /// module promotes a titled skill required by an occupation named `name`.
    /// Skills missing from the skill tables are ignored.
    pub(crate) fn hits_for(&self, name: &str) -> BTreeSet<SkillHit> {
        let mut hits = BTreeSet::new();

        for occupation in self.occupations.iter().filter(|occupation| occupation.name == name) {
            for uri in occupation.required_skills.keys() {
                let Some(skill) = self.skills.get(uri) else {
                    continue;
                };
                for outcome in self
                    .outcomes
                    .iter()
                    .filter(|outcome| outcome.skill_uris.contains(uri))
                {
                    hits.insert(SkillHit {
                        module: outcome.module.clone(),
                        skill: skill.title.clone(),
                        occupation: occupation.name.clone(),
                    });
                }
            }
        }

        hits
    }
}

fn occupation_from_row(row: OccupationRow) -> Occupation {
    let mut required_skills = BTreeMap::new();
    for (cell, requirement) in [
        (row.essential_skills.as_deref(), Requirement::Essential),
        (row.essential_knowledge.as_deref(), Requirement::Essential),
        (row.optional_skills.as_deref(), Requirement::Optional),
        (row.optional_knowledge.as_deref(), Requirement::Optional),
    ] {
        for uri in parser::split_uris(cell) {
            required_skills.entry(uri).or_insert(requirement);
        }
    }

    Occupation {
        name: row.occupation,
        uri: row.uri,
        description: row.description,
        required_skills,
    }
}
