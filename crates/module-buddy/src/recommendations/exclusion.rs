use std::collections::BTreeSet;

use super::domain::Candidate;

/// Thesis-track modules presented apart from the regular recommendation list.
pub const DEFAULT_RESERVED_MODULES: [&str; 3] = [
    "Research Methods in Information Systems",
    "Master Thesis",
    "Master Thesis Proposal",
];

/// Denylist of titles split off from the regular catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedModules {
    titles: BTreeSet<String>,
}

impl Default for ReservedModules {
    fn default() -> Self {
        Self::new(DEFAULT_RESERVED_MODULES)
    }
}

impl ReservedModules {
    pub fn new<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            titles: titles.into_iter().map(Into::into).collect(),
        }
    }

    /// Use `titles` when configured, the thesis-track defaults otherwise.
    pub fn from_override(titles: Option<&[String]>) -> Self {
        match titles {
            Some(titles) => Self::new(titles.iter().cloned()),
            None => Self::default(),
        }
    }

    pub fn contains(&self, title: &str) -> bool {
        self.titles.contains(title)
    }

    /// Candidates not on the denylist, in input order.
    pub fn regular(&self, candidates: Vec<Candidate>) -> Vec<Candidate> {
        candidates
            .into_iter()
            .filter(|candidate| !self.contains(&candidate.title))
            .collect()
    }

    /// Candidates on the denylist, in input order.
    pub fn reserved(&self, candidates: Vec<Candidate>) -> Vec<Candidate> {
        candidates
            .into_iter()
            .filter(|candidate| self.contains(&candidate.title))
            .collect()
    }
}
