//! Content Store — the read-only profile, project, skill and education data.
//!
//! Loaded once at startup and never mutated. Collection order of `projects`
//! is the display order for the unfiltered view (most recent first).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::PortfolioError;
use crate::models::{EducationEntry, Profile, Project, SkillCategory};

const EMBEDDED_CONTENT: &str = include_str!("../../content/portfolio.json");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentStore {
    pub profile: Profile,
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
}

impl ContentStore {
    /// Parses and validates a content document.
    ///
    /// Unknown project categories fail at parse time (closed enum);
    /// duplicate project ids and an empty project list fail validation.
    pub fn from_json(raw: &str) -> Result<Self, PortfolioError> {
        let store: ContentStore = serde_json::from_str(raw)?;
        store.validate()?;

        info!(
            "Content loaded: {} projects, {} skill categories, {} education entries",
            store.projects.len(),
            store.skills.len(),
            store.education.len()
        );

        Ok(store)
    }

    /// Loads the document compiled into the crate.
    pub fn embedded() -> Result<Self, PortfolioError> {
        Self::from_json(EMBEDDED_CONTENT)
    }

    fn validate(&self) -> Result<(), PortfolioError> {
        if self.projects.is_empty() {
            return Err(PortfolioError::EmptyProjects);
        }

        let mut seen = HashSet::with_capacity(self.projects.len());
        for project in &self.projects {
            if !seen.insert(project.id) {
                return Err(PortfolioError::DuplicateProjectId(project.id));
            }
        }

        Ok(())
    }

    pub fn project(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn featured_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| p.featured)
    }

    pub fn skill_category(&self, id: &str) -> Option<&SkillCategory> {
        self.skills.iter().find(|c| c.id == id)
    }

    pub fn total_skills(&self) -> usize {
        self.skills.iter().map(SkillCategory::skill_count).sum()
    }

    pub fn resume_url(&self) -> &str {
        &self.profile.resume_url
    }
}
