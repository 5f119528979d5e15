use std::collections::HashMap;

use serde::Serialize;

use crate::content::ContentStore;
use crate::models::{Project, ProjectTab};
use crate::projects::filter::{is_preview, select_projects, ALL_CATEGORIES};

/// UI state of the projects section: selector, search box, show-more toggle
/// and the open detail tab of each card.
#[derive(Debug, Clone)]
pub struct ProjectBrowser {
    category: String,
    query: String,
    show_all: bool,
    active_tabs: HashMap<u32, ProjectTab>,
}

/// Derived view of the projects section.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectListing<'a> {
    pub projects: Vec<&'a Project>,
    pub shown: usize,
    pub total: usize,
    /// Preview truncation is active and hid at least one project.
    pub has_more: bool,
    /// Expanded, unfiltered view: offer "show less".
    pub can_collapse: bool,
}

impl ProjectListing<'_> {
    pub fn summary(&self) -> String {
        format!("Showing {} of {} projects", self.shown, self.total)
    }
}

impl Default for ProjectBrowser {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
            query: String::new(),
            show_all: false,
            active_tabs: HashMap::new(),
        }
    }
}

impl ProjectBrowser {
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn show_all(&self) -> bool {
        self.show_all
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn toggle_show_all(&mut self) -> bool {
        self.show_all = !self.show_all;
        self.show_all
    }

    pub fn set_tab(&mut self, project_id: u32, tab: ProjectTab) {
        self.active_tabs.insert(project_id, tab);
    }

    pub fn tab_for(&self, project_id: u32) -> ProjectTab {
        self.active_tabs
            .get(&project_id)
            .copied()
            .unwrap_or_default()
    }

    pub fn listing<'a>(&self, content: &'a ContentStore) -> ProjectListing<'a> {
        let projects = select_projects(
            &content.projects,
            &self.category,
            &self.query,
            self.show_all,
        );
        let has_more = is_preview(&self.category, &self.query, self.show_all)
            && projects.len() < content.projects.len();
        let can_collapse =
            self.show_all && self.category == ALL_CATEGORIES && self.query.trim().is_empty();

        ProjectListing {
            shown: projects.len(),
            total: content.projects.len(),
            has_more,
            can_collapse,
            projects,
        }
    }
}
