//! Project selection — category filter, free-text search and preview truncation.
//!
//! Pure functions only: the same inputs always produce the same ordered output.

use crate::models::Project;

/// Selector value that disables the category filter.
pub const ALL_CATEGORIES: &str = "All";

/// Selector values in display order.
pub const CATEGORY_FILTERS: [&str; 6] = [
    ALL_CATEGORIES,
    "AI/ML",
    "Full Stack",
    "IoT",
    "DevOps",
    "Data Science",
];

/// Number of projects shown in the default, unfiltered view.
pub const PREVIEW_LIMIT: usize = 3;

/// Number of tech tags shown on a collapsed card before the "+N" badge.
pub const TECH_PREVIEW_LIMIT: usize = 4;

/// Selects the projects to display.
///
/// Algorithm:
/// 1. Keep projects whose category label equals `category` (unless `"All"`)
/// 2. Keep projects matching the trimmed, lowercased `query` in title,
///    descriptions or any tech tag (skipped when the query is blank)
/// 3. In preview mode (`"All"`, blank query, `show_all == false`) keep only
///    the first `PREVIEW_LIMIT` entries
///
/// An unknown category matches nothing; an empty result is valid.
pub fn select_projects<'a>(
    all: &'a [Project],
    category: &str,
    query: &str,
    show_all: bool,
) -> Vec<&'a Project> {
    let needle = query.trim().to_lowercase();
    let filter_category = category != ALL_CATEGORIES;

    let filtered = all
        .iter()
        .filter(|p| !filter_category || p.category.label() == category)
        .filter(|p| needle.is_empty() || p.matches_lowercase(&needle));

    if is_preview(category, query, show_all) {
        filtered.take(PREVIEW_LIMIT).collect()
    } else {
        filtered.collect()
    }
}

/// Whether the preview truncation applies to these inputs.
pub fn is_preview(category: &str, query: &str, show_all: bool) -> bool {
    category == ALL_CATEGORIES && query.trim().is_empty() && !show_all
}

/// Splits a project's tech stack into the visible tags and the overflow count.
pub fn tech_preview(project: &Project) -> (&[String], usize) {
    let shown = project.tech_stack.len().min(TECH_PREVIEW_LIMIT);
    (
        &project.tech_stack[..shown],
        project.tech_stack.len() - shown,
    )
}
