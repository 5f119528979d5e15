// Filter/Search Engine plus the per-section UI state that feeds it.

pub mod browser;
pub mod filter;

pub use browser::{ProjectBrowser, ProjectListing};
pub use filter::{select_projects, tech_preview, ALL_CATEGORIES, CATEGORY_FILTERS, PREVIEW_LIMIT};
