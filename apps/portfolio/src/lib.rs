//! Client-side view-state engine for a single-page portfolio.
//!
//! Pure pieces (project selection, form validation, the view reducer) are
//! plain functions; `session::PortfolioSession` wires them to timers, theme
//! persistence and host listeners for one mounted page.

pub mod config;
pub mod contact;
pub mod content;
pub mod errors;
pub mod models;
pub mod projects;
pub mod session;
pub mod telemetry;
pub mod view;

pub use config::{Config, ViewTuning};
pub use contact::{
    sender_from_config, validate, ContactField, ContactFields, ContactForm, ContactSender,
    FieldErrors,
};
pub use content::ContentStore;
pub use errors::{ContactError, PortfolioError};
pub use models::{Project, ProjectCategory, ProjectTab, SkillCategory};
pub use projects::{select_projects, ProjectBrowser, ProjectListing};
pub use session::PortfolioSession;
pub use telemetry::init_tracing;
pub use view::{reduce, Section, SectionBounds, Theme, ThemeController, ViewEvent, ViewState};
