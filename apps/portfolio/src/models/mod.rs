pub mod profile;
pub mod project;
pub mod skill;

pub use profile::{EducationEntry, Profile};
pub use project::{Metric, Project, ProjectCategory, ProjectTab};
pub use skill::SkillCategory;
