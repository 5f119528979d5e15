use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub name: String,
    pub nickname: Option<String>,
    pub tagline: String,
    pub location: String,
    pub university: String,
    pub email: String,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    /// Downloadable resume/CV. Opaque to the library.
    pub resume_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EducationEntry {
    pub id: String,
    pub degree: String,
    pub specialization: Option<String>,
    pub institution: String,
    pub location: String,
    pub period: String,
    pub description: String,
    #[serde(default)]
    pub courses: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
}
