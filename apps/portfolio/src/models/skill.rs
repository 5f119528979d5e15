use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillCategory {
    pub id: String,
    pub title: String,
    pub skills: Vec<String>,
}

impl SkillCategory {
    pub fn skill_count(&self) -> usize {
        self.skills.len()
    }
}
