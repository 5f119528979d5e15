use serde::{Deserialize, Serialize};

/// Closed set of project categories. Serialized as the display label.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ProjectCategory {
    #[serde(rename = "AI/ML")]
    AiMl,
    #[serde(rename = "Full Stack")]
    FullStack,
    #[serde(rename = "IoT")]
    Iot,
    #[serde(rename = "DevOps")]
    DevOps,
    #[serde(rename = "Data Science")]
    DataScience,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 5] = [
        ProjectCategory::AiMl,
        ProjectCategory::FullStack,
        ProjectCategory::Iot,
        ProjectCategory::DevOps,
        ProjectCategory::DataScience,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProjectCategory::AiMl => "AI/ML",
            ProjectCategory::FullStack => "Full Stack",
            ProjectCategory::Iot => "IoT",
            ProjectCategory::DevOps => "DevOps",
            ProjectCategory::DataScience => "Data Science",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

/// Animated counter shown on the metrics tab, e.g. `95` + `%` "Accuracy".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Metric {
    pub label: String,
    pub value: f64,
    #[serde(default)]
    pub suffix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub category: ProjectCategory,
    pub short_description: String,
    pub full_description: String,
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub metrics: Vec<Metric>,
    #[serde(default)]
    pub challenges: Vec<String>,
    #[serde(default)]
    pub outcomes: Vec<String>,
    pub github: Option<String>,
    pub demo: Option<String>,
    pub duration: Option<String>,
    pub team_size: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl Project {
    /// Case-insensitive substring match over title, descriptions and tech tags.
    /// `needle` must already be lowercased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.short_description.to_lowercase().contains(needle)
            || self.full_description.to_lowercase().contains(needle)
            || self
                .tech_stack
                .iter()
                .any(|tech| tech.to_lowercase().contains(needle))
    }

    /// Whether the given detail tab has anything to show for this project.
    pub fn has_tab_content(&self, tab: ProjectTab) -> bool {
        match tab {
            ProjectTab::Overview => true,
            ProjectTab::Metrics => !self.metrics.is_empty(),
            ProjectTab::Challenges => !self.challenges.is_empty(),
            ProjectTab::Outcomes => !self.outcomes.is_empty(),
        }
    }
}

/// Detail tabs on an expanded project card.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProjectTab {
    #[default]
    Overview,
    Metrics,
    Challenges,
    Outcomes,
}

impl ProjectTab {
    pub const ALL: [ProjectTab; 4] = [
        ProjectTab::Overview,
        ProjectTab::Metrics,
        ProjectTab::Challenges,
        ProjectTab::Outcomes,
    ];
}
