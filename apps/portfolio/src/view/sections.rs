use serde::{Deserialize, Serialize};

/// Page sections in document order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    #[default]
    Hero,
    About,
    Projects,
    Skills,
    Education,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Hero,
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Education,
        Section::Contact,
    ];

    /// Anchor id of the section element.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Education => "education",
            Section::Contact => "contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }
}

/// Bounding box of a rendered section relative to the viewport top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub section: Section,
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn new(section: Section, top: f64, bottom: f64) -> Self {
        Self {
            section,
            top,
            bottom,
        }
    }

    pub fn straddles(&self, marker: f64) -> bool {
        self.top <= marker && self.bottom >= marker
    }
}

/// Returns the first section in document order that straddles the marker line.
///
/// `bounds` may arrive in any order and may omit sections that are not
/// rendered. `None` means no section straddles the marker; callers keep the
/// previous active section.
pub fn detect_active_section(bounds: &[SectionBounds], marker: f64) -> Option<Section> {
    Section::ALL.into_iter().find(|section| {
        bounds
            .iter()
            .any(|b| b.section == *section && b.straddles(marker))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projects_straddling_marker_is_active() {
        let bounds = [
            SectionBounds::new(Section::Hero, -1800.0, -900.0),
            SectionBounds::new(Section::About, -900.0, 80.0),
            SectionBounds::new(Section::Projects, 80.0, 900.0),
            SectionBounds::new(Section::Skills, 900.0, 1500.0),
        ];
        assert_eq!(detect_active_section(&bounds, 100.0), Some(Section::Projects));
    }

    #[test]
    fn test_edges_are_inclusive() {
        let top_edge = [SectionBounds::new(Section::Skills, 100.0, 400.0)];
        let bottom_edge = [SectionBounds::new(Section::Skills, -300.0, 100.0)];
        assert_eq!(detect_active_section(&top_edge, 100.0), Some(Section::Skills));
        assert_eq!(detect_active_section(&bottom_edge, 100.0), Some(Section::Skills));
    }

    #[test]
    fn test_document_order_wins_on_overlap() {
        let bounds = [
            SectionBounds::new(Section::Contact, 0.0, 500.0),
            SectionBounds::new(Section::About, 50.0, 150.0),
        ];
        assert_eq!(detect_active_section(&bounds, 100.0), Some(Section::About));
    }

    #[test]
    fn test_no_straddling_section() {
        let bounds = [
            SectionBounds::new(Section::Hero, -500.0, 20.0),
            SectionBounds::new(Section::About, 300.0, 900.0),
        ];
        assert_eq!(detect_active_section(&bounds, 100.0), None);
        assert_eq!(detect_active_section(&[], 100.0), None);
    }

    #[test]
    fn test_section_ids_roundtrip() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
        assert_eq!(Section::from_id("blog"), None);
        assert_eq!(Section::default(), Section::Hero);
    }
}
