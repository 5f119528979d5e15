//! View state and its pure reducer.
//!
//! `reduce` is the only way state changes. It performs no I/O and schedules
//! nothing; the session inspects the before/after states to decide which
//! side effects (timers, persistence) to run.

use serde::Serialize;

use crate::config::ViewTuning;
use crate::view::parallax::{parallax_offset, Rect};
use crate::view::scroll::{ScrollFlags, ScrollMetrics};
use crate::view::sections::{detect_active_section, Section, SectionBounds};
use crate::view::theme::Theme;
use crate::view::toast::Toast;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewState {
    pub scroll_offset: f64,
    pub scroll_progress: f64,
    pub scrolled: bool,
    pub show_back_to_top: bool,
    pub active_section: Section,
    pub theme: Theme,
    pub menu_open: bool,
    pub toast: Option<Toast>,
    /// Bumped on every hidden-to-visible toast transition.
    pub toast_generation: u64,
    pub parallax: (f64, f64),
}

impl ViewState {
    /// Initial state. The theme is resolved before construction so the first
    /// frame never shows the wrong one.
    pub fn new(theme: Theme) -> Self {
        Self {
            scroll_offset: 0.0,
            scroll_progress: 0.0,
            scrolled: false,
            show_back_to_top: false,
            active_section: Section::default(),
            theme,
            menu_open: false,
            toast: None,
            toast_generation: 0,
            parallax: (0.0, 0.0),
        }
    }

    pub fn toast_visible(&self) -> bool {
        self.toast.is_some()
    }

    pub fn scroll_flags(&self) -> ScrollFlags {
        ScrollFlags {
            scrolled: self.scrolled,
            show_back_to_top: self.show_back_to_top,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    Mounted {
        metrics: ScrollMetrics,
        sections: Vec<SectionBounds>,
    },
    Scrolled {
        metrics: ScrollMetrics,
        sections: Vec<SectionBounds>,
    },
    Resized {
        metrics: ScrollMetrics,
        sections: Vec<SectionBounds>,
    },
    PointerMoved {
        x: f64,
        y: f64,
        hero: Rect,
    },
    ToggleMenu,
    CloseMenu,
    /// Nav link clicked: the host scrolls to the anchor.
    NavigateTo(Section),
    ThemeChanged(Theme),
    ShowToast(Toast),
    DismissToast,
    ToastExpired {
        generation: u64,
    },
}

pub fn reduce(mut state: ViewState, event: &ViewEvent, tuning: &ViewTuning) -> ViewState {
    match event {
        ViewEvent::Mounted { metrics, sections }
        | ViewEvent::Scrolled { metrics, sections }
        | ViewEvent::Resized { metrics, sections } => {
            apply_scroll(&mut state, metrics, sections, tuning);
        }
        ViewEvent::PointerMoved { x, y, hero } => {
            state.parallax = parallax_offset(*x, *y, hero);
        }
        ViewEvent::ToggleMenu => state.menu_open = !state.menu_open,
        ViewEvent::CloseMenu => state.menu_open = false,
        ViewEvent::NavigateTo(section) => {
            state.menu_open = false;
            state.active_section = *section;
        }
        ViewEvent::ThemeChanged(theme) => state.theme = *theme,
        ViewEvent::ShowToast(toast) => {
            if state.toast.is_none() {
                state.toast_generation += 1;
            }
            state.toast = Some(toast.clone());
        }
        ViewEvent::DismissToast => state.toast = None,
        ViewEvent::ToastExpired { generation } => {
            // A stale expiry belongs to a toast that was already replaced.
            if *generation == state.toast_generation {
                state.toast = None;
            }
        }
    }
    state
}

fn apply_scroll(
    state: &mut ViewState,
    metrics: &ScrollMetrics,
    sections: &[SectionBounds],
    tuning: &ViewTuning,
) {
    let flags = ScrollFlags::derive(metrics.offset, tuning);
    state.scroll_offset = metrics.clamped_offset();
    state.scroll_progress = metrics.progress();
    state.scrolled = flags.scrolled;
    state.show_back_to_top = flags.show_back_to_top;

    if let Some(section) = detect_active_section(sections, tuning.section_marker_px) {
        state.active_section = section;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scrolled(offset: f64, sections: Vec<SectionBounds>) -> ViewEvent {
        ViewEvent::Scrolled {
            metrics: ScrollMetrics::at(offset),
            sections,
        }
    }

    #[test]
    fn test_initial_state() {
        let state = ViewState::new(Theme::Dark);
        assert_eq!(state.active_section, Section::Hero);
        assert_eq!(state.theme, Theme::Dark);
        assert!(!state.toast_visible());
        assert!(!state.menu_open);
    }

    #[test]
    fn test_scroll_updates_flags_and_section() {
        let tuning = ViewTuning::default();
        let event = scrolled(
            900.0,
            vec![
                SectionBounds::new(Section::About, -700.0, 80.0),
                SectionBounds::new(Section::Projects, 80.0, 900.0),
            ],
        );
        let state = reduce(ViewState::new(Theme::Light), &event, &tuning);

        assert!(state.scrolled);
        assert!(state.show_back_to_top);
        assert_eq!(state.active_section, Section::Projects);
    }

    #[test]
    fn test_section_retained_when_nothing_straddles() {
        let tuning = ViewTuning::default();
        let state = reduce(
            ViewState::new(Theme::Light),
            &scrolled(600.0, vec![SectionBounds::new(Section::Skills, 0.0, 500.0)]),
            &tuning,
        );
        assert_eq!(state.active_section, Section::Skills);

        let state = reduce(
            state,
            &scrolled(650.0, vec![SectionBounds::new(Section::Skills, 150.0, 500.0)]),
            &tuning,
        );
        assert_eq!(state.active_section, Section::Skills);
        assert_eq!(state.scroll_offset, 650.0);
    }

    #[test]
    fn test_flags_are_independent() {
        let tuning = ViewTuning::default();
        let state = reduce(ViewState::new(Theme::Light), &scrolled(120.0, vec![]), &tuning);
        assert!(state.scrolled);
        assert!(!state.show_back_to_top);

        let state = reduce(state, &scrolled(0.0, vec![]), &tuning);
        assert_eq!(state.scroll_flags(), ScrollFlags::default());
    }

    #[test]
    fn test_menu_toggle_and_navigation() {
        let tuning = ViewTuning::default();
        let state = reduce(ViewState::new(Theme::Light), &ViewEvent::ToggleMenu, &tuning);
        assert!(state.menu_open);

        let state = reduce(state, &ViewEvent::NavigateTo(Section::Contact), &tuning);
        assert!(!state.menu_open);
        assert_eq!(state.active_section, Section::Contact);

        let state = reduce(state, &ViewEvent::CloseMenu, &tuning);
        assert!(!state.menu_open);
    }

    #[test]
    fn test_toast_generation_bumps_only_on_show_from_hidden() {
        let tuning = ViewTuning::default();
        let state = reduce(
            ViewState::new(Theme::Light),
            &ViewEvent::ShowToast(Toast::success("sent")),
            &tuning,
        );
        assert_eq!(state.toast_generation, 1);

        let state = reduce(state, &ViewEvent::ShowToast(Toast::error("again")), &tuning);
        assert_eq!(state.toast_generation, 1);
        assert_eq!(state.toast.as_ref().map(|t| t.message.as_str()), Some("again"));

        let state = reduce(state, &ViewEvent::DismissToast, &tuning);
        let state = reduce(state, &ViewEvent::ShowToast(Toast::success("third")), &tuning);
        assert_eq!(state.toast_generation, 2);
    }

    #[test]
    fn test_stale_expiry_ignored() {
        let tuning = ViewTuning::default();
        let mut state = ViewState::new(Theme::Light);
        state = reduce(state, &ViewEvent::ShowToast(Toast::success("one")), &tuning);
        state = reduce(state, &ViewEvent::DismissToast, &tuning);
        state = reduce(state, &ViewEvent::ShowToast(Toast::success("two")), &tuning);

        let state = reduce(state, &ViewEvent::ToastExpired { generation: 1 }, &tuning);
        assert!(state.toast_visible());

        let state = reduce(state, &ViewEvent::ToastExpired { generation: 2 }, &tuning);
        assert!(!state.toast_visible());
    }

    #[test]
    fn test_theme_and_pointer_events() {
        let tuning = ViewTuning::default();
        let state = reduce(ViewState::new(Theme::Light), &ViewEvent::ThemeChanged(Theme::Dark), &tuning);
        assert_eq!(state.theme, Theme::Dark);

        let hero = Rect {
            left: 0.0,
            top: 0.0,
            width: 100.0,
            height: 100.0,
        };
        let state = reduce(state, &ViewEvent::PointerMoved { x: 100.0, y: 50.0, hero }, &tuning);
        assert_eq!(state.parallax, (10.0, 0.0));
    }
}
