// View-State Coordinator: scroll, active section, theme, transient flags.
// State transitions are pure (`state::reduce`); side effects live in `session`.

pub mod listeners;
pub mod parallax;
pub mod scroll;
pub mod sections;
pub mod state;
pub mod theme;
pub mod toast;

pub use listeners::{EventSource, InMemoryEventSource, ListenerGuard, ListenerKind};
pub use scroll::{ScrollFlags, ScrollMetrics};
pub use sections::{detect_active_section, Section, SectionBounds};
pub use state::{reduce, ViewEvent, ViewState};
pub use theme::{
    resolve_initial_theme, FileThemeStore, MemoryThemeStore, Theme, ThemeController, ThemeSource,
    ThemeStore,
};
pub use toast::{Toast, ToastKind, ToastTimer};
