//! A mounted portfolio page: owns every piece of per-instance UI state and
//! runs the side effects the pure reducer leaves out.
//!
//! All transitions happen one event at a time through `&mut self`; timer
//! expiries arrive over a channel and are applied by `next_timer_event`.

use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::{debug, info};

use crate::config::ViewTuning;
use crate::contact::{ContactFields, ContactForm, ContactSender};
use crate::content::ContentStore;
use crate::errors::ContactError;
use crate::projects::{ProjectBrowser, ProjectListing};
use crate::view::listeners::{EventSource, ListenerGuard, ListenerKind};
use crate::view::scroll::ScrollMetrics;
use crate::view::sections::SectionBounds;
use crate::view::state::{reduce, ViewEvent, ViewState};
use crate::view::theme::{Theme, ThemeController};
use crate::view::toast::{Toast, ToastTimer};

pub struct PortfolioSession {
    content: Arc<ContentStore>,
    tuning: ViewTuning,
    state: ViewState,
    theme: ThemeController,
    projects: ProjectBrowser,
    contact: ContactForm,
    toast_timer: ToastTimer,
    timer_rx: UnboundedReceiver<ViewEvent>,
    listeners: Vec<ListenerGuard>,
    mounted: bool,
}

impl PortfolioSession {
    /// Mounts a page instance.
    ///
    /// `theme` must already be hydrated; the initial state carries it.
    /// Attaches scroll, resize and pointer listeners and computes the active
    /// section once from the initial layout. Must be called inside a tokio
    /// runtime (the toast timer spawns tasks).
    pub fn mount(
        content: Arc<ContentStore>,
        theme: ThemeController,
        tuning: ViewTuning,
        events: Arc<dyn EventSource>,
        metrics: ScrollMetrics,
        sections: Vec<SectionBounds>,
    ) -> Self {
        let (timer_tx, timer_rx) = mpsc::unbounded_channel();

        let listeners = [
            ListenerKind::Scroll,
            ListenerKind::Resize,
            ListenerKind::MouseMove,
        ]
        .into_iter()
        .map(|kind| ListenerGuard::attach(events.clone(), kind))
        .collect();

        let initial = ViewState::new(theme.theme());
        let state = reduce(initial, &ViewEvent::Mounted { metrics, sections }, &tuning);
        info!(
            "Session mounted: theme={}, active_section={}",
            state.theme,
            state.active_section.id()
        );

        Self {
            content,
            tuning,
            state,
            theme,
            projects: ProjectBrowser::default(),
            contact: ContactForm::new(),
            toast_timer: ToastTimer::new(timer_tx, tuning.toast_duration),
            timer_rx,
            listeners,
            mounted: true,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn content(&self) -> &ContentStore {
        &self.content
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Applies one event. Ignored after unmount.
    pub fn dispatch(&mut self, event: ViewEvent) {
        if !self.mounted {
            debug!("Event after unmount ignored: {event:?}");
            return;
        }

        let was_visible = self.state.toast_visible();
        let next = reduce(self.state.clone(), &event, &self.tuning);
        let is_visible = next.toast_visible();

        match (was_visible, is_visible) {
            // Timer restarts only on the hidden-to-visible transition.
            (false, true) => self.toast_timer.arm(next.toast_generation),
            (true, false) => self.toast_timer.cancel(),
            _ => {}
        }

        if matches!(event, ViewEvent::ToastExpired { .. }) && was_visible && !is_visible {
            debug!("Toast auto-dismissed (generation {})", next.toast_generation);
        }

        self.state = next;
    }

    /// Waits for the next timer event and applies it.
    /// Returns `false` once the session is unmounted.
    pub async fn next_timer_event(&mut self) -> bool {
        if !self.mounted {
            return false;
        }
        match self.timer_rx.recv().await {
            Some(event) => {
                self.dispatch(event);
                true
            }
            None => false,
        }
    }

    pub fn show_toast(&mut self, toast: Toast) {
        self.dispatch(ViewEvent::ShowToast(toast));
    }

    pub fn dismiss_toast(&mut self) {
        self.dispatch(ViewEvent::DismissToast);
    }

    /// Flips and persists the theme, then reflects it in view state.
    pub fn toggle_theme(&mut self) -> Theme {
        let theme = self.theme.toggle();
        self.dispatch(ViewEvent::ThemeChanged(theme));
        theme
    }

    pub fn projects(&self) -> &ProjectBrowser {
        &self.projects
    }

    pub fn projects_mut(&mut self) -> &mut ProjectBrowser {
        &mut self.projects
    }

    pub fn project_listing(&self) -> ProjectListing<'_> {
        self.projects.listing(&self.content)
    }

    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    pub fn contact_mut(&mut self) -> &mut ContactForm {
        &mut self.contact
    }

    /// Validates the form and marks it busy. Returns the snapshot to deliver,
    /// or `None` when the submission was blocked (a rejection toast is shown
    /// for invalid input).
    ///
    /// The session stays free for `dispatch` while the host delivers the
    /// snapshot; report the outcome with `finish_contact_submit`.
    pub fn begin_contact_submit(&mut self) -> Option<ContactFields> {
        match self.contact.begin_submit() {
            Ok(fields) => Some(fields),
            Err(rejection) => {
                if let Some(toast) = rejection.toast() {
                    self.show_toast(toast);
                }
                None
            }
        }
    }

    /// Applies the delivery outcome and shows the matching notification.
    pub fn finish_contact_submit(&mut self, result: Result<(), ContactError>) {
        let toast = self.contact.finish_submit(result);
        self.show_toast(toast);
    }

    /// Begins, delivers and finishes in one call. Holds the session for the
    /// whole delivery; hosts that keep dispatching should use the split API.
    pub async fn submit_contact(&mut self, sender: &dyn ContactSender) {
        if let Some(fields) = self.begin_contact_submit() {
            let result = sender.submit(&fields).await;
            self.finish_contact_submit(result);
        }
    }

    /// Detaches every listener and cancels pending timers.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.toast_timer.cancel();
        for guard in &mut self.listeners {
            guard.release();
        }
        self.listeners.clear();
        info!("Session unmounted");
    }
}

impl Drop for PortfolioSession {
    fn drop(&mut self) {
        self.unmount();
    }
}
