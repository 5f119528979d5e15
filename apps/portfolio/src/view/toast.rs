use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::debug;

use crate::view::state::ViewEvent;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
}

/// A visible notification. Absence (`None` in `ViewState`) means hidden.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
        }
    }
}

/// Auto-dismiss timer for the toast.
///
/// At most one pending expiry exists. Arming replaces it; `cancel` and drop
/// abort it so no expiry reaches discarded state.
#[derive(Debug)]
pub struct ToastTimer {
    tx: UnboundedSender<ViewEvent>,
    duration: Duration,
    pending: Option<JoinHandle<()>>,
}

impl ToastTimer {
    pub fn new(tx: UnboundedSender<ViewEvent>, duration: Duration) -> Self {
        Self {
            tx,
            duration,
            pending: None,
        }
    }

    /// Schedules `ToastExpired { generation }` after the configured duration.
    /// Must be called from within a tokio runtime.
    pub fn arm(&mut self, generation: u64) {
        self.cancel();

        // Deadline is fixed now, not when the task is first polled.
        let deadline = Instant::now() + self.duration;
        let tx = self.tx.clone();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            if tx.send(ViewEvent::ToastExpired { generation }).is_err() {
                debug!("Toast expiry {generation} dropped: session gone");
            }
        }));
        debug!("Toast timer armed for generation {generation}");
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn is_armed(&self) -> bool {
        self.pending
            .as_ref()
            .map(|h| !h.is_finished())
            .unwrap_or(false)
    }
}

impl Drop for ToastTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
