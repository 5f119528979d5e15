//! Window listener registration tied to session lifetime.
//!
//! A host exposes its event table through `EventSource`. Every attach hands
//! back a `ListenerGuard`; dropping the guard detaches the listener, so
//! teardown happens on every exit path.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ListenerKind {
    Scroll,
    Resize,
    MouseMove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// The host's window event table.
pub trait EventSource: Send + Sync {
    fn attach(&self, kind: ListenerKind) -> ListenerId;
    fn detach(&self, id: ListenerId);
}

/// Detaches its listener when dropped.
pub struct ListenerGuard {
    source: Arc<dyn EventSource>,
    id: Option<ListenerId>,
    kind: ListenerKind,
}

impl ListenerGuard {
    pub fn attach(source: Arc<dyn EventSource>, kind: ListenerKind) -> Self {
        let id = source.attach(kind);
        debug!("Listener attached: {kind:?} ({})", id.0);
        Self {
            source,
            id: Some(id),
            kind,
        }
    }

    pub fn kind(&self) -> ListenerKind {
        self.kind
    }

    /// Detaches now. Safe to call more than once.
    pub fn release(&mut self) {
        if let Some(id) = self.id.take() {
            self.source.detach(id);
            debug!("Listener detached: {:?} ({})", self.kind, id.0);
        }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerGuard")
            .field("kind", &self.kind)
            .field("id", &self.id)
            .finish()
    }
}

/// Event table kept in memory. Used by headless hosts and tests.
#[derive(Debug, Default)]
pub struct InMemoryEventSource {
    inner: Mutex<Registry>,
}

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    attached: BTreeMap<ListenerId, ListenerKind>,
}

impl InMemoryEventSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attached_count(&self, kind: ListenerKind) -> usize {
        self.inner
            .lock()
            .map(|r| r.attached.values().filter(|k| **k == kind).count())
            .unwrap_or(0)
    }

    pub fn total_attached(&self) -> usize {
        self.inner.lock().map(|r| r.attached.len()).unwrap_or(0)
    }
}

impl EventSource for InMemoryEventSource {
    fn attach(&self, kind: ListenerKind) -> ListenerId {
        let mut registry = match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        registry.next_id += 1;
        let id = ListenerId(registry.next_id);
        registry.attached.insert(id, kind);
        id
    }

    fn detach(&self, id: ListenerId) {
        let mut registry = match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        registry.attached.remove(&id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_detaches_on_drop() {
        let source = Arc::new(InMemoryEventSource::new());
        {
            let _scroll = ListenerGuard::attach(source.clone(), ListenerKind::Scroll);
            let _resize = ListenerGuard::attach(source.clone(), ListenerKind::Resize);
            assert_eq!(source.total_attached(), 2);
        }
        assert_eq!(source.total_attached(), 0);
    }

    #[test]
    fn test_release_is_idempotent() {
        let source = Arc::new(InMemoryEventSource::new());
        let mut guard = ListenerGuard::attach(source.clone(), ListenerKind::MouseMove);
        let _other = ListenerGuard::attach(source.clone(), ListenerKind::MouseMove);

        guard.release();
        guard.release();
        assert_eq!(source.attached_count(ListenerKind::MouseMove), 1);
    }

    #[test]
    fn test_guard_detaches_during_unwind() {
        let source = Arc::new(InMemoryEventSource::new());
        let cloned = source.clone();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let _guard = ListenerGuard::attach(cloned, ListenerKind::Scroll);
            panic!("handler failed mid-event");
        }));
        assert!(result.is_err());
        assert_eq!(source.total_attached(), 0);
    }
}
