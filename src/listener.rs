//! Document-level event listeners with scoped lifetimes
//!
//! A listener is registered by [`ListenerRegistry::acquire`] and stays
//! registered exactly as long as the returned [`ListenerGuard`] lives.
//! Dropping the guard, whether on an explicit close or when its owner is
//! torn down, removes the listener.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Unique identifier for a registered listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Event a listener subscribes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerKind {
    PointerDown,
}

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    active: Vec<(ListenerId, ListenerKind)>,
}

/// Shared registry of document-level listeners
///
/// Cloning yields another handle to the same registry.
#[derive(Debug, Clone, Default)]
pub struct ListenerRegistry {
    inner: Rc<RefCell<Registry>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; it is removed when the guard drops
    pub fn acquire(&self, kind: ListenerKind) -> ListenerGuard {
        let mut registry = self.inner.borrow_mut();
        registry.next_id += 1;
        let id = ListenerId(registry.next_id);
        registry.active.push((id, kind));
        tracing::trace!(id = id.0, ?kind, "listener attached");

        ListenerGuard {
            id,
            registry: Rc::downgrade(&self.inner),
        }
    }

    /// Number of currently attached listeners
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().active.len()
    }

    /// Ids of the listeners for an event, in registration order
    pub fn listeners(&self, kind: ListenerKind) -> Vec<ListenerId> {
        self.inner
            .borrow()
            .active
            .iter()
            .filter(|(_, k)| *k == kind)
            .map(|(id, _)| *id)
            .collect()
    }

    pub fn is_registered(&self, id: ListenerId) -> bool {
        self.inner.borrow().active.iter().any(|(i, _)| *i == id)
    }
}

/// Keeps a listener attached while alive
#[derive(Debug)]
pub struct ListenerGuard {
    id: ListenerId,
    registry: Weak<RefCell<Registry>>,
}

impl ListenerGuard {
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().active.retain(|(id, _)| *id != self.id);
            tracing::trace!(id = self.id.0, "listener detached");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_detaches_on_drop() {
        let registry = ListenerRegistry::new();

        let guard = registry.acquire(ListenerKind::PointerDown);
        assert_eq!(registry.listener_count(), 1);
        assert!(registry.is_registered(guard.id()));

        drop(guard);
        assert_eq!(registry.listener_count(), 0);
    }

    #[test]
    fn test_ids_are_unique() {
        let registry = ListenerRegistry::new();

        let a = registry.acquire(ListenerKind::PointerDown);
        let b = registry.acquire(ListenerKind::PointerDown);

        assert_ne!(a.id(), b.id());
        assert_eq!(registry.listeners(ListenerKind::PointerDown), vec![a.id(), b.id()]);
    }

    #[test]
    fn test_guard_outliving_registry() {
        let registry = ListenerRegistry::new();
        let guard = registry.acquire(ListenerKind::PointerDown);

        drop(registry);
        drop(guard);
    }
}
