use std::cell::Cell;
use std::rc::Rc;

use log::debug;

/// Book-keeping for the scroll observers a page has bound.
///
/// Owned by the page and shared with its sections through context. Every
/// binding holds a [`Registration`]; dropping it (on unmount) releases the
/// slot, so a page that has fully unmounted reads zero.
#[derive(Clone, Debug, Default)]
pub struct ObserverRegistry {
    active: Rc<Cell<usize>>,
}

impl PartialEq for ObserverRegistry {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.active, &other.active)
    }
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> usize {
        self.active.get()
    }

    pub fn register(&self, label: &'static str) -> Registration {
        self.active.set(self.active.get() + 1);
        debug!("observer bound: {} ({} active)", label, self.active.get());
        Registration {
            active: Rc::clone(&self.active),
            label,
        }
    }
}

#[derive(Debug)]
pub struct Registration {
    active: Rc<Cell<usize>>,
    label: &'static str,
}

impl Drop for Registration {
    fn drop(&mut self) {
        let remaining = self.active.get().saturating_sub(1);
        self.active.set(remaining);
        debug!("observer released: {} ({} active)", self.label, remaining);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registrations_are_counted_until_dropped() {
        let registry = ObserverRegistry::new();
        let steps = registry.register("steps");
        let tools = registry.register("tools");
        assert_eq!(registry.active(), 2);
        drop(steps);
        assert_eq!(registry.active(), 1);
        drop(tools);
        assert_eq!(registry.active(), 0);
    }

    #[test]
    fn clones_share_state() {
        let registry = ObserverRegistry::new();
        let handle = registry.clone();
        let _reg = handle.register("cta");
        assert_eq!(registry.active(), 1);
        assert_eq!(registry, handle);
        assert_ne!(registry, ObserverRegistry::new());
    }
}
