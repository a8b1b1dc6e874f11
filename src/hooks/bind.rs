use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use web_sys::Element;
use yew::NodeRef;

/// Runs `bind` against `node` once it exists in the tree and returns the
/// teardown for the effect.
///
/// Effects normally run after layout, but a ref can still be empty when the
/// node is rendered conditionally. In that case binding is retried once on
/// the next task. Dropping the teardown cancels a pending retry and drops
/// whatever `bind` produced.
pub fn bind_after_layout<B, F>(node: NodeRef, label: &'static str, bind: F) -> impl FnOnce()
where
    B: 'static,
    F: FnOnce(&Element) -> Option<B> + 'static,
{
    bind_or_defer(label, move || node.cast::<Element>(), bind, |retry| Timeout::new(0, retry)).teardown()
}

/// Result of one bind attempt: whatever was bound, plus the handle of a
/// scheduled retry if the element was missing.
struct Deferred<B, H> {
    slot: Rc<RefCell<Option<B>>>,
    retry: Option<H>,
}

impl<B, H> Deferred<B, H> {
    fn teardown(self) -> impl FnOnce() {
        move || {
            drop(self.retry);
            self.slot.borrow_mut().take();
        }
    }
}

fn bind_or_defer<E, B, L, F, S, H>(label: &'static str, lookup: L, bind: F, schedule: S) -> Deferred<B, H>
where
    B: 'static,
    L: Fn() -> Option<E> + 'static,
    F: FnOnce(&E) -> Option<B> + 'static,
    S: FnOnce(Box<dyn FnOnce()>) -> H,
{
    let slot: Rc<RefCell<Option<B>>> = Rc::new(RefCell::new(None));

    let retry = match lookup() {
        Some(element) => {
            *slot.borrow_mut() = bind(&element);
            None
        }
        None => {
            debug!("{}: not laid out yet, deferring bind", label);
            let slot = Rc::clone(&slot);
            Some(schedule(Box::new(move || match lookup() {
                Some(element) => *slot.borrow_mut() = bind(&element),
                None => warn!("{}: element never mounted, nothing to animate", label),
            })))
        }
    };

    Deferred { slot, retry }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    type Task = Rc<RefCell<Option<Box<dyn FnOnce()>>>>;

    fn mounted(value: Option<u32>) -> Rc<Cell<Option<u32>>> {
        Rc::new(Cell::new(value))
    }

    fn lookup(node: &Rc<Cell<Option<u32>>>) -> impl Fn() -> Option<u32> + 'static {
        let node = Rc::clone(node);
        move || node.get()
    }

    fn queue(task: &Task) -> impl FnOnce(Box<dyn FnOnce()>) {
        let task = Rc::clone(task);
        move |retry| *task.borrow_mut() = Some(retry)
    }

    #[test]
    fn present_element_binds_immediately() {
        let node = mounted(Some(7));
        let task: Task = Rc::default();
        let deferred = bind_or_defer("test", lookup(&node), |el: &u32| Some(*el * 2), queue(&task));
        assert_eq!(*deferred.slot.borrow(), Some(14));
        assert!(deferred.retry.is_none());
        assert!(task.borrow().is_none());
    }

    #[test]
    fn missing_element_binds_on_retry() {
        let node = mounted(None);
        let task: Task = Rc::default();
        let deferred = bind_or_defer("test", lookup(&node), |el: &u32| Some(*el), queue(&task));
        assert_eq!(*deferred.slot.borrow(), None);
        assert!(deferred.retry.is_some());

        node.set(Some(3));
        let retry = task.borrow_mut().take().expect("retry scheduled");
        retry();
        assert_eq!(*deferred.slot.borrow(), Some(3));
    }

    #[test]
    fn element_that_never_mounts_binds_nothing() {
        let node = mounted(None);
        let task: Task = Rc::default();
        let deferred = bind_or_defer("test", lookup(&node), |el: &u32| Some(*el), queue(&task));
        let retry = task.borrow_mut().take().expect("retry scheduled");
        retry();
        assert_eq!(*deferred.slot.borrow(), None);
    }

    #[test]
    fn teardown_drops_the_binding() {
        let node = mounted(Some(1));
        let task: Task = Rc::default();
        let binding = Rc::new(());
        let held = Rc::clone(&binding);
        let deferred = bind_or_defer("test", lookup(&node), move |_: &u32| Some(held), queue(&task));
        assert_eq!(Rc::strong_count(&binding), 2);
        deferred.teardown()();
        assert_eq!(Rc::strong_count(&binding), 1);
    }
}
