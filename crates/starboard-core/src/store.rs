//! Observable value containers for board state.

use std::cell::RefCell;
use std::rc::Rc;

type Handler<T> = Rc<dyn Fn(&T)>;

struct StoreInner<T> {
    value: T,
    subscribers: Vec<(u64, Handler<T>)>,
    next_id: u64,
}

/// A single-threaded observable container.
///
/// Holds the current value, hands out snapshots via [`get`](Store::get),
/// and synchronously notifies every subscriber on each
/// [`set`](Store::set)/[`update`](Store::update). Cloning a `Store` clones
/// the handle, not the value; all clones share one slot and one subscriber
/// list.
///
/// Everything runs to completion on the caller's stack. There is exactly
/// one logical writer (the interaction layer), so no locking is involved.
pub struct Store<T> {
    inner: Rc<RefCell<StoreInner<T>>>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + 'static> Store<T> {
    /// Create a store holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(StoreInner {
                value,
                subscribers: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// The current value, a stable snapshot at call time.
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Replace the value and notify every subscriber with it.
    pub fn set(&self, value: T) {
        self.inner.borrow_mut().value = value;
        self.notify();
    }

    /// Derive the next value from the current one.
    ///
    /// Same notification semantics as [`set`](Store::set).
    pub fn update(&self, f: impl FnOnce(&T) -> T) {
        let current = self.get();
        self.set(f(&current));
    }

    /// Register `handler` for the current value and every subsequent one.
    ///
    /// The handler is invoked once immediately with the current value, then
    /// again on each `set`/`update` until the returned [`Subscription`] is
    /// dropped. Subscribers are notified in registration order.
    pub fn subscribe(&self, handler: impl Fn(&T) + 'static) -> Subscription {
        let handler: Handler<T> = Rc::new(handler);
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.subscribers.push((id, Rc::clone(&handler)));
            id
        };

        // Initial invocation, with the interior borrow already released so
        // the handler may read the store.
        let value = self.get();
        handler(&value);

        let weak = Rc::downgrade(&self.inner);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.borrow_mut().subscribers.retain(|(sid, _)| *sid != id);
                }
            })),
        }
    }

    fn notify(&self) {
        // Snapshot the value and the subscriber list up front so handlers
        // can call back into the store (the persistence bridge does).
        let (value, subscribers) = {
            let inner = self.inner.borrow();
            let handlers: Vec<Handler<T>> =
                inner.subscribers.iter().map(|(_, h)| Rc::clone(h)).collect();
            (inner.value.clone(), handlers)
        };
        for handler in subscribers {
            handler(&value);
        }
    }
}

/// Releases a [`Store`] registration when dropped.
///
/// Hold the guard for as long as the handler should keep receiving values;
/// letting it go out of scope unregisters the handler.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Remove the registration now instead of at end of scope.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}
