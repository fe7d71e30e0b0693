//! Single-threaded event sources with drop-to-unsubscribe handles.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Listener<T> = Box<dyn FnMut(&T)>;

struct Registry<T> {
    next_id: u64,
    listeners: Vec<(u64, Listener<T>)>,
    /// Ids unsubscribed while their listener list was checked out by `emit`.
    removed: Vec<u64>,
    emitting: bool,
}

impl<T> Registry<T> {
    fn remove(&mut self, id: u64) {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        if self.listeners.len() == before && self.emitting {
            self.removed.push(id);
        }
    }
}

/// Broadcasts values to every subscribed listener.
pub struct Emitter<T> {
    registry: Rc<RefCell<Registry<T>>>,
}

impl<T> Default for Emitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Emitter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl<T: 'static> Emitter<T> {
    /// Register `listener`. It stays registered until the returned handle drops.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, listener: impl FnMut(&T) + 'static) -> Subscription {
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.listeners.push((id, Box::new(listener)));
            id
        };

        let weak: Weak<RefCell<Registry<T>>> = Rc::downgrade(&self.registry);
        Subscription::new(move || {
            if let Some(registry) = weak.upgrade() {
                registry.borrow_mut().remove(id);
            }
        })
    }
}

impl<T> Emitter<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                next_id: 0,
                listeners: Vec::new(),
                removed: Vec::new(),
                emitting: false,
            })),
        }
    }

    /// Deliver `value` to every listener in subscription order.
    ///
    /// Listeners may subscribe or unsubscribe while being notified; those
    /// changes apply from the next emission.
    pub fn emit(&self, value: &T) {
        let mut listeners = {
            let mut registry = self.registry.borrow_mut();
            if registry.emitting {
                tracing::debug!("Ignoring re-entrant emit");
                return;
            }
            registry.emitting = true;
            std::mem::take(&mut registry.listeners)
        };

        for (_, listener) in &mut listeners {
            listener(value);
        }

        let mut registry = self.registry.borrow_mut();
        let removed = std::mem::take(&mut registry.removed);
        listeners.retain(|(id, _)| !removed.contains(id));
        listeners.append(&mut registry.listeners);
        registry.listeners = listeners;
        registry.emitting = false;
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

/// Handle to a registration. Dropping it unsubscribes.
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct Subscription {
    dispose: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(dispose: impl FnOnce() + 'static) -> Self {
        Self {
            dispose: Some(Box::new(dispose)),
        }
    }

    pub fn unsubscribe(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(dispose) = self.dispose.take() {
            dispose();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.dispose.is_some())
            .finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}
