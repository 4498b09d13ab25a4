//! Push-based value stream with explicit subscriptions.
//!
//! DESIGN
//! ======
//! An `Observable` always holds a current value. Subscribing delivers that
//! value immediately and every later `set`. The returned `Subscription`
//! detaches its listener when dropped, so a component that keeps the handle in
//! its cleanup scope stops receiving updates exactly when it unmounts.
//!
//! Listeners run after the internal lock is released; a listener may read the
//! observable or subscribe again without deadlocking.

#[cfg(test)]
#[path = "observable_test.rs"]
mod observable_test;

use std::sync::{Arc, Mutex, PoisonError, Weak};

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Inner<T> {
    value: T,
    next_id: u64,
    listeners: Vec<(u64, Listener<T>)>,
}

/// Shared current value plus its subscriber list.
pub struct Observable<T> {
    inner: Arc<Mutex<Inner<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone + Send + 'static> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                value,
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    /// Snapshot of the current value.
    pub fn get(&self) -> T {
        self.lock().value.clone()
    }

    /// Replace the current value and notify every listener.
    pub fn set(&self, value: T) {
        let listeners = {
            let mut inner = self.lock();
            inner.value = value.clone();
            inner.listeners.iter().map(|(_, l)| Arc::clone(l)).collect::<Vec<_>>()
        };
        for listener in listeners {
            listener(&value);
        }
    }

    /// Apply `f` to a copy of the current value and publish the result.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let mut value = self.get();
        f(&mut value);
        self.set(value);
    }

    /// Register a listener. It is called once with the current value, then on
    /// every change until the returned handle is dropped.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let listener: Listener<T> = Arc::new(listener);
        let (id, current) = {
            let mut inner = self.lock();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, Arc::clone(&listener)));
            (id, inner.value.clone())
        };
        listener(&current);

        let weak: Weak<Mutex<Inner<T>>> = Arc::downgrade(&self.inner);
        Subscription {
            detach: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    let mut inner = inner.lock().unwrap_or_else(PoisonError::into_inner);
                    inner.listeners.retain(|(lid, _)| *lid != id);
                }
            })),
        }
    }

    /// Number of attached listeners.
    pub fn subscriber_count(&self) -> usize {
        self.lock().listeners.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Handle returned by [`Observable::subscribe`]; dropping it unsubscribes.
#[must_use = "dropping a Subscription immediately unsubscribes"]
pub struct Subscription {
    detach: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    /// Detach now instead of waiting for drop.
    pub fn unsubscribe(mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.detach.is_some())
            .finish()
    }
}
