//! Observable parameter store.
//!
//! Owned by the composition root and passed to every consumer explicitly.
//! Observers run synchronously, in subscription order, and only when the
//! stored value actually changes.

use crate::params::ConnectionParameters;

/// Handle returned by `ParamStore::subscribe`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub usize);

type Observer = Box<dyn FnMut(&ConnectionParameters)>;

#[derive(Default)]
pub struct ParamStore {
    current: ConnectionParameters,
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: usize,
}

impl std::fmt::Debug for ParamStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParamStore")
            .field("current", &self.current)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl ParamStore {
    pub fn new(initial: ConnectionParameters) -> Self {
        Self {
            current: initial,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    #[inline]
    pub fn get(&self) -> ConnectionParameters {
        self.current
    }

    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&ConnectionParameters) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    /// Replace the value. Returns whether it changed.
    pub fn set(&mut self, params: ConnectionParameters) -> bool {
        if params == self.current {
            return false;
        }
        self.current = params;
        self.notify();
        true
    }

    /// Edit the value in place. Returns whether it changed.
    pub fn update<F>(&mut self, edit: F) -> bool
    where
        F: FnOnce(&mut ConnectionParameters),
    {
        let mut next = self.current;
        edit(&mut next);
        self.set(next)
    }

    /// Direct variant only; `false` (no-op) otherwise.
    pub fn set_base(&mut self, base: i32) -> bool {
        self.update(|p| {
            if let ConnectionParameters::Direct(d) = p {
                d.base = base;
            }
        })
    }

    /// Direct variant only; `false` (no-op) otherwise.
    pub fn set_multiplier(&mut self, multiplier: i32) -> bool {
        self.update(|p| {
            if let ConnectionParameters::Direct(d) = p {
                d.multiplier = multiplier;
            }
        })
    }

    /// Date variants only; `false` (no-op) otherwise.
    pub fn set_day(&mut self, day: i32) -> bool {
        self.update(|p| match p {
            ConnectionParameters::Date(d) | ConnectionParameters::HashedDate(d) => d.day = day,
            ConnectionParameters::Direct(_) => {}
        })
    }

    /// Date variants only; `false` (no-op) otherwise.
    pub fn set_month(&mut self, month: i32) -> bool {
        self.update(|p| match p {
            ConnectionParameters::Date(d) | ConnectionParameters::HashedDate(d) => d.month = month,
            ConnectionParameters::Direct(_) => {}
        })
    }

    /// Date variants only; `None` clears the age.
    pub fn set_age(&mut self, age: Option<i32>) -> bool {
        self.update(|p| match p {
            ConnectionParameters::Date(d) | ConnectionParameters::HashedDate(d) => d.age = age,
            ConnectionParameters::Direct(_) => {}
        })
    }

    fn notify(&mut self) {
        let current = self.current;
        for (_, observer) in self.observers.iter_mut() {
            observer(&current);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{DateParams, DirectParams};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording_store() -> (ParamStore, Rc<RefCell<Vec<ConnectionParameters>>>) {
        let mut store = ParamStore::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |p| sink.borrow_mut().push(*p));
        (store, seen)
    }

    #[test]
    fn notifies_only_on_change() {
        let (mut store, seen) = recording_store();
        assert!(!store.set_base(10)); // default already 10
        assert!(store.set_base(12));
        assert!(!store.set_base(12));
        assert!(store.set_multiplier(0));
        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(
            seen[1],
            ConnectionParameters::Direct(DirectParams {
                base: 12,
                multiplier: 0
            })
        );
    }

    #[test]
    fn setters_for_other_variant_are_noops() {
        let (mut store, seen) = recording_store();
        assert!(!store.set_day(5));
        assert!(!store.set_age(None));
        assert!(store.set(ConnectionParameters::Date(DateParams::default())));
        assert!(!store.set_base(3));
        assert!(store.set_age(None));
        assert_eq!(seen.borrow().len(), 2);
        assert_eq!(
            store.get(),
            ConnectionParameters::Date(DateParams {
                age: None,
                ..DateParams::default()
            })
        );
    }

    #[test]
    fn unsubscribe_silences_observer() {
        let mut store = ParamStore::default();
        let count = Rc::new(RefCell::new(0usize));
        let c1 = Rc::clone(&count);
        let id = store.subscribe(move |_| *c1.borrow_mut() += 1);
        store.set_base(3);
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.set_base(4);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn observers_run_in_subscription_order() {
        let mut store = ParamStore::default();
        let order = Rc::new(RefCell::new(Vec::new()));
        for tag in ["a", "b", "c"] {
            let o = Rc::clone(&order);
            store.subscribe(move |_| o.borrow_mut().push(tag));
        }
        store.set_multiplier(9);
        assert_eq!(*order.borrow(), vec!["a", "b", "c"]);
    }
}
