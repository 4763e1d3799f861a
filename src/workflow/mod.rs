//! Workflows
//!
//! UI-independent state machines behind the auth form and the todo list.
//! Each one owns its view state and reports every change to an optional
//! observer, which is how the Leptos components mirror it into the store.

mod auth;
mod todos;

use std::cell::RefCell;

pub use auth::{AuthOutcome, AuthView, AuthWorkflow, AUTH_FAILED};
pub use todos::{
    next_candidate_id, partition_by_completion, TodoView, TodoWorkflow, ADD_FAILED, EMPTY_TASK,
    FETCH_FAILED, NO_FREE_ID, TOGGLE_FAILED,
};

pub type Observer<V> = Box<dyn Fn(&V)>;

/// View state plus its change observer.
///
/// Borrows never outlive a single `update`, so nothing is held across an
/// `.await`.
pub(crate) struct Tracked<V> {
    value: RefCell<V>,
    observer: Option<Observer<V>>,
}

impl<V: Clone + Default> Tracked<V> {
    pub(crate) fn new() -> Self {
        Self {
            value: RefCell::new(V::default()),
            observer: None,
        }
    }

    /// Attach `observer` and hand it the current state right away, so a view
    /// built from a fresh workflow never keeps showing an older one.
    pub(crate) fn observe(&mut self, observer: Observer<V>) {
        observer(&self.value.borrow());
        self.observer = Some(observer);
    }

    pub(crate) fn get(&self) -> V {
        self.value.borrow().clone()
    }

    pub(crate) fn read<R>(&self, f: impl FnOnce(&V) -> R) -> R {
        f(&self.value.borrow())
    }

    pub(crate) fn update(&self, f: impl FnOnce(&mut V)) {
        f(&mut self.value.borrow_mut());
        if let Some(observer) = &self.observer {
            observer(&self.value.borrow());
        }
    }
}
