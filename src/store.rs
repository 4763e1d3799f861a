//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The workflows own
//! the truth; their observers copy each change in here for the views.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{AuthMode, Notice, Phase, TodoItem};
use crate::workflow::{AuthView, TodoView};

#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Todos of the signed-in user, incomplete first
    pub todos: Vec<TodoItem>,
    pub todo_notice: Option<Notice>,
    pub todo_phase: Phase,
    pub auth_mode: AuthMode,
    pub auth_notice: Option<Notice>,
    pub auth_phase: Phase,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Mirror the todo workflow's view
pub fn store_sync_todos(store: &AppStore, view: &TodoView) {
    *store.todos().write() = view.items.clone();
    *store.todo_notice().write() = view.notice.clone();
    *store.todo_phase().write() = view.phase;
}

/// Mirror the auth workflow's view
pub fn store_sync_auth(store: &AppStore, view: &AuthView) {
    *store.auth_mode().write() = view.mode;
    *store.auth_notice().write() = view.notice.clone();
    *store.auth_phase().write() = view.phase;
}

/// Back to a fresh login form
pub fn store_reset_auth(store: &AppStore) {
    *store.auth_mode().write() = AuthMode::default();
    *store.auth_notice().write() = None;
    *store.auth_phase().write() = Phase::Idle;
}

/// Drop everything shown for the previous user
pub fn store_reset_todos(store: &AppStore) {
    store.todos().write().clear();
    *store.todo_notice().write() = None;
    *store.todo_phase().write() = Phase::Idle;
}
