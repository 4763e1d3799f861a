//! Todo Workflow
//!
//! Fetches, creates and toggles the signed-in user's todos. Every successful
//! write is followed by a refetch, so the list always shows what the server
//! holds.

use log::{debug, info, warn};

use super::{Observer, Tracked};
use crate::api::{TodoApi, UpsertReply};
use crate::error::{ClientError, ClientResult};
use crate::models::{Notice, Phase, TodoItem, UserId};

pub const EMPTY_TASK: &str = "Task cannot be empty";
pub const FETCH_FAILED: &str = "Failed to fetch todos";
pub const ADD_FAILED: &str = "Failed to add/update todo";
pub const TOGGLE_FAILED: &str = "Failed to update todo status";
pub const NO_FREE_ID: &str = "No free todo id left";

/// What the todo list shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoView {
    /// User the items belong to
    pub owner: Option<UserId>,
    /// Incomplete items first
    pub items: Vec<TodoItem>,
    pub phase: Phase,
    pub notice: Option<Notice>,
}

impl TodoView {
    /// Hand the view to `user_id`, dropping another user's items
    fn claim(&mut self, user_id: &UserId) {
        if !self.owned_by(user_id) {
            self.owner = Some(user_id.clone());
            self.items.clear();
        }
    }

    fn owned_by(&self, user_id: &UserId) -> bool {
        self.owner.as_ref() == Some(user_id)
    }
}

/// Incomplete items before completed ones
pub fn partition_by_completion(mut items: Vec<TodoItem>) -> Vec<TodoItem> {
    items.sort_by_key(|item| item.completed);
    items
}

/// Client-side id proposal for a new item: one past the largest id, or 1.
/// `None` once the largest id is `i64::MAX`.
///
/// The server keys records by its own autoincrement id, so this only has to
/// avoid colliding with an item the user already has.
pub fn next_candidate_id(items: &[TodoItem]) -> Option<i64> {
    match items.iter().map(|item| item.id).max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}

pub struct TodoWorkflow<A> {
    api: A,
    view: Tracked<TodoView>,
}

impl<A: TodoApi> TodoWorkflow<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            view: Tracked::new(),
        }
    }

    pub fn with_observer(mut self, observer: impl Fn(&TodoView) + 'static) -> Self {
        self.view.observe(Box::new(observer) as Observer<TodoView>);
        self
    }

    pub fn view(&self) -> TodoView {
        self.view.get()
    }

    pub fn items(&self) -> Vec<TodoItem> {
        self.view.read(|view| view.items.clone())
    }

    pub fn notice(&self) -> Option<Notice> {
        self.view.read(|view| view.notice.clone())
    }

    pub fn phase(&self) -> Phase {
        self.view.read(|view| view.phase)
    }

    /// Forget everything, e.g. on logout
    pub fn clear(&self) {
        self.view.update(|view| *view = TodoView::default());
    }

    /// Replace the list with the server's copy. On failure the current list
    /// stays as it was.
    pub async fn fetch_all(&self, user_id: &UserId) -> ClientResult<()> {
        self.view.update(|view| {
            view.claim(user_id);
            view.phase = Phase::Fetching;
            view.notice = None;
        });
        self.load(user_id).await
    }

    /// Create or replace `item` for `user_id`, then refetch
    pub async fn upsert(&self, user_id: &UserId, item: TodoItem) -> ClientResult<UpsertReply> {
        self.submit(user_id, item, ADD_FAILED).await
    }

    pub async fn add_task(&self, user_id: &UserId, text: &str) -> ClientResult<UpsertReply> {
        if text.trim().is_empty() {
            return Err(self.reject(EMPTY_TASK));
        }

        self.view.update(|view| view.claim(user_id));
        let Some(id) = self.view.read(|view| next_candidate_id(&view.items)) else {
            return Err(self.reject(NO_FREE_ID));
        };
        let item = TodoItem {
            id,
            task: text.to_string(),
            completed: false,
        };
        self.submit(user_id, item, ADD_FAILED).await
    }

    pub async fn toggle_completion(
        &self,
        user_id: &UserId,
        id: i64,
        current_completed: bool,
        task: &str,
    ) -> ClientResult<UpsertReply> {
        let item = TodoItem {
            id,
            task: task.to_string(),
            completed: !current_completed,
        };
        self.submit(user_id, item, TOGGLE_FAILED).await
    }

    async fn submit(
        &self,
        user_id: &UserId,
        item: TodoItem,
        fallback: &str,
    ) -> ClientResult<UpsertReply> {
        self.view.update(|view| {
            view.claim(user_id);
            view.phase = Phase::Submitting;
            view.notice = None;
        });

        match self.api.upsert_todo(user_id, &item).await {
            Ok(reply) => {
                if let Some(stored) = reply.todo.as_ref().filter(|stored| stored.id != item.id) {
                    info!("Todo {} was stored as {}", item.id, stored.id);
                }
                self.update_for(user_id, |view| {
                    view.notice = Some(Notice::info(reply.message.clone()));
                });
                // The refetch starts like any fetch, with the notice cleared.
                self.update_for(user_id, |view| {
                    view.phase = Phase::Fetching;
                    view.notice = None;
                });
                let _ = self.load(user_id).await;
                Ok(reply)
            }
            Err(err) => {
                warn!("Saving todo {} for user {} failed: {}", item.id, user_id, err);
                self.update_for(user_id, |view| {
                    view.phase = Phase::Idle;
                    view.notice = Some(Notice::error(err.user_message(fallback)));
                });
                Err(err)
            }
        }
    }

    /// Local validation failure: error notice, no request
    fn reject(&self, message: &str) -> ClientError {
        self.view
            .update(|view| view.notice = Some(Notice::error(message)));
        ClientError::Validation(message.to_string())
    }

    /// GET the list and swap it in
    async fn load(&self, user_id: &UserId) -> ClientResult<()> {
        match self.api.list_todos(user_id).await {
            Ok(items) => {
                debug!("Loaded {} todos for user {}", items.len(), user_id);
                self.update_for(user_id, |view| {
                    view.items = partition_by_completion(items);
                    view.phase = Phase::Idle;
                });
                Ok(())
            }
            Err(err) => {
                warn!("Fetching todos for user {} failed: {}", user_id, err);
                self.update_for(user_id, |view| {
                    view.phase = Phase::Idle;
                    view.notice = Some(Notice::error(err.user_message(FETCH_FAILED)));
                });
                Err(err)
            }
        }
    }

    /// Apply a response only if the view still belongs to `user_id`
    fn update_for(&self, user_id: &UserId, f: impl FnOnce(&mut TodoView)) {
        if self.view.read(|view| view.owned_by(user_id)) {
            self.view.update(f);
        } else {
            debug!("Dropping response for user {}, view has moved on", user_id);
        }
    }
}
