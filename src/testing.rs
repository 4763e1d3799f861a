//! In-memory API fakes shared by the workflow tests.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::api::{AuthApi, AuthReply, TodoApi, UpsertReply};
use crate::error::{ClientError, ClientResult};
use crate::models::{Credentials, TodoItem, UserId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    List(UserId),
    Upsert(UserId, TodoItem),
}

/// Behaves like the todo endpoints: upsert replaces by id within the user's
/// items and otherwise stores a new record under a global autoincrement id.
#[derive(Default)]
pub struct FakeTodoApi {
    records: RefCell<HashMap<UserId, Vec<TodoItem>>>,
    next_id: Cell<i64>,
    calls: RefCell<Vec<ApiCall>>,
    list_failures: RefCell<VecDeque<ClientError>>,
    upsert_failures: RefCell<VecDeque<ClientError>>,
}

impl FakeTodoApi {
    pub fn with_todos(user_id: &UserId, items: Vec<TodoItem>) -> Self {
        let api = Self::default();
        api.next_id
            .set(items.iter().map(|item| item.id).max().unwrap_or(0));
        api.records.borrow_mut().insert(user_id.clone(), items);
        api
    }

    pub fn fail_next_list(&self, err: ClientError) {
        self.list_failures.borrow_mut().push_back(err);
    }

    pub fn fail_next_upsert(&self, err: ClientError) {
        self.upsert_failures.borrow_mut().push_back(err);
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.borrow().clone()
    }

    pub fn list_calls(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, ApiCall::List(_)))
            .count()
    }

    /// Items sent to the upsert endpoint, in order
    pub fn upserts(&self) -> Vec<TodoItem> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                ApiCall::Upsert(_, item) => Some(item.clone()),
                ApiCall::List(_) => None,
            })
            .collect()
    }
}

#[async_trait(?Send)]
impl TodoApi for FakeTodoApi {
    async fn list_todos(&self, user_id: &UserId) -> ClientResult<Vec<TodoItem>> {
        self.calls.borrow_mut().push(ApiCall::List(user_id.clone()));
        if let Some(err) = self.list_failures.borrow_mut().pop_front() {
            return Err(err);
        }
        Ok(self
            .records
            .borrow()
            .get(user_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn upsert_todo(&self, user_id: &UserId, item: &TodoItem) -> ClientResult<UpsertReply> {
        self.calls
            .borrow_mut()
            .push(ApiCall::Upsert(user_id.clone(), item.clone()));
        if let Some(err) = self.upsert_failures.borrow_mut().pop_front() {
            return Err(err);
        }

        let mut records = self.records.borrow_mut();
        let items = records.entry(user_id.clone()).or_default();
        if let Some(existing) = items.iter_mut().find(|existing| existing.id == item.id) {
            existing.task = item.task.clone();
            existing.completed = item.completed;
            return Ok(UpsertReply {
                message: "Todo item updated successfully".to_string(),
                todo: Some(existing.clone()),
            });
        }

        self.next_id.set(self.next_id.get() + 1);
        let stored = TodoItem {
            id: self.next_id.get(),
            ..item.clone()
        };
        items.push(stored.clone());
        Ok(UpsertReply {
            message: "Todo item added successfully".to_string(),
            todo: Some(stored),
        })
    }
}

/// List responses are handed over by the test through oneshot channels, one
/// per call in call order. Upserts succeed immediately.
pub struct GatedTodoApi {
    lists: RefCell<VecDeque<oneshot::Receiver<Vec<TodoItem>>>>,
}

impl GatedTodoApi {
    pub fn new(lists: Vec<oneshot::Receiver<Vec<TodoItem>>>) -> Self {
        Self {
            lists: RefCell::new(lists.into()),
        }
    }
}

#[async_trait(?Send)]
impl TodoApi for GatedTodoApi {
    async fn list_todos(&self, _user_id: &UserId) -> ClientResult<Vec<TodoItem>> {
        let gate = self
            .lists
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| ClientError::Network("no response queued".into()))?;
        gate.await
            .map_err(|_| ClientError::Network("response dropped".into()))
    }

    async fn upsert_todo(&self, _user_id: &UserId, _item: &TodoItem) -> ClientResult<UpsertReply> {
        Ok(UpsertReply {
            message: "ok".to_string(),
            todo: None,
        })
    }
}

/// Answers every auth call with the queued reply and records what was sent
pub struct FakeAuthApi {
    reply: RefCell<Option<ClientResult<AuthReply>>>,
    pub sign_ins: RefCell<Vec<Credentials>>,
    pub sign_ups: RefCell<Vec<Credentials>>,
}

impl FakeAuthApi {
    pub fn replying(reply: ClientResult<AuthReply>) -> Self {
        Self {
            reply: RefCell::new(Some(reply)),
            sign_ins: RefCell::new(Vec::new()),
            sign_ups: RefCell::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.sign_ins.borrow().len() + self.sign_ups.borrow().len()
    }

    fn next_reply(&self) -> ClientResult<AuthReply> {
        self.reply
            .borrow_mut()
            .take()
            .unwrap_or_else(|| Err(ClientError::Network("no reply queued".into())))
    }
}

#[async_trait(?Send)]
impl AuthApi for FakeAuthApi {
    async fn sign_in(&self, credentials: &Credentials) -> ClientResult<AuthReply> {
        self.sign_ins.borrow_mut().push(credentials.clone());
        self.next_reply()
    }

    async fn sign_up(&self, credentials: &Credentials) -> ClientResult<AuthReply> {
        self.sign_ups.borrow_mut().push(credentials.clone());
        self.next_reply()
    }
}
