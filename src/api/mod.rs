//! API Bindings
//!
//! Ports for the external REST API, organized by domain, plus the reqwest
//! client that implements them.

mod auth;
mod client;
mod todo;

use std::rc::Rc;

use async_trait::async_trait;

use crate::error::ClientResult;
use crate::models::{Credentials, TodoItem, UserId};

pub use auth::AuthReply;
pub use client::{error_detail, HttpClient};
pub use todo::UpsertReply;

/// `/signin` and `/signup`
#[async_trait(?Send)]
pub trait AuthApi {
    async fn sign_in(&self, credentials: &Credentials) -> ClientResult<AuthReply>;

    async fn sign_up(&self, credentials: &Credentials) -> ClientResult<AuthReply>;
}

/// `/todoget/{user_id}` and `/todoupdate/{user_id}`
#[async_trait(?Send)]
pub trait TodoApi {
    async fn list_todos(&self, user_id: &UserId) -> ClientResult<Vec<TodoItem>>;

    /// Replace the item with the same id for this user, or create it
    async fn upsert_todo(&self, user_id: &UserId, item: &TodoItem) -> ClientResult<UpsertReply>;
}

#[async_trait(?Send)]
impl<T: AuthApi + ?Sized> AuthApi for Rc<T> {
    async fn sign_in(&self, credentials: &Credentials) -> ClientResult<AuthReply> {
        (**self).sign_in(credentials).await
    }

    async fn sign_up(&self, credentials: &Credentials) -> ClientResult<AuthReply> {
        (**self).sign_up(credentials).await
    }
}

#[async_trait(?Send)]
impl<T: TodoApi + ?Sized> TodoApi for Rc<T> {
    async fn list_todos(&self, user_id: &UserId) -> ClientResult<Vec<TodoItem>> {
        (**self).list_todos(user_id).await
    }

    async fn upsert_todo(&self, user_id: &UserId, item: &TodoItem) -> ClientResult<UpsertReply> {
        (**self).upsert_todo(user_id, item).await
    }
}
