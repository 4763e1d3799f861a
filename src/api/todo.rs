//! Todo Bindings

use async_trait::async_trait;
use serde::Deserialize;

use super::{HttpClient, TodoApi};
use crate::error::ClientResult;
use crate::models::{TodoItem, UserId};

/// Body of a successful `/todoupdate`
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct UpsertReply {
    #[serde(default)]
    pub message: String,
    /// The record as stored, with its server-assigned id
    #[serde(default)]
    pub todo: Option<TodoItem>,
}

#[async_trait(?Send)]
impl TodoApi for HttpClient {
    async fn list_todos(&self, user_id: &UserId) -> ClientResult<Vec<TodoItem>> {
        let request = self.http().get(self.user_url("/todoget", user_id));
        self.send(request).await
    }

    async fn upsert_todo(&self, user_id: &UserId, item: &TodoItem) -> ClientResult<UpsertReply> {
        let request = self
            .http()
            .put(self.user_url("/todoupdate", user_id))
            .json(item);
        self.send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_reply_with_stored_todo() {
        let body = r#"{"message":"Todo item added successfully","todo":{"id":12,"task":"buy milk","completed":false}}"#;
        let reply: UpsertReply = serde_json::from_str(body).unwrap();

        assert_eq!(reply.message, "Todo item added successfully");
        assert_eq!(reply.todo.map(|t| t.id), Some(12));
    }

    #[test]
    fn test_upsert_reply_message_only() {
        let reply: UpsertReply = serde_json::from_str(r#"{"message":"ok"}"#).unwrap();
        assert_eq!(reply.todo, None);
    }

    #[test]
    fn test_item_wire_shape() {
        let item = TodoItem {
            id: 1,
            task: "buy milk".into(),
            completed: false,
        };
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            serde_json::json!({"id": 1, "task": "buy milk", "completed": false})
        );
    }
}
