//! Auth Bindings

use async_trait::async_trait;
use serde::Deserialize;

use super::{AuthApi, HttpClient};
use crate::error::ClientResult;
use crate::models::{Credentials, UserId};

/// Body of a successful `/signin` or `/signup`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthReply {
    #[serde(default)]
    pub message: String,
    /// Present when the user is now signed in
    #[serde(default)]
    pub user_id: Option<UserId>,
}

#[async_trait(?Send)]
impl AuthApi for HttpClient {
    async fn sign_in(&self, credentials: &Credentials) -> ClientResult<AuthReply> {
        let request = self.http().post(self.url("/signin")).json(credentials);
        self.send(request).await
    }

    async fn sign_up(&self, credentials: &Credentials) -> ClientResult<AuthReply> {
        let request = self.http().post(self.url("/signup")).json(credentials);
        self.send(request).await
    }
}
