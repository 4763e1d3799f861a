//! Session Store
//!
//! Persists the signed-in identity under three independent keys so it
//! survives a page reload.

use log::warn;

use crate::error::StorageError;
use crate::models::{Session, SessionToken, UserId};
use crate::storage::KeyValueStorage;

pub const TOKEN_KEY: &str = "token";
pub const USER_ID_KEY: &str = "userId";
pub const USERNAME_KEY: &str = "username";

#[derive(Debug, Clone, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn save(&self, session: &Session) -> Result<(), StorageError> {
        self.storage.set(TOKEN_KEY, session.token.as_stored())?;
        self.storage.set(USER_ID_KEY, session.user_id.as_str())?;
        self.storage.set(USERNAME_KEY, &session.username)?;
        Ok(())
    }

    /// The saved session, or `None` when nothing (or only part of one) is stored
    pub fn load(&self) -> Result<Option<Session>, StorageError> {
        let token = self.storage.get(TOKEN_KEY)?;
        let user_id = self.storage.get(USER_ID_KEY)?;
        let username = self.storage.get(USERNAME_KEY)?;

        match (token, user_id, username) {
            (Some(token), Some(user_id), Some(username)) => Ok(Some(Session {
                token: SessionToken::from_stored(&token),
                user_id: UserId::new(user_id),
                username,
            })),
            (None, None, None) => Ok(None),
            _ => {
                warn!("Ignoring partially stored session");
                Ok(None)
            }
        }
    }

    /// Remove every key, even if an earlier removal fails
    pub fn clear(&self) -> Result<(), StorageError> {
        let results = [
            self.storage.remove(TOKEN_KEY),
            self.storage.remove(USER_ID_KEY),
            self.storage.remove(USERNAME_KEY),
        ];
        results.into_iter().collect()
    }
}
