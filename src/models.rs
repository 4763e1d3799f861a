//! Frontend Models
//!
//! Data structures shared by the workflows, the API bindings and the views.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Stored form of [`SessionToken::Placeholder`]
const PLACEHOLDER_TOKEN: &str = "some_token";

/// Identifier of a user as handed out by the API
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// The API sends `user_id` as a JSON integer; stored sessions keep it as text.
impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Int(n) => UserId(n.to_string()),
            Raw::Text(s) => UserId(s),
        })
    }
}

/// Credential held by a session.
///
/// The API does not issue tokens yet, so every session created by signing in
/// carries `Placeholder`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionToken {
    Placeholder,
    Issued(String),
}

impl SessionToken {
    /// Parse the persisted form back into a token
    pub fn from_stored(raw: &str) -> Self {
        if raw == PLACEHOLDER_TOKEN {
            SessionToken::Placeholder
        } else {
            SessionToken::Issued(raw.to_string())
        }
    }

    /// Form written to storage
    pub fn as_stored(&self) -> &str {
        match self {
            SessionToken::Placeholder => PLACEHOLDER_TOKEN,
            SessionToken::Issued(token) => token,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, SessionToken::Placeholder)
    }
}

/// Authenticated identity of the current user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: SessionToken,
    pub user_id: UserId,
    pub username: String,
}

/// Username/password pair for a single submit
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Which auth endpoint a submit goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        }
    }

    /// Heading and submit button label
    pub fn title(self) -> &'static str {
        match self {
            AuthMode::SignIn => "Login",
            AuthMode::SignUp => "Sign Up",
        }
    }

    /// Label of the link that switches to the other mode
    pub fn switch_prompt(self) -> &'static str {
        match self {
            AuthMode::SignIn => "Need an account? Sign Up",
            AuthMode::SignUp => "Already have an account? Login",
        }
    }
}

/// Todo item (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: i64,
    pub task: String,
    pub completed: bool,
}

/// Message shown to the user after an operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub is_error: bool,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: true,
        }
    }
}

/// Where a workflow is in its request cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Fetching,
    Submitting,
}
