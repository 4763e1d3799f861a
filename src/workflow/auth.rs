//! Auth Workflow
//!
//! Submits credentials and, when the API hands back a user id, stores the
//! new session.

use log::{info, warn};

use super::{Observer, Tracked};
use crate::api::AuthApi;
use crate::error::ClientResult;
use crate::models::{AuthMode, Credentials, Notice, Phase, Session, SessionToken};
use crate::session::SessionStore;
use crate::storage::KeyValueStorage;

pub const AUTH_FAILED: &str = "An error occurred";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// The user is signed in
    SignedIn(Session),
    /// Accepted without signing in (e.g. signup that needs confirmation)
    Acknowledged,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthView {
    pub mode: AuthMode,
    pub phase: Phase,
    pub notice: Option<Notice>,
}

pub struct AuthWorkflow<A, S> {
    api: A,
    sessions: SessionStore<S>,
    view: Tracked<AuthView>,
}

impl<A: AuthApi, S: KeyValueStorage> AuthWorkflow<A, S> {
    pub fn new(api: A, sessions: SessionStore<S>) -> Self {
        Self {
            api,
            sessions,
            view: Tracked::new(),
        }
    }

    pub fn with_observer(mut self, observer: impl Fn(&AuthView) + 'static) -> Self {
        self.view.observe(Box::new(observer) as Observer<AuthView>);
        self
    }

    pub fn view(&self) -> AuthView {
        self.view.get()
    }

    pub fn mode(&self) -> AuthMode {
        self.view.read(|view| view.mode)
    }

    /// Switch between login and signup; leaves the notice alone
    pub fn toggle_mode(&self) {
        self.view.update(|view| view.mode = view.mode.toggled());
    }

    /// One request to `/signin` or `/signup`, no retries
    pub async fn submit(&self, credentials: Credentials, mode: AuthMode) -> ClientResult<AuthOutcome> {
        self.view.update(|view| {
            view.phase = Phase::Submitting;
            view.notice = None;
        });

        let reply = match mode {
            AuthMode::SignIn => self.api.sign_in(&credentials).await,
            AuthMode::SignUp => self.api.sign_up(&credentials).await,
        };

        let reply = match reply {
            Ok(reply) => reply,
            Err(err) => {
                warn!("{} for {} failed: {}", mode.title(), credentials.username, err);
                self.view.update(|view| {
                    view.phase = Phase::Idle;
                    view.notice = Some(Notice::error(err.user_message(AUTH_FAILED)));
                });
                return Err(err);
            }
        };

        self.view.update(|view| {
            view.phase = Phase::Idle;
            view.notice = Some(Notice::info(reply.message.clone()));
        });

        let Some(user_id) = reply.user_id else {
            return Ok(AuthOutcome::Acknowledged);
        };

        let session = Session {
            token: SessionToken::Placeholder,
            user_id,
            username: credentials.username,
        };
        info!("Signed in as {} (user {})", session.username, session.user_id);
        if let Err(err) = self.sessions.save(&session) {
            warn!("Session will not survive a reload: {}", err);
        }
        Ok(AuthOutcome::SignedIn(session))
    }
}
