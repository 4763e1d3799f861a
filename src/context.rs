//! Session Context
//!
//! The signed-in identity, provided via the Leptos Context API to whichever
//! component needs it.

use leptos::prelude::*;
use log::{info, warn};

use crate::api::HttpClient;
use crate::models::Session;
use crate::session::SessionStore;
use crate::storage::BrowserStorage;

#[derive(Clone, Copy)]
pub struct SessionContext {
    /// Current session (None = signed out) - read
    pub session: ReadSignal<Option<Session>>,
    /// Current session - write
    set_session: WriteSignal<Option<Session>>,
    sessions: StoredValue<SessionStore<BrowserStorage>>,
    client: StoredValue<HttpClient, LocalStorage>,
}

impl SessionContext {
    /// Restores whatever session the browser kept from last time
    pub fn new(client: HttpClient, sessions: SessionStore<BrowserStorage>) -> Self {
        let restored = sessions.load().unwrap_or_else(|err| {
            warn!("Could not read stored session: {}", err);
            None
        });
        if let Some(session) = &restored {
            info!("Restored session for {}", session.username);
        }

        let (session, set_session) = signal(restored);
        Self {
            session,
            set_session,
            sessions: StoredValue::new(sessions),
            client: StoredValue::new_local(client),
        }
    }

    pub fn client(&self) -> HttpClient {
        self.client.get_value()
    }

    pub fn session_store(&self) -> SessionStore<BrowserStorage> {
        self.sessions.get_value()
    }

    /// Switch the UI to a session the auth workflow already persisted
    pub fn sign_in(&self, session: Session) {
        self.set_session.set(Some(session));
    }

    pub fn logout(&self) {
        if let Err(err) = self.sessions.with_value(|sessions| sessions.clear()) {
            warn!("Could not clear stored session: {}", err);
        }
        info!("Signed out");
        self.set_session.set(None);
    }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}
