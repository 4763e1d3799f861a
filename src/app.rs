//! Todo Frontend App
//!
//! Root component: the auth form when signed out, the todo list otherwise.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::HttpClient;
use crate::components::{AuthForm, TodoList};
use crate::config::AppConfig;
use crate::context::{use_session, SessionContext};
use crate::models::Session;
use crate::session::SessionStore;
use crate::store::{store_reset_auth, store_reset_todos, use_app_store, AppState};
use crate::storage::BrowserStorage;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_context(Store::new(AppState::default()));

    let ctx = SessionContext::new(HttpClient::new(config), SessionStore::new(BrowserStorage));
    provide_context(ctx);

    view! {
        <div class="App">
            <h1>"Todo Application"</h1>
            {move || match ctx.session.get() {
                Some(session) => view! { <Dashboard session=session /> }.into_any(),
                None => view! { <AuthForm /> }.into_any(),
            }}
        </div>
    }
}

/// Signed-in view
#[component]
fn Dashboard(session: Session) -> impl IntoView {
    let ctx = use_session();
    let store = use_app_store();

    let logout = move |_: web_sys::MouseEvent| {
        ctx.logout();
        store_reset_todos(&store);
        store_reset_auth(&store);
    };

    view! {
        <div class="todo-list-container">
            <p>"Welcome, " {session.username.clone()} "!"</p>
            <button on:click=logout>"Logout"</button>
            <TodoList user_id=session.user_id.clone() />
        </div>
    }
}
