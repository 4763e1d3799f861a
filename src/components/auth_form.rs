//! Auth Form Component
//!
//! Login / signup form driving the auth workflow.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{input_value, NoticeBanner};
use crate::context::use_session;
use crate::models::{Credentials, Phase};
use crate::store::{store_sync_auth, use_app_store, AppStateStoreFields};
use crate::workflow::{AuthOutcome, AuthWorkflow};

#[component]
pub fn AuthForm() -> impl IntoView {
    let ctx = use_session();
    let store = use_app_store();

    let workflow = AuthWorkflow::new(ctx.client(), ctx.session_store())
        .with_observer(move |view| store_sync_auth(&store, view));
    let workflow = StoredValue::new_local(Rc::new(workflow));

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let workflow = workflow.get_value();
        let credentials = Credentials::new(username.get(), password.get());

        spawn_local(async move {
            let mode = workflow.mode();
            if let Ok(AuthOutcome::SignedIn(session)) = workflow.submit(credentials, mode).await {
                ctx.sign_in(session);
            }
        });
    };

    let title = move || store.auth_mode().get().title();

    view! {
        <div class="auth-container">
            <h2>{title}</h2>
            <form on:submit=submit>
                <div>
                    <label for="username">"Username:"</label>
                    <input
                        type="text"
                        id="username"
                        required
                        prop:value=move || username.get()
                        on:input=move |ev| {
                            if let Some(value) = input_value(&ev) {
                                set_username.set(value);
                            }
                        }
                    />
                </div>
                <div>
                    <label for="password">"Password:"</label>
                    <input
                        type="password"
                        id="password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            if let Some(value) = input_value(&ev) {
                                set_password.set(value);
                            }
                        }
                    />
                </div>
                <button
                    type="submit"
                    disabled=move || store.auth_phase().get() == Phase::Submitting
                >
                    {title}
                </button>
            </form>
            <p>
                <a
                    href="#"
                    class="App-link"
                    on:click=move |ev| {
                        ev.prevent_default();
                        workflow.with_value(|workflow| workflow.toggle_mode());
                    }
                >
                    {move || store.auth_mode().get().switch_prompt()}
                </a>
            </p>
            <NoticeBanner notice=Signal::derive(move || store.auth_notice().get()) />
        </div>
    }
}
