//! Todo List Component
//!
//! Owns the todo workflow for the signed-in user and renders its view.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{NewTodoForm, NoticeBanner, TodoRow};
use crate::api::HttpClient;
use crate::context::use_session;
use crate::models::{Phase, TodoItem, UserId};
use crate::store::{store_sync_todos, use_app_store, AppStateStoreFields};
use crate::workflow::TodoWorkflow;

/// Handle children use to reach the list's workflow
pub type SharedTodoWorkflow = StoredValue<Rc<TodoWorkflow<HttpClient>>, LocalStorage>;

#[component]
pub fn TodoList(user_id: UserId) -> impl IntoView {
    let ctx = use_session();
    let store = use_app_store();

    // A request still in flight from a previous session must not repaint the list.
    let workflow = TodoWorkflow::new(ctx.client()).with_observer(move |view| {
        let current = ctx
            .session
            .with_untracked(|session| session.as_ref().map(|s| s.user_id.clone()));
        if view.owner.is_none() || view.owner == current {
            store_sync_todos(&store, view);
        }
    });
    let workflow: SharedTodoWorkflow = StoredValue::new_local(Rc::new(workflow));

    // Load todos on mount
    Effect::new({
        let user_id = user_id.clone();
        move |_| {
            let workflow = workflow.get_value();
            let user_id = user_id.clone();
            spawn_local(async move {
                let _ = workflow.fetch_all(&user_id).await;
            });
        }
    });

    let on_toggle = Callback::new({
        let user_id = user_id.clone();
        move |todo: TodoItem| {
            let workflow = workflow.get_value();
            let user_id = user_id.clone();
            spawn_local(async move {
                let _ = workflow
                    .toggle_completion(&user_id, todo.id, todo.completed, &todo.task)
                    .await;
            });
        }
    });

    view! {
        <div class="todo-list">
            <h2>"Your Todos"</h2>
            <NewTodoForm workflow=workflow user_id=user_id />
            <NoticeBanner notice=Signal::derive(move || store.todo_notice().get()) />
            <Show when=move || store.todo_phase().get() == Phase::Fetching>
                <p class="loading">"Loading..."</p>
            </Show>
            <ul>
                <For
                    each=move || store.todos().get()
                    // Re-render a row when its contents change, not only its id
                    key=|todo| (todo.id, todo.completed, todo.task.clone())
                    children=move |todo| view! { <TodoRow todo=todo on_toggle=on_toggle /> }
                />
            </ul>
        </div>
    }
}
