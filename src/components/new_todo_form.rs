//! New Todo Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{input_value, SharedTodoWorkflow};
use crate::models::UserId;

/// Form for adding a todo. The input is cleared once the server accepts it.
#[component]
pub fn NewTodoForm(workflow: SharedTodoWorkflow, user_id: UserId) -> impl IntoView {
    let (new_task, set_new_task) = signal(String::new());

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_task.get();
        let workflow = workflow.get_value();
        let user_id = user_id.clone();

        spawn_local(async move {
            if workflow.add_task(&user_id, &text).await.is_ok() {
                set_new_task.set(String::new());
            }
        });
    };

    view! {
        <form class="new-todo-form" on:submit=add_todo>
            <input
                type="text"
                placeholder="Add a new todo"
                prop:value=move || new_task.get()
                on:input=move |ev| {
                    if let Some(value) = input_value(&ev) {
                        set_new_task.set(value);
                    }
                }
            />
            <button type="submit">"Add Todo"</button>
        </form>
    }
}
