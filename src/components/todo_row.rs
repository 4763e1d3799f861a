//! Todo Row Component
//!
//! A single todo in the list.

use leptos::prelude::*;

use crate::models::TodoItem;

#[component]
pub fn TodoRow(
    todo: TodoItem,
    #[prop(into)] on_toggle: Callback<TodoItem>,
) -> impl IntoView {
    let completed = todo.completed;
    let text = todo.task.clone();
    let row_class = if completed { "todo-row completed" } else { "todo-row" };
    let text_style = if completed { "text-decoration: line-through;" } else { "text-decoration: none;" };

    view! {
        <li class=row_class>
            <span style=text_style>{text}</span>
            <input
                type="checkbox"
                checked=completed
                on:change=move |_| on_toggle.run(todo.clone())
            />
        </li>
    }
}
