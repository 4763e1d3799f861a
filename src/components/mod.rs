//! UI Components
//!
//! Leptos views over the auth and todo workflows.

mod auth_form;
mod new_todo_form;
mod notice_banner;
mod todo_list;
mod todo_row;

use wasm_bindgen::JsCast;

pub use auth_form::AuthForm;
pub use new_todo_form::NewTodoForm;
pub use notice_banner::NoticeBanner;
pub use todo_list::{SharedTodoWorkflow, TodoList};
pub use todo_row::TodoRow;

/// Current value of the `<input>` an event fired on
fn input_value(ev: &web_sys::Event) -> Option<String> {
    ev.target()?
        .dyn_ref::<web_sys::HtmlInputElement>()
        .map(|input| input.value())
}
