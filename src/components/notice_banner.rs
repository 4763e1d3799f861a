//! Notice Banner Component

use leptos::prelude::*;

use crate::models::Notice;

/// Message from the last operation, styled by its error flag
#[component]
pub fn NoticeBanner(#[prop(into)] notice: Signal<Option<Notice>>) -> impl IntoView {
    move || {
        notice.get().map(|notice| {
            let class = if notice.is_error { "error-message" } else { "success-message" };
            view! { <p class=class>{notice.message}</p> }
        })
    }
}
