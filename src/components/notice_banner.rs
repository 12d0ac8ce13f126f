//! Notice Banner Component
//!
//! Shows the latest failure notice until dismissed.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let notice = move || ctx.state.with(|s| s.notice.clone());

    view! {
        {move || notice().map(|message| view! {
            <div class="notice" role="alert">
                <span class="notice-text">{message}</span>
                <button class="notice-close" on:click=move |_| ctx.dismiss_notice()>"×"</button>
            </div>
        })}
    }
}
