//! Sub-item Form Component
//!
//! Inline add-sub-item form. Submits as a regular form post; the server
//! redirects back to the checklist page.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::{ChecklistId, ItemId};

#[component]
pub fn SubitemForm(parent_id: ItemId, checklist_id: ChecklistId) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let content = move || ctx.state.with(|s| s.subitem_draft().map(|d| d.content.clone()).unwrap_or_default());
    let url = move || ctx.state.with(|s| s.subitem_draft().map(|d| d.url.clone()).unwrap_or_default());

    view! {
        <form
            class="subitem-form"
            method="post"
            action=format!("/add_item/{}", checklist_id)
            on:submit=move |ev: web_sys::SubmitEvent| {
                if content().trim().is_empty() { ev.prevent_default(); }
            }
        >
            <input type="hidden" name="parent_item_id" value=parent_id.to_string() />
            <input
                type="text"
                name="content"
                placeholder="Add sub-item..."
                prop:value=content
                on:input=move |ev| ctx.set_subitem_content(event_target_value(&ev))
            />
            <input
                type="text"
                name="url"
                placeholder="Link (optional)"
                prop:value=url
                on:input=move |ev| ctx.set_subitem_url(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
            <button type="button" class="cancel-btn" on:click=move |_| ctx.hide_subitem_form(parent_id)>
                "Cancel"
            </button>
        </form>
    }
}
