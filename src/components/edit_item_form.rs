//! Edit Item Form Component
//!
//! Inline form editing an item's content and link.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::ItemId;
use crate::view::EditDraft;

#[component]
pub fn EditItemForm(item_id: ItemId) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let draft = move || -> Option<EditDraft> {
        ctx.state.with(|s| s.edit_draft().filter(|d| d.item_id == item_id).cloned())
    };
    let saving = move || draft().map(|d| d.saving).unwrap_or(false);

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.save_edit_item(item_id);
    };

    view! {
        <form class="edit-item-form" on:submit=save>
            <input
                type="text"
                class="edit-content"
                placeholder="Item content"
                prop:value=move || draft().map(|d| d.content).unwrap_or_default()
                on:input=move |ev| ctx.set_edit_content(event_target_value(&ev))
            />
            <input
                type="text"
                class="edit-url"
                placeholder="Link (optional)"
                prop:value=move || draft().map(|d| d.url).unwrap_or_default()
                on:input=move |ev| ctx.set_edit_url(event_target_value(&ev))
            />
            {move || draft().and_then(|d| d.error).map(|e| view! {
                <span class="form-error">{e}</span>
            })}
            <button type="submit" class="save-btn" disabled=saving>
                {move || if saving() { "Saving..." } else { "Save" }}
            </button>
            <button type="button" class="cancel-btn" on:click=move |_| ctx.cancel_edit(item_id)>
                "Cancel"
            </button>
        </form>
    }
}
