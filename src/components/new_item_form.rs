//! New Item Form Component
//!
//! Form for adding a root item to the checklist.

use leptos::prelude::*;

use crate::models::ChecklistId;

/// Posts to the server like a plain HTML form; blank content is not sent
#[component]
pub fn NewItemForm(checklist_id: ChecklistId) -> impl IntoView {
    let (new_text, set_new_text) = signal(String::new());
    let (new_url, set_new_url) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        if new_text.get().trim().is_empty() {
            ev.prevent_default();
        }
    };

    view! {
        <form
            class="new-item-form"
            method="post"
            action=format!("/add_item/{}", checklist_id)
            on:submit=submit
        >
            <input type="hidden" name="parent_item_id" value="" />
            <div class="new-item-row">
                <input
                    type="text"
                    name="content"
                    placeholder="Add new item..."
                    prop:value=move || new_text.get()
                    on:input=move |ev| set_new_text.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    name="url"
                    placeholder="Link (optional)"
                    prop:value=move || new_url.get()
                    on:input=move |ev| set_new_url.set(event_target_value(&ev))
                />
                <button type="submit">"Add"</button>
            </div>
        </form>
    }
}
