//! Item Tree View Component
//!
//! Checklist detail page: header, add form and the item tree.

use leptos::prelude::*;

use crate::components::{NewItemForm, TreeItem};
use crate::context::AppContext;
use crate::view::{RowStatus, Target, MSG_NO_ITEMS};

#[component]
pub fn ItemTreeView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // Page kind and header never change after mount
    let (checklist_id, title) = ctx.state.with_untracked(|s| {
        s.checklist()
            .map(|v| (v.header.checklist.id, v.header.checklist.title.clone()))
            .unwrap_or_default()
    });

    let deleting = move || {
        ctx.state.with(|s| s.status(Target::Checklist(checklist_id)) != Some(RowStatus::Idle))
    };
    let tree_rows = move || ctx.state.with(|s| s.checklist().map(|v| v.display_rows()).unwrap_or_default());
    let is_empty = move || ctx.state.with(|s| s.checklist().map(|v| v.shows_empty_state()).unwrap_or(true));

    view! {
        <div class="checklist-page">
            <div class="checklist-header">
                <h1>{title}</h1>
                <button
                    class="delete-checklist-btn"
                    disabled=deleting
                    on:click=move |_| ctx.delete_checklist(checklist_id)
                >
                    {move || if deleting() { "⏳ Deleting..." } else { "Delete checklist" }}
                </button>
            </div>

            <NewItemForm checklist_id=checklist_id />

            <div class="items-list">
                <Show
                    when=move || !is_empty()
                    fallback=|| view! { <p class="no-items">{MSG_NO_ITEMS}</p> }
                >
                    <For
                        each=tree_rows
                        key=|(id, depth)| (*id, *depth)
                        children=move |(id, depth)| view! {
                            <TreeItem item_id=id depth=depth checklist_id=checklist_id />
                        }
                    />
                </Show>
            </div>
        </div>
    }
}
