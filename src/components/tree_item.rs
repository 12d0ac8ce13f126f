//! Tree Item Component
//!
//! One item row on the checklist page, with its inline forms.

use leptos::prelude::*;

use crate::components::{EditItemForm, SubitemForm};
use crate::context::AppContext;
use crate::models::{ChecklistId, ItemId};
use crate::view::{ItemRow, RowStatus};

/// A single item row in the tree
#[component]
pub fn TreeItem(
    item_id: ItemId,
    depth: usize,
    checklist_id: ChecklistId,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let row = move || -> Option<ItemRow> {
        ctx.state.with(|s| s.checklist().and_then(|v| v.row(item_id).cloned()))
    };
    let status = move || row().map(|r| r.status).unwrap_or_default();
    let checked = move || row().map(|r| r.item.checked).unwrap_or(false);
    let busy = move || status() != RowStatus::Idle;

    let editing = move || ctx.state.with(|s| s.edit_draft().map(|d| d.item_id) == Some(item_id));
    let adding_sub = move || ctx.state.with(|s| s.subitem_draft().map(|d| d.parent_id) == Some(item_id));

    let row_class = move || {
        let mut c = String::from("item");
        if checked() { c.push_str(" checked"); }
        match status() {
            RowStatus::Pending => c.push_str(" pending"),
            RowStatus::Leaving => c.push_str(" leaving"),
            RowStatus::Idle => {}
        }
        c
    };
    let indent = depth * 24;

    let open_edit = move |_| {
        if let Some(r) = row() {
            ctx.show_edit_form(item_id, &r.item.content, r.item.url.as_deref().unwrap_or(""));
        }
    };

    view! {
        <div
            class=row_class
            data-item-id=item_id.to_string()
            style=format!("margin-left: {}px;", indent)
        >
            <div class="item-main">
                // Checkbox follows the acknowledged state only
                <input
                    type="checkbox"
                    prop:checked=checked
                    disabled=busy
                    on:click=move |ev| {
                        ev.prevent_default();
                        ctx.toggle_checked(item_id);
                    }
                />

                // Text
                <span class="item-text">
                    {move || row().map(|r| r.item.content)}
                </span>

                // Link affordance, only when the item has a url
                {move || row().and_then(|r| r.item.link().map(str::to_string)).map(|url| view! {
                    <a class="item-link" href=url target="_blank" rel="noopener noreferrer">"🔗"</a>
                })}

                <button class="edit-btn" disabled=busy on:click=open_edit>"✎"</button>
                <button class="add-subitem-btn" disabled=busy on:click=move |_| ctx.show_subitem_form(item_id)>"+"</button>
                <button class="delete-btn" disabled=busy on:click=move |_| ctx.delete_item(item_id)>
                    {move || if status() == RowStatus::Idle { "×" } else { "⏳" }}
                </button>
            </div>

            <Show when=editing>
                <EditItemForm item_id=item_id />
            </Show>
            <Show when=adding_sub>
                <SubitemForm parent_id=item_id checklist_id=checklist_id />
            </Show>
        </div>
    }
}
