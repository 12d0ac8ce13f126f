//! Dashboard Card Component

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::ChecklistId;
use crate::view::{RowStatus, Target};

/// One checklist card in the dashboard grid
#[component]
pub fn DashboardCard(checklist_id: ChecklistId) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let title = move || {
        ctx.state.with(|s| {
            s.dashboard()
                .and_then(|d| d.card(checklist_id))
                .map(|c| c.checklist.title.clone())
                .unwrap_or_default()
        })
    };
    let status = move || ctx.state.with(|s| s.status(Target::Checklist(checklist_id)).unwrap_or_default());
    let busy = move || status() != RowStatus::Idle;

    let card_class = move || match status() {
        RowStatus::Leaving => "checklist-card leaving",
        RowStatus::Pending => "checklist-card pending",
        RowStatus::Idle => "checklist-card",
    };

    view! {
        <div class=card_class data-checklist-id=checklist_id.to_string()>
            <a class="checklist-title" href=format!("/checklist/{}", checklist_id)>{title}</a>
            <button
                class="delete-checklist-btn"
                disabled=busy
                on:click=move |_| ctx.delete_checklist(checklist_id)
            >
                {move || if busy() { "⏳ Deleting..." } else { "Delete" }}
            </button>
        </div>
    }
}
