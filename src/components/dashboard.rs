//! Dashboard Component
//!
//! Listing page: create form and the grid of checklist cards.

use leptos::prelude::*;

use crate::components::DashboardCard;
use crate::context::AppContext;
use crate::view::MSG_NO_CHECKLISTS;

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let card_ids = move || {
        ctx.state.with(|s| {
            s.dashboard()
                .map(|d| d.cards.iter().map(|c| c.checklist.id).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    };
    let is_empty = move || ctx.state.with(|s| s.dashboard().map(|d| d.shows_empty_state()).unwrap_or(true));

    view! {
        <div class="dashboard">
            <h1>"My Checklists"</h1>
            <NewChecklistForm />
            <div class="checklists-grid">
                <Show
                    when=move || !is_empty()
                    fallback=|| view! { <p class="no-checklists">{MSG_NO_CHECKLISTS}</p> }
                >
                    <For
                        each=card_ids
                        key=|id| *id
                        children=move |id| view! { <DashboardCard checklist_id=id /> }
                    />
                </Show>
            </div>
        </div>
    }
}

/// Plain form post to `/create_checklist`; the server redirects back here
#[component]
fn NewChecklistForm() -> impl IntoView {
    let (title, set_title) = signal(String::new());

    view! {
        <form
            class="new-checklist-form"
            method="post"
            action="/create_checklist"
            on:submit=move |ev: web_sys::SubmitEvent| {
                if title.get().trim().is_empty() { ev.prevent_default(); }
            }
        >
            <input
                type="text"
                name="title"
                placeholder="New checklist title..."
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <button type="submit">"Create"</button>
        </form>
    }
}
