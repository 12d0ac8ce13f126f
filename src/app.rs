//! SmartChecklist Frontend App
//!
//! Root component: builds the page state from the bootstrap document and
//! renders the dashboard or the checklist page.

use leptos::prelude::*;

use crate::commands::HttpApi;
use crate::components::{Dashboard, ItemTreeView, NoticeBanner};
use crate::config::{page_origin, Bootstrap, PageData};
use crate::context::{AppContext, BrowserPort};
use crate::sync::ViewSync;
use crate::view::{ChecklistView, DashboardView, Page, PageState};

fn initial_page(data: PageData) -> Page {
    match data {
        PageData::Dashboard { checklists } => Page::Dashboard(DashboardView::new(checklists)),
        PageData::Checklist { checklist, items } => Page::Checklist(ChecklistView::new(checklist, items)),
    }
}

#[component]
pub fn App(bootstrap: Bootstrap) -> impl IntoView {
    let Bootstrap { page, config } = bootstrap;
    let state = RwSignal::new(PageState::new(initial_page(page)));

    let api_base = config.api_base_or(&page_origin());
    tracing::info!("[APP] endpoints under {}", api_base);
    let sync = ViewSync::new(HttpApi::new(api_base), BrowserPort::new(state), &config);

    provide_context(AppContext::new(state, sync));

    let on_dashboard = state.with_untracked(|s| s.dashboard().is_some());

    view! {
        <div class="app-layout">
            <NoticeBanner />
            {if on_dashboard {
                view! { <Dashboard /> }.into_any()
            } else {
                view! { <ItemTreeView /> }.into_any()
            }}
        </div>
    }
}

/// Shown instead of the app when the page carries no usable bootstrap document
#[component]
pub fn BootstrapFailed(message: String) -> impl IntoView {
    view! {
        <div class="notice" role="alert">
            <span class="notice-text">"Could not load this page: " {message}</span>
        </div>
    }
}
