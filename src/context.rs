//! Application Context
//!
//! Page state and the view-sync controller, provided via the Leptos Context API.

use std::future::Future;

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::HttpApi;
use crate::models::{ChecklistId, ItemId};
use crate::sync::{ViewPort, ViewSync};
use crate::view::PageState;

/// `ViewPort` backed by the page's state signal and the browser window
#[derive(Clone, Copy)]
pub struct BrowserPort {
    state: RwSignal<PageState>,
}

impl BrowserPort {
    pub fn new(state: RwSignal<PageState>) -> Self {
        Self { state }
    }
}

#[async_trait(?Send)]
impl ViewPort for BrowserPort {
    fn with_state<R>(&self, f: impl FnOnce(&mut PageState) -> R) -> Option<R> {
        self.state.try_update(f)
    }

    fn confirm(&self, prompt: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }

    fn navigate(&self, path: &str) -> bool {
        let Some(window) = web_sys::window() else { return false };
        match window.location().set_href(path) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("[APP] navigation to {} failed: {:?}", path, e);
                false
            }
        }
    }

    async fn pause(&self, ms: u32) {
        TimeoutFuture::new(ms).await;
    }
}

pub type BrowserSync = ViewSync<HttpApi, BrowserPort>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Everything the page renders
    pub state: RwSignal<PageState>,
    sync: StoredValue<BrowserSync, LocalStorage>,
}

impl AppContext {
    pub fn new(state: RwSignal<PageState>, sync: BrowserSync) -> Self {
        Self {
            state,
            sync: StoredValue::new_local(sync),
        }
    }

    /// Run a controller operation to completion on the local task queue
    fn spawn<F, Fut>(&self, op: F)
    where
        F: FnOnce(BrowserSync) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        if let Some(sync) = self.sync.try_get_value() {
            spawn_local(op(sync));
        }
    }

    pub fn toggle_checked(&self, id: ItemId) {
        self.spawn(move |sync| async move { sync.toggle_checked(id).await });
    }

    pub fn delete_item(&self, id: ItemId) {
        self.spawn(move |sync| async move { sync.delete_item(id).await });
    }

    pub fn delete_checklist(&self, id: ChecklistId) {
        self.spawn(move |sync| async move { sync.delete_checklist(id).await });
    }

    pub fn save_edit_item(&self, id: ItemId) {
        self.spawn(move |sync| async move { sync.save_edit_item(id).await });
    }

    pub fn show_edit_form(&self, id: ItemId, content: &str, url: &str) {
        self.sync.with_value(|sync| sync.show_edit_form(id, content, url));
    }

    pub fn cancel_edit(&self, id: ItemId) {
        self.sync.with_value(|sync| sync.cancel_edit(id));
    }

    pub fn show_subitem_form(&self, id: ItemId) {
        self.sync.with_value(|sync| sync.show_subitem_form(id));
    }

    pub fn hide_subitem_form(&self, id: ItemId) {
        self.sync.with_value(|sync| sync.hide_subitem_form(id));
    }

    pub fn set_edit_content(&self, value: String) {
        self.state.update(|s| s.set_edit_content(value));
    }

    pub fn set_edit_url(&self, value: String) {
        self.state.update(|s| s.set_edit_url(value));
    }

    pub fn set_subitem_content(&self, value: String) {
        self.state.update(|s| s.set_subitem_content(value));
    }

    pub fn set_subitem_url(&self, value: String) {
        self.state.update(|s| s.set_subitem_url(value));
    }

    pub fn dismiss_notice(&self) {
        self.state.update(|s| s.dismiss_notice());
    }
}
