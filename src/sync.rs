//! View-Sync Controller
//!
//! Issues the remote mutation for a user action and reconciles the page
//! state with the acknowledgment. Nothing is applied before the server
//! answers; a failed request restores the row and leaves a notice.

use std::rc::Rc;

use async_trait::async_trait;

use crate::commands::{ApiResult, ChecklistApi};
use crate::config::ClientConfig;
use crate::models::{ChecklistId, ItemId};
use crate::view::{PageState, Target};

pub const CONFIRM_DELETE_ITEM: &str =
    "Are you sure you want to delete this item? This action cannot be undone.";
pub const CONFIRM_DELETE_CHECKLIST: &str =
    "Are you sure you want to delete this entire checklist? This will also delete all items in it and cannot be undone.";
pub const MSG_TOGGLE_FAILED: &str = "Failed to update item status. Please try again.";
pub const MSG_DELETE_ITEM_FAILED: &str = "Failed to delete item. Please try again.";
pub const MSG_DELETE_CHECKLIST_FAILED: &str = "Failed to delete checklist. Please try again.";
pub const MSG_EDIT_FAILED: &str = "Failed to update item. Please try again.";
pub const MSG_NAVIGATE_FAILED: &str = "Checklist deleted, but the dashboard could not be opened.";

/// What the controller needs from the page it drives
#[async_trait(?Send)]
pub trait ViewPort {
    /// Mutate the page state. `None` when the page is gone.
    fn with_state<R>(&self, f: impl FnOnce(&mut PageState) -> R) -> Option<R>;

    /// Blocking yes/no question to the user
    fn confirm(&self, prompt: &str) -> bool;

    /// Leave for another page. `false` when the browser refused.
    fn navigate(&self, path: &str) -> bool;

    /// Wait out an exit transition
    async fn pause(&self, ms: u32);
}

/// Collapse both failure kinds into "failed, maybe with a server message"
fn outcome(result: ApiResult) -> Result<(), Option<String>> {
    match result {
        Ok(response) => response.into_result(),
        Err(e) => {
            tracing::warn!("[SYNC] {}", e);
            Err(None)
        }
    }
}

pub struct ViewSync<A, P> {
    api: Rc<A>,
    port: P,
    dashboard_path: Rc<str>,
    exit_transition_ms: u32,
}

impl<A, P: Clone> Clone for ViewSync<A, P> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            port: self.port.clone(),
            dashboard_path: Rc::clone(&self.dashboard_path),
            exit_transition_ms: self.exit_transition_ms,
        }
    }
}

impl<A: ChecklistApi, P: ViewPort> ViewSync<A, P> {
    pub fn new(api: A, port: P, config: &ClientConfig) -> Self {
        Self {
            api: Rc::new(api),
            port,
            dashboard_path: Rc::from(config.dashboard_path.as_str()),
            exit_transition_ms: config.exit_transition_ms,
        }
    }

    fn begin(&self, target: Target) -> bool {
        match self.port.with_state(|s| s.begin(target)) {
            Some(Ok(())) => true,
            Some(Err(rejected)) => {
                tracing::debug!("[SYNC] ignored: {}", rejected);
                false
            }
            None => false,
        }
    }

    fn fail(&self, target: Target, message: Option<String>, fallback: &str) {
        self.port.with_state(|s| {
            s.finish(target);
            s.notify(message.unwrap_or_else(|| fallback.to_string()));
        });
    }

    /// Flip an item's completion once the server confirms it
    pub async fn toggle_checked(&self, id: ItemId) {
        let target = Target::Item(id);
        if !self.begin(target) {
            return;
        }
        match outcome(self.api.toggle_item(id).await) {
            Ok(()) => {
                self.port.with_state(|s| {
                    s.finish(target);
                    if let Ok(checked) = s.flip_checked(id) {
                        tracing::info!("[SYNC] item {} checked={}", id, checked);
                    }
                });
            }
            Err(message) => self.fail(target, message, MSG_TOGGLE_FAILED),
        }
    }

    pub async fn delete_item(&self, id: ItemId) {
        if !self.port.confirm(CONFIRM_DELETE_ITEM) {
            return;
        }
        let target = Target::Item(id);
        if !self.begin(target) {
            return;
        }
        match outcome(self.api.delete_item(id).await) {
            Ok(()) => {
                if self.port.with_state(|s| s.start_leaving(target)).is_none() {
                    return;
                }
                self.port.pause(self.exit_transition_ms).await;
                self.port.with_state(|s| s.remove_item(id));
                tracing::info!("[SYNC] item {} deleted", id);
            }
            Err(message) => self.fail(target, message, MSG_DELETE_ITEM_FAILED),
        }
    }

    /// On its own detail page the checklist's deletion leaves the page;
    /// on the dashboard only its card goes.
    pub async fn delete_checklist(&self, id: ChecklistId) {
        if !self.port.confirm(CONFIRM_DELETE_CHECKLIST) {
            return;
        }
        let target = Target::Checklist(id);
        if !self.begin(target) {
            return;
        }
        match outcome(self.api.delete_checklist(id).await) {
            Ok(()) => {
                tracing::info!("[SYNC] checklist {} deleted", id);
                let Some(viewing) = self.port.with_state(|s| s.is_viewing_checklist(id)) else {
                    return;
                };
                if viewing {
                    // Control stays disabled until the page is replaced
                    if !self.port.navigate(&self.dashboard_path) {
                        self.fail(target, None, MSG_NAVIGATE_FAILED);
                    }
                    return;
                }
                self.port.with_state(|s| s.start_leaving(target));
                self.port.pause(self.exit_transition_ms).await;
                self.port.with_state(|s| s.remove_card(id));
            }
            Err(message) => self.fail(target, message, MSG_DELETE_CHECKLIST_FAILED),
        }
    }

    pub fn show_edit_form(&self, id: ItemId, content: &str, url: &str) {
        if let Some(Err(rejected)) = self.port.with_state(|s| s.show_edit_form(id, content, url)) {
            tracing::debug!("[SYNC] edit form not opened: {}", rejected);
        }
    }

    pub fn cancel_edit(&self, id: ItemId) {
        self.port.with_state(|s| s.cancel_edit(id));
    }

    /// Send the open edit form. Blank content stays local.
    pub async fn save_edit_item(&self, id: ItemId) {
        let (content, url) = match self.port.with_state(|s| s.begin_save(id)) {
            Some(Ok(sent)) => sent,
            Some(Err(rejected)) => {
                tracing::debug!("[SYNC] save not sent: {}", rejected);
                return;
            }
            None => return,
        };
        match outcome(self.api.edit_item(id, &content, &url).await) {
            Ok(()) => {
                self.port.with_state(|s| s.finish_save_ok(id, &content, &url));
                tracing::info!("[SYNC] item {} edited", id);
            }
            Err(message) => {
                self.port.with_state(|s| {
                    s.finish_save_err(id);
                    s.notify(message.unwrap_or_else(|| MSG_EDIT_FAILED.to_string()));
                });
            }
        }
    }

    pub fn show_subitem_form(&self, id: ItemId) {
        if let Some(Err(rejected)) = self.port.with_state(|s| s.show_subitem_form(id)) {
            tracing::debug!("[SYNC] sub-item form not opened: {}", rejected);
        }
    }

    pub fn hide_subitem_form(&self, id: ItemId) {
        self.port.with_state(|s| s.hide_subitem_form(id));
    }
}
