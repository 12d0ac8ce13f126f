//! Page View Model
//!
//! Id-keyed mirror of what the page shows. Every row and card is rendered from
//! an entry here, and every server acknowledgment is applied here by id.
//! Transitions are synchronous and side-effect free; `sync` drives them
//! around the network calls.

use thiserror::Error;

use crate::models::{normalize_url, ChecklistId, ChecklistSummary, Item, ItemId};
use crate::tree::{flatten_tree, subtree_ids};

pub const MSG_CONTENT_REQUIRED: &str = "Content is required";
pub const MSG_NO_ITEMS: &str = "No items in this checklist. Add your first item!";
pub const MSG_NO_CHECKLISTS: &str = "No checklists yet. Create your first one!";

/// Lifecycle of one interactive row or card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowStatus {
    #[default]
    Idle,
    /// Request in flight, controls disabled
    Pending,
    /// Deletion acknowledged, exit transition running
    Leaving,
}

/// Entity a row-level operation is addressed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Item(ItemId),
    Checklist(ChecklistId),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejected {
    #[error("{0:?} is not on this page")]
    Missing(Target),
    #[error("{0:?} already has a request in flight")]
    Busy(Target),
    #[error("no edit form open for item {0}")]
    NoEditForm(ItemId),
    #[error("content is blank")]
    BlankContent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemRow {
    pub item: Item,
    pub status: RowStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChecklistCard {
    pub checklist: ChecklistSummary,
    pub status: RowStatus,
}

/// Inline edit form contents
#[derive(Debug, Clone, PartialEq)]
pub struct EditDraft {
    pub item_id: ItemId,
    pub content: String,
    pub url: String,
    /// Save control disabled while true
    pub saving: bool,
    /// Local validation message
    pub error: Option<String>,
}

/// Inline add-sub-item form contents
#[derive(Debug, Clone, PartialEq)]
pub struct SubitemDraft {
    pub parent_id: ItemId,
    pub content: String,
    pub url: String,
}

/// Which inline forms are open. At most one of each kind.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub edit: Option<EditDraft>,
    pub subitem: Option<SubitemDraft>,
}

/// Detail page of one checklist
#[derive(Debug, Clone, PartialEq)]
pub struct ChecklistView {
    pub header: ChecklistCard,
    /// Server order; display order comes from `display_rows`
    pub rows: Vec<ItemRow>,
    pub forms: FormState,
}

impl ChecklistView {
    pub fn new(checklist: ChecklistSummary, items: Vec<Item>) -> Self {
        Self {
            header: ChecklistCard { checklist, status: RowStatus::Idle },
            rows: items
                .into_iter()
                .map(|item| ItemRow { item, status: RowStatus::Idle })
                .collect(),
            forms: FormState::default(),
        }
    }

    pub fn row(&self, id: ItemId) -> Option<&ItemRow> {
        self.rows.iter().find(|r| r.item.id == id)
    }

    fn row_mut(&mut self, id: ItemId) -> Result<&mut ItemRow, Rejected> {
        self.rows
            .iter_mut()
            .find(|r| r.item.id == id)
            .ok_or(Rejected::Missing(Target::Item(id)))
    }

    /// (item id, depth) in display order
    pub fn display_rows(&self) -> Vec<(ItemId, usize)> {
        let items: Vec<Item> = self.rows.iter().map(|r| r.item.clone()).collect();
        flatten_tree(&items)
            .into_iter()
            .map(|(item, depth)| (item.id, depth))
            .collect()
    }

    /// True when nothing would be listed, including rows whose parent is gone
    pub fn shows_empty_state(&self) -> bool {
        self.display_rows().is_empty()
    }

    /// Remove an item and its sub-items; forms attached to them close
    pub fn remove_item(&mut self, id: ItemId) {
        let items: Vec<Item> = self.rows.iter().map(|r| r.item.clone()).collect();
        let gone = subtree_ids(&items, id);
        self.rows.retain(|r| !gone.contains(&r.item.id));
        if matches!(&self.forms.edit, Some(d) if gone.contains(&d.item_id)) {
            self.forms.edit = None;
        }
        if matches!(&self.forms.subitem, Some(d) if gone.contains(&d.parent_id)) {
            self.forms.subitem = None;
        }
    }
}

/// Listing page with one card per checklist
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardView {
    pub cards: Vec<ChecklistCard>,
}

impl DashboardView {
    pub fn new(checklists: Vec<ChecklistSummary>) -> Self {
        Self {
            cards: checklists
                .into_iter()
                .map(|checklist| ChecklistCard { checklist, status: RowStatus::Idle })
                .collect(),
        }
    }

    pub fn card(&self, id: ChecklistId) -> Option<&ChecklistCard> {
        self.cards.iter().find(|c| c.checklist.id == id)
    }

    pub fn shows_empty_state(&self) -> bool {
        self.cards.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    Dashboard(DashboardView),
    Checklist(ChecklistView),
}

/// Everything the page renders
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pub page: Page,
    /// Latest user-visible notice
    pub notice: Option<String>,
}

impl PageState {
    pub fn new(page: Page) -> Self {
        Self { page, notice: None }
    }

    pub fn checklist(&self) -> Option<&ChecklistView> {
        match &self.page {
            Page::Checklist(view) => Some(view),
            Page::Dashboard(_) => None,
        }
    }

    pub fn dashboard(&self) -> Option<&DashboardView> {
        match &self.page {
            Page::Dashboard(view) => Some(view),
            Page::Checklist(_) => None,
        }
    }

    fn checklist_mut(&mut self, target: Target) -> Result<&mut ChecklistView, Rejected> {
        match &mut self.page {
            Page::Checklist(view) => Ok(view),
            Page::Dashboard(_) => Err(Rejected::Missing(target)),
        }
    }

    /// True when the detail page of `id` is the page being shown
    pub fn is_viewing_checklist(&self, id: ChecklistId) -> bool {
        matches!(&self.page, Page::Checklist(view) if view.header.checklist.id == id)
    }

    fn status_mut(&mut self, target: Target) -> Result<&mut RowStatus, Rejected> {
        match (target, &mut self.page) {
            (Target::Item(id), Page::Checklist(view)) => Ok(&mut view.row_mut(id)?.status),
            (Target::Checklist(id), Page::Checklist(view)) if view.header.checklist.id == id => {
                Ok(&mut view.header.status)
            }
            (Target::Checklist(id), Page::Dashboard(view)) => view
                .cards
                .iter_mut()
                .find(|c| c.checklist.id == id)
                .map(|c| &mut c.status)
                .ok_or(Rejected::Missing(target)),
            _ => Err(Rejected::Missing(target)),
        }
    }

    pub fn status(&self, target: Target) -> Option<RowStatus> {
        match (target, &self.page) {
            (Target::Item(id), Page::Checklist(view)) => view.row(id).map(|r| r.status),
            (Target::Checklist(id), Page::Checklist(view)) if view.header.checklist.id == id => {
                Some(view.header.status)
            }
            (Target::Checklist(id), Page::Dashboard(view)) => view.card(id).map(|c| c.status),
            _ => None,
        }
    }

    /// idle -> pending. Refused unless the row is idle.
    pub fn begin(&mut self, target: Target) -> Result<(), Rejected> {
        let status = self.status_mut(target)?;
        if *status != RowStatus::Idle {
            return Err(Rejected::Busy(target));
        }
        *status = RowStatus::Pending;
        Ok(())
    }

    /// pending -> idle, after either outcome
    pub fn finish(&mut self, target: Target) {
        if let Ok(status) = self.status_mut(target) {
            *status = RowStatus::Idle;
        }
    }

    /// pending -> leaving, once deletion is acknowledged
    pub fn start_leaving(&mut self, target: Target) {
        if let Ok(status) = self.status_mut(target) {
            *status = RowStatus::Leaving;
        }
    }

    pub fn flip_checked(&mut self, id: ItemId) -> Result<bool, Rejected> {
        let view = self.checklist_mut(Target::Item(id))?;
        let row = view.row_mut(id)?;
        row.item.checked = !row.item.checked;
        Ok(row.item.checked)
    }

    pub fn remove_item(&mut self, id: ItemId) {
        if let Page::Checklist(view) = &mut self.page {
            view.remove_item(id);
        }
    }

    pub fn remove_card(&mut self, id: ChecklistId) {
        if let Page::Dashboard(view) = &mut self.page {
            view.cards.retain(|c| c.checklist.id != id);
        }
    }

    pub fn notify(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    // ========================
    // Edit form
    // ========================

    /// Open the edit form for `id`, closing any other one
    pub fn show_edit_form(&mut self, id: ItemId, content: &str, url: &str) -> Result<(), Rejected> {
        let view = self.checklist_mut(Target::Item(id))?;
        view.row_mut(id)?;
        view.forms.edit = Some(EditDraft {
            item_id: id,
            content: content.to_string(),
            url: url.to_string(),
            saving: false,
            error: None,
        });
        Ok(())
    }

    /// Close the edit form if it belongs to `id`
    pub fn cancel_edit(&mut self, id: ItemId) {
        if let Page::Checklist(view) = &mut self.page {
            if matches!(&view.forms.edit, Some(d) if d.item_id == id) {
                view.forms.edit = None;
            }
        }
    }

    pub fn edit_draft(&self) -> Option<&EditDraft> {
        self.checklist().and_then(|v| v.forms.edit.as_ref())
    }

    pub fn set_edit_content(&mut self, value: String) {
        if let Page::Checklist(view) = &mut self.page {
            if let Some(draft) = view.forms.edit.as_mut() {
                draft.content = value;
            }
        }
    }

    pub fn set_edit_url(&mut self, value: String) {
        if let Page::Checklist(view) = &mut self.page {
            if let Some(draft) = view.forms.edit.as_mut() {
                draft.url = value;
            }
        }
    }

    /// Validate the open draft and mark it saving.
    /// Returns the (content, url) to send. Blank content keeps the form open
    /// with a validation message and nothing is sent.
    pub fn begin_save(&mut self, id: ItemId) -> Result<(String, String), Rejected> {
        let view = self.checklist_mut(Target::Item(id))?;
        let status = view.row(id).map(|r| r.status).ok_or(Rejected::Missing(Target::Item(id)))?;
        let draft = match view.forms.edit.as_mut() {
            Some(d) if d.item_id == id => d,
            _ => return Err(Rejected::NoEditForm(id)),
        };
        if draft.saving || status != RowStatus::Idle {
            return Err(Rejected::Busy(Target::Item(id)));
        }
        if draft.content.trim().is_empty() {
            draft.error = Some(MSG_CONTENT_REQUIRED.to_string());
            return Err(Rejected::BlankContent);
        }
        draft.saving = true;
        draft.error = None;
        let sent = (draft.content.trim().to_string(), draft.url.trim().to_string());
        self.begin(Target::Item(id))?;
        Ok(sent)
    }

    /// Apply an acknowledged edit and close the form
    pub fn finish_save_ok(&mut self, id: ItemId, content: &str, url: &str) {
        self.finish(Target::Item(id));
        if let Page::Checklist(view) = &mut self.page {
            if let Ok(row) = view.row_mut(id) {
                row.item.content = content.trim().to_string();
                row.item.url = normalize_url(url);
            }
            if matches!(&view.forms.edit, Some(d) if d.item_id == id) {
                view.forms.edit = None;
            }
        }
    }

    /// Re-enable the save control, form stays open
    pub fn finish_save_err(&mut self, id: ItemId) {
        self.finish(Target::Item(id));
        if let Page::Checklist(view) = &mut self.page {
            if let Some(draft) = view.forms.edit.as_mut().filter(|d| d.item_id == id) {
                draft.saving = false;
            }
        }
    }

    // ========================
    // Sub-item form
    // ========================

    /// Open an empty add-sub-item form under `id`, closing any other one
    pub fn show_subitem_form(&mut self, id: ItemId) -> Result<(), Rejected> {
        let view = self.checklist_mut(Target::Item(id))?;
        view.row_mut(id)?;
        if !matches!(&view.forms.subitem, Some(d) if d.parent_id == id) {
            view.forms.subitem = Some(SubitemDraft {
                parent_id: id,
                content: String::new(),
                url: String::new(),
            });
        }
        Ok(())
    }

    /// Close and clear the sub-item form if it belongs to `id`
    pub fn hide_subitem_form(&mut self, id: ItemId) {
        if let Page::Checklist(view) = &mut self.page {
            if matches!(&view.forms.subitem, Some(d) if d.parent_id == id) {
                view.forms.subitem = None;
            }
        }
    }

    pub fn subitem_draft(&self) -> Option<&SubitemDraft> {
        self.checklist().and_then(|v| v.forms.subitem.as_ref())
    }

    pub fn set_subitem_content(&mut self, value: String) {
        if let Page::Checklist(view) = &mut self.page {
            if let Some(draft) = view.forms.subitem.as_mut() {
                draft.content = value;
            }
        }
    }

    pub fn set_subitem_url(&mut self, value: String) {
        if let Page::Checklist(view) = &mut self.page {
            if let Some(draft) = view.forms.subitem.as_mut() {
                draft.url = value;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: ItemId, parent: Option<ItemId>) -> Item {
        Item {
            id,
            content: format!("Item {}", id),
            url: None,
            checked: false,
            parent_item_id: parent,
        }
    }

    fn checklist_state(items: Vec<Item>) -> PageState {
        let summary = ChecklistSummary { id: 1, title: "Trip".to_string() };
        PageState::new(Page::Checklist(ChecklistView::new(summary, items)))
    }

    #[test]
    fn test_orphan_rows_only_shows_placeholder() {
        let state = checklist_state(vec![item(2, Some(99)), item(3, Some(2))]);
        let view = state.checklist().unwrap();
        assert!(view.display_rows().is_empty());
        assert!(view.shows_empty_state());

        let state = checklist_state(vec![item(1, None), item(2, Some(99))]);
        assert!(!state.checklist().unwrap().shows_empty_state());
    }

    #[test]
    fn test_begin_refuses_second_request_on_same_row() {
        let mut state = checklist_state(vec![item(1, None), item(2, None)]);
        state.begin(Target::Item(1)).unwrap();
        assert_eq!(state.begin(Target::Item(1)), Err(Rejected::Busy(Target::Item(1))));
        // Other rows are independent
        state.begin(Target::Item(2)).unwrap();
        state.finish(Target::Item(1));
        assert_eq!(state.status(Target::Item(1)), Some(RowStatus::Idle));
        assert_eq!(state.status(Target::Item(2)), Some(RowStatus::Pending));
    }

    #[test]
    fn test_item_operations_rejected_on_dashboard() {
        let mut state = PageState::new(Page::Dashboard(DashboardView::default()));
        assert_eq!(state.begin(Target::Item(3)), Err(Rejected::Missing(Target::Item(3))));
        assert!(state.show_edit_form(3, "x", "").is_err());
    }

    #[test]
    fn test_remove_item_takes_subtree_and_attached_forms() {
        let mut state = checklist_state(vec![item(1, None), item(2, Some(1)), item(3, None)]);
        state.show_subitem_form(2).unwrap();
        state.show_edit_form(1, "Item 1", "").unwrap();
        state.remove_item(1);
        let view = state.checklist().unwrap();
        assert_eq!(view.display_rows(), vec![(3, 0)]);
        assert_eq!(view.forms, FormState::default());
    }

    #[test]
    fn test_only_one_edit_form_open() {
        let mut state = checklist_state(vec![item(1, None), item(2, None)]);
        state.show_edit_form(1, "Item 1", "").unwrap();
        state.show_edit_form(2, "Item 2", "b.com").unwrap();
        let draft = state.edit_draft().unwrap();
        assert_eq!(draft.item_id, 2);
        assert_eq!(draft.url, "b.com");

        // Cancelling a form that is not open leaves the open one alone
        state.cancel_edit(1);
        assert!(state.edit_draft().is_some());
        state.cancel_edit(2);
        assert!(state.edit_draft().is_none());
    }

    #[test]
    fn test_only_one_subitem_form_open_and_hide_clears() {
        let mut state = checklist_state(vec![item(1, None), item(2, None)]);
        state.show_subitem_form(1).unwrap();
        state.set_subitem_content("half typed".to_string());
        state.show_subitem_form(2).unwrap();
        assert_eq!(state.subitem_draft().unwrap().parent_id, 2);
        assert_eq!(state.subitem_draft().unwrap().content, "");

        state.set_subitem_content("again".to_string());
        state.hide_subitem_form(2);
        assert!(state.subitem_draft().is_none());
        state.show_subitem_form(2).unwrap();
        assert_eq!(state.subitem_draft().unwrap().content, "");
    }

    #[test]
    fn test_blank_content_keeps_form_open() {
        let mut state = checklist_state(vec![item(1, None)]);
        state.show_edit_form(1, "Item 1", "").unwrap();
        state.set_edit_content("   ".to_string());
        assert_eq!(state.begin_save(1), Err(Rejected::BlankContent));
        let draft = state.edit_draft().unwrap();
        assert!(!draft.saving);
        assert_eq!(draft.error.as_deref(), Some(MSG_CONTENT_REQUIRED));
        assert_eq!(state.status(Target::Item(1)), Some(RowStatus::Idle));
    }

    #[test]
    fn test_save_ok_updates_text_and_link() {
        let mut state = checklist_state(vec![item(1, None)]);
        state.show_edit_form(1, "Item 1", "").unwrap();
        state.set_edit_content(" Passport ".to_string());
        state.set_edit_url("gov.example".to_string());
        let (content, url) = state.begin_save(1).unwrap();
        assert_eq!((content.as_str(), url.as_str()), ("Passport", "gov.example"));
        assert!(state.edit_draft().unwrap().saving);

        state.finish_save_ok(1, &content, &url);
        let row = state.checklist().unwrap().row(1).unwrap();
        assert_eq!(row.item.content, "Passport");
        assert_eq!(row.item.link(), Some("https://gov.example"));
        assert!(state.edit_draft().is_none());

        // Clearing the url drops the link
        state.show_edit_form(1, "Passport", "https://gov.example").unwrap();
        state.set_edit_url(String::new());
        let (content, url) = state.begin_save(1).unwrap();
        state.finish_save_ok(1, &content, &url);
        assert_eq!(state.checklist().unwrap().row(1).unwrap().item.link(), None);
    }

    #[test]
    fn test_save_err_reenables_save() {
        let mut state = checklist_state(vec![item(1, None)]);
        state.show_edit_form(1, "Item 1", "").unwrap();
        state.begin_save(1).unwrap();
        assert_eq!(state.begin_save(1), Err(Rejected::Busy(Target::Item(1))));
        state.finish_save_err(1);
        assert!(!state.edit_draft().unwrap().saving);
        assert_eq!(state.checklist().unwrap().row(1).unwrap().item.content, "Item 1");
    }

    #[test]
    fn test_header_status_tracks_viewed_checklist() {
        let mut state = checklist_state(vec![]);
        assert!(state.is_viewing_checklist(1));
        assert!(!state.is_viewing_checklist(2));
        state.begin(Target::Checklist(1)).unwrap();
        assert_eq!(state.status(Target::Checklist(1)), Some(RowStatus::Pending));
        assert_eq!(state.begin(Target::Checklist(2)), Err(Rejected::Missing(Target::Checklist(2))));
    }
}
