//! Frontend Models
//!
//! Data structures matching the server's records.

use serde::{Deserialize, Serialize};

pub type ItemId = u32;
pub type ChecklistId = u32;

/// Checklist item (matches server row)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub content: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub parent_item_id: Option<ItemId>,
}

impl Item {
    /// Link target, if the item carries a non-empty URL
    pub fn link(&self) -> Option<&str> {
        self.url.as_deref().filter(|u| !u.trim().is_empty())
    }
}

/// Checklist as shown on a dashboard card or detail page header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistSummary {
    pub id: ChecklistId,
    pub title: String,
}

/// Structured success/error record returned by every mutation endpoint.
///
/// Missing `success` counts as failure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiResponse {
    /// `Err` carries the server message when one was sent
    pub fn into_result(self) -> Result<(), Option<String>> {
        if self.success {
            Ok(())
        } else {
            Err(self.error.filter(|e| !e.trim().is_empty()))
        }
    }
}

/// Normalize a submitted URL the same way the server stores it:
/// trimmed, empty means no link, missing scheme gets `https://`.
pub fn normalize_url(raw: &str) -> Option<String> {
    let url = raw.trim();
    if url.is_empty() {
        return None;
    }
    if url.starts_with("http://") || url.starts_with("https://") {
        Some(url.to_string())
    } else {
        Some(format!("https://{}", url))
    }
}
