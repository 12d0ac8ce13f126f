//! Client Configuration
//!
//! The host page embeds a JSON bootstrap document describing which page is
//! shown, the entities on it, and optional client settings.

use serde::Deserialize;
use thiserror::Error;

use crate::models::{ChecklistSummary, Item};

/// Id of the `<script type="application/json">` element holding the bootstrap document
pub const PAGE_DATA_ELEMENT_ID: &str = "page-data";

fn default_dashboard_path() -> String {
    "/dashboard".to_string()
}

fn default_exit_transition_ms() -> u32 {
    300
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Client settings, every field optional in the bootstrap document
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClientConfig {
    /// Origin the endpoints live under (None = current page origin)
    #[serde(default)]
    pub api_base: Option<String>,
    /// Listing page opened after the viewed checklist is deleted
    #[serde(default = "default_dashboard_path")]
    pub dashboard_path: String,
    /// How long a removed row/card stays in its leaving state
    #[serde(default = "default_exit_transition_ms")]
    pub exit_transition_ms: u32,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: None,
            dashboard_path: default_dashboard_path(),
            exit_transition_ms: default_exit_transition_ms(),
            log_level: default_log_level(),
        }
    }
}

impl ClientConfig {
    /// Base URL for requests, without trailing slash.
    /// Falls back to `page_origin` when no base is configured.
    pub fn api_base_or(&self, page_origin: &str) -> String {
        self.api_base
            .as_deref()
            .filter(|b| !b.trim().is_empty())
            .unwrap_or(page_origin)
            .trim()
            .trim_end_matches('/')
            .to_string()
    }

    /// `None` when `log_level` is not a level name such as `debug` or `WARN`
    pub fn max_level(&self) -> Option<tracing::Level> {
        self.log_level.trim().parse().ok()
    }
}

/// Which page the server rendered, with its entities
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum PageData {
    Dashboard {
        #[serde(default)]
        checklists: Vec<ChecklistSummary>,
    },
    Checklist {
        checklist: ChecklistSummary,
        /// Flat list, hierarchy given by `parent_item_id`
        #[serde(default)]
        items: Vec<Item>,
    },
}

/// Full bootstrap document
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Bootstrap {
    #[serde(flatten)]
    pub page: PageData,
    #[serde(default)]
    pub config: ClientConfig,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("no browser window available")]
    NoWindow,
    #[error("bootstrap element #{0} not found")]
    MissingElement(&'static str),
    #[error("malformed bootstrap document: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub fn parse_bootstrap(json: &str) -> Result<Bootstrap, BootstrapError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse the bootstrap document embedded in the current page
pub fn load_bootstrap() -> Result<Bootstrap, BootstrapError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(BootstrapError::NoWindow)?;
    let json = document
        .get_element_by_id(PAGE_DATA_ELEMENT_ID)
        .and_then(|el| el.text_content())
        .ok_or(BootstrapError::MissingElement(PAGE_DATA_ELEMENT_ID))?;
    parse_bootstrap(&json)
}

/// Origin of the current page (`https://host:port`), empty outside a browser
pub fn page_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_checklist_page_with_defaults() {
        let json = r#"{
            "page": "checklist",
            "checklist": {"id": 4, "title": "Trip"},
            "items": [
                {"id": 1, "content": "Passport", "url": null, "checked": true, "parent_item_id": null},
                {"id": 2, "content": "Visa", "parent_item_id": 1}
            ]
        }"#;
        let boot = parse_bootstrap(json).unwrap();
        assert_eq!(boot.config, ClientConfig::default());
        match boot.page {
            PageData::Checklist { checklist, items } => {
                assert_eq!(checklist.id, 4);
                assert_eq!(items.len(), 2);
                assert!(items[0].checked);
                assert_eq!(items[1].parent_item_id, Some(1));
            }
            other => panic!("unexpected page: {:?}", other),
        }
    }

    #[test]
    fn test_parse_dashboard_with_config() {
        let json = r#"{
            "page": "dashboard",
            "checklists": [{"id": 1, "title": "A"}],
            "config": {"api_base": "http://localhost:5000/", "exit_transition_ms": 0, "log_level": "debug"}
        }"#;
        let boot = parse_bootstrap(json).unwrap();
        assert_eq!(boot.config.exit_transition_ms, 0);
        assert_eq!(boot.config.dashboard_path, "/dashboard");
        assert_eq!(boot.config.max_level(), Some(tracing::Level::DEBUG));
        assert_eq!(boot.config.api_base_or("http://ignored"), "http://localhost:5000");
        assert!(matches!(boot.page, PageData::Dashboard { ref checklists } if checklists.len() == 1));
    }

    #[test]
    fn test_api_base_falls_back_to_origin() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_or("https://example.org"), "https://example.org");
    }

    #[test]
    fn test_max_level_parses_names_and_rejects_unknown() {
        let with_level = |level: &str| ClientConfig { log_level: level.to_string(), ..ClientConfig::default() };
        assert_eq!(ClientConfig::default().max_level(), Some(tracing::Level::INFO));
        assert_eq!(with_level("WARN").max_level(), Some(tracing::Level::WARN));
        assert_eq!(with_level(" trace ").max_level(), Some(tracing::Level::TRACE));
        assert_eq!(with_level("verbose").max_level(), None);
        assert_eq!(with_level("").max_level(), None);
    }

    #[test]
    fn test_unknown_page_is_rejected() {
        let err = parse_bootstrap(r#"{"page": "login"}"#).unwrap_err();
        assert!(matches!(err, BootstrapError::Malformed(_)));
    }
}
