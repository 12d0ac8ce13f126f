//! UI Components
//!
//! Leptos components rendering the page state.

mod tree_item;
mod item_tree_view;
mod new_item_form;
mod edit_item_form;
mod subitem_form;
mod dashboard;
mod dashboard_card;
mod notice_banner;

pub use tree_item::TreeItem;
pub use item_tree_view::ItemTreeView;
pub use new_item_form::NewItemForm;
pub use edit_item_form::EditItemForm;
pub use subitem_form::SubitemForm;
pub use dashboard::Dashboard;
pub use dashboard_card::DashboardCard;
pub use notice_banner::NoticeBanner;
