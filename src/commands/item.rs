//! Item Endpoints

use serde::Serialize;

use super::{ApiResult, HttpApi};
use crate::models::ItemId;

#[derive(Serialize)]
struct EditItemForm<'a> {
    content: &'a str,
    url: &'a str,
}

pub async fn toggle_item(api: &HttpApi, id: ItemId) -> ApiResult {
    api.send(api.post(&format!("/toggle_item/{}", id))).await
}

pub async fn delete_item(api: &HttpApi, id: ItemId) -> ApiResult {
    api.send(api.post(&format!("/delete_item/{}", id))).await
}

/// Form-encoded, matching the server's `request.form` fields
pub async fn edit_item(api: &HttpApi, id: ItemId, content: &str, url: &str) -> ApiResult {
    let form = EditItemForm { content, url };
    api.send(api.post(&format!("/edit_item/{}", id)).form(&form)).await
}
