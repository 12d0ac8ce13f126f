//! Checklist Endpoints

use super::{ApiResult, HttpApi};
use crate::models::ChecklistId;

pub async fn delete_checklist(api: &HttpApi, id: ChecklistId) -> ApiResult {
    api.send(api.post(&format!("/delete_checklist/{}", id))).await
}
