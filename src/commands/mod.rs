//! Server Endpoint Bindings
//!
//! Frontend bindings to the checklist server's mutation endpoints, organized by entity.

mod item;
mod checklist;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{ApiResponse, ChecklistId, ItemId};

/// Failure before a success/error record could be read
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request rejected or connection failed
    #[error("request failed: {0}")]
    Transport(String),
    /// Body was not a success/error record
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

pub type ApiResult = Result<ApiResponse, ApiError>;

/// Remote operations the view-sync controller issues
#[async_trait(?Send)]
pub trait ChecklistApi {
    async fn toggle_item(&self, id: ItemId) -> ApiResult;

    async fn delete_item(&self, id: ItemId) -> ApiResult;

    async fn delete_checklist(&self, id: ChecklistId) -> ApiResult;

    /// `url` is sent as typed; the server normalizes it
    async fn edit_item(&self, id: ItemId, content: &str, url: &str) -> ApiResult;
}

/// `ChecklistApi` over HTTP (fetch on wasm32)
#[derive(Clone, Debug)]
pub struct HttpApi {
    client: reqwest::Client,
    base: String,
}

impl HttpApi {
    /// `base` is an absolute origin such as `https://host:5000`
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: base.into().trim_end_matches('/').to_string(),
        }
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }

    /// Send a prepared request and read the success/error record.
    /// Error statuses still carry a JSON record, so the status is not checked.
    pub(crate) async fn send(&self, request: reqwest::RequestBuilder) -> ApiResult {
        let response = request.send().await?;
        let status = response.status();
        let body: ApiResponse = response.json().await?;
        tracing::debug!("[API] status={} success={}", status, body.success);
        Ok(body)
    }

    pub(crate) fn post(&self, path: &str) -> reqwest::RequestBuilder {
        let url = self.endpoint(path);
        tracing::debug!("[API] POST {}", url);
        self.client.post(url)
    }
}

#[async_trait(?Send)]
impl ChecklistApi for HttpApi {
    async fn toggle_item(&self, id: ItemId) -> ApiResult {
        item::toggle_item(self, id).await
    }

    async fn delete_item(&self, id: ItemId) -> ApiResult {
        item::delete_item(self, id).await
    }

    async fn delete_checklist(&self, id: ChecklistId) -> ApiResult {
        checklist::delete_checklist(self, id).await
    }

    async fn edit_item(&self, id: ItemId, content: &str, url: &str) -> ApiResult {
        item::edit_item(self, id, content, url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    /// Serve one request with a canned reply; the join handle yields the raw request
    fn serve_once(status: &str, content_type: &str, body: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let reply = format!(
            "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            content_type,
            body.len(),
            body
        );
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut raw = Vec::new();
            let mut chunk = [0u8; 1024];
            loop {
                let n = stream.read(&mut chunk).unwrap();
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&chunk[..n]);
                if request_complete(&raw) {
                    break;
                }
            }
            stream.write_all(reply.as_bytes()).unwrap();
            stream.flush().unwrap();
            String::from_utf8_lossy(&raw).into_owned()
        });
        (base, handle)
    }

    fn request_complete(raw: &[u8]) -> bool {
        let text = String::from_utf8_lossy(raw);
        let Some(split) = text.find("\r\n\r\n") else { return false };
        let length = text[..split]
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        raw.len() >= split + 4 + length
    }

    #[tokio::test]
    async fn test_edit_posts_form_and_reads_error_status_body() {
        let (base, server) = serve_once(
            "400 Bad Request",
            "application/json",
            r#"{"success": false, "error": "Content is required"}"#,
        );
        let api = HttpApi::new(base);

        let result = api.edit_item(9, "a b&c", "x.com").await;
        let request = server.join().unwrap();

        assert_eq!(
            result,
            Ok(ApiResponse { success: false, error: Some("Content is required".to_string()) })
        );
        assert!(request.starts_with("POST /edit_item/9 "), "{}", request);
        assert!(request
            .to_ascii_lowercase()
            .contains("content-type: application/x-www-form-urlencoded"));
        assert!(request.ends_with("\r\n\r\ncontent=a+b%26c&url=x.com"), "{}", request);
    }

    #[tokio::test]
    async fn test_toggle_with_non_record_body_is_decode_error() {
        let (base, server) = serve_once("200 OK", "text/html", "<html>oops</html>");
        let api = HttpApi::new(base);

        let result = api.toggle_item(3).await;
        let request = server.join().unwrap();

        assert!(request.starts_with("POST /toggle_item/3 "), "{}", request);
        assert!(matches!(result, Err(ApiError::Decode(_))), "{:?}", result);
    }

    #[test]
    fn test_endpoint_joins_paths() {
        let api = HttpApi::new("http://localhost:5000/");
        assert_eq!(api.endpoint("/toggle_item/42"), "http://localhost:5000/toggle_item/42");
        assert_eq!(api.endpoint("delete_checklist/7"), "http://localhost:5000/delete_checklist/7");
    }
}
