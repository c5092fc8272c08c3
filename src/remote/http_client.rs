use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use super::*;

impl RemoteClient {
    /// Base URL extended with percent-encoded path segments.
    pub(super) fn endpoint(&self, segments: &[&str]) -> ApiResult<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub(super) fn request(&self, method: Method, url: Url) -> reqwest::RequestBuilder {
        let req = self.client.request(method, url);
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    pub(super) async fn send(
        &self,
        req: reqwest::RequestBuilder,
        label: &str,
    ) -> ApiResult<reqwest::Response> {
        tracing::debug!(label, "sending request");
        let resp = req.send().await.map_err(ApiError::Transport)?;
        ensure_ok(resp, label).await
    }
}

pub(super) async fn ensure_ok(resp: reqwest::Response, label: &str) -> ApiResult<reqwest::Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    tracing::warn!(label, status = status.as_u16(), "request failed");
    Err(match status {
        StatusCode::BAD_REQUEST => ApiError::Validation(error_message(&body)),
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        StatusCode::FORBIDDEN => ApiError::Forbidden,
        StatusCode::NOT_FOUND => ApiError::NotFound,
        StatusCode::CONFLICT => ApiError::Conflict(error_message(&body)),
        _ => ApiError::Status {
            status: status.as_u16(),
            body: error_message(&body),
        },
    })
}

/// Error bodies are either plain text or `{"message": ...}` / `{"error": ...}`.
pub(super) fn error_message(body: &str) -> String {
    if let Ok(serde_json::Value::Object(map)) = serde_json::from_str::<serde_json::Value>(body) {
        for field in ["message", "error"] {
            if let Some(serde_json::Value::String(s)) = map.get(field) {
                return s.clone();
            }
        }
    }
    body.trim().to_string()
}

pub(super) async fn read_json<T: DeserializeOwned>(
    resp: reqwest::Response,
    what: &str,
) -> ApiResult<T> {
    let bytes = resp.bytes().await.map_err(ApiError::Transport)?;
    serde_json::from_slice(&bytes).map_err(|source| ApiError::Decode {
        what: what.to_string(),
        source,
    })
}

/// Like [`read_json`], but 204 No Content (or an empty body) yields `None`.
pub(super) async fn read_optional_json<T: DeserializeOwned>(
    resp: reqwest::Response,
    what: &str,
) -> ApiResult<Option<T>> {
    if resp.status() == StatusCode::NO_CONTENT {
        return Ok(None);
    }
    let bytes = resp.bytes().await.map_err(ApiError::Transport)?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(|source| ApiError::Decode {
            what: what.to_string(),
            source,
        })
}

pub(super) async fn read_text(resp: reqwest::Response) -> ApiResult<String> {
    resp.text().await.map_err(ApiError::Transport)
}

#[cfg(test)]
#[path = "../tests/remote/http_client_tests.rs"]
mod tests;
