use thiserror::Error;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Failure of a single REST call. Terminal for that call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 400: the server rejected the payload; the message is its body.
    #[error("{0}")]
    Validation(String),

    /// 409: the resource already exists.
    #[error("conflict: {0}")]
    Conflict(String),

    #[error("unauthorized (check the configured token)")]
    Unauthorized,

    #[error("forbidden (missing permission on the i18n server)")]
    Forbidden,

    #[error("not found")]
    NotFound,

    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("parse {what}: {source}")]
    Decode {
        what: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// HTTP status of the failed response, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Validation(_) => Some(400),
            ApiError::Unauthorized => Some(401),
            ApiError::Forbidden => Some(403),
            ApiError::NotFound => Some(404),
            ApiError::Conflict(_) => Some(409),
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(err) => err.status().map(|s| s.as_u16()),
            ApiError::Decode { .. } | ApiError::InvalidUrl(_) => None,
        }
    }
}
