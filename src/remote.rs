//! Typed bindings to the i18n server's REST collections.
//!
//! Every operation issues exactly one HTTP request and reports the outcome as
//! an [`ApiResult`]; nothing here retries.

use reqwest::{Method, Url};

use crate::model::{
    Key, ListFilter, ListQuery, Locale, NewKey, Page, RemoteConfig, Statistic, Translation,
};

mod error;
mod http_client;
mod keys;
mod locales;
mod statistics;
mod transfer;
mod translations;
mod types;

pub use self::error::{ApiError, ApiResult};
pub use self::types::UploadFile;
use self::types::*;

#[derive(Clone)]
pub struct RemoteClient {
    base: Url,
    token: Option<String>,
    client: reqwest::Client,
}

impl RemoteClient {
    pub fn new(remote: &RemoteConfig) -> ApiResult<Self> {
        let base = Url::parse(&remote.base_url)
            .map_err(|err| ApiError::InvalidUrl(format!("{}: {}", remote.base_url, err)))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(remote.base_url.clone()));
        }
        let client = reqwest::Client::builder()
            .user_agent(concat!("i18n-admin/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ApiError::Transport)?;
        Ok(Self {
            base,
            token: remote.token.clone(),
            client,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }
}

impl std::fmt::Debug for RemoteClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteClient")
            .field("base", &self.base.as_str())
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
