//! `/locales`, `/available-locales` and `/default-locale`.

use super::http_client::{read_json, read_optional_json};
use super::*;

impl RemoteClient {
    /// Every locale the server knows about.
    pub async fn list_locales(&self) -> ApiResult<Vec<Locale>> {
        let req = self.request(Method::GET, self.endpoint(&["locales"])?);
        let resp = self.send(req, "list locales").await?;
        Ok(read_optional_json(resp, "locales").await?.unwrap_or_default())
    }

    pub async fn get_locale(&self, code: &str) -> ApiResult<Locale> {
        let req = self.request(Method::GET, self.endpoint(&["locales", code])?);
        let resp = self.send(req, "get locale").await?;
        read_json(resp, "locale").await
    }

    /// Locales enabled for this application.
    pub async fn list_available_locales(&self) -> ApiResult<Vec<Locale>> {
        let req = self.request(Method::GET, self.endpoint(&["available-locales"])?);
        let resp = self.send(req, "list application locales").await?;
        Ok(read_optional_json(resp, "application locales")
            .await?
            .unwrap_or_default())
    }

    pub async fn get_available_locale(&self, code: &str) -> ApiResult<Locale> {
        let req = self.request(Method::GET, self.endpoint(&["available-locales", code])?);
        let resp = self.send(req, "get application locale").await?;
        read_json(resp, "application locale").await
    }

    pub async fn add_available_locale(&self, locale: &Locale) -> ApiResult<()> {
        let req = self
            .request(Method::POST, self.endpoint(&["available-locales"])?)
            .json(locale);
        self.send(req, "add application locale").await?;
        Ok(())
    }

    /// Bulk replace of the application locale set.
    pub async fn replace_available_locales(&self, locales: &[Locale]) -> ApiResult<()> {
        let req = self
            .request(Method::PUT, self.endpoint(&["available-locales"])?)
            .json(locales);
        self.send(req, "replace application locales").await?;
        Ok(())
    }

    pub async fn delete_available_locale(&self, code: &str) -> ApiResult<()> {
        let req = self.request(
            Method::DELETE,
            self.endpoint(&["available-locales", code])?,
        );
        self.send(req, "delete application locale").await?;
        Ok(())
    }

    /// `None` when no default locale has been chosen yet.
    pub async fn get_default_locale(&self) -> ApiResult<Option<Locale>> {
        let req = self.request(Method::GET, self.endpoint(&["default-locale"])?);
        let resp = self.send(req, "get default locale").await?;
        let locale: Option<Locale> = read_optional_json(resp, "default locale").await?;
        Ok(locale.filter(|l| !l.code.is_empty()))
    }

    pub async fn set_default_locale(&self, locale: &Locale) -> ApiResult<()> {
        let req = self
            .request(Method::PUT, self.endpoint(&["default-locale"])?)
            .json(locale);
        self.send(req, "set default locale").await?;
        Ok(())
    }
}
