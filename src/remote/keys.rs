//! `/keys` collection and single keys.

use super::http_client::{read_json, read_optional_json, read_text};
use super::*;

impl RemoteClient {
    pub async fn list_keys(&self, query: &ListQuery) -> ApiResult<Page<Key>> {
        let req = self
            .request(Method::GET, self.endpoint(&["keys"])?)
            .query(&query.to_query_pairs());
        let resp = self.send(req, "list keys").await?;
        let body: Option<ListBody<Key>> = read_optional_json(resp, "keys").await?;
        Ok(match body {
            Some(body) => body.into_page(query.page_index, query.page_size),
            None => Page::empty(query.page_index, query.page_size),
        })
    }

    /// Authoritative key, including the fields listings may leave out.
    pub async fn get_key(&self, name: &str) -> ApiResult<Key> {
        let req = self.request(Method::GET, self.endpoint(&["keys", name])?);
        let resp = self.send(req, "get key").await?;
        read_json(resp, "key").await
    }

    pub async fn create_key(&self, key: &NewKey) -> ApiResult<Key> {
        let req = self
            .request(Method::POST, self.endpoint(&["keys"])?)
            .json(key);
        let resp = self.send(req, "create key").await?;
        let created: Option<Key> = read_optional_json(resp, "created key").await?;
        Ok(created.unwrap_or_else(|| Key {
            name: key.name.clone(),
            comment: key.comment.clone(),
            translation: key.translation.clone(),
            default_locale: key.default_locale.clone(),
            missing: key.translation.is_empty(),
            ..Key::default()
        }))
    }

    pub async fn update_key(&self, key: &Key) -> ApiResult<()> {
        let req = self
            .request(Method::PUT, self.endpoint(&["keys", &key.name])?)
            .json(key);
        self.send(req, "update key").await?;
        Ok(())
    }

    pub async fn delete_key(&self, name: &str) -> ApiResult<()> {
        let req = self.request(Method::DELETE, self.endpoint(&["keys", name])?);
        self.send(req, "delete key").await?;
        Ok(())
    }

    /// Deletes every key matching `filter`; returns the server's summary text.
    pub async fn delete_keys(&self, filter: &ListFilter) -> ApiResult<String> {
        let req = self
            .request(Method::DELETE, self.endpoint(&["keys"])?)
            .query(&filter.to_query_pairs());
        let resp = self.send(req, "delete keys").await?;
        read_text(resp).await
    }
}
