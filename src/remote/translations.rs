use super::http_client::{read_json, read_optional_json};
use super::*;

impl RemoteClient {
    pub async fn list_translations(
        &self,
        locale: &str,
        query: &ListQuery,
    ) -> ApiResult<Page<Translation>> {
        let req = self
            .request(Method::GET, self.endpoint(&["translations", locale])?)
            .query(&query.to_query_pairs());
        let resp = self.send(req, "list translations").await?;
        let body: Option<ListBody<Translation>> =
            read_optional_json(resp, "translations").await?;
        Ok(match body {
            Some(body) => body.into_page(query.page_index, query.page_size),
            None => Page::empty(query.page_index, query.page_size),
        })
    }

    pub async fn get_translation(&self, locale: &str, name: &str) -> ApiResult<Translation> {
        let req = self.request(
            Method::GET,
            self.endpoint(&["translations", locale, name])?,
        );
        let resp = self.send(req, "get translation").await?;
        read_json(resp, "translation").await
    }

    pub async fn update_translation(
        &self,
        locale: &str,
        translation: &Translation,
    ) -> ApiResult<()> {
        let req = self
            .request(
                Method::PUT,
                self.endpoint(&["translations", locale, &translation.name])?,
            )
            .json(translation);
        self.send(req, "update translation").await?;
        Ok(())
    }
}
