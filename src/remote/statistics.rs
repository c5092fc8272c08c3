use super::http_client::read_optional_json;
use super::*;

impl RemoteClient {
    /// Per-locale counts; an empty `select_lang` asks for every locale.
    pub async fn statistics(&self, select_lang: &str) -> ApiResult<Vec<Statistic>> {
        let req = self
            .request(Method::GET, self.endpoint(&["statistic"])?)
            .query(&[("selectLang", select_lang)]);
        let resp = self.send(req, "statistics").await?;
        Ok(read_optional_json(resp, "statistics")
            .await?
            .unwrap_or_default())
    }
}
