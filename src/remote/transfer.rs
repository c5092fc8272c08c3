//! CSV import and export through `/keys/file`.

use reqwest::multipart::{Form, Part};

use super::http_client::read_text;
use super::*;

const FILE_FIELD: &str = "file";

impl RemoteClient {
    /// Uploads every file in a single multipart request. Returns the server's
    /// summary (e.g. `12 imported keys`).
    pub async fn import_files(&self, files: Vec<UploadFile>) -> ApiResult<String> {
        let mut form = Form::new();
        for file in files {
            let part = Part::bytes(file.bytes)
                .file_name(file.file_name)
                .mime_str("text/csv")
                .map_err(ApiError::Transport)?;
            form = form.part(FILE_FIELD, part);
        }
        let req = self
            .request(Method::POST, self.endpoint(&["keys", "file"])?)
            .multipart(form);
        let resp = self.send(req, "import keys").await?;
        read_text(resp).await
    }

    /// All keys with their translations, as CSV.
    pub async fn export_keys(&self) -> ApiResult<Vec<u8>> {
        let req = self.request(Method::GET, self.endpoint(&["keys", "file"])?);
        let resp = self.send(req, "export keys").await?;
        let bytes = resp.bytes().await.map_err(ApiError::Transport)?;
        Ok(bytes.to_vec())
    }
}
