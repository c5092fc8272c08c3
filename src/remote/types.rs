//! Wire shapes that differ from the public model.

use serde::Deserialize;

use super::Page;

/// A file queued for `POST /keys/file`.
#[derive(Clone, Debug)]
pub struct UploadFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// The server's paginated view: the page items plus its metadata.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PaginatedView<T> {
    #[serde(alias = "list", default = "Vec::new")]
    pub(super) view: Vec<T>,

    #[serde(default)]
    pub(super) page_index: Option<u64>,

    #[serde(default)]
    pub(super) page_size: Option<u64>,

    #[serde(default)]
    pub(super) result_size: Option<u64>,

    #[serde(default)]
    pub(super) pages_count: Option<u64>,
}

/// List endpoints answer with a paginated view when paging parameters are
/// given, and may answer with a bare array otherwise.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum ListBody<T> {
    Paged(PaginatedView<T>),
    Plain(Vec<T>),
}

impl<T> ListBody<T> {
    pub(super) fn into_page(self, page_index: u64, page_size: u64) -> Page<T> {
        match self {
            ListBody::Paged(v) => {
                let page_size = v.page_size.filter(|s| *s > 0).unwrap_or(page_size);
                let total_count = v.result_size.unwrap_or(v.view.len() as u64);
                let mut page = Page {
                    items: v.view,
                    page_index: v.page_index.unwrap_or(page_index),
                    page_size,
                    total_count,
                    pages_count: 0,
                };
                page.pages_count = v.pages_count.unwrap_or_else(|| page.num_pages());
                page
            }
            ListBody::Plain(items) => {
                let total_count = items.len() as u64;
                let mut page = Page {
                    items,
                    page_index,
                    page_size,
                    total_count,
                    pages_count: 0,
                };
                page.pages_count = page.num_pages();
                page
            }
        }
    }
}
