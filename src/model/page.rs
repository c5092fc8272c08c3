use serde::{Deserialize, Serialize};

/// One page of a server-side paginated listing.
///
/// `page_index` is 0-based, as on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_index: u64,
    pub page_size: u64,
    pub total_count: u64,
    pub pages_count: u64,
}

impl<T> Page<T> {
    pub fn empty(page_index: u64, page_size: u64) -> Self {
        Self {
            items: Vec::new(),
            page_index,
            page_size,
            total_count: 0,
            pages_count: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of pages for `total_count` results at `page_size` per page.
    pub fn num_pages(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.total_count.div_ceil(self.page_size)
    }
}
