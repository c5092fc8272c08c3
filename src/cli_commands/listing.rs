use clap::Args;

use i18n_admin::model::{ListFilter, ListQuery};

/// Paging and filters shared by key and translation listings.
#[derive(Args)]
pub(crate) struct ListArgs {
    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    pub(crate) page: u64,

    /// Results per page (defaults to the configured page size)
    #[arg(long)]
    pub(crate) size: Option<u64>,

    /// Only empty translations
    #[arg(long)]
    pub(crate) missing: bool,

    /// Only outdated translations
    #[arg(long)]
    pub(crate) outdated: bool,

    /// Only names containing this text
    #[arg(long)]
    pub(crate) search: Option<String>,

    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

impl ListArgs {
    pub(crate) fn query(&self, default_size: u64, approx: bool) -> ListQuery {
        ListQuery {
            page_index: self.page.max(1) - 1,
            page_size: self.size.unwrap_or(default_size).max(1),
            filter: ListFilter {
                missing: self.missing,
                outdated: self.outdated,
                approx,
                search_name: self.search.clone().unwrap_or_default(),
            },
        }
    }
}
