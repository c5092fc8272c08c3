use serde::{Deserialize, Serialize};

/// Filter predicates shared by key and translation listings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFilter {
    #[serde(default)]
    pub missing: bool,

    #[serde(default)]
    pub outdated: bool,

    #[serde(default)]
    pub approx: bool,

    #[serde(default)]
    pub search_name: String,
}

impl ListFilter {
    pub fn is_unfiltered(&self) -> bool {
        !self.missing && !self.outdated && !self.approx && self.search_name.trim().is_empty()
    }

    /// Query parameters for the filter alone. Unset booleans and blank search
    /// text are left out so the server does not filter on them.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if self.missing {
            pairs.push(("isMissing", "true".to_string()));
        }
        if self.outdated {
            pairs.push(("isOutdated", "true".to_string()));
        }
        if self.approx {
            pairs.push(("isApprox", "true".to_string()));
        }
        let search = self.search_name.trim();
        if !search.is_empty() {
            pairs.push(("searchName", search.to_string()));
        }
        pairs
    }
}

/// A request for one page of a filtered listing (0-based page index).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub page_index: u64,
    pub page_size: u64,
    pub filter: ListFilter,
}

impl ListQuery {
    pub fn first_page(page_size: u64, filter: ListFilter) -> Self {
        Self {
            page_index: 0,
            page_size,
            filter,
        }
    }

    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("pageIndex", self.page_index.to_string()),
            ("pageSize", self.page_size.to_string()),
        ];
        pairs.extend(self.filter.to_query_pairs());
        pairs
    }
}
