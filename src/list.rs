//! Server-side paginated, filtered listing of keys or translations.
//!
//! The controller performs no I/O: every state change that needs fresh data
//! hands back the [`ListQuery`] to issue, and the caller feeds the answer to
//! [`ListController::apply_page`].

use std::time::Instant;

use crate::model::{ListFilter, ListQuery, Listed, Page};

mod debounce;

pub use self::debounce::{Debounce, SEARCH_DEBOUNCE};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Backward,
    Forward,
}

/// Outcome of moving the selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    /// Select the item at this index of the loaded page.
    Select(usize),
    /// The move crossed a page boundary; load this page first.
    Query(ListQuery),
    /// Nothing to do (no selection, or at either end of the listing).
    Stay,
}

/// Where the listing stood before a move, put back when the move's request
/// fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    page_index: u64,
    current: Option<usize>,
    last_of_list: bool,
}

#[derive(Clone, Debug)]
pub struct ListController<T> {
    page_index: u64,
    page_size: u64,
    filter: ListFilter,
    tracks_approx: bool,
    search: Debounce<String>,

    items: Vec<T>,
    total_count: u64,
    pages_count: u64,
    current: Option<usize>,
    last_of_list: bool,
}

impl<T: Listed> ListController<T> {
    /// `tracks_approx` is set for translation listings, where the approximate
    /// filter takes part in the watched state.
    pub fn new(page_size: u64, tracks_approx: bool) -> Self {
        Self {
            page_index: 1,
            page_size: page_size.max(1),
            filter: ListFilter::default(),
            tracks_approx,
            search: Debounce::new(SEARCH_DEBOUNCE),
            items: Vec::new(),
            total_count: 0,
            pages_count: 0,
            current: None,
            last_of_list: false,
        }
    }

    /// Query for the current page with the current filters.
    pub fn query(&self) -> ListQuery {
        ListQuery {
            page_index: self.page_index.saturating_sub(1),
            page_size: self.page_size,
            filter: self.filter.clone(),
        }
    }

    pub fn page_index(&self) -> u64 {
        self.page_index
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn filter(&self) -> &ListFilter {
        &self.filter
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn pages_count(&self) -> u64 {
        self.pages_count
    }

    /// Pages needed for the last known result size at the current page size.
    pub fn num_pages(&self) -> u64 {
        self.total_count.div_ceil(self.page_size)
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current(&self) -> Option<&T> {
        self.current.and_then(|i| self.items.get(i))
    }

    pub fn last_of_list(&self) -> bool {
        self.last_of_list
    }

    pub fn set_page_index(&mut self, page_index: u64) -> Option<ListQuery> {
        let page_index = page_index.max(1);
        if page_index == self.page_index {
            return None;
        }
        self.page_index = page_index;
        Some(self.query())
    }

    pub fn set_page_size(&mut self, page_size: u64) -> Option<ListQuery> {
        let page_size = page_size.max(1);
        if page_size == self.page_size {
            return None;
        }
        self.page_size = page_size;
        Some(self.query())
    }

    pub fn set_missing(&mut self, missing: bool) -> Option<ListQuery> {
        if missing == self.filter.missing {
            return None;
        }
        self.filter.missing = missing;
        Some(self.query())
    }

    pub fn set_outdated(&mut self, outdated: bool) -> Option<ListQuery> {
        if outdated == self.filter.outdated {
            return None;
        }
        self.filter.outdated = outdated;
        Some(self.query())
    }

    /// Ignored by controllers that do not track the approximate filter.
    pub fn set_approx(&mut self, approx: bool) -> Option<ListQuery> {
        if !self.tracks_approx || approx == self.filter.approx {
            return None;
        }
        self.filter.approx = approx;
        Some(self.query())
    }

    /// Records a keystroke in the search box; restarts the quiet period.
    pub fn search_input(&mut self, text: &str, now: Instant) {
        self.search.push(text.to_string(), now);
    }

    pub fn search_deadline(&self) -> Option<Instant> {
        self.search.deadline()
    }

    pub fn search_pending(&self) -> bool {
        self.search.is_pending()
    }

    /// Once the quiet period elapsed: commits the search text and returns the
    /// query for the first page.
    pub fn poll_search(&mut self, now: Instant) -> Option<ListQuery> {
        let text = self.search.take_due(now)?;
        self.filter.search_name = text;
        self.page_index = 1;
        self.last_of_list = false;
        Some(self.query())
    }

    pub fn cancel_search(&mut self) {
        self.search.cancel();
    }

    /// Installs a freshly loaded page and returns the index to select: the
    /// first item, or the last one when the load came from stepping backward
    /// off the start of the next page.
    pub fn apply_page(&mut self, page: Page<T>) -> Option<usize> {
        self.total_count = page.total_count;
        self.pages_count = if page.pages_count > 0 {
            page.pages_count
        } else {
            page.num_pages()
        };
        self.items = page.items;

        if self.items.is_empty() {
            self.current = None;
            return None;
        }

        let index = if self.last_of_list {
            self.last_of_list = false;
            self.items.len() - 1
        } else {
            0
        };
        self.current = Some(index);
        Some(index)
    }

    pub fn select(&mut self, index: usize) -> Option<&T> {
        if index >= self.items.len() {
            return None;
        }
        self.current = Some(index);
        self.items.get(index)
    }

    pub fn deselect(&mut self) {
        self.current = None;
    }

    pub fn position(&self) -> Position {
        Position {
            page_index: self.page_index,
            current: self.current,
            last_of_list: self.last_of_list,
        }
    }

    pub fn restore(&mut self, position: Position) {
        self.page_index = position.page_index;
        self.current = position.current.filter(|i| *i < self.items.len());
        self.last_of_list = position.last_of_list;
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name() == name)
    }

    /// Moves the selection by one. Crossing a page edge changes the page
    /// index and asks for that page instead of selecting anything.
    pub fn navigate(&mut self, direction: Direction) -> Navigation {
        let Some(i) = self.current.filter(|i| *i < self.items.len()) else {
            return Navigation::Stay;
        };

        match direction {
            Direction::Backward => {
                if i > 0 {
                    self.current = Some(i - 1);
                    Navigation::Select(i - 1)
                } else if self.page_index > 1 {
                    self.last_of_list = true;
                    self.page_index -= 1;
                    Navigation::Query(self.query())
                } else {
                    Navigation::Stay
                }
            }
            Direction::Forward => {
                if i + 1 < self.items.len() {
                    self.current = Some(i + 1);
                    Navigation::Select(i + 1)
                } else if self.page_index < self.pages_count {
                    self.last_of_list = false;
                    self.page_index += 1;
                    Navigation::Query(self.query())
                } else {
                    Navigation::Stay
                }
            }
        }
    }

    /// Replaces the selected item (after an edit or a refetch).
    pub fn update_current(&mut self, item: T) {
        if let Some(slot) = self.current.and_then(|i| self.items.get_mut(i)) {
            *slot = item;
        }
    }

    pub fn push_item(&mut self, item: T) {
        self.items.push(item);
        self.total_count += 1;
    }

    /// Drops the named item from the loaded page; the selection is cleared
    /// when it pointed at it.
    pub fn remove_item(&mut self, name: &str) -> Option<T> {
        let index = self.index_of(name)?;
        let removed = self.items.remove(index);
        self.total_count = self.total_count.saturating_sub(1);
        self.current = match self.current {
            Some(c) if c == index => None,
            Some(c) if c > index => Some(c - 1),
            other => other,
        };
        Some(removed)
    }

    /// After deleting everything that matched the filter: back to the first
    /// page with the same filters.
    pub fn query_after_bulk_delete(&mut self) -> ListQuery {
        self.page_index = 1;
        self.last_of_list = false;
        self.query()
    }
}

#[cfg(test)]
#[path = "tests/list_tests.rs"]
mod tests;
