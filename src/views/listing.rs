use std::future::Future;
use std::time::Instant;

use crate::editor::{CurrentItem, Editable, ItemState};
use crate::interact::Confirm;
use crate::list::{Direction, ListController, Navigation};
use crate::model::{Key, ListQuery, Listed, Page, Translation};
use crate::remote::{ApiResult, RemoteClient};

/// Where a listing gets its pages and records from.
pub trait ListSource: Send + Sync {
    type Item: Editable + Send + Sync;

    fn fetch_page(
        &self,
        query: &ListQuery,
    ) -> impl Future<Output = ApiResult<Page<Self::Item>>> + Send;

    fn fetch_one(&self, name: &str) -> impl Future<Output = ApiResult<Self::Item>> + Send;

    fn save(&self, item: &Self::Item) -> impl Future<Output = ApiResult<()>> + Send;
}

#[derive(Clone, Debug)]
pub struct KeySource {
    remote: RemoteClient,
}

impl KeySource {
    pub fn new(remote: RemoteClient) -> Self {
        Self { remote }
    }
}

impl ListSource for KeySource {
    type Item = Key;

    async fn fetch_page(&self, query: &ListQuery) -> ApiResult<Page<Key>> {
        self.remote.list_keys(query).await
    }

    async fn fetch_one(&self, name: &str) -> ApiResult<Key> {
        self.remote.get_key(name).await
    }

    async fn save(&self, item: &Key) -> ApiResult<()> {
        self.remote.update_key(item).await
    }
}

/// Translations into one target locale.
#[derive(Clone, Debug)]
pub struct TranslationSource {
    remote: RemoteClient,
    locale: String,
}

impl TranslationSource {
    pub fn new(remote: RemoteClient, locale: impl Into<String>) -> Self {
        Self {
            remote,
            locale: locale.into(),
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }
}

impl ListSource for TranslationSource {
    type Item = Translation;

    async fn fetch_page(&self, query: &ListQuery) -> ApiResult<Page<Translation>> {
        self.remote.list_translations(&self.locale, query).await
    }

    async fn fetch_one(&self, name: &str) -> ApiResult<Translation> {
        self.remote.get_translation(&self.locale, name).await
    }

    async fn save(&self, item: &Translation) -> ApiResult<()> {
        self.remote.update_translation(&self.locale, item).await
    }
}

/// A paginated listing bound to its source, with the record being edited.
///
/// Setters that change the watched state reload the page; the `bool` they
/// return says whether a request went out.
pub struct Listing<S: ListSource> {
    source: S,
    list: ListController<S::Item>,
    current: CurrentItem<S::Item>,
}

impl<S: ListSource> Listing<S> {
    pub fn new(source: S, page_size: u64, tracks_approx: bool) -> Self {
        Self {
            source,
            list: ListController::new(page_size, tracks_approx),
            current: CurrentItem::new(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn list(&self) -> &ListController<S::Item> {
        &self.list
    }

    pub fn current(&self) -> &CurrentItem<S::Item> {
        &self.current
    }

    pub(crate) fn list_mut(&mut self) -> &mut ListController<S::Item> {
        &mut self.list
    }

    pub(crate) fn current_mut(&mut self) -> &mut CurrentItem<S::Item> {
        &mut self.current
    }

    /// Reloads the current page with the current filters.
    pub async fn refresh(&mut self) -> ApiResult<()> {
        let query = self.list.query();
        self.load(query).await
    }

    pub(crate) async fn load(&mut self, query: ListQuery) -> ApiResult<()> {
        let page = self.source.fetch_page(&query).await?;
        self.show_page(&query, page).await
    }

    /// Installs a fetched page and selects its first (or last) item. A failed
    /// record fetch leaves the page loaded with nothing selected.
    async fn show_page(&mut self, query: &ListQuery, page: Page<S::Item>) -> ApiResult<()> {
        tracing::debug!(
            page = query.page_index,
            items = page.items.len(),
            total = page.total_count,
            "page loaded"
        );
        match self.list.apply_page(page) {
            Some(index) => {
                let selected = self.select(index).await;
                if selected.is_err() {
                    self.list.deselect();
                    self.current.unset();
                }
                selected
            }
            None => {
                self.current.unset();
                Ok(())
            }
        }
    }

    async fn load_if(&mut self, query: Option<ListQuery>) -> ApiResult<bool> {
        match query {
            Some(query) => {
                self.load(query).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub async fn set_page_index(&mut self, page_index: u64) -> ApiResult<bool> {
        let query = self.list.set_page_index(page_index);
        self.load_if(query).await
    }

    pub async fn set_page_size(&mut self, page_size: u64) -> ApiResult<bool> {
        let query = self.list.set_page_size(page_size);
        self.load_if(query).await
    }

    pub async fn set_missing(&mut self, missing: bool) -> ApiResult<bool> {
        let query = self.list.set_missing(missing);
        self.load_if(query).await
    }

    pub async fn set_outdated(&mut self, outdated: bool) -> ApiResult<bool> {
        let query = self.list.set_outdated(outdated);
        self.load_if(query).await
    }

    pub async fn set_approx(&mut self, approx: bool) -> ApiResult<bool> {
        let query = self.list.set_approx(approx);
        self.load_if(query).await
    }

    pub fn search_input(&mut self, text: &str, now: Instant) {
        self.list.search_input(text, now);
    }

    pub fn search_deadline(&self) -> Option<Instant> {
        self.list.search_deadline()
    }

    /// Runs the debounced search once its quiet period is over.
    pub async fn poll_search(&mut self, now: Instant) -> ApiResult<bool> {
        let query = self.list.poll_search(now);
        self.load_if(query).await
    }

    /// Selects an item of the loaded page and refreshes it from the server.
    /// The selection only moves once the record arrived.
    pub async fn select(&mut self, index: usize) -> ApiResult<()> {
        let Some(listed) = self.list.items().get(index).cloned() else {
            return Ok(());
        };
        let fetched = self.source.fetch_one(listed.name()).await?;
        self.list.select(index);
        self.current.set_current(listed, fetched);
        Ok(())
    }

    /// Moves the selection by one, loading the neighbouring page at a page
    /// edge. On failure the page position and selection stay where they were.
    pub async fn navigate(&mut self, direction: Direction) -> ApiResult<()> {
        let position = self.list.position();
        match self.list.navigate(direction) {
            Navigation::Select(index) => {
                let selected = self.select(index).await;
                if selected.is_err() {
                    self.list.restore(position);
                }
                selected
            }
            Navigation::Query(query) => match self.source.fetch_page(&query).await {
                Ok(page) => self.show_page(&query, page).await,
                Err(err) => {
                    self.list.restore(position);
                    Err(err)
                }
            },
            Navigation::Stay => Ok(()),
        }
    }

    pub fn set_translation(&mut self, text: &str) -> Option<ItemState> {
        self.current.set_translation(text)
    }

    pub fn set_comment(&mut self, text: &str) -> Option<ItemState> {
        self.current.set_comment(text)
    }

    pub fn clear(&mut self, confirm: &dyn Confirm) -> bool {
        self.current.clear(confirm)
    }

    /// Sends the edited record. `false` when nothing is selected.
    pub async fn save(&mut self) -> ApiResult<bool> {
        let Some(item) = self.current.item().cloned() else {
            return Ok(false);
        };
        self.source.save(&item).await?;
        self.list.update_current(item);
        Ok(true)
    }
}
