//! Generic controller behind every filterable, paged list screen.
//!
//! A [`ListController`] owns the query of one mounted screen (search term,
//! filter, sort, page) and the page last retrieved for it. Query setters
//! schedule a debounced reload; page navigation and refresh load at once.
//! State is published through a [`tokio::sync::watch`] channel so the
//! presentation layer re-renders on every change.
//!
//! Each load takes a generation ticket under the state lock, and every query
//! change retires the current ticket. Only the response to the most recent
//! load issued for the current query is applied; the rest are dropped.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::watch;

use crate::debounce::{Debouncer, Pending};
use crate::domain::page::Page;
use crate::domain::quote_request::{QuoteRequestFilter, QuoteStatus};
use crate::domain::types::{NonEmptyString, PageSize};
use crate::repository::errors::RepositoryResult;
use crate::repository::{ListSource, Sort, SortOrder};

pub mod query;
pub mod state;

pub use query::ListQueryState;
pub use state::{ListSnapshot, ListViewState};

/// Quiet period after the last query change before the list reloads.
pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

pub type QueryOf<S> = ListQueryState<<S as ListSource>::Filter, <S as ListSource>::SortKey>;
pub type SnapshotOf<S> = ListSnapshot<
    <S as ListSource>::Item,
    <S as ListSource>::Filter,
    <S as ListSource>::SortKey,
>;

/// Result of a single load cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The page replaced the previous one.
    Loaded,
    /// The list was cleared and the error recorded.
    Failed,
    /// A newer load or a query change came first; the response was dropped.
    Superseded,
}

struct Shared<S: ListSource> {
    source: S,
    state: watch::Sender<SnapshotOf<S>>,
    generation: AtomicU64,
}

impl<S: ListSource> Shared<S> {
    async fn reload(&self) -> LoadOutcome {
        let query = self.state.borrow().query.clone();
        self.load(query).await
    }

    async fn load(&self, query: QueryOf<S>) -> LoadOutcome {
        let request = query.to_request();
        let mut ticket = 0;
        self.state.send_modify(|snapshot| {
            ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            snapshot.query = query;
            snapshot.loading = true;
        });
        log::debug!(
            "Loading page {} of {} items (request #{ticket})",
            request.page,
            request.size
        );

        let result: RepositoryResult<Page<S::Item>> =
            match self.source.fetch_page(&request).await {
                Ok(page) => page
                    .validate(request.size.get())
                    .map(|()| page)
                    .map_err(Into::into),
                Err(err) => Err(err),
            };

        let mut outcome = LoadOutcome::Superseded;
        self.state.send_if_modified(|snapshot| {
            if self.generation.load(Ordering::SeqCst) != ticket {
                return false;
            }
            snapshot.loading = false;
            match result {
                Ok(page) => {
                    snapshot.query.current_page = page.current_page;
                    snapshot.page = page;
                    snapshot.error = None;
                    outcome = LoadOutcome::Loaded;
                }
                Err(err) => {
                    log::error!("Failed to load page {}: {err}", request.page);
                    snapshot.query.current_page = 0;
                    snapshot.page = Page::empty();
                    snapshot.error = Some(err);
                    outcome = LoadOutcome::Failed;
                }
            }
            true
        });

        if outcome == LoadOutcome::Superseded {
            log::debug!("Dropping response to superseded request #{ticket}");
        }
        outcome
    }
}

/// Drives one list screen over a [`ListSource`].
///
/// Setters and navigation must be called from within a Tokio runtime.
pub struct ListController<S: ListSource> {
    shared: Arc<Shared<S>>,
    debouncer: Debouncer<LoadOutcome>,
}

impl<S: ListSource> ListController<S> {
    pub fn new(source: S) -> Self {
        Self::with_query(source, ListQueryState::default(), DEFAULT_SEARCH_DEBOUNCE)
    }

    pub fn with_query(source: S, query: QueryOf<S>, delay: Duration) -> Self {
        let (state, _) = watch::channel(ListSnapshot::new(query));
        Self {
            shared: Arc::new(Shared {
                source,
                state,
                generation: AtomicU64::new(0),
            }),
            debouncer: Debouncer::new(delay),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<SnapshotOf<S>> {
        self.shared.state.subscribe()
    }

    pub fn snapshot(&self) -> SnapshotOf<S> {
        self.shared.state.borrow().clone()
    }

    pub fn query(&self) -> QueryOf<S> {
        self.shared.state.borrow().query.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.shared.state.borrow().loading
    }

    /// Whether a debounced reload is waiting or running.
    pub fn has_pending_reload(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn set_search_term(&self, value: impl Into<String>) {
        let value = value.into();
        self.update_query(|query| {
            if query.search_term == value {
                return false;
            }
            query.search_term = value;
            true
        });
    }

    /// Edits the filter in place; no reload is scheduled when nothing changed.
    pub fn update_filter(&self, edit: impl FnOnce(&mut S::Filter)) {
        self.update_query(|query| {
            let mut filter = query.filter.clone();
            edit(&mut filter);
            if filter == query.filter {
                return false;
            }
            query.filter = filter;
            true
        });
    }

    pub fn set_sort(&self, by: S::SortKey, order: SortOrder) {
        let sort = Sort::new(by, order);
        self.update_query(|query| {
            if query.sort == sort {
                return false;
            }
            query.sort = sort;
            true
        });
    }

    pub fn set_page_size(&self, size: PageSize) {
        self.update_query(|query| {
            if query.page_size == size {
                return false;
            }
            query.page_size = size;
            true
        });
    }

    /// Loads page `page` immediately with the current filter and sort.
    ///
    /// Returns `false` without touching the backend when the page is out of
    /// range or already shown.
    pub async fn go_to_page(&self, page: usize) -> bool {
        let query = {
            let snapshot = self.shared.state.borrow();
            if page >= snapshot.page.total_pages || page == snapshot.query.current_page {
                return false;
            }
            snapshot.query.clone().page(page)
        };

        self.debouncer.cancel();
        self.shared.load(query).await;
        true
    }

    pub async fn next_page(&self) -> bool {
        let current = self.query().current_page;
        self.go_to_page(current + 1).await
    }

    pub async fn previous_page(&self) -> bool {
        match self.query().current_page.checked_sub(1) {
            Some(page) => self.go_to_page(page).await,
            None => false,
        }
    }

    /// Re-issues the retrieval for the current query, keeping page and filters.
    pub async fn refresh(&self) -> LoadOutcome {
        self.debouncer.cancel();
        self.shared.reload().await
    }

    /// Replaces the whole query and loads it.
    pub async fn load(&self, query: QueryOf<S>) -> LoadOutcome {
        self.debouncer.cancel();
        self.shared.load(query).await
    }

    /// Runs a pending debounced reload right away, or waits for the one
    /// already in flight. `None` when no reload was pending.
    pub async fn flush(&self) -> Option<LoadOutcome> {
        match self.debouncer.take()? {
            Pending::Waiting => Some(self.shared.reload().await),
            Pending::Running(reload) => reload.await.ok(),
        }
    }

    fn update_query(&self, change: impl FnOnce(&mut QueryOf<S>) -> bool) {
        let changed = self.shared.state.send_if_modified(|snapshot| {
            if !change(&mut snapshot.query) {
                return false;
            }
            // A response in flight belongs to the old query.
            self.shared.generation.fetch_add(1, Ordering::SeqCst);
            snapshot.query.current_page = 0;
            true
        });

        if changed {
            let shared = Arc::clone(&self.shared);
            self.debouncer.call(async move { shared.reload().await });
        }
    }
}

impl<S> ListController<S>
where
    S: ListSource<Filter = QuoteRequestFilter>,
{
    /// `None` lists requests in every status.
    pub fn set_status_filter(&self, status: Option<QuoteStatus>) {
        self.update_filter(|filter| filter.status = status);
    }

    /// `None` lists requests from every region.
    pub fn set_region_filter(&self, region: Option<NonEmptyString>) {
        self.update_filter(|filter| filter.region = region);
    }
}
