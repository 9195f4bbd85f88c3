use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::page::Page;
use crate::domain::quote_request::{QuoteRequest, QuoteRequestFilter, QuoteSortKey};
use crate::domain::statistics::StatusCounts;
use crate::domain::types::{NonEmptyString, PageSize};
use crate::repository::errors::RepositoryResult;

pub mod errors;
#[cfg(feature = "http")]
pub mod http;
#[cfg(feature = "test-mocks")]
pub mod mock;

/// Direction applied to the sort key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub const fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Sort<K> {
    pub by: K,
    pub order: SortOrder,
}

impl<K> Sort<K> {
    pub fn new(by: K, order: SortOrder) -> Self {
        Self { by, order }
    }
}

/// Parameters of a single page retrieval.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRequest<F, K> {
    /// Zero-based page index.
    pub page: usize,
    pub size: PageSize,
    /// Trimmed search keyword; blank input is never sent.
    pub search: Option<NonEmptyString>,
    pub filter: F,
    pub sort: Sort<K>,
}

impl<F: Default, K: Default> Default for PageRequest<F, K> {
    fn default() -> Self {
        Self {
            page: 0,
            size: PageSize::default(),
            search: None,
            filter: F::default(),
            sort: Sort::default(),
        }
    }
}

impl<F, K> PageRequest<F, K> {
    pub fn search(mut self, term: &str) -> Self {
        self.search = NonEmptyString::new(term).ok();
        self
    }

    pub fn filter(mut self, filter: F) -> Self {
        self.filter = filter;
        self
    }

    pub fn sort(mut self, by: K, order: SortOrder) -> Self {
        self.sort = Sort::new(by, order);
        self
    }

    pub fn paginate(mut self, page: usize, size: PageSize) -> Self {
        self.page = page;
        self.size = size;
        self
    }
}

/// Backend call returning one page of a filtered, sorted list.
///
/// The associated `Filter` and `SortKey` types describe the filter schema of
/// the screen the source backs.
#[async_trait]
pub trait ListSource: Send + Sync + 'static {
    type Item: Clone + Debug + Send + Sync + 'static;
    type Filter: Clone + Debug + Default + PartialEq + Send + Sync + 'static;
    type SortKey: Copy + Debug + Default + PartialEq + Send + Sync + 'static;

    async fn fetch_page(
        &self,
        request: &PageRequest<Self::Filter, Self::SortKey>,
    ) -> RepositoryResult<Page<Self::Item>>;
}

#[async_trait]
impl<S: ListSource> ListSource for Arc<S> {
    type Item = S::Item;
    type Filter = S::Filter;
    type SortKey = S::SortKey;

    async fn fetch_page(
        &self,
        request: &PageRequest<Self::Filter, Self::SortKey>,
    ) -> RepositoryResult<Page<Self::Item>> {
        (**self).fetch_page(request).await
    }
}

/// List source backing the quote request screens.
pub trait QuoteRequestSource:
    ListSource<Item = QuoteRequest, Filter = QuoteRequestFilter, SortKey = QuoteSortKey>
{
}

impl<T> QuoteRequestSource for T where
    T: ListSource<Item = QuoteRequest, Filter = QuoteRequestFilter, SortKey = QuoteSortKey>
{
}

/// Backend call returning aggregate counts per status.
#[async_trait]
pub trait StatusCountsReader: Send + Sync + 'static {
    async fn fetch_status_counts(&self) -> RepositoryResult<StatusCounts>;
}

#[async_trait]
impl<R: StatusCountsReader> StatusCountsReader for Arc<R> {
    async fn fetch_status_counts(&self) -> RepositoryResult<StatusCounts> {
        (**self).fetch_status_counts().await
    }
}
