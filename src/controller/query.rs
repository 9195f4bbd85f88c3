use crate::domain::types::{NonEmptyString, PageSize};
use crate::repository::{PageRequest, Sort, SortOrder};

/// User-driven query of a list screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQueryState<F, K> {
    /// Search input as typed; trimmed only when the request is built.
    pub search_term: String,
    pub filter: F,
    pub sort: Sort<K>,
    /// Zero-based page index.
    pub current_page: usize,
    pub page_size: PageSize,
}

impl<F: Default, K: Default> Default for ListQueryState<F, K> {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            filter: F::default(),
            sort: Sort::default(),
            current_page: 0,
            page_size: PageSize::default(),
        }
    }
}

impl<F, K> ListQueryState<F, K> {
    pub fn search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
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

    pub fn page(mut self, page: usize) -> Self {
        self.current_page = page;
        self
    }

    pub fn page_size(mut self, size: PageSize) -> Self {
        self.page_size = size;
        self
    }
}

impl<F: Clone, K: Copy> ListQueryState<F, K> {
    /// Builds the retrieval parameters for the current page.
    pub fn to_request(&self) -> PageRequest<F, K> {
        PageRequest {
            page: self.current_page,
            size: self.page_size,
            search: NonEmptyString::new(self.search_term.as_str()).ok(),
            filter: self.filter.clone(),
            sort: self.sort,
        }
    }
}
