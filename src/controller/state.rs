use crate::controller::query::ListQueryState;
use crate::domain::page::Page;
use crate::pagination::page_links;
use crate::repository::errors::RepositoryError;

/// What the presentation layer should render for a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListViewState {
    /// A retrieval is in flight.
    Loading,
    /// The last retrieval failed; the list is empty.
    Failed,
    /// The last retrieval succeeded without matches.
    Empty,
    Ready,
}

/// Everything a list screen needs to render, published on every change.
#[derive(Debug, Clone)]
pub struct ListSnapshot<T, F, K> {
    pub query: ListQueryState<F, K>,
    pub page: Page<T>,
    pub loading: bool,
    pub error: Option<RepositoryError>,
}

impl<T, F, K> ListSnapshot<T, F, K> {
    pub fn new(query: ListQueryState<F, K>) -> Self {
        Self {
            query,
            page: Page::empty(),
            loading: false,
            error: None,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.page.content
    }

    pub fn current_page(&self) -> usize {
        self.query.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.page.total_pages
    }

    pub fn total_count(&self) -> usize {
        self.page.total_count
    }

    pub fn has_previous(&self) -> bool {
        self.current_page() > 0
    }

    pub fn has_next(&self) -> bool {
        self.current_page() + 1 < self.total_pages()
    }

    pub fn view_state(&self) -> ListViewState {
        if self.loading {
            ListViewState::Loading
        } else if self.error.is_some() {
            ListViewState::Failed
        } else if self.page.is_empty() {
            ListViewState::Empty
        } else {
            ListViewState::Ready
        }
    }

    /// Zero-based page buttons with `None` for elided ranges.
    pub fn page_links(&self) -> Vec<Option<usize>> {
        page_links(self.total_pages(), self.current_page())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(page: Page<u32>) -> ListSnapshot<u32, (), ()> {
        let mut snapshot = ListSnapshot::new(ListQueryState::default());
        snapshot.query.current_page = page.current_page;
        snapshot.page = page;
        snapshot
    }

    #[test]
    fn failure_is_distinguished_from_no_matches() {
        let mut failed = snapshot(Page::empty());
        failed.error = Some(RepositoryError::Rejected("실패".into()));
        let empty = snapshot(Page::empty());

        assert_eq!(failed.view_state(), ListViewState::Failed);
        assert_eq!(empty.view_state(), ListViewState::Empty);
    }

    #[test]
    fn loading_takes_precedence() {
        let mut loading = snapshot(Page::new(vec![1, 2], 0, 1, 2, true));
        loading.loading = true;

        assert_eq!(loading.view_state(), ListViewState::Loading);
    }

    #[test]
    fn navigation_flags_follow_page_metadata() {
        let middle = snapshot(Page::new(vec![1], 1, 3, 21, false));
        assert!(middle.has_previous());
        assert!(middle.has_next());

        let last = snapshot(Page::new(vec![1], 2, 3, 21, true));
        assert!(!last.has_next());
        assert_eq!(last.page_links(), vec![Some(0), Some(1), Some(2)]);
    }
}
