use serde::Serialize;

use crate::domain::types::TypeConstraintError;

/// One page of items returned by a list source together with its metadata.
///
/// A page is replaced wholesale on every successful load and never merged
/// with previously fetched pages.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Page<T> {
    pub content: Vec<T>,
    /// Zero-based index of this page.
    pub current_page: usize,
    pub total_pages: usize,
    pub total_count: usize,
    pub is_last: bool,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Page<T> {
    pub fn new(
        content: Vec<T>,
        current_page: usize,
        total_pages: usize,
        total_count: usize,
        is_last: bool,
    ) -> Self {
        Self {
            content,
            current_page,
            total_pages,
            total_count,
            is_last,
        }
    }

    /// A page with no items and zeroed counters.
    pub fn empty() -> Self {
        Self {
            content: Vec::new(),
            current_page: 0,
            total_pages: 0,
            total_count: 0,
            is_last: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Checks the page against the size it was requested with.
    pub fn validate(&self, page_size: usize) -> Result<(), TypeConstraintError> {
        if self.content.len() > page_size {
            return Err(TypeConstraintError::InvalidValue(format!(
                "page holds {} items but {page_size} were requested",
                self.content.len()
            )));
        }
        if self.total_count > 0 && self.current_page >= self.total_pages {
            return Err(TypeConstraintError::InvalidValue(format!(
                "page {} is outside of {} pages",
                self.current_page, self.total_pages
            )));
        }
        Ok(())
    }
}
