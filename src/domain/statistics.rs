use serde::{Deserialize, Serialize};

use crate::domain::quote_request::QuoteStatus;

/// Aggregate number of quote requests per status.
///
/// Fetched independently of the paged list, so the numbers describe every
/// request regardless of the filter currently applied to the list.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusCounts {
    pub total: usize,
    pub reviewing: usize,
    pub adopted: usize,
    pub completed: usize,
    pub canceled: usize,
}

impl StatusCounts {
    /// Returns the counter tracked for `status`, when the backend reports one.
    pub fn count_for(&self, status: QuoteStatus) -> Option<usize> {
        match status {
            QuoteStatus::Reviewing => Some(self.reviewing),
            QuoteStatus::Adopted => Some(self.adopted),
            QuoteStatus::Cancelled => Some(self.canceled),
            QuoteStatus::InProgress => None,
        }
    }
}
