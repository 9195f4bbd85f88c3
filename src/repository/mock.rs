//! Mock sources for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::domain::page::Page;
use crate::domain::quote_request::{QuoteRequest, QuoteRequestFilter, QuoteSortKey};
use crate::domain::statistics::StatusCounts;
use crate::repository::errors::RepositoryResult;
use crate::repository::{ListSource, PageRequest, StatusCountsReader};

mock! {
    pub QuoteRequestRepository {}

    #[async_trait]
    impl ListSource for QuoteRequestRepository {
        type Item = QuoteRequest;
        type Filter = QuoteRequestFilter;
        type SortKey = QuoteSortKey;

        async fn fetch_page(
            &self,
            request: &PageRequest<QuoteRequestFilter, QuoteSortKey>,
        ) -> RepositoryResult<Page<QuoteRequest>>;
    }

    #[async_trait]
    impl StatusCountsReader for QuoteRequestRepository {
        async fn fetch_status_counts(&self) -> RepositoryResult<StatusCounts>;
    }
}
