use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;

use wallpaper_quotes::domain::page::Page;
use wallpaper_quotes::domain::quote_request::{
    QuoteRequest, QuoteRequestFilter, QuoteSortKey, QuoteStatus,
};
use wallpaper_quotes::domain::types::QuoteRequestId;
use wallpaper_quotes::repository::errors::{RepositoryError, RepositoryResult};
use wallpaper_quotes::repository::{ListSource, PageRequest};

pub type QuotePageRequest = PageRequest<QuoteRequestFilter, QuoteSortKey>;

pub fn quote_request(id: i64, status: QuoteStatus, region: &str) -> QuoteRequest {
    let date = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
    let timestamp = date.and_hms_opt(10, 30, 0).unwrap();
    QuoteRequest {
        id: QuoteRequestId::new(id).unwrap(),
        customer_name: format!("고객 {id}"),
        region: region.to_string(),
        construction_location: format!("{region} {id}번지"),
        building_type: "아파트".to_string(),
        wallpaper_type: "실크".to_string(),
        area_size: 20.0 + id as f64,
        request_date: date,
        preferred_date: None,
        special_info: None,
        status,
        answer_count: (id % 4) as u32,
        created_at: timestamp,
        updated_at: timestamp,
    }
}

/// 23 requests: ids 1-15 are under review, the rest spread over the other
/// statuses. Odd ids are in 서울, even ids in 부산.
pub fn quote_requests() -> Vec<QuoteRequest> {
    (1..=23)
        .map(|id| {
            let status = match id {
                1..=15 => QuoteStatus::Reviewing,
                16..=18 => QuoteStatus::InProgress,
                19..=21 => QuoteStatus::Adopted,
                _ => QuoteStatus::Cancelled,
            };
            let region = if id % 2 == 1 { "서울" } else { "부산" };
            quote_request(id, status, region)
        })
        .collect()
}

/// In-memory backend recording every request it serves.
#[derive(Default)]
pub struct FakeQuoteSource {
    items: Vec<QuoteRequest>,
    requests: Mutex<Vec<QuotePageRequest>>,
    delays: Mutex<VecDeque<Duration>>,
    failures: Mutex<VecDeque<RepositoryError>>,
}

impl FakeQuoteSource {
    pub fn new(items: Vec<QuoteRequest>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Delays the response to the next request.
    pub fn delay_next(&self, delay: Duration) {
        self.delays.lock().unwrap().push_back(delay);
    }

    /// Fails the next request with `err`.
    pub fn fail_next(&self, err: RepositoryError) {
        self.failures.lock().unwrap().push_back(err);
    }

    pub fn requests(&self) -> Vec<QuotePageRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> QuotePageRequest {
        self.requests.lock().unwrap().last().cloned().unwrap()
    }

    fn matches(request: &QuotePageRequest, item: &QuoteRequest) -> bool {
        let status_matches = request.filter.status.is_none_or(|s| s == item.status);
        let region_matches = request
            .filter
            .region
            .as_ref()
            .is_none_or(|r| r.as_str() == item.region);
        let search_matches = request.search.as_ref().is_none_or(|term| {
            item.customer_name.contains(term.as_str())
                || item.construction_location.contains(term.as_str())
        });
        status_matches && region_matches && search_matches
    }
}

#[async_trait]
impl ListSource for FakeQuoteSource {
    type Item = QuoteRequest;
    type Filter = QuoteRequestFilter;
    type SortKey = QuoteSortKey;

    async fn fetch_page(&self, request: &QuotePageRequest) -> RepositoryResult<Page<QuoteRequest>> {
        self.requests.lock().unwrap().push(request.clone());

        let delay = self.delays.lock().unwrap().pop_front();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let failure = self.failures.lock().unwrap().pop_front();
        if let Some(err) = failure {
            return Err(err);
        }

        let matching: Vec<_> = self
            .items
            .iter()
            .filter(|item| Self::matches(request, item))
            .cloned()
            .collect();
        let size = request.size.get();
        let total_count = matching.len();
        let total_pages = total_count.div_ceil(size);
        let content = matching
            .into_iter()
            .skip(request.page * size)
            .take(size)
            .collect();

        Ok(Page::new(
            content,
            request.page,
            total_pages,
            total_count,
            request.page + 1 >= total_pages,
        ))
    }
}
