//! Wire types exchanged with the marketplace REST backend.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::page::Page;
use crate::domain::quote_request::{QuoteRequest, QuoteRequestFilter, QuoteSortKey};
use crate::domain::statistics::StatusCounts;
use crate::domain::types::{QuoteRequestId, TypeConstraintError};
use crate::repository::PageRequest;
use crate::repository::errors::{RepositoryError, RepositoryResult};

/// Message surfaced when the backend rejects a call without explaining why.
pub const DEFAULT_FAILURE_MESSAGE: &str = "요청을 처리하지 못했습니다.";

/// `{ success, data?, error? }` envelope wrapping every backend response.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Unwraps the payload, turning `success: false` into [`RepositoryError::Rejected`].
    pub fn into_result(self) -> RepositoryResult<T> {
        if !self.success {
            let message = self
                .error
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string());
            return Err(RepositoryError::Rejected(message));
        }
        self.data
            .ok_or_else(|| RepositoryError::Decode("response is missing `data`".to_string()))
    }
}

/// Page metadata and content as sent by the backend.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDto<T> {
    pub content: Vec<T>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_count: usize,
    pub is_last: bool,
}

impl<T> PageDto<T> {
    /// Converts every item, failing on the first one the domain rejects.
    pub fn try_into_page<U>(self) -> Result<Page<U>, TypeConstraintError>
    where
        U: TryFrom<T, Error = TypeConstraintError>,
    {
        let content = self
            .content
            .into_iter()
            .map(U::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Page::new(
            content,
            self.current_page,
            self.total_pages,
            self.total_count,
            self.is_last,
        ))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequestDto {
    pub id: i64,
    pub customer_name: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub construction_location: String,
    #[serde(default)]
    pub building_type: String,
    #[serde(default)]
    pub wallpaper_type: String,
    #[serde(default)]
    pub area_size: f64,
    pub request_date: NaiveDate,
    #[serde(default)]
    pub preferred_date: Option<NaiveDate>,
    #[serde(default)]
    pub special_info: Option<String>,
    pub status: String,
    #[serde(default)]
    pub answer_count: u32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<QuoteRequestDto> for QuoteRequest {
    type Error = TypeConstraintError;

    fn try_from(dto: QuoteRequestDto) -> Result<Self, Self::Error> {
        Ok(Self {
            id: QuoteRequestId::new(dto.id)?,
            customer_name: dto.customer_name,
            region: dto.region,
            construction_location: dto.construction_location,
            building_type: dto.building_type,
            wallpaper_type: dto.wallpaper_type,
            area_size: dto.area_size,
            request_date: dto.request_date,
            preferred_date: dto.preferred_date,
            special_info: dto
                .special_info
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            status: dto.status.parse()?,
            answer_count: dto.answer_count,
            created_at: dto.created_at,
            updated_at: dto.updated_at,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatusCountsDto {
    pub total_count: usize,
    pub reviewing_count: usize,
    pub adopted_count: usize,
    pub completed_count: usize,
    pub canceled_count: usize,
}

impl From<StatusCountsDto> for StatusCounts {
    fn from(dto: StatusCountsDto) -> Self {
        Self {
            total: dto.total_count,
            reviewing: dto.reviewing_count,
            adopted: dto.adopted_count,
            completed: dto.completed_count,
            canceled: dto.canceled_count,
        }
    }
}

/// Query string of the quote request list endpoint.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequestListParams<'a> {
    pub page: usize,
    pub size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_keyword: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<&'a str>,
    pub sort_by: &'static str,
    pub sort_direction: &'static str,
}

impl<'a> From<&'a PageRequest<QuoteRequestFilter, QuoteSortKey>> for QuoteRequestListParams<'a> {
    fn from(request: &'a PageRequest<QuoteRequestFilter, QuoteSortKey>) -> Self {
        Self {
            page: request.page,
            size: request.size.get(),
            search_keyword: request.search.as_ref().map(|s| s.as_str()),
            status: request.filter.status.map(|s| s.as_str()),
            region: request.filter.region.as_ref().map(|r| r.as_str()),
            sort_by: request.sort.by.as_str(),
            sort_direction: request.sort.order.as_str(),
        }
    }
}
