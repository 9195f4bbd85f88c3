use std::fmt::Display;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::types::{NonEmptyString, QuoteRequestId, TypeConstraintError};

/// Wallpapering job submitted by a customer and answered by professionals.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct QuoteRequest {
    pub id: QuoteRequestId,
    pub customer_name: String,
    pub region: String,
    pub construction_location: String,
    pub building_type: String,
    pub wallpaper_type: String,
    /// Area to cover, as entered by the customer.
    pub area_size: f64,
    pub request_date: NaiveDate,
    pub preferred_date: Option<NaiveDate>,
    pub special_info: Option<String>,
    pub status: QuoteStatus,
    /// Number of quotes professionals have submitted so far.
    pub answer_count: u32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Lifecycle of a quote request.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum QuoteStatus {
    #[serde(rename = "검토중")]
    Reviewing,
    #[serde(rename = "진행중")]
    InProgress,
    #[serde(rename = "채택 성공")]
    Adopted,
    #[serde(rename = "취소")]
    Cancelled,
}

impl QuoteStatus {
    pub const ALL: [QuoteStatus; 4] = [
        QuoteStatus::Reviewing,
        QuoteStatus::InProgress,
        QuoteStatus::Adopted,
        QuoteStatus::Cancelled,
    ];

    /// Tag used by the backend for this status.
    pub const fn as_str(self) -> &'static str {
        match self {
            QuoteStatus::Reviewing => "검토중",
            QuoteStatus::InProgress => "진행중",
            QuoteStatus::Adopted => "채택 성공",
            QuoteStatus::Cancelled => "취소",
        }
    }

    /// Text shown to customers on status badges and filter selects.
    pub const fn label(self) -> &'static str {
        match self {
            QuoteStatus::Reviewing => "검토 중",
            QuoteStatus::InProgress => "진행 중",
            QuoteStatus::Adopted => "채택 완료",
            QuoteStatus::Cancelled => "취소됨",
        }
    }

    /// Whether the request can still receive new quotes.
    pub const fn is_open(self) -> bool {
        matches!(self, QuoteStatus::Reviewing | QuoteStatus::InProgress)
    }
}

impl Display for QuoteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for QuoteStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuoteStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s.trim())
            .ok_or_else(|| TypeConstraintError::InvalidValue(format!("unknown status `{s}`")))
    }
}

/// Sentinel used by filter selects for "no restriction".
pub const ALL_FILTER: &str = "all";

/// Filter schema of the quote request listing screens.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuoteRequestFilter {
    /// `None` lists requests in every status.
    pub status: Option<QuoteStatus>,
    /// `None` lists requests from every region.
    pub region: Option<NonEmptyString>,
}

impl QuoteRequestFilter {
    pub fn status(mut self, status: QuoteStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn region(mut self, region: NonEmptyString) -> Self {
        self.region = Some(region);
        self
    }
}

/// Parses a status select value, mapping the `all` sentinel to `None`.
pub fn parse_status_filter(value: &str) -> Result<Option<QuoteStatus>, TypeConstraintError> {
    let value = value.trim();
    if value.is_empty() || value == ALL_FILTER {
        return Ok(None);
    }
    value.parse().map(Some)
}

/// Parses a region select value, mapping the `all` sentinel and blanks to `None`.
pub fn parse_region_filter(value: &str) -> Option<NonEmptyString> {
    NonEmptyString::new(value)
        .ok()
        .filter(|region| region.as_str() != ALL_FILTER)
}

/// Sort keys offered by the quote request listing screens.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum QuoteSortKey {
    #[default]
    Latest,
    Area,
    Date,
    Status,
    Quotes,
}

impl QuoteSortKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            QuoteSortKey::Latest => "latest",
            QuoteSortKey::Area => "area",
            QuoteSortKey::Date => "date",
            QuoteSortKey::Status => "status",
            QuoteSortKey::Quotes => "quotes",
        }
    }
}

impl Display for QuoteSortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for QuoteSortKey {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "latest" => Ok(QuoteSortKey::Latest),
            "area" => Ok(QuoteSortKey::Area),
            "date" => Ok(QuoteSortKey::Date),
            "status" => Ok(QuoteSortKey::Status),
            "quotes" => Ok(QuoteSortKey::Quotes),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown sort key `{other}`"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_backend_tag() {
        for status in QuoteStatus::ALL {
            assert_eq!(status.as_str().parse::<QuoteStatus>(), Ok(status));
        }
        assert!("완료".parse::<QuoteStatus>().is_err());
    }

    #[test]
    fn status_serializes_as_backend_tag() {
        let json = serde_json::to_string(&QuoteStatus::Adopted).expect("serializable");
        assert_eq!(json, "\"채택 성공\"");
    }

    #[test]
    fn status_filter_maps_all_sentinel_to_none() {
        assert_eq!(parse_status_filter("all"), Ok(None));
        assert_eq!(parse_status_filter(""), Ok(None));
        assert_eq!(
            parse_status_filter("검토중"),
            Ok(Some(QuoteStatus::Reviewing))
        );
        assert!(parse_status_filter("reviewing").is_err());
    }

    #[test]
    fn region_filter_maps_all_sentinel_to_none() {
        assert_eq!(parse_region_filter("all"), None);
        assert_eq!(parse_region_filter("  "), None);
        assert_eq!(
            parse_region_filter(" 부산 ").map(NonEmptyString::into_inner),
            Some("부산".to_string())
        );
    }

    #[test]
    fn only_reviewing_and_in_progress_are_open() {
        let open: Vec<_> = QuoteStatus::ALL.into_iter().filter(|s| s.is_open()).collect();
        assert_eq!(open, vec![QuoteStatus::Reviewing, QuoteStatus::InProgress]);
    }
}
