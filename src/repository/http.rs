//! REST-backed sources talking to the marketplace backend.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::domain::page::Page;
use crate::domain::quote_request::{QuoteRequest, QuoteRequestFilter, QuoteSortKey};
use crate::domain::statistics::StatusCounts;
use crate::dto::api::{
    ApiEnvelope, PageDto, QuoteRequestDto, QuoteRequestListParams, StatusCountsDto,
};
use crate::models::config::ClientConfig;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{ListSource, PageRequest, StatusCountsReader};

const QUOTE_REQUESTS_PATH: &str = "quote-requests";
const STATUS_COUNTS_PATH: &str = "quote-requests/statistics";
const NO_QUERY: [(&str, &str); 0] = [];

/// Quote request list and statistics endpoints of the backend.
#[derive(Clone, Debug)]
pub struct HttpQuoteRequestRepository {
    client: Client,
    base_url: Url,
    access_token: Option<String>,
}

impl HttpQuoteRequestRepository {
    pub fn new(config: &ClientConfig) -> RepositoryResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Self::with_client(client, &config.api_base_url, config.access_token.clone())
    }

    pub fn with_client(
        client: Client,
        base_url: &str,
        access_token: Option<String>,
    ) -> RepositoryResult<Self> {
        let mut base_url = Url::parse(base_url)
            .map_err(|e| RepositoryError::ValidationError(format!("invalid base url: {e}")))?;
        // `Url::join` replaces the last segment unless the path ends with a slash.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            client,
            base_url,
            access_token: access_token.filter(|t| !t.trim().is_empty()),
        })
    }

    fn endpoint(&self, path: &str) -> RepositoryResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| RepositoryError::ValidationError(format!("invalid endpoint {path}: {e}")))
    }

    async fn get<T, Q>(&self, path: &str, query: &Q) -> RepositoryResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.endpoint(path)?;
        log::debug!("GET {url}");

        let mut request = self.client.get(url).query(query);
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        decode_response(status, &body)
    }
}

/// Turns a raw backend response into the envelope payload.
///
/// Error statuses still carry the `{ success: false, error }` envelope when
/// the backend produced them, so its message is preferred over the bare code.
fn decode_response<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> RepositoryResult<T> {
    let envelope = serde_json::from_slice::<ApiEnvelope<T>>(body);

    if !status.is_success() {
        return match envelope {
            Ok(envelope) if !envelope.success => envelope.into_result(),
            _ => Err(RepositoryError::Status(status.as_u16())),
        };
    }

    envelope
        .map_err(|e| RepositoryError::Decode(e.to_string()))?
        .into_result()
}

#[async_trait]
impl ListSource for HttpQuoteRequestRepository {
    type Item = QuoteRequest;
    type Filter = QuoteRequestFilter;
    type SortKey = QuoteSortKey;

    async fn fetch_page(
        &self,
        request: &PageRequest<QuoteRequestFilter, QuoteSortKey>,
    ) -> RepositoryResult<Page<QuoteRequest>> {
        let params = QuoteRequestListParams::from(request);
        let page: PageDto<QuoteRequestDto> = self.get(QUOTE_REQUESTS_PATH, &params).await?;
        Ok(page.try_into_page()?)
    }
}

#[async_trait]
impl StatusCountsReader for HttpQuoteRequestRepository {
    async fn fetch_status_counts(&self) -> RepositoryResult<StatusCounts> {
        let counts: StatusCountsDto = self.get(STATUS_COUNTS_PATH, &NO_QUERY).await?;
        Ok(counts.into())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn repository(base_url: &str) -> HttpQuoteRequestRepository {
        HttpQuoteRequestRepository::with_client(Client::new(), base_url, None)
            .expect("valid base url")
    }

    #[test]
    fn endpoints_keep_base_path() {
        let repo = repository("https://api.example.com/api");

        assert_eq!(
            repo.endpoint(QUOTE_REQUESTS_PATH).expect("valid endpoint").as_str(),
            "https://api.example.com/api/quote-requests"
        );
        assert_eq!(
            repo.endpoint(STATUS_COUNTS_PATH).expect("valid endpoint").as_str(),
            "https://api.example.com/api/quote-requests/statistics"
        );
    }

    #[test]
    fn rejects_malformed_base_url() {
        let result = HttpQuoteRequestRepository::with_client(Client::new(), "::", None);
        assert!(matches!(result, Err(RepositoryError::ValidationError(_))));
    }

    #[test]
    fn blank_access_token_is_ignored() {
        let repo = HttpQuoteRequestRepository::with_client(
            Client::new(),
            "http://localhost/",
            Some("  ".to_string()),
        )
        .expect("valid base url");
        assert_eq!(repo.access_token, None);
    }

    #[test]
    fn error_status_prefers_backend_message() {
        let body = json!({ "success": false, "error": "권한이 없습니다." }).to_string();

        let result: RepositoryResult<StatusCountsDto> =
            decode_response(StatusCode::FORBIDDEN, body.as_bytes());

        assert_eq!(
            result.err(),
            Some(RepositoryError::Rejected("권한이 없습니다.".to_string()))
        );
    }

    #[test]
    fn error_status_without_envelope_reports_code() {
        let result: RepositoryResult<StatusCountsDto> =
            decode_response(StatusCode::BAD_GATEWAY, b"<html>Bad gateway</html>");

        assert_eq!(result.err(), Some(RepositoryError::Status(502)));
    }

    #[test]
    fn success_status_with_garbage_is_decode_error() {
        let result: RepositoryResult<StatusCountsDto> =
            decode_response(StatusCode::OK, b"not json");

        assert!(matches!(result, Err(RepositoryError::Decode(_))));
    }

    #[test]
    fn success_status_with_rejection_is_rejected() {
        let body = json!({ "success": false, "error": "서버 연결에 실패했습니다." }).to_string();

        let result: RepositoryResult<StatusCountsDto> =
            decode_response(StatusCode::OK, body.as_bytes());

        assert_eq!(
            result.err(),
            Some(RepositoryError::Rejected(
                "서버 연결에 실패했습니다.".to_string()
            ))
        );
    }
}
