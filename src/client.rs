//! HTTP client for the listing endpoint.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;

use crate::domain::listing::{ListingKind, ListingPage, ListingResponse};
use crate::query::ListingParams;
use crate::source::{FetchError, ListingSource};

/// Local deadline for a single listing request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(45);

/// Runs `future`, turning an elapsed `deadline` into [`FetchError::TimedOut`].
pub async fn with_deadline<F, T>(deadline: Duration, future: F) -> Result<T, FetchError>
where
    F: Future<Output = Result<T, FetchError>>,
{
    tokio::time::timeout(deadline, future)
        .await
        .map_err(|_| FetchError::TimedOut(deadline))?
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

/// [`ListingSource`] backed by the `/api/v1/{tasks,humans}` endpoint.
#[derive(Debug, Clone)]
pub struct HttpListingSource {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl HttpListingSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(concat!("irlwork-discovery/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        })
    }

    /// Full request URL for `params`.
    pub fn listing_url(
        &self,
        kind: ListingKind,
        params: &ListingParams,
    ) -> Result<String, FetchError> {
        let query = params
            .to_query_string()
            .map_err(|e| FetchError::InvalidRequest(e.to_string()))?;
        Ok(format!("{}/api/v1/{}?{query}", self.base_url, kind.path()))
    }
}

impl<T: DeserializeOwned> ListingSource<T> for HttpListingSource {
    async fn fetch(
        &self,
        kind: ListingKind,
        params: &ListingParams,
    ) -> Result<ListingPage<T>, FetchError> {
        let url = self.listing_url(kind, params)?;
        log::debug!("Fetching {url}");

        with_deadline(self.timeout, async {
            let response = self
                .client
                .get(&url)
                .header(ACCEPT, "application/json")
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                let message = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                return Err(FetchError::Status {
                    status: status.as_u16(),
                    message,
                });
            }

            let body = response.bytes().await?;
            let parsed: ListingResponse<T> =
                serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))?;

            Ok(ListingPage::from(parsed))
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::SortKey;

    #[test]
    fn url_joins_base_kind_and_query() {
        let source =
            HttpListingSource::new("http://localhost:8080/", DEFAULT_REQUEST_TIMEOUT).unwrap();
        let params = ListingParams {
            limit: 16,
            offset: 16,
            sort: SortKey::Newest,
            city: Some("San Francisco".into()),
            ..ListingParams::default()
        };

        let url = source.listing_url(ListingKind::Humans, &params).unwrap();

        assert_eq!(
            url,
            "http://localhost:8080/api/v1/humans?limit=16&offset=16&sort=newest&city=San+Francisco"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn slow_requests_time_out_distinctly() {
        let deadline = Duration::from_secs(45);

        let result: Result<(), FetchError> = with_deadline(deadline, async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(())
        })
        .await;

        assert_eq!(result, Err(FetchError::TimedOut(deadline)));
    }

    #[tokio::test(start_paused = true)]
    async fn inner_errors_pass_through_deadline() {
        let result: Result<(), FetchError> = with_deadline(Duration::from_secs(1), async {
            Err(FetchError::Network("refused".into()))
        })
        .await;

        assert_eq!(result, Err(FetchError::Network("refused".into())));
    }
}
