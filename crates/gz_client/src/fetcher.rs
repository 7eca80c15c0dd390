use async_trait::async_trait;
use gz_core::{Error, GazetteConfig, NoticeLogger, NoticeSource, Result};
use reqwest::StatusCode;
use serde_json::Value;
use std::sync::Arc;
use url::Url;

pub const PAGE_PARAM: &str = "results-page";

/// Fetches raw notice pages from the Gazette JSON endpoint.
pub struct GazetteFetcher {
    client: reqwest::Client,
    base_url: Url,
    logger: Arc<dyn NoticeLogger>,
}

impl GazetteFetcher {
    pub fn new(config: &GazetteConfig, logger: Arc<dyn NoticeLogger>) -> Result<Self> {
        let base_url = config.parsed_base_url()?;

        if config.accept_invalid_certs {
            logger.warning(
                "TLS certificate verification is disabled for @host",
                &[("@host", base_url.host_str().unwrap_or_default().to_string())],
            );
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;

        Ok(Self {
            client,
            base_url,
            logger,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch one 1-based page, keeping the reason for any failure.
    pub async fn try_fetch(&self, page: u32) -> Result<Value> {
        let response = self
            .client
            .get(self.base_url.clone())
            .query(&[(PAGE_PARAM, page)])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::Status(status.as_u16()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    fn report(&self, error: &Error) {
        match error {
            Error::Status(code) => self.logger.error(
                "API request failed with status code: @code",
                &[("@code", code.to_string())],
            ),
            Error::Http(e) => self
                .logger
                .error("HTTP request failed: @message", &[("@message", e.to_string())]),
            other => self
                .logger
                .error("Unexpected error: @message", &[("@message", other.to_string())]),
        }
    }
}

#[async_trait]
impl NoticeSource for GazetteFetcher {
    async fn fetch(&self, page: u32) -> Option<Value> {
        match self.try_fetch(page).await {
            Ok(data) => Some(data),
            Err(e) => {
                self.report(&e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{serve, unused_url, GAZETTE_PATH};
    use axum::extract::Query;
    use axum::http::StatusCode as AxumStatus;
    use axum::routing::get;
    use axum::{Json, Router};
    use gz_core::{RecordingLogger, Severity};
    use serde_json::json;
    use std::collections::HashMap;

    fn fetcher(url: &str, logger: Arc<RecordingLogger>) -> GazetteFetcher {
        let config = GazetteConfig::new().with_base_url(url);
        GazetteFetcher::new(&config, logger).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_sends_page_param() {
        let router = Router::new().route(
            GAZETTE_PATH,
            get(|Query(params): Query<HashMap<String, String>>| async move {
                Json(json!({ "f:page-number": params.get("results-page").cloned() }))
            }),
        );
        let url = serve(router).await;
        let logger = Arc::new(RecordingLogger::new());

        let data = fetcher(&url, logger.clone()).fetch(3).await.unwrap();
        assert_eq!(data["f:page-number"], "3");
        assert!(logger.entries_at(Severity::Error).is_empty());
    }

    #[tokio::test]
    async fn test_fetch_non_success_status() {
        let router = Router::new().route(
            GAZETTE_PATH,
            get(|| async { (AxumStatus::SERVICE_UNAVAILABLE, "down") }),
        );
        let url = serve(router).await;
        let logger = Arc::new(RecordingLogger::new());
        let fetcher = fetcher(&url, logger.clone());

        assert!(fetcher.fetch(1).await.is_none());

        let errors = logger.entries_at(Severity::Error);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].rendered(),
            "API request failed with status code: 503"
        );

        let err = fetcher.try_fetch(1).await.unwrap_err();
        assert_eq!(err.status_code(), Some(503));
    }

    #[tokio::test]
    async fn test_fetch_transport_failure() {
        let url = unused_url().await;
        let logger = Arc::new(RecordingLogger::new());

        assert!(fetcher(&url, logger.clone()).fetch(1).await.is_none());

        let errors = logger.entries_at(Severity::Error);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].rendered().starts_with("HTTP request failed: "));
    }

    #[tokio::test]
    async fn test_fetch_invalid_json() {
        let router = Router::new().route(GAZETTE_PATH, get(|| async { "this is not json" }));
        let url = serve(router).await;
        let logger = Arc::new(RecordingLogger::new());

        assert!(fetcher(&url, logger.clone()).fetch(1).await.is_none());

        let errors = logger.entries_at(Severity::Error);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].rendered().starts_with("Unexpected error: "));
    }

    #[test]
    fn test_new_rejects_invalid_base_url() {
        let config = GazetteConfig::new().with_base_url("invalid-url");
        let result = GazetteFetcher::new(&config, Arc::new(RecordingLogger::new()));
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn test_new_warns_when_tls_verification_is_off() {
        let logger = Arc::new(RecordingLogger::new());
        GazetteFetcher::new(&GazetteConfig::default(), logger.clone()).unwrap();
        let warnings = logger.entries_at(Severity::Warning);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].rendered().contains("www.thegazette.co.uk"));

        let logger = Arc::new(RecordingLogger::new());
        let config = GazetteConfig::default().with_tls_verification(true);
        GazetteFetcher::new(&config, logger.clone()).unwrap();
        assert!(logger.entries().is_empty());
    }
}
