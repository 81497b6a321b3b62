use std::future::Future;

use anyhow::{Context, Result};
use reqwest::Url;
use tracing::debug;

use crate::{config::ScrapingConfig, error::FetchError, metrics::MetricsCollector};

/// Source of raw page markup. Implemented over HTTP for real runs and over
/// in-memory pages in tests.
pub trait HtmlFetcher: Send + Sync {
    fn fetch_html(&self, url: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}

pub struct WebHtmlFetcher {
    client: reqwest::Client,
    base_url: Url,
    metrics: MetricsCollector,
}

impl WebHtmlFetcher {
    /// Site-relative links are resolved against `config.listing_url`.
    pub fn new(config: &ScrapingConfig, metrics: MetricsCollector) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .build()
            .context("Failed to create HTTP client")?;
        let base_url = Url::parse(&config.listing_url)
            .with_context(|| format!("Invalid listing url: {}", config.listing_url))?;

        Ok(Self {
            client,
            base_url,
            metrics,
        })
    }

    pub fn resolve(&self, url: &str) -> Result<Url, FetchError> {
        self.base_url.join(url).map_err(|e| FetchError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }

    async fn get(&self, url: Url) -> Result<String, FetchError> {
        let request_error = |source| FetchError::Request {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url.clone()).send().await.map_err(request_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        response.text().await.map_err(request_error)
    }
}

impl HtmlFetcher for WebHtmlFetcher {
    async fn fetch_html(&self, url: &str) -> Result<String, FetchError> {
        let target = self.resolve(url)?;
        debug!("GET {}", target);

        let tracker = self.metrics.record_request_start();
        let result = self.get(target).await;
        match &result {
            Ok(body) => {
                tracker.finish(true);
                debug!("Got {} bytes from {}", body.len(), url);
            }
            Err(e) => {
                tracker.finish(false);
                self.metrics.record_error(e.to_string());
            }
        }
        result
    }
}
