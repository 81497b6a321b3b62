use futures::stream::{self, StreamExt};
use tracing::{info, warn};

use crate::{
    config::ScrapingConfig,
    details,
    error::{FetchError, RosterError},
    fetcher::HtmlFetcher,
    roster::RosterExtractor,
    types::{PlayerCandidate, PlayerDetails, PlayerRecord},
};

/// Fetches the roster listing, then every player's detail page, and merges the two.
pub struct RosterAssembler<F: HtmlFetcher> {
    fetcher: F,
    extractor: RosterExtractor,
    listing_url: String,
    concurrency: usize,
}

impl<F: HtmlFetcher> RosterAssembler<F> {
    pub fn new(fetcher: F, config: &ScrapingConfig) -> Self {
        Self {
            fetcher,
            extractor: RosterExtractor::new(&config.listing_url, &config.roster_path),
            listing_url: config.listing_url.clone(),
            concurrency: config.concurrency.max(1),
        }
    }

    /// Builds the full roster in listing order.
    ///
    /// Only a failed listing fetch is an error. A player whose detail page
    /// cannot be fetched is still returned, with detail fields at their defaults.
    pub async fn build_roster(&self) -> Result<Vec<PlayerRecord>, RosterError> {
        info!("Fetching roster listing from {}", self.listing_url);
        let html = self.fetcher.fetch_html(&self.listing_url).await?;
        let candidates = self.extractor.parse(&html);
        info!("Found {} players. Fetching details for each...", candidates.len());

        let details = self.fetch_all_details(&candidates).await;
        let failed = details.iter().filter(|d| d.is_none()).count();

        let records: Vec<PlayerRecord> = candidates
            .into_iter()
            .zip(details)
            .map(|(candidate, details)| match details {
                Some(details) => PlayerRecord::merge(candidate, Some(details)),
                None => PlayerRecord::from(candidate),
            })
            .collect();

        info!(
            "Assembled {} players ({} without details)",
            records.len(),
            failed
        );
        Ok(records)
    }

    /// Fetches and parses a single player page.
    pub async fn player_details(&self, url: &str) -> Result<PlayerDetails, FetchError> {
        let html = self.fetcher.fetch_html(url).await?;
        Ok(details::parse_details(&html))
    }

    /// Detail pages are fetched through a bounded pool; each result lands in the
    /// slot of its candidate so completion order does not matter.
    async fn fetch_all_details(&self, candidates: &[PlayerCandidate]) -> Vec<Option<PlayerDetails>> {
        let mut slots: Vec<Option<PlayerDetails>> = vec![None; candidates.len()];

        let urls: Vec<String> = candidates.iter().map(|c| c.details_url.clone()).collect();
        let mut fetches = stream::iter(urls.into_iter().enumerate())
            .map(|(index, url)| async move { (index, self.player_details(&url).await) })
            .buffer_unordered(self.concurrency);

        while let Some((index, result)) = fetches.next().await {
            match result {
                Ok(details) => slots[index] = Some(details),
                Err(e) => warn!(
                    "Keeping {} without details from {}: {}",
                    candidates[index].name,
                    e.url(),
                    e
                ),
            }
        }

        slots
    }
}
