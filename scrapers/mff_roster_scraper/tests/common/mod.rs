#![allow(dead_code)]

use std::{collections::HashMap, time::Duration};

use mff_roster_scraper::{config::ScrapingConfig, error::FetchError, fetcher::HtmlFetcher};
use reqwest::StatusCode;

pub const LISTING_URL: &str = "https://www.mff.se/lag/herr/spelare/";

pub fn scraping_config(concurrency: usize) -> ScrapingConfig {
    ScrapingConfig {
        listing_url: LISTING_URL.to_string(),
        concurrency,
        ..ScrapingConfig::default()
    }
}

/// Serves pages from memory; unknown urls answer 404.
#[derive(Default)]
pub struct TestHtmlFetcher {
    pages: HashMap<String, String>,
    delays: HashMap<String, Duration>,
}

impl TestHtmlFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }

    pub fn delayed_page(mut self, url: &str, html: &str, delay: Duration) -> Self {
        self.delays.insert(url.to_string(), delay);
        self.page(url, html)
    }
}

impl HtmlFetcher for TestHtmlFetcher {
    async fn fetch_html(&self, url: &str) -> Result<String, FetchError> {
        if let Some(delay) = self.delays.get(url) {
            tokio::time::sleep(*delay).await;
        }
        self.pages.get(url).cloned().ok_or_else(|| FetchError::Status {
            url: url.to_string(),
            status: StatusCode::NOT_FOUND,
        })
    }
}

pub const LISTING_PAGE: &str = r#"<!DOCTYPE html>
<html><body>
  <nav><a href="https://www.mff.se/lag/herr/spelare/">Spelare</a><a href="/biljetter/">Biljetter</a></nav>
  <h2>Målvakter</h2>
  <ul>
    <li><a href="/lag/herr/spelare/johan-dahlin/"><img src="/img/dahlin.jpg"><span>Johan Dahlin</span> <span>27</span></a></li>
  </ul>
  <h2>Försvarare</h2>
  <ul>
    <li><a href="/lag/herr/spelare/pontus-jansson/"><img data-src="/img/jansson.jpg"><div class="person-name">Pontus Jansson</div><div class="person-number">18</div></a></li>
    <li><a href="/lag/herr/spelare/pontus-jansson/">Läs mer</a></li>
  </ul>
  <h2>Anfallare</h2>
  <ul>
    <li><a href="/lag/herr/spelare/isaac-kiese-thelin/"><img src="/img/thelin.jpg"><h3 class="card-name">Isaac Kiese Thelin 11</h3></a></li>
  </ul>
  <h2>Ledarstab</h2>
  <a href="/lag/herr/ledare/henrik-rydstrom/">Henrik Rydström</a>
</body></html>"#;

pub const DAHLIN_PAGE: &str = r#"<html><body>
  <div class="person-info"><p>Målvakt och lagkapten.</p><p>Fostrad i klubben.</p></div>
  <ul class="person-quick-facts">
    <li><h3>Född</h3><p>8 maj 1986</p></li>
    <li><h3>Position</h3><p>Målvakt</p></li>
  </ul>
  <ul class="person-stats">
    <li class="person-stats-item" data-stats-type="games"><p>30</p></li>
    <li class="person-stats-item" data-stats-type="goals"><p>0</p></li>
    <li class="person-stats-item" data-stats-type="yellow_cards"><p>2</p></li>
  </ul>
</body></html>"#;

pub const THELIN_PAGE: &str = r#"<html><body>
  <div class="person-info"><p>Skyttekung.</p></div>
  <ul class="person-quick-facts"><li><h3>Födelsedatum</h3><p>24 juni 1992</p></li></ul>
  <ul class="person-stats">
    <li class="person-stats-item" data-stats-type="games"><p>28</p></li>
    <li class="person-stats-item" data-stats-type="goals"><p>15</p></li>
    <li class="person-stats-item" data-stats-type="assists"><p>6</p></li>
    <li class="person-stats-item" data-stats-type="red_cards"><p>–</p></li>
  </ul>
</body></html>"#;
