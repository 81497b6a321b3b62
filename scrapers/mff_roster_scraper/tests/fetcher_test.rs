use mff_roster_scraper::{
    assembler::RosterAssembler,
    config::{ScrapingConfig, DEFAULT_USER_AGENT},
    error::{FetchError, RosterError},
    fetcher::{HtmlFetcher, WebHtmlFetcher},
    metrics::MetricsCollector,
};
use reqwest::StatusCode;

fn config_for(server: &mockito::ServerGuard) -> ScrapingConfig {
    ScrapingConfig {
        listing_url: format!("{}/lag/herr/spelare/", server.url()),
        ..ScrapingConfig::default()
    }
}

#[tokio::test]
async fn test_sends_browser_user_agent() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/lag/herr/spelare/")
        .match_header("user-agent", DEFAULT_USER_AGENT)
        .with_status(200)
        .with_body("<html><body>ok</body></html>")
        .create_async()
        .await;

    let config = config_for(&server);
    let fetcher = WebHtmlFetcher::new(&config, MetricsCollector::new()).unwrap();
    let body = fetcher.fetch_html(&config.listing_url).await.unwrap();

    assert!(body.contains("ok"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_relative_urls_resolve_against_listing() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/lag/herr/spelare/jane-doe/")
        .with_status(200)
        .with_body("<html></html>")
        .create_async()
        .await;

    let fetcher = WebHtmlFetcher::new(&config_for(&server), MetricsCollector::new()).unwrap();
    fetcher.fetch_html("/lag/herr/spelare/jane-doe/").await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_non_success_status_is_fetch_error() {
    let mut server = mockito::Server::new_async().await;
    let _okand = server
        .mock("GET", "/lag/herr/spelare/okand/")
        .with_status(503)
        .create_async()
        .await;

    let metrics = MetricsCollector::new();
    let fetcher = WebHtmlFetcher::new(&config_for(&server), metrics.clone()).unwrap();
    let err = fetcher.fetch_html("/lag/herr/spelare/okand/").await.unwrap_err();

    match &err {
        FetchError::Status { url, status } => {
            assert!(url.ends_with("/lag/herr/spelare/okand/"));
            assert_eq!(*status, StatusCode::SERVICE_UNAVAILABLE);
        }
        other => panic!("expected status error, got {:?}", other),
    }

    let stats = metrics.get_metrics();
    assert_eq!(stats.total_requests, 1);
    assert_eq!(stats.failed_requests, 1);
    assert_eq!(stats.last_error, Some(err.to_string()));
}

#[tokio::test]
async fn test_full_scrape_over_http() {
    let mut server = mockito::Server::new_async().await;
    let _listing = server
        .mock("GET", "/lag/herr/spelare/")
        .with_status(200)
        .with_body(
            r#"<html><body>
                <h2>Mittfältare</h2>
                <a href="/lag/herr/spelare/otto-rosengren/">Otto Rosengren 8</a>
                <a href="/lag/herr/spelare/sebastian-nanasi/">Sebastian Nanasi 21</a>
            </body></html>"#,
        )
        .create_async()
        .await;
    let _rosengren = server
        .mock("GET", "/lag/herr/spelare/otto-rosengren/")
        .with_status(200)
        .with_body(
            r#"<ul class="person-stats"><li class="person-stats-item" data-stats-type="games"><p>29</p></li></ul>"#,
        )
        .create_async()
        .await;
    let _nanasi = server
        .mock("GET", "/lag/herr/spelare/sebastian-nanasi/")
        .with_status(500)
        .create_async()
        .await;

    let config = config_for(&server);
    let fetcher = WebHtmlFetcher::new(&config, MetricsCollector::new()).unwrap();
    let players = RosterAssembler::new(fetcher, &config).build_roster().await.unwrap();

    assert_eq!(players.len(), 2);
    assert_eq!(players[0].name, "Otto Rosengren");
    assert_eq!(players[0].stats_games, 29);
    assert_eq!(players[0].position, "Mittfältare");
    assert_eq!(players[1].name, "Sebastian Nanasi");
    assert_eq!(players[1].number, "21");
    assert_eq!(players[1].stats_games, 0);
}

#[tokio::test]
async fn test_listing_http_error_fails_roster() {
    let mut server = mockito::Server::new_async().await;
    let _listing = server
        .mock("GET", "/lag/herr/spelare/")
        .with_status(403)
        .create_async()
        .await;

    let config = config_for(&server);
    let fetcher = WebHtmlFetcher::new(&config, MetricsCollector::new()).unwrap();
    let result = RosterAssembler::new(fetcher, &config).build_roster().await;

    assert!(matches!(result, Err(RosterError::Listing(FetchError::Status { .. }))));
}
