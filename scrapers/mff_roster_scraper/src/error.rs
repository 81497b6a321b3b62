use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: StatusCode },
    #[error("invalid url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl FetchError {
    pub fn url(&self) -> &str {
        match self {
            Self::Request { url, .. } | Self::Status { url, .. } | Self::InvalidUrl { url, .. } => url,
        }
    }
}

/// Scan-level failure. Only the listing page fetch is fatal to a roster build.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("failed to fetch roster listing: {0}")]
    Listing(#[from] FetchError),
}
