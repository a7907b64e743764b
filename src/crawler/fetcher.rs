//! HTTP fetcher for the crawl phase
//!
//! Builds the shared reqwest client and performs single-page fetches,
//! classifying the outcome so the driver can decide whether a page counts as
//! visited and whether its body should be scanned for links.

use reqwest::Client;
use std::time::Duration;

/// User agent sent with every crawl request
pub const USER_AGENT: &str = concat!("sitelight/", env!("CARGO_PKG_VERSION"));

/// Result of fetching one URL during the crawl
#[derive(Debug)]
pub enum FetchOutcome {
    /// Successfully fetched an HTML page
    Page {
        /// Final URL after redirects
        final_url: String,
        /// Page body content
        body: String,
    },

    /// Successfully fetched, but not HTML; visited but not scanned for links
    NotHtml {
        /// The Content-Type received
        content_type: String,
    },

    /// Non-success status code
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Network-level failure (connection refused, timeout, TLS)
    NetworkError {
        /// Error description
        error: String,
    },
}

/// Builds the HTTP client used for all crawl fetches
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a single URL and classifies the outcome
pub async fn fetch_page(client: &Client, url: &str) -> FetchOutcome {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            let error = if e.is_timeout() {
                "Request timeout".to_string()
            } else if e.is_connect() {
                "Connection refused".to_string()
            } else {
                e.to_string()
            };
            return FetchOutcome::NetworkError { error };
        }
    };

    let status = response.status();
    if !status.is_success() {
        return FetchOutcome::HttpError {
            status_code: status.as_u16(),
        };
    }

    let final_url = response.url().to_string();
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    if !content_type.contains("text/html") {
        return FetchOutcome::NotHtml { content_type };
    }

    match response.text().await {
        Ok(body) => FetchOutcome::Page { final_url, body },
        Err(e) => FetchOutcome::NetworkError {
            error: e.to_string(),
        },
    }
}
