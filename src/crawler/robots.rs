//! Robots.txt gate for the crawl phase
//!
//! Consulted only when `respect-robots-txt` is enabled. The root host's
//! robots.txt is fetched once per crawl; a missing or unfetchable file
//! allows everything.

use crate::crawler::fetcher::USER_AGENT;
use reqwest::Client;
use robotstxt::DefaultMatcher;
use url::Url;

/// Parsed robots.txt for the crawl's root host
#[derive(Debug, Clone)]
pub struct RobotsGate {
    /// Raw robots.txt content (empty means allow all)
    content: String,
}

impl RobotsGate {
    /// Permissive gate that allows every URL
    pub fn allow_all() -> Self {
        Self {
            content: String::new(),
        }
    }

    pub fn from_content(content: &str) -> Self {
        Self {
            content: content.to_string(),
        }
    }

    /// Fetches robots.txt for the root URL's host
    ///
    /// Any failure (network error, non-2xx) falls back to allow-all; a site
    /// without robots.txt places no restrictions.
    pub async fn fetch(client: &Client, root: &Url) -> Self {
        let mut robots_url = root.clone();
        robots_url.set_path("/robots.txt");
        robots_url.set_query(None);
        robots_url.set_fragment(None);

        match client.get(robots_url.as_str()).send().await {
            Ok(response) if response.status().is_success() => match response.text().await {
                Ok(content) => {
                    tracing::debug!("Fetched robots.txt ({} bytes)", content.len());
                    Self::from_content(&content)
                }
                Err(e) => {
                    tracing::debug!("Failed to read robots.txt body: {}", e);
                    Self::allow_all()
                }
            },
            Ok(response) => {
                tracing::debug!("robots.txt returned HTTP {}", response.status());
                Self::allow_all()
            }
            Err(e) => {
                tracing::debug!("Failed to fetch robots.txt: {}", e);
                Self::allow_all()
            }
        }
    }

    /// Checks whether a URL is allowed for the crawler's user agent
    pub fn is_allowed(&self, url: &str) -> bool {
        if self.content.is_empty() {
            return true;
        }

        let mut matcher = DefaultMatcher::default();
        matcher.one_agent_allowed_by_robots(&self.content, USER_AGENT, url)
    }
}
