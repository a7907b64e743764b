//! Crawl driver: frontier traversal producing the discovered URL set
//!
//! Drives the crawl from the root URL to frontier exhaustion under the
//! configured depth bound, with at most `max_concurrency` fetches in flight
//! and `interval_ms` pacing between fetch dispatches. Each completed fetch
//! appends its URL to the result in completion order; the list is
//! deduplicated (stable, first occurrence wins) once the frontier drains.
//!
//! Traversal stays on the root URL's host. Fetch-level failures are logged
//! and skipped; they never prevent the crawl from completing.

use crate::config::CrawlOptions;
use crate::crawler::fetcher::{build_http_client, fetch_page, FetchOutcome};
use crate::crawler::parser::extract_links;
use crate::crawler::robots::RobotsGate;
use crate::Result;
use futures::stream::{FuturesUnordered, StreamExt};
use std::collections::{HashSet, VecDeque};
use std::time::Duration;
use url::Url;

/// Crawls from `root_url` and returns the set of visited URLs
///
/// The result is an ordered sequence of absolute URL strings in first-seen
/// order with duplicates removed by exact string equality.
pub async fn discover_urls(root_url: &str, options: &CrawlOptions) -> Result<Vec<String>> {
    let root = Url::parse(root_url)?;
    let client = build_http_client()?;

    let robots = if options.respect_robots_txt {
        RobotsGate::fetch(&client, &root).await
    } else {
        RobotsGate::allow_all()
    };

    let interval = Duration::from_millis(options.interval_ms);
    let mut frontier: VecDeque<(Url, u32)> = VecDeque::new();
    let mut enqueued: HashSet<String> = HashSet::new();
    let mut visited: Vec<String> = Vec::new();
    let mut in_flight = FuturesUnordered::new();
    let mut dispatched: u64 = 0;

    enqueued.insert(root.to_string());
    frontier.push_back((root.clone(), 0));

    loop {
        // Fill the in-flight window from the frontier
        while in_flight.len() < options.max_concurrency as usize {
            let Some((url, depth)) = frontier.pop_front() else {
                break;
            };

            if !robots.is_allowed(url.as_str()) {
                tracing::debug!("Skipping {} (disallowed by robots.txt)", url);
                continue;
            }

            // Pacing between fetch dispatches; the first fetch starts immediately
            if dispatched > 0 && !interval.is_zero() {
                tokio::time::sleep(interval).await;
            }
            dispatched += 1;

            let client = client.clone();
            in_flight.push(async move {
                let outcome = fetch_page(&client, url.as_str()).await;
                (url, depth, outcome)
            });
        }

        let Some((url, depth, outcome)) = in_flight.next().await else {
            break;
        };

        match outcome {
            FetchOutcome::Page { body, .. } => {
                tracing::debug!("Fetched {} (depth {})", url, depth);
                visited.push(url.to_string());

                if depth < options.max_depth {
                    for link in extract_links(&body, &url, options) {
                        let Ok(link_url) = Url::parse(&link) else {
                            continue;
                        };

                        // Stay on the root host
                        if link_url.host_str() != root.host_str() {
                            continue;
                        }

                        if enqueued.insert(link_url.to_string()) {
                            frontier.push_back((link_url, depth + 1));
                        }
                    }
                }
            }

            FetchOutcome::NotHtml { content_type } => {
                tracing::debug!("Fetched {} (non-HTML: {})", url, content_type);
                visited.push(url.to_string());
            }

            FetchOutcome::HttpError { status_code } => {
                tracing::warn!("Fetch failed for {}: HTTP {}", url, status_code);
            }

            FetchOutcome::NetworkError { error } => {
                tracing::warn!("Fetch failed for {}: {}", url, error);
            }
        }
    }

    // Stable dedup, first occurrence wins
    let mut seen = HashSet::new();
    visited.retain(|u| seen.insert(u.clone()));

    tracing::info!("Crawl complete: {} distinct URLs visited", visited.len());
    Ok(visited)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fast_options() -> CrawlOptions {
        CrawlOptions {
            interval_ms: 0,
            ..Default::default()
        }
    }

    async fn mount_page(server: &MockServer, route: &str, body: String) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(body, "text/html"),
            )
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_discovers_linked_pages() {
        let server = MockServer::start().await;
        let base = server.uri();

        mount_page(
            &server,
            "/",
            format!(
                r#"<html><body><a href="{0}/page1">1</a><a href="{0}/page2">2</a></body></html>"#,
                base
            ),
        )
        .await;
        mount_page(&server, "/page1", "<html><body>1</body></html>".to_string()).await;
        mount_page(&server, "/page2", "<html><body>2</body></html>".to_string()).await;

        let urls = discover_urls(&format!("{}/", base), &fast_options())
            .await
            .unwrap();

        assert_eq!(urls.len(), 3);
        assert_eq!(urls[0], format!("{}/", base));
        assert!(urls.contains(&format!("{}/page1", base)));
        assert!(urls.contains(&format!("{}/page2", base)));
    }

    #[tokio::test]
    async fn test_no_duplicates_for_repeated_links() {
        let server = MockServer::start().await;
        let base = server.uri();

        mount_page(
            &server,
            "/",
            format!(
                r#"<html><body><a href="{0}/about">a</a><a href="{0}/about">b</a></body></html>"#,
                base
            ),
        )
        .await;
        mount_page(
            &server,
            "/about",
            format!(r#"<html><body><a href="{}/">home</a></body></html>"#, base),
        )
        .await;

        let urls = discover_urls(&format!("{}/", base), &fast_options())
            .await
            .unwrap();

        assert_eq!(urls.len(), 2);
        assert_eq!(urls[0], format!("{}/", base));
        assert_eq!(urls[1], format!("{}/about", base));
    }

    #[tokio::test]
    async fn test_depth_limit_respected() {
        let server = MockServer::start().await;
        let base = server.uri();

        // Chain: / -> level1 -> level2 -> level3; max_depth 2 stops at level2
        mount_page(
            &server,
            "/",
            format!(r#"<html><body><a href="{}/level1">1</a></body></html>"#, base),
        )
        .await;
        mount_page(
            &server,
            "/level1",
            format!(r#"<html><body><a href="{}/level2">2</a></body></html>"#, base),
        )
        .await;
        mount_page(
            &server,
            "/level2",
            format!(r#"<html><body><a href="{}/level3">3</a></body></html>"#, base),
        )
        .await;
        Mock::given(method("GET"))
            .and(path("/level3"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .expect(0)
            .mount(&server)
            .await;

        let urls = discover_urls(&format!("{}/", base), &fast_options())
            .await
            .unwrap();

        assert_eq!(urls.len(), 3);
        assert!(!urls.contains(&format!("{}/level3", base)));
    }

    #[tokio::test]
    async fn test_fetch_errors_do_not_prevent_completion() {
        let server = MockServer::start().await;
        let base = server.uri();

        mount_page(
            &server,
            "/",
            format!(
                r#"<html><body><a href="{0}/broken">x</a><a href="{0}/ok">y</a></body></html>"#,
                base
            ),
        )
        .await;
        Mock::given(method("GET"))
            .and(path("/broken"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        mount_page(&server, "/ok", "<html><body>ok</body></html>".to_string()).await;

        let urls = discover_urls(&format!("{}/", base), &fast_options())
            .await
            .unwrap();

        assert_eq!(urls.len(), 2);
        assert!(!urls.contains(&format!("{}/broken", base)));
    }

    #[tokio::test]
    async fn test_off_host_links_not_followed() {
        let server = MockServer::start().await;
        let base = server.uri();

        mount_page(
            &server,
            "/",
            r#"<html><body><a href="https://elsewhere.invalid/page">off</a></body></html>"#
                .to_string(),
        )
        .await;

        let urls = discover_urls(&format!("{}/", base), &fast_options())
            .await
            .unwrap();

        assert_eq!(urls, vec![format!("{}/", base)]);
    }

    #[tokio::test]
    async fn test_robots_txt_respected_when_enabled() {
        let server = MockServer::start().await;
        let base = server.uri();

        Mock::given(method("GET"))
            .and(path("/robots.txt"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string("User-agent: *\nDisallow: /admin"),
            )
            .mount(&server)
            .await;
        mount_page(
            &server,
            "/",
            format!(
                r#"<html><body><a href="{0}/admin">a</a><a href="{0}/open">o</a></body></html>"#,
                base
            ),
        )
        .await;
        Mock::given(method("GET"))
            .and(path("/admin"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .expect(0)
            .mount(&server)
            .await;
        mount_page(&server, "/open", "<html><body>open</body></html>".to_string()).await;

        let options = CrawlOptions {
            interval_ms: 0,
            respect_robots_txt: true,
            ..Default::default()
        };

        let urls = discover_urls(&format!("{}/", base), &options).await.unwrap();

        assert!(urls.contains(&format!("{}/open", base)));
        assert!(!urls.contains(&format!("{}/admin", base)));
    }
}
