//! Crawler module: URL discovery
//!
//! This module drives the crawl phase of the pipeline:
//! - HTTP fetching with outcome classification
//! - Anchor-target link extraction
//! - Frontier traversal with depth bound, bounded concurrency, and pacing
//! - Optional robots.txt gating

mod driver;
mod fetcher;
mod parser;
mod robots;

pub use driver::discover_urls;
pub use fetcher::{build_http_client, fetch_page, FetchOutcome, USER_AGENT};
pub use parser::extract_links;
pub use robots::RobotsGate;
