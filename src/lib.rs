//! Sitelight: crawl a site, audit every page
//!
//! This crate crawls a website from a root URL, collects the set of reachable
//! page URLs up to a depth bound, then runs a headless-browser audit against
//! each discovered URL, writing one report file per URL into a timestamped
//! directory tree that mirrors the site's path structure.

pub mod audit;
pub mod config;
pub mod crawler;
pub mod pipeline;
pub mod report;

use thiserror::Error;

/// Main error type for sitelight operations
#[derive(Debug, Error)]
pub enum SitelightError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Browser error: {0}")]
    Browser(String),

    #[error("CDP error: {0}")]
    Cdp(#[from] chromiumoxide::error::CdpError),

    #[error("Audit failed for {url}: {message}")]
    Audit { url: String, message: String },

    #[error("Report serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for sitelight operations
pub type Result<T> = std::result::Result<T, SitelightError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use audit::{AuditReport, Auditor, BrowserAuditor};
pub use config::{AuditOptions, CrawlOptions, Options, OutputFormat, Overrides};
pub use pipeline::{run, run_with};
pub use report::derive_destination;
