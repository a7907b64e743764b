//! Configuration module for sitelight
//!
//! Caller-supplied overrides (programmatic or from a TOML file) are merged
//! over documented defaults, group by group, then validated.
//!
//! # Example
//!
//! ```
//! use sitelight::config::{resolve, Overrides};
//!
//! let options = resolve(Overrides::default());
//! assert_eq!(options.crawl.max_depth, 2);
//! ```

mod parser;
mod resolve;
mod types;
mod validation;

// Re-export types
pub use types::{
    AuditCategories, AuditConfig, AuditConfigOverrides, AuditFlagOverrides, AuditFlags,
    AuditOptions, AuditOverrides, CrawlOptions, CrawlOverrides, Options, OutputFormat, Overrides,
};

pub use parser::load_overrides;
pub use resolve::resolve;
pub use validation::validate;
