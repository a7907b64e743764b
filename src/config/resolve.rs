use crate::config::types::{
    AuditConfig, AuditFlags, AuditOptions, CrawlOptions, Options, OutputFormat, Overrides,
};

impl Default for Options {
    fn default() -> Self {
        Options {
            reports_directory: "reports".to_string(),
            url: "https://example.com/".to_string(),
            crawl: CrawlOptions::default(),
            audit: AuditOptions::default(),
        }
    }
}

impl Default for CrawlOptions {
    fn default() -> Self {
        CrawlOptions {
            interval_ms: 1000,
            max_concurrency: 3,
            max_depth: 2,
            respect_robots_txt: false,
            parse_html_comments: false,
            parse_script_tags: false,
        }
    }
}

impl Default for AuditOptions {
    fn default() -> Self {
        AuditOptions {
            flags: AuditFlags {
                output: OutputFormat::Html,
            },
            config: AuditConfig {
                extends: "default".to_string(),
                categories: Default::default(),
            },
        }
    }
}

/// Merges caller-supplied overrides onto the documented defaults
///
/// Each of the three option groups is merged independently: keys the caller
/// supplies override the default for that key, keys left out keep their
/// default. Supplying a single crawl key does not drop the other crawl
/// defaults. Top-level scalars follow override-if-present semantics.
pub fn resolve(overrides: Overrides) -> Options {
    let defaults = Options::default();

    let crawl = {
        let d = defaults.crawl;
        let o = overrides.crawl.unwrap_or_default();
        CrawlOptions {
            interval_ms: o.interval_ms.unwrap_or(d.interval_ms),
            max_concurrency: o.max_concurrency.unwrap_or(d.max_concurrency),
            max_depth: o.max_depth.unwrap_or(d.max_depth),
            respect_robots_txt: o.respect_robots_txt.unwrap_or(d.respect_robots_txt),
            parse_html_comments: o.parse_html_comments.unwrap_or(d.parse_html_comments),
            parse_script_tags: o.parse_script_tags.unwrap_or(d.parse_script_tags),
        }
    };

    let audit = {
        let d = defaults.audit;
        let o = overrides.audit.unwrap_or_default();
        let flags = o.flags.unwrap_or_default();
        let config = o.config.unwrap_or_default();
        AuditOptions {
            flags: AuditFlags {
                output: flags.output.unwrap_or(d.flags.output),
            },
            config: AuditConfig {
                extends: config.extends.unwrap_or(d.config.extends),
                categories: config.categories.unwrap_or(d.config.categories),
            },
        }
    };

    Options {
        reports_directory: overrides
            .reports_directory
            .unwrap_or(defaults.reports_directory),
        url: overrides.url.unwrap_or(defaults.url),
        crawl,
        audit,
    }
}
