use serde::Deserialize;

/// Fully resolved pipeline options
///
/// Produced once per pipeline invocation by [`resolve`](crate::config::resolve)
/// and treated as immutable afterwards.
#[derive(Debug, Clone)]
pub struct Options {
    /// Parent directory for the run's report tree
    pub reports_directory: String,

    /// Crawl root and audit target seed
    pub url: String,

    pub crawl: CrawlOptions,
    pub audit: AuditOptions,
}

/// Crawl traversal options
#[derive(Debug, Clone)]
pub struct CrawlOptions {
    /// Pacing between fetch dispatches (milliseconds)
    pub interval_ms: u64,

    /// Maximum number of concurrent page fetches
    pub max_concurrency: u32,

    /// Maximum depth to crawl from the root URL
    pub max_depth: u32,

    /// Whether to honor the root host's robots.txt
    pub respect_robots_txt: bool,

    /// Whether to scan HTML comments for absolute URLs
    pub parse_html_comments: bool,

    /// Whether to scan <script> bodies for absolute URLs
    pub parse_script_tags: bool,
}

/// Audit invocation options
#[derive(Debug, Clone)]
pub struct AuditOptions {
    pub flags: AuditFlags,
    pub config: AuditConfig,
}

/// Flags controlling how the audit engine is invoked
#[derive(Debug, Clone)]
pub struct AuditFlags {
    /// Report format, also the written file's extension
    pub output: OutputFormat,
}

/// Configuration object controlling which audit categories run
#[derive(Debug, Clone)]
pub struct AuditConfig {
    /// Which built-in rule set the categories extend
    pub extends: String,

    /// Category toggles applied on top of the rule set
    pub categories: AuditCategories,
}

/// Per-category toggles for the audit engine
#[derive(Debug, Clone, Deserialize)]
pub struct AuditCategories {
    #[serde(default = "default_true")]
    pub performance: bool,

    #[serde(default = "default_true")]
    pub document: bool,
}

fn default_true() -> bool {
    true
}

impl Default for AuditCategories {
    fn default() -> Self {
        Self {
            performance: true,
            document: true,
        }
    }
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Html,
    Json,
}

impl OutputFormat {
    /// File extension for reports in this format
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
        }
    }
}

/// Caller-supplied overrides: every field optional, merged over the
/// documented defaults group by group
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Overrides {
    #[serde(rename = "reports-directory")]
    pub reports_directory: Option<String>,

    pub url: Option<String>,

    #[serde(default)]
    pub crawl: Option<CrawlOverrides>,

    #[serde(default)]
    pub audit: Option<AuditOverrides>,
}

/// Partial crawl options
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CrawlOverrides {
    #[serde(rename = "interval-ms")]
    pub interval_ms: Option<u64>,

    #[serde(rename = "max-concurrency")]
    pub max_concurrency: Option<u32>,

    #[serde(rename = "max-depth")]
    pub max_depth: Option<u32>,

    #[serde(rename = "respect-robots-txt")]
    pub respect_robots_txt: Option<bool>,

    #[serde(rename = "parse-html-comments")]
    pub parse_html_comments: Option<bool>,

    #[serde(rename = "parse-script-tags")]
    pub parse_script_tags: Option<bool>,
}

/// Partial audit options
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuditOverrides {
    #[serde(default)]
    pub flags: Option<AuditFlagOverrides>,

    #[serde(default)]
    pub config: Option<AuditConfigOverrides>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuditFlagOverrides {
    pub output: Option<OutputFormat>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuditConfigOverrides {
    pub extends: Option<String>,

    pub categories: Option<AuditCategories>,
}
