//! Pipeline driver
//!
//! The entry point: resolve options, discover URLs once, then audit each
//! discovered URL strictly sequentially. Audits never overlap; each one is
//! awaited before the next starts, and a failing audit aborts the remaining
//! queue.

use crate::audit::{run_audit, Auditor, BrowserAuditor};
use crate::config::{self, Options, Overrides};
use crate::Result;
use std::path::Path;

/// Runs the full pipeline with the browser-backed auditor
///
/// Completion means every discovered URL has a report on disk; any failure
/// propagates and terminates the run.
pub async fn run(overrides: Overrides) -> Result<()> {
    let options = config::resolve(overrides);
    let auditor = BrowserAuditor::new();
    run_with(&options, &auditor).await
}

/// Runs the pipeline against already-resolved options and a caller-supplied
/// auditor
pub async fn run_with(options: &Options, auditor: &dyn Auditor) -> Result<()> {
    config::validate(options)?;

    // Timestamp-namespaced run directory; created lazily by the first
    // report write
    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string();
    let run_dir = Path::new(&options.reports_directory).join(&timestamp);

    let urls = crate::crawler::discover_urls(&options.url, &options.crawl).await?;
    tracing::info!("Found {} urls to audit", urls.len());

    for url in &urls {
        tracing::info!("Running audit for {}", url);
        run_audit(url, &run_dir, &options.url, &options.audit, auditor).await?;
    }

    tracing::info!("Done creating reports");
    Ok(())
}
