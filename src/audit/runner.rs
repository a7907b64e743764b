//! Per-URL audit execution
//!
//! One browser process per URL, launched fresh and torn down unconditionally
//! before the audit returns. Isolation over speed: no browser reuse across
//! URLs.

use crate::audit::browser::BrowserSession;
use crate::audit::engine::{self, AuditReport};
use crate::audit::traits::Auditor;
use crate::config::AuditOptions;
use crate::report::{derive_destination, write_report};
use crate::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Browser-backed [`Auditor`] implementation
#[derive(Debug, Default)]
pub struct BrowserAuditor;

impl BrowserAuditor {
    pub fn new() -> Self {
        Self
    }

    async fn audit_in_session(
        session: &BrowserSession,
        url: &str,
        options: &AuditOptions,
    ) -> Result<AuditReport> {
        let page = session.open(url).await?;
        page.wait_for_navigation().await?;

        let report = engine::collect(&page, url, &options.config).await?;

        if let Err(e) = page.close().await {
            tracing::debug!("Failed to close page for {}: {e}", url);
        }

        Ok(report)
    }
}

#[async_trait]
impl Auditor for BrowserAuditor {
    async fn audit(&self, url: &str, options: &AuditOptions) -> Result<AuditReport> {
        let session = BrowserSession::launch().await?;

        // Teardown runs on success and failure alike
        let result = Self::audit_in_session(&session, url, options).await;
        session.close().await;

        result
    }
}

/// Audits one URL and persists its report, returning the written path
///
/// Derives the destination from the URL, invokes the auditor, creates the
/// destination directory if missing, and writes the rendered payload,
/// overwriting any existing file.
pub async fn run_audit(
    url: &str,
    run_dir: &Path,
    root: &str,
    options: &AuditOptions,
    auditor: &dyn Auditor,
) -> Result<PathBuf> {
    let dest = derive_destination(url, root, run_dir);

    let report = auditor.audit(url, options).await?;
    let payload = report.render(options.flags.output)?;

    let path = write_report(&dest, options.flags.output.extension(), &payload)?;
    tracing::debug!("Wrote report to {}", path.display());

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Options;

    // Requires a local Chrome/Chromium installation
    #[tokio::test]
    #[ignore]
    async fn test_browser_audit_of_data_url() {
        let options = Options::default().audit;
        let auditor = BrowserAuditor::new();

        let report = auditor
            .audit("data:text/html,<title>Hi</title><p>body</p>", &options)
            .await
            .expect("audit failed");

        let document = report.document.expect("document category missing");
        assert_eq!(document.title.as_deref(), Some("Hi"));
    }
}
