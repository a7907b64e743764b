//! Auditor seam
//!
//! The pipeline talks to the audit engine through this trait so it can be
//! exercised without a browser.

use crate::audit::engine::AuditReport;
use crate::config::AuditOptions;
use crate::Result;
use async_trait::async_trait;

/// Produces one finished report per URL
#[async_trait]
pub trait Auditor: Send + Sync {
    /// Audits a single URL and returns the finished report
    async fn audit(&self, url: &str, options: &AuditOptions) -> Result<AuditReport>;
}
