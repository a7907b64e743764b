//! Audit module: per-URL headless-browser auditing
//!
//! - Browser lifecycle (fresh Chromium per URL, unconditional teardown)
//! - The collector that turns a navigated page into a scored report
//! - The `Auditor` trait seam and report persistence

mod browser;
mod engine;
mod runner;
mod traits;

pub use browser::BrowserSession;
pub use engine::{score_document, score_performance, AuditReport, DocumentAudit, PerformanceAudit};
pub use runner::{run_audit, BrowserAuditor};
pub use traits::Auditor;
