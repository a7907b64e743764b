//! Audit collector and report rendering
//!
//! Runs inside a navigated page: timings come from the browser's own
//! performance entries, document statistics from the live DOM, both read via
//! injected JavaScript. Each enabled category is scored on a 0..=1 scale and
//! the result rendered as a self-contained HTML document or as JSON.

use crate::config::{AuditConfig, OutputFormat};
use crate::{Result, SitelightError};
use chromiumoxide::page::Page;
use serde::{Deserialize, Serialize};

/// Finished audit for one URL
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub url: String,
    pub audited_at: String,
    /// Which rule set the categories extend
    pub extends: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance: Option<PerformanceAudit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<DocumentAudit>,
}

/// Navigation and paint timing measurements
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceAudit {
    pub ttfb_ms: f64,
    pub dom_content_loaded_ms: f64,
    pub load_ms: f64,
    pub first_contentful_paint_ms: Option<f64>,
    pub transfer_size_bytes: u64,
    #[serde(default)]
    pub score: f64,
}

/// Static document health checks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentAudit {
    pub title: Option<String>,
    pub link_count: u64,
    pub image_count: u64,
    pub images_missing_alt: u64,
    pub script_count: u64,
    pub has_meta_description: bool,
    pub has_meta_viewport: bool,
    #[serde(default)]
    pub score: f64,
}

const PERFORMANCE_JS: &str = r#"
(() => {
  const [nav] = performance.getEntriesByType('navigation');
  if (!nav) return null;
  const paint = performance
    .getEntriesByType('paint')
    .find((e) => e.name === 'first-contentful-paint');
  return {
    ttfb_ms: nav.responseStart - nav.requestStart,
    dom_content_loaded_ms: nav.domContentLoadedEventEnd - nav.startTime,
    load_ms: nav.loadEventEnd - nav.startTime,
    first_contentful_paint_ms: paint ? paint.startTime : null,
    transfer_size_bytes: nav.transferSize || 0,
  };
})()
"#;

const DOCUMENT_JS: &str = r#"
(() => ({
  title: document.title || null,
  link_count: document.querySelectorAll('a[href]').length,
  image_count: document.images.length,
  images_missing_alt: Array.from(document.images).filter((i) => !i.getAttribute('alt')).length,
  script_count: document.scripts.length,
  has_meta_description: !!document.querySelector('meta[name="description"]'),
  has_meta_viewport: !!document.querySelector('meta[name="viewport"]'),
}))()
"#;

/// Collects the enabled audit categories from a navigated page
pub async fn collect(page: &Page, url: &str, config: &AuditConfig) -> Result<AuditReport> {
    let performance = if config.categories.performance {
        let mut measured: Option<PerformanceAudit> = page
            .evaluate(PERFORMANCE_JS)
            .await?
            .into_value()
            .map_err(|e| SitelightError::Audit {
                url: url.to_string(),
                message: format!("failed to read performance entries: {e:?}"),
            })?;
        if let Some(p) = measured.as_mut() {
            p.score = score_performance(p);
        }
        measured
    } else {
        None
    };

    let document = if config.categories.document {
        let mut stats: Option<DocumentAudit> = page
            .evaluate(DOCUMENT_JS)
            .await?
            .into_value()
            .map_err(|e| SitelightError::Audit {
                url: url.to_string(),
                message: format!("failed to read document statistics: {e:?}"),
            })?;
        if let Some(d) = stats.as_mut() {
            d.score = score_document(d);
        }
        stats
    } else {
        None
    };

    Ok(AuditReport {
        url: url.to_string(),
        audited_at: chrono::Utc::now().to_rfc3339(),
        extends: config.extends.clone(),
        performance,
        document,
    })
}

/// Scores load timings: 1.0 at or under one second, falling linearly to 0.0
/// at ten seconds, averaged with the same curve for first contentful paint
pub fn score_performance(p: &PerformanceAudit) -> f64 {
    fn timing_score(ms: f64) -> f64 {
        ((10_000.0 - ms) / 9_000.0).clamp(0.0, 1.0)
    }

    let load = timing_score(p.load_ms.max(1_000.0));
    match p.first_contentful_paint_ms {
        Some(fcp) => (load + timing_score(fcp.max(1_000.0))) / 2.0,
        None => load,
    }
}

/// Scores document health: deductions for a missing title, missing meta
/// description, missing viewport, and images without alt text
pub fn score_document(d: &DocumentAudit) -> f64 {
    let mut score = 1.0;

    if d.title.is_none() {
        score -= 0.25;
    }
    if !d.has_meta_description {
        score -= 0.25;
    }
    if !d.has_meta_viewport {
        score -= 0.25;
    }
    if d.image_count > 0 {
        score -= 0.25 * (d.images_missing_alt as f64 / d.image_count as f64);
    }

    score.max(0.0)
}

impl AuditReport {
    /// Renders the report in the requested format
    pub fn render(&self, format: OutputFormat) -> Result<Vec<u8>> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_vec_pretty(self)?),
            OutputFormat::Html => Ok(self.render_html().into_bytes()),
        }
    }

    fn render_html(&self) -> String {
        let mut sections = String::new();

        if let Some(p) = &self.performance {
            sections.push_str(&format!(
                r#"<section>
<h2>Performance <span class="score">{:.0}%</span></h2>
<table>
<tr><td>Time to first byte</td><td>{:.0} ms</td></tr>
<tr><td>DOM content loaded</td><td>{:.0} ms</td></tr>
<tr><td>Load</td><td>{:.0} ms</td></tr>
<tr><td>First contentful paint</td><td>{}</td></tr>
<tr><td>Transfer size</td><td>{} bytes</td></tr>
</table>
</section>
"#,
                p.score * 100.0,
                p.ttfb_ms,
                p.dom_content_loaded_ms,
                p.load_ms,
                p.first_contentful_paint_ms
                    .map(|v| format!("{v:.0} ms"))
                    .unwrap_or_else(|| "n/a".to_string()),
                p.transfer_size_bytes,
            ));
        }

        if let Some(d) = &self.document {
            sections.push_str(&format!(
                r#"<section>
<h2>Document <span class="score">{:.0}%</span></h2>
<table>
<tr><td>Title</td><td>{}</td></tr>
<tr><td>Links</td><td>{}</td></tr>
<tr><td>Images</td><td>{} ({} missing alt text)</td></tr>
<tr><td>Scripts</td><td>{}</td></tr>
<tr><td>Meta description</td><td>{}</td></tr>
<tr><td>Meta viewport</td><td>{}</td></tr>
</table>
</section>
"#,
                d.score * 100.0,
                d.title.as_deref().unwrap_or("(none)"),
                d.link_count,
                d.image_count,
                d.images_missing_alt,
                d.script_count,
                if d.has_meta_description { "yes" } else { "no" },
                if d.has_meta_viewport { "yes" } else { "no" },
            ));
        }

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Audit report: {url}</title>
<style>
body {{ font-family: sans-serif; margin: 2rem; }}
table {{ border-collapse: collapse; }}
td {{ border: 1px solid #ccc; padding: 0.3rem 0.6rem; }}
.score {{ color: #555; font-size: 0.8em; }}
</style>
</head>
<body>
<h1>Audit report</h1>
<p><strong>{url}</strong> &mdash; audited {audited_at} (rule set: {extends})</p>
{sections}</body>
</html>
"#,
            url = self.url,
            audited_at = self.audited_at,
            extends = self.extends,
            sections = sections,
        )
    }
}
