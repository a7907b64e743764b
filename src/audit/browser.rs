//! Headless browser lifecycle
//!
//! Each audit launches a fresh isolated Chromium instance and tears it down
//! when the audit finishes. The CDP event handler runs on a spawned task for
//! the lifetime of the session.

use crate::{Result, SitelightError};
use chromiumoxide::browser::{Browser, BrowserConfig, HeadlessMode};
use chromiumoxide::page::Page;
use futures::StreamExt;
use tokio::task::JoinHandle;

/// A launched headless Chromium instance
pub struct BrowserSession {
    browser: Browser,
    handler_task: JoinHandle<()>,
}

impl BrowserSession {
    /// Launches a fresh headless browser process
    ///
    /// The executable is auto-detected; set the `CHROME` environment variable
    /// to point at a specific binary.
    pub async fn launch() -> Result<Self> {
        let mut builder = BrowserConfig::builder()
            .headless_mode(HeadlessMode::New)
            .arg("--disable-gpu")
            .arg("--no-sandbox")
            .arg("--disable-dev-shm-usage")
            .arg("--disable-extensions")
            .arg("--disable-background-networking")
            .arg("--mute-audio");

        if let Ok(path) = std::env::var("CHROME") {
            builder = builder.chrome_executable(path);
        }

        let config = builder
            .build()
            .map_err(|e| SitelightError::Browser(format!("failed to build browser config: {e}")))?;

        let (browser, mut handler) = Browser::launch(config).await?;

        // Drain CDP events for the lifetime of the session
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    tracing::trace!("Browser handler event error: {e}");
                }
            }
        });

        tracing::debug!(
            "Launched headless browser at {}",
            browser.websocket_address()
        );

        Ok(Self {
            browser,
            handler_task,
        })
    }

    /// Opens a page and navigates it to the given URL
    pub async fn open(&self, url: &str) -> Result<Page> {
        let page = self.browser.new_page(url).await?;
        Ok(page)
    }

    /// Tears the browser process down
    ///
    /// Best-effort on each step so a failed close still reaps the process
    /// and stops the handler task.
    pub async fn close(mut self) {
        if let Err(e) = self.browser.close().await {
            tracing::warn!("Failed to close browser: {e}");
        }
        if let Err(e) = self.browser.wait().await {
            tracing::warn!("Failed to wait for browser exit: {e}");
        }
        self.handler_task.abort();
    }
}
