//! Browser Session Lifecycle
//!
//! Launches a headless Chromium via chromiumoxide, pumps its CDP event stream
//! on a background task, and hands out pages. The session must be closed on
//! every exit path, including failures, so the browser process is released.

use anyhow::{anyhow, Context, Result};
use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::driver::PageDriver;

pub struct BrowserSession {
    browser: Browser,
    handler_task: JoinHandle<()>,
}

impl BrowserSession {
    /// Launch a Chromium instance and attach to its CDP endpoint.
    pub async fn launch(headless: bool) -> Result<Self> {
        let mut builder = BrowserConfig::builder();
        if !headless {
            builder = builder.with_head();
        }
        let config = builder.build().map_err(|e| anyhow!(e))?;

        info!(headless, "launching browser");
        let (browser, mut handler) = Browser::launch(config)
            .await
            .context("failed to launch Chromium")?;

        // Drain CDP events for the lifetime of the session.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(err) = event {
                    debug!(error = %err, "CDP handler event error");
                }
            }
        });

        Ok(Self {
            browser,
            handler_task,
        })
    }

    /// Open a fresh blank page in the browser.
    pub async fn new_page(&self) -> Result<PageDriver> {
        let page = self
            .browser
            .new_page("about:blank")
            .await
            .context("failed to open page")?;
        Ok(PageDriver::new(page))
    }

    /// Close the browser and stop the event pump.
    pub async fn close(mut self) -> Result<()> {
        info!("closing browser");
        self.browser.close().await.context("failed to close browser")?;
        let _ = self.browser.wait().await;
        self.handler_task.abort();
        Ok(())
    }
}
