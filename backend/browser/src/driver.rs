//! CDP Page Driver
//!
//! `PageActions` implementation backed by a chromiumoxide [`Page`]. Waits are
//! polling loops under a `tokio::time::timeout` deadline; text-based lookups
//! go through injected JavaScript since CDP selector queries are CSS-only.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::cdp::browser_protocol::page::CaptureScreenshotFormat;
use chromiumoxide::page::{Page, ScreenshotParams};
use tracing::debug;

use crate::actions::PageActions;
use crate::error::DriverError;

/// How often waiting loops re-check the page.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Deadline applied to implicit waits inside fill/click actions.
const ACTION_TIMEOUT: Duration = Duration::from_secs(30);

pub struct PageDriver {
    page: Page,
}

impl PageDriver {
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    /// Render `s` as a JavaScript string literal, escaping quotes and control
    /// characters. JSON string syntax is valid JS.
    fn js_string(s: &str) -> String {
        serde_json::Value::String(s.to_string()).to_string()
    }

    async fn eval_bool(&self, js: &str) -> Result<bool, DriverError> {
        let result = self.page.evaluate(js).await?;
        Ok(result.into_value::<bool>()?)
    }

    /// Poll `check` until it reports true or `timeout` elapses.
    async fn poll_until<F, Fut>(
        &self,
        what: &str,
        timeout: Duration,
        check: F,
    ) -> Result<(), DriverError>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = Result<bool, DriverError>>,
    {
        let wait = async {
            loop {
                match check().await {
                    Ok(true) => return Ok(()),
                    // Not there yet (or the page is mid-navigation); keep polling.
                    Ok(false) | Err(DriverError::Cdp(_)) => {}
                    Err(err) => return Err(err),
                }
                tokio::time::sleep(POLL_INTERVAL).await;
            }
        };
        match tokio::time::timeout(timeout, wait).await {
            Ok(result) => result,
            Err(_) => Err(DriverError::timeout(what, timeout)),
        }
    }

    /// JS that selects the current content of the element matching `selector`,
    /// so subsequent typing replaces it instead of appending.
    fn select_all_js(selector: &str) -> String {
        format!(
            r#"(function() {{
                const el = document.querySelector({});
                if (el && el.select) el.select();
            }})()"#,
            Self::js_string(selector)
        )
    }

    async fn selector_exists(&self, selector: &str) -> Result<bool, DriverError> {
        let js = format!(
            "document.querySelector({}) !== null",
            Self::js_string(selector)
        );
        self.eval_bool(&js).await
    }
}

#[async_trait]
impl PageActions for PageDriver {
    async fn goto(&self, url: &str) -> Result<(), DriverError> {
        debug!(url, "goto");
        self.page.goto(url).await?;
        Ok(())
    }

    async fn fill(&self, selector: &str, value: &str) -> Result<(), DriverError> {
        self.wait_for_selector(selector, ACTION_TIMEOUT).await?;
        let element = self.page.find_element(selector).await?;
        element.click().await?;
        // Pre-populated content must not survive a fill.
        self.page.evaluate(Self::select_all_js(selector)).await?;
        element.type_str(value).await?;
        Ok(())
    }

    async fn click(&self, selector: &str) -> Result<(), DriverError> {
        self.wait_for_selector(selector, ACTION_TIMEOUT).await?;
        self.page.find_element(selector).await?.click().await?;
        Ok(())
    }

    async fn click_text(&self, text: &str) -> Result<(), DriverError> {
        // Prefer leaf elements so the click lands on (or bubbles from) the
        // innermost node carrying the text.
        let js = format!(
            r#"(function() {{
                const needle = {needle};
                const all = Array.from(document.querySelectorAll('*'));
                const target =
                    all.find(el => el.childElementCount === 0
                        && (el.textContent || '').includes(needle))
                    || all.find(el => (el.textContent || '').includes(needle));
                if (!target) return false;
                target.click();
                return true;
            }})()"#,
            needle = Self::js_string(text)
        );
        self.poll_until(
            &format!("element with text {text:?}"),
            ACTION_TIMEOUT,
            || self.eval_bool(&js),
        )
        .await
    }

    async fn wait_for_selector(&self, selector: &str, timeout: Duration) -> Result<(), DriverError> {
        self.poll_until(&format!("selector {selector:?}"), timeout, || {
            self.selector_exists(selector)
        })
        .await
    }

    async fn wait_for_text(&self, text: &str, timeout: Duration) -> Result<(), DriverError> {
        let js = format!(
            "!!document.body && document.body.innerText.includes({})",
            Self::js_string(text)
        );
        self.poll_until(&format!("text {text:?}"), timeout, || self.eval_bool(&js))
            .await
    }

    async fn wait_for_url(&self, url: &str, timeout: Duration) -> Result<(), DriverError> {
        self.poll_until(&format!("url {url:?}"), timeout, || async {
            Ok(self.page.url().await?.as_deref() == Some(url))
        })
        .await
    }

    async fn screenshot(&self, path: &Path) -> Result<(), DriverError> {
        debug!(path = %path.display(), "screenshot");
        self.page
            .save_screenshot(
                ScreenshotParams::builder()
                    .format(CaptureScreenshotFormat::Png)
                    .build(),
                path,
            )
            .await?;
        Ok(())
    }

    async fn reload(&self) -> Result<(), DriverError> {
        self.page.reload().await?;
        Ok(())
    }
}
