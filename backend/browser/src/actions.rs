//! Page Action Surface
//!
//! The seam between verification scripts and the browser: everything a script
//! may do to a page. Scripts run against this trait so they can be exercised
//! with a fake page in tests.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::DriverError;

#[async_trait]
pub trait PageActions {
    /// Navigate the page to `url` and wait for the load to settle.
    async fn goto(&self, url: &str) -> Result<(), DriverError>;

    /// Focus the element matched by `selector` and type `value` into it.
    async fn fill(&self, selector: &str, value: &str) -> Result<(), DriverError>;

    /// Click the element matched by `selector`.
    async fn click(&self, selector: &str) -> Result<(), DriverError>;

    /// Click the first element whose visible text contains `text`.
    async fn click_text(&self, text: &str) -> Result<(), DriverError>;

    /// Wait until `selector` matches an element in the DOM.
    async fn wait_for_selector(&self, selector: &str, timeout: Duration) -> Result<(), DriverError>;

    /// Wait until `text` appears anywhere in the page body.
    async fn wait_for_text(&self, text: &str, timeout: Duration) -> Result<(), DriverError>;

    /// Wait until the page URL equals `url`.
    async fn wait_for_url(&self, url: &str, timeout: Duration) -> Result<(), DriverError>;

    /// Capture a PNG screenshot of the viewport to `path`.
    async fn screenshot(&self, path: &Path) -> Result<(), DriverError>;

    /// Reload the current page.
    async fn reload(&self) -> Result<(), DriverError>;
}
