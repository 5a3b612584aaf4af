//! Sequential Verification Scripts
//!
//! A script is an ordered list of [`Step`]s executed one after another against
//! a [`PageActions`] page. There is no branching and no retrying: the first
//! step that fails stops the run. A step may carry a fallback screenshot path,
//! captured best-effort before the failure propagates.

use std::path::PathBuf;
use std::time::Duration;

use tracing::{error, info, warn};

use crate::actions::PageActions;
use crate::error::DriverError;

/// One page interaction within a script.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Goto(String),
    Fill {
        selector: String,
        value: String,
        /// Secret values (passwords) are redacted from logs.
        secret: bool,
    },
    Click(String),
    ClickText(String),
    WaitForSelector {
        selector: String,
        timeout: Duration,
    },
    WaitForText {
        text: String,
        timeout: Duration,
    },
    WaitForUrl {
        url: String,
        timeout: Duration,
    },
    Screenshot(PathBuf),
    Reload,
}

impl Action {
    /// Loggable description of the action, with secret fill values redacted.
    pub fn describe(&self) -> String {
        match self {
            Action::Goto(url) => format!("goto {url}"),
            Action::Fill {
                selector,
                value,
                secret,
            } => {
                let shown = if *secret { "[REDACTED]" } else { value.as_str() };
                format!("fill {selector} = {shown:?}")
            }
            Action::Click(selector) => format!("click {selector}"),
            Action::ClickText(text) => format!("click text {text:?}"),
            Action::WaitForSelector { selector, timeout } => {
                format!("wait for selector {selector:?} (up to {timeout:?})")
            }
            Action::WaitForText { text, timeout } => {
                format!("wait for text {text:?} (up to {timeout:?})")
            }
            Action::WaitForUrl { url, timeout } => {
                format!("wait for url {url} (up to {timeout:?})")
            }
            Action::Screenshot(path) => format!("screenshot {}", path.display()),
            Action::Reload => "reload".to_string(),
        }
    }
}

/// A labeled script step, optionally with a diagnostic screenshot taken when
/// the step fails.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub label: String,
    pub action: Action,
    pub on_fail_screenshot: Option<PathBuf>,
}

impl Step {
    pub fn new(label: impl Into<String>, action: Action) -> Self {
        Self {
            label: label.into(),
            action,
            on_fail_screenshot: None,
        }
    }

    pub fn with_fallback_screenshot(mut self, path: impl Into<PathBuf>) -> Self {
        self.on_fail_screenshot = Some(path.into());
        self
    }
}

/// Run `steps` in order. Returns the first failure, after capturing the
/// failing step's fallback screenshot if one is configured.
pub async fn run_script<P: PageActions + Sync>(
    page: &P,
    steps: &[Step],
) -> Result<(), DriverError> {
    for step in steps {
        info!(step = %step.label, action = %step.action.describe(), "running step");
        if let Err(err) = apply(page, &step.action).await {
            error!(step = %step.label, error = %err, "step failed");
            if let Some(path) = &step.on_fail_screenshot {
                if let Err(shot_err) = page.screenshot(path).await {
                    warn!(error = %shot_err, "fallback screenshot failed");
                }
            }
            return Err(err);
        }
    }
    Ok(())
}

async fn apply<P: PageActions + Sync>(page: &P, action: &Action) -> Result<(), DriverError> {
    match action {
        Action::Goto(url) => page.goto(url).await,
        Action::Fill {
            selector, value, ..
        } => page.fill(selector, value).await,
        Action::Click(selector) => page.click(selector).await,
        Action::ClickText(text) => page.click_text(text).await,
        Action::WaitForSelector { selector, timeout } => {
            page.wait_for_selector(selector, *timeout).await
        }
        Action::WaitForText { text, timeout } => page.wait_for_text(text, *timeout).await,
        Action::WaitForUrl { url, timeout } => page.wait_for_url(url, *timeout).await,
        Action::Screenshot(path) => page.screenshot(path).await,
        Action::Reload => page.reload().await,
    }
}
