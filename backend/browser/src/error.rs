use std::time::Duration;

use thiserror::Error;

/// Failure modes of the page-automation layer.
///
/// `WaitTimeout` is the only domain-level failure: an expectation about the
/// page was not met within its deadline. Everything else wraps transport or
/// filesystem problems underneath.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("timed out after {timeout:?} waiting for {what}")]
    WaitTimeout { what: String, timeout: Duration },

    #[error("browser command failed: {0}")]
    Cdp(#[from] chromiumoxide::error::CdpError),

    #[error("unexpected script evaluation result: {0}")]
    Eval(#[from] serde_json::Error),

    #[error("screenshot write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DriverError {
    pub(crate) fn timeout(what: impl Into<String>, timeout: Duration) -> Self {
        Self::WaitTimeout {
            what: what.into(),
            timeout,
        }
    }
}
