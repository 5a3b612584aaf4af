//! Browser automation for rxproof verification scripts.
//!
//! Drives a headless Chromium instance over the Chrome DevTools Protocol
//! (chromiumoxide) and exposes a small page-action surface — navigate, fill,
//! click, wait-for-condition, screenshot — plus a sequential script runner.

pub mod actions;
pub mod cdp;
pub mod driver;
pub mod error;
pub mod script;

pub use actions::PageActions;
pub use cdp::BrowserSession;
pub use driver::PageDriver;
pub use error::DriverError;
pub use script::{run_script, Action, Step};
