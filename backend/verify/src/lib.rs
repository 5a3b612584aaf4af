//! Verification scripts for the pharmacy web application.
//!
//! Each script is a fixed, non-branching sequence of page interactions built
//! as a [`rxproof_browser::Step`] list, plus one API-level check driven over
//! HTTP. The external application's selectors and field names are a
//! version-pinned contract; they are consumed here, never implemented.

pub mod config;
pub mod inventory;
pub mod login;
pub mod pos;
pub mod stock;

pub use config::VerifyConfig;
