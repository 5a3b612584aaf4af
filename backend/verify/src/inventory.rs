//! Inventory Dashboard Smoke Test
//!
//! Log in, open the inventory page, wait for its heading, and capture one
//! screenshot as evidence.

use std::time::Duration;

use rxproof_browser::{Action, Step};

use crate::config::VerifyConfig;
use crate::login::login_steps;

/// Ceiling for every wait in this script.
const WAIT: Duration = Duration::from_secs(60);

pub const DASHBOARD_SHOT: &str = "inventory_dashboard.png";
pub const ERROR_SHOT: &str = "error.png";

pub fn plan(config: &VerifyConfig) -> Vec<Step> {
    let mut steps = login_steps(config);
    steps.extend([
        Step::new(
            "wait for dashboard url",
            Action::WaitForUrl {
                url: format!("{}/", config.base_url),
                timeout: WAIT,
            },
        ),
        Step::new(
            "open inventory page",
            Action::Goto(format!("{}/inventory", config.base_url)),
        ),
        Step::new(
            "wait for inventory heading",
            Action::WaitForText {
                text: "Inventory Management".to_string(),
                timeout: WAIT,
            },
        ),
        Step::new(
            "capture dashboard",
            Action::Screenshot(config.shot(DASHBOARD_SHOT)),
        ),
    ]);
    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waits_use_the_sixty_second_ceiling() {
        let steps = plan(&VerifyConfig::default());
        for step in &steps {
            match &step.action {
                Action::WaitForUrl { timeout, .. } | Action::WaitForText { timeout, .. } => {
                    assert_eq!(*timeout, Duration::from_secs(60), "step {}", step.label);
                }
                _ => {}
            }
        }
    }

    #[test]
    fn ends_with_the_dashboard_screenshot() {
        let config = VerifyConfig::default();
        let steps = plan(&config);
        assert_eq!(
            steps.last().unwrap().action,
            Action::Screenshot(config.shot(DASHBOARD_SHOT))
        );
    }

    #[test]
    fn checks_heading_before_capturing() {
        let steps = plan(&VerifyConfig::default());
        let heading = steps
            .iter()
            .position(|s| {
                matches!(&s.action, Action::WaitForText { text, .. } if text == "Inventory Management")
            })
            .unwrap();
        let shot = steps
            .iter()
            .position(|s| matches!(&s.action, Action::Screenshot(_)))
            .unwrap();
        assert!(heading < shot);
    }
}
