//! Stock Creation Flow Test
//!
//! Drives the full create-product-with-initial-stock flow: product form,
//! conditional batch-detail disclosure, submit, success toast, and a reload
//! to confirm the product persisted into the inventory table.

use std::time::Duration;

use rxproof_browser::{Action, Step};

use crate::config::VerifyConfig;
use crate::login::login_steps;

/// Short ceiling on the logged-in check; invalid credentials should fail fast.
const LOGIN_WAIT: Duration = Duration::from_secs(10);

/// Ceiling for the remaining waits.
const WAIT: Duration = Duration::from_secs(30);

pub const PRODUCT_NAME: &str = "Test Product With Stock";
pub const BATCH_NUMBER: &str = "BATCH001";

pub const LOGIN_FAILED_SHOT: &str = "login_failed.png";
pub const INVENTORY_SHOT: &str = "inventory_page.png";
pub const FORM_SHOT: &str = "add_product_with_stock_form.png";
pub const SUCCESS_SHOT: &str = "product_created_success.png";
pub const TABLE_SHOT: &str = "stock_table_result.png";
pub const ERROR_SHOT: &str = "error.png";

fn fill(field: &str, value: &str) -> Action {
    Action::Fill {
        selector: format!(r#"input[name="{field}"]"#),
        value: value.to_string(),
        secret: false,
    }
}

pub fn plan(config: &VerifyConfig) -> Vec<Step> {
    let mut steps = login_steps(config);
    steps.extend([
        // The Logout button is the proof of an authenticated session.
        Step::new(
            "wait for logout marker",
            Action::WaitForText {
                text: "Logout".to_string(),
                timeout: LOGIN_WAIT,
            },
        )
        .with_fallback_screenshot(config.shot(LOGIN_FAILED_SHOT)),
        Step::new(
            "open inventory page",
            Action::Goto(format!("{}/inventory", config.base_url)),
        ),
        Step::new(
            "capture inventory page",
            Action::Screenshot(config.shot(INVENTORY_SHOT)),
        ),
        Step::new(
            "open create product form",
            Action::ClickText("Create New Product".to_string()),
        ),
        Step::new("fill product name", fill("name", PRODUCT_NAME)),
        Step::new("fill generic name", fill("genericName", "Test Generic")),
        Step::new("fill min stock level", fill("minStockLevel", "10")),
        Step::new(
            "toggle add initial stock",
            Action::Click(r#"input[name="addInitialStock"]"#.to_string()),
        ),
        // The checkbox conditionally discloses the batch-detail fields.
        Step::new(
            "wait for batch fields",
            Action::WaitForSelector {
                selector: r#"input[name="batchNumber"]"#.to_string(),
                timeout: WAIT,
            },
        ),
        Step::new("fill batch number", fill("batchNumber", BATCH_NUMBER)),
        Step::new("fill expiry date", fill("expiryDate", "2030-01-01")),
        Step::new("fill quantity", fill("quantity", "50")),
        Step::new("fill mrp", fill("mrp", "100")),
        Step::new("fill cost price", fill("costPrice", "50")),
        Step::new(
            "capture filled form",
            Action::Screenshot(config.shot(FORM_SHOT)),
        ),
        Step::new(
            "submit product",
            Action::ClickText("Create Product".to_string()),
        ),
        Step::new(
            "wait for success toast",
            Action::WaitForText {
                text: "Product created successfully!".to_string(),
                timeout: WAIT,
            },
        ),
        Step::new(
            "capture success",
            Action::Screenshot(config.shot(SUCCESS_SHOT)),
        ),
        // Reload: the product must come back from the server, not local state.
        Step::new("reload inventory", Action::Reload),
        Step::new(
            "wait for product in table",
            Action::WaitForText {
                text: PRODUCT_NAME.to_string(),
                timeout: WAIT,
            },
        ),
        Step::new(
            "capture stock table",
            Action::Screenshot(config.shot(TABLE_SHOT)),
        ),
    ]);
    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logout_wait_fails_fast_with_diagnostic() {
        let config = VerifyConfig::default();
        let steps = plan(&config);
        let step = steps
            .iter()
            .find(|s| s.label == "wait for logout marker")
            .unwrap();
        assert_eq!(
            step.action,
            Action::WaitForText {
                text: "Logout".to_string(),
                timeout: Duration::from_secs(10),
            }
        );
        assert_eq!(
            step.on_fail_screenshot,
            Some(config.shot(LOGIN_FAILED_SHOT))
        );
    }

    #[test]
    fn batch_fields_wait_follows_the_checkbox_toggle() {
        let steps = plan(&VerifyConfig::default());
        let toggle = steps
            .iter()
            .position(|s| s.label == "toggle add initial stock")
            .unwrap();
        let wait = steps
            .iter()
            .position(|s| s.label == "wait for batch fields")
            .unwrap();
        let batch_fill = steps
            .iter()
            .position(|s| s.label == "fill batch number")
            .unwrap();
        assert!(toggle < wait && wait < batch_fill);
    }

    #[test]
    fn fills_the_pinned_form_contract() {
        let steps = plan(&VerifyConfig::default());
        let fills: Vec<(&str, &str)> = steps
            .iter()
            .filter_map(|s| match &s.action {
                Action::Fill {
                    selector,
                    value,
                    secret: false,
                } if selector.starts_with("input[name=") => {
                    Some((selector.as_str(), value.as_str()))
                }
                _ => None,
            })
            .collect();
        assert_eq!(
            fills,
            vec![
                (r#"input[name="name"]"#, PRODUCT_NAME),
                (r#"input[name="genericName"]"#, "Test Generic"),
                (r#"input[name="minStockLevel"]"#, "10"),
                (r#"input[name="batchNumber"]"#, BATCH_NUMBER),
                (r#"input[name="expiryDate"]"#, "2030-01-01"),
                (r#"input[name="quantity"]"#, "50"),
                (r#"input[name="mrp"]"#, "100"),
                (r#"input[name="costPrice"]"#, "50"),
            ]
        );
    }

    #[test]
    fn persistence_check_happens_after_reload() {
        let config = VerifyConfig::default();
        let steps = plan(&config);
        let reload = steps.iter().position(|s| s.action == Action::Reload).unwrap();
        let table_wait = steps
            .iter()
            .position(|s| {
                matches!(&s.action, Action::WaitForText { text, .. } if text == PRODUCT_NAME)
            })
            .unwrap();
        assert!(reload < table_wait);
        assert_eq!(
            steps.last().unwrap().action,
            Action::Screenshot(config.shot(TABLE_SHOT))
        );
    }
}
