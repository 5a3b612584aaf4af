//! Shared login sequence against the frontend's `/login` page.

use rxproof_browser::{Action, Step};

use crate::config::VerifyConfig;

/// Navigate to the login page, fill credentials, and submit. What counts as
/// proof of a logged-in session differs per script, so the steps end at the
/// submit click.
pub fn login_steps(config: &VerifyConfig) -> Vec<Step> {
    vec![
        Step::new(
            "open login page",
            Action::Goto(format!("{}/login", config.base_url)),
        ),
        Step::new(
            "fill email",
            Action::Fill {
                selector: r#"input[type="email"]"#.to_string(),
                value: config.email.clone(),
                secret: false,
            },
        ),
        Step::new(
            "fill password",
            Action::Fill {
                selector: r#"input[type="password"]"#.to_string(),
                value: config.password.clone(),
                secret: true,
            },
        ),
        Step::new(
            "submit login",
            Action::Click(r#"button[type="submit"]"#.to_string()),
        ),
    ]
}
