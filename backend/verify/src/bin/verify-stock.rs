//! Stock creation flow test.
//!
//! Exercises the create-product-with-initial-stock flow end to end, capturing
//! screenshots at each checkpoint. Failures take a diagnostic screenshot and
//! propagate; the browser is closed on every exit path.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info, warn};

use rxproof_browser::{run_script, BrowserSession, DriverError, PageActions};
use rxproof_verify::{stock, VerifyConfig};

#[derive(Parser)]
#[command(name = "verify-stock")]
#[command(about = "Verify the create-product-with-stock flow end to end")]
struct Args {
    /// Frontend base URL
    #[arg(long)]
    base_url: Option<String>,
    /// Directory screenshots are written to
    #[arg(long)]
    output_dir: Option<PathBuf>,
    /// Run the browser with a visible window
    #[arg(long)]
    headed: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut config = VerifyConfig::from_env();
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }
    if let Some(output_dir) = args.output_dir {
        config.output_dir = output_dir;
    }
    if args.headed {
        config.headless = false;
    }

    logging::init_console_logger(&config.log_level);
    std::fs::create_dir_all(&config.output_dir)?;

    let session = BrowserSession::launch(config.headless).await?;
    let result = verify(&session, &config).await;
    let close_result = session.close().await;

    match result {
        Ok(()) => {
            info!("stock verification complete");
            close_result
        }
        Err(err) => {
            error!(error = %err, "stock verification failed");
            Err(err.into())
        }
    }
}

async fn verify(session: &BrowserSession, config: &VerifyConfig) -> Result<(), DriverError> {
    let page = session.new_page().await?;
    match run_script(&page, &stock::plan(config)).await {
        Ok(()) => Ok(()),
        Err(err) => {
            let path = config.shot(stock::ERROR_SHOT);
            if let Err(shot_err) = page.screenshot(&path).await {
                warn!(error = %shot_err, "diagnostic screenshot failed");
            }
            Err(err)
        }
    }
}
