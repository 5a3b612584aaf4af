//! POS API verification.
//!
//! Drives the backend API directly (cookie-session auth): create a product
//! and a 50-unit batch, sell two units through the POS endpoint, then read
//! the product list back and confirm the batch quantity dropped to 48.

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde_json::Value;
use tracing::info;

use rxproof_verify::{pos, VerifyConfig};

#[derive(Parser)]
#[command(name = "verify-pos-api")]
#[command(about = "Verify the POS sale flow and stock deduction over the API")]
struct Args {
    /// Backend API base URL
    #[arg(long)]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut config = VerifyConfig::from_env();
    if let Some(api_url) = args.api_url {
        config.api_url = api_url;
    }

    logging::init_console_logger(&config.log_level);

    // Session cookie from login is carried automatically.
    let client = reqwest::Client::builder().cookie_store(true).build()?;
    let api = config.api_url.as_str();
    let unique = pos::unique_suffix();

    info!("logging in");
    let resp = client
        .post(format!("{api}/auth/login"))
        .json(&serde_json::json!({
            "email": config.email,
            "password": config.password,
        }))
        .send()
        .await
        .context("login request failed")?;
    if !resp.status().is_success() {
        bail!("login failed: {} {}", resp.status(), resp.text().await?);
    }

    info!("creating product");
    let product = post_json(
        &client,
        &format!("{api}/inventory/products"),
        &pos::product_payload(unique),
    )
    .await
    .context("create product failed")?;
    let product_id = required_str(&product, "_id")?;
    info!(product_id, "product created");

    info!("creating batch");
    let batch = post_json(
        &client,
        &format!("{api}/inventory/batches"),
        &pos::batch_payload(product_id, unique),
    )
    .await
    .context("create batch failed")?;
    let batch_id = required_str(&batch, "_id")?;
    info!(batch_id, "batch created");

    info!("creating sale");
    let resp = client
        .post(format!("{api}/pos/sales"))
        .json(&pos::sale_payload(product_id, batch_id))
        .send()
        .await
        .context("sale request failed")?;
    if resp.status().as_u16() != 201 {
        bail!("sale failed: {} {}", resp.status(), resp.text().await?);
    }
    let sale: Value = resp.json().await?;
    info!(receipt = ?sale.get("receiptNumber"), "sale created");

    info!("verifying stock deduction");
    let products: Value = client
        .get(format!("{api}/pos/products"))
        .send()
        .await
        .context("list products failed")?
        .json()
        .await?;
    let batch_number = pos::batch_number(unique);
    let remaining = products
        .as_array()
        .and_then(|items| {
            items
                .iter()
                .find(|p| p.get("_id").and_then(Value::as_str) == Some(product_id))
        })
        .and_then(|p| p.get("batches")?.as_array())
        .and_then(|batches| {
            batches.iter().find(|b| {
                b.get("batchNumber").and_then(Value::as_str) == Some(batch_number.as_str())
            })
        })
        .and_then(|b| b.get("quantity")?.as_u64())
        .context("sold batch not found in POS product list")?;

    let expected = u64::from(pos::expected_remaining());
    if remaining != expected {
        bail!("stock mismatch: expected {expected} remaining, got {remaining}");
    }
    info!(
        initial = pos::INITIAL_QUANTITY,
        sold = pos::SALE_QUANTITY,
        remaining,
        "stock updated correctly"
    );

    Ok(())
}

async fn post_json(client: &reqwest::Client, url: &str, body: &Value) -> Result<Value> {
    let resp = client.post(url).json(body).send().await?;
    let status = resp.status();
    let json: Value = resp.json().await?;
    if !status.is_success() {
        bail!("{url} returned {status}: {json}");
    }
    Ok(json)
}

fn required_str<'a>(value: &'a Value, key: &str) -> Result<&'a str> {
    value
        .get(key)
        .and_then(Value::as_str)
        .with_context(|| format!("response missing string field {key:?}"))
}
