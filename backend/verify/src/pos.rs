//! POS API Verification Payloads
//!
//! Request bodies for the API-level check: create a product and batch, sell
//! two units, and confirm the stock deduction. Product and batch names carry
//! a unique suffix so reruns against a seeded database do not collide.

use chrono::{Duration, Utc};
use serde_json::{json, Value};

pub const INITIAL_QUANTITY: u32 = 50;
pub const SALE_QUANTITY: u32 = 2;

/// Millisecond timestamp used as the uniqueness suffix for a run.
pub fn unique_suffix() -> i64 {
    Utc::now().timestamp_millis()
}

pub fn batch_number(unique: i64) -> String {
    format!("BATCH-{unique}")
}

pub fn product_payload(unique: i64) -> Value {
    json!({
        "name": format!("Paracetamol {unique}"),
        "genericName": "Acetaminophen",
        "category": "Medicine",
        "minStockLevel": 10,
    })
}

pub fn batch_payload(product_id: &str, unique: i64) -> Value {
    json!({
        "productId": product_id,
        "batchNumber": batch_number(unique),
        "expiryDate": (Utc::now() + Duration::days(365)).to_rfc3339(),
        "mrp": 100,
        "costPrice": 50,
        "quantity": INITIAL_QUANTITY,
    })
}

pub fn sale_payload(product_id: &str, batch_id: &str) -> Value {
    json!({
        "items": [{
            "productId": product_id,
            "batchId": batch_id,
            "quantity": SALE_QUANTITY,
            "price": 100,
        }],
        "paymentMethod": "Cash",
    })
}

/// Stock expected in the batch after the sale goes through.
pub fn expected_remaining() -> u32 {
    INITIAL_QUANTITY - SALE_QUANTITY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_and_batch_share_the_unique_suffix() {
        let unique = 1_700_000_000_000;
        let product = product_payload(unique);
        let batch = batch_payload("p1", unique);
        assert_eq!(product["name"], "Paracetamol 1700000000000");
        assert_eq!(batch["batchNumber"], "BATCH-1700000000000");
        assert_eq!(batch["productId"], "p1");
    }

    #[test]
    fn sale_deducts_two_from_fifty() {
        let batch = batch_payload("p1", 1);
        let sale = sale_payload("p1", "b1");
        assert_eq!(batch["quantity"], 50);
        assert_eq!(sale["items"][0]["quantity"], 2);
        assert_eq!(expected_remaining(), 48);
    }
}
