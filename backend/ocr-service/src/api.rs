//! HTTP API
//!
//! Two routes: the mock parse endpoint and a health probe. The parse handler
//! does no image processing — it accepts any upload, sleeps to simulate model
//! latency, and returns the canned [`ParseResponse`].

use std::time::{Duration, Instant};

use axum::{
    extract::{DefaultBodyLimit, Multipart},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::response::ParseResponse;

/// Simulated model-inference latency. Callers tune their timeouts against
/// this, so keep it in sync with the deployed value.
pub const PROCESSING_DELAY: Duration = Duration::from_millis(1500);

/// Build the Axum router with all API routes.
pub fn build_router() -> Router {
    Router::new()
        .route("/api/parse", post(parse_prescription))
        .route("/health", get(health))
        // Upload size is never validated; lift the framework's default cap.
        .layer(DefaultBodyLimit::disable())
        // Development CORS: any origin/method/header may call us directly.
        .layer(CorsLayer::permissive())
}

/// Handler for `POST /api/parse`.
///
/// Accepts a multipart body with one file field. The file's content is read
/// and discarded; type, size, and content are never validated. A request with
/// no file part is rejected the way the framework would reject a missing
/// required field.
async fn parse_prescription(
    mut multipart: Multipart,
) -> Result<Json<ParseResponse>, StatusCode> {
    let started = Instant::now();

    let mut filename = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| StatusCode::BAD_REQUEST)?
    {
        if field.file_name().is_some() {
            filename = Some(field.file_name().unwrap_or_default().to_string());
            // Drain the upload; the bytes are never inspected.
            let _ = field.bytes().await.map_err(|_| StatusCode::BAD_REQUEST)?;
            break;
        }
    }
    let Some(filename) = filename else {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    };

    info!(filename = %filename, "received prescription upload");

    // Simulate processing delay for realism. Non-blocking: concurrent
    // requests are not stalled while one sleeps.
    tokio::time::sleep(PROCESSING_DELAY).await;

    info!(elapsed_ms = started.elapsed().as_millis() as u64, "processing completed");
    Ok(Json(ParseResponse::mock()))
}

/// Handler for `GET /health`.
async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "ocr-service",
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    const BOUNDARY: &str = "rxproof-test-boundary";

    fn multipart_request(parts: &str) -> Request<Body> {
        Request::post("/api/parse")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(parts.to_string()))
            .unwrap()
    }

    fn file_upload_body() -> String {
        format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"prescription.png\"\r\n\
             Content-Type: image/png\r\n\r\n\
             not-actually-a-png\r\n\
             --{BOUNDARY}--\r\n"
        )
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn parse_returns_fixed_payload() {
        let app = build_router();
        let response = app.oneshot(multipart_request(&file_upload_body())).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["status"], "success");
        assert_eq!(json["medications"].as_array().unwrap().len(), 3);
        assert!(!json["extracted_text"].as_str().unwrap().is_empty());
        assert_eq!(json["confidence_score"], 0.92);
    }

    #[tokio::test]
    async fn parse_latency_is_at_least_the_simulated_delay() {
        let app = build_router();
        let started = Instant::now();
        let response = app.oneshot(multipart_request(&file_upload_body())).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(started.elapsed() >= PROCESSING_DELAY);
    }

    #[tokio::test]
    async fn parse_accepts_uploads_beyond_the_framework_default_cap() {
        // A realistic prescription photo is well over axum's 2 MB default.
        let payload = "x".repeat(3 * 1024 * 1024);
        let body = format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"scan.png\"\r\n\
             Content-Type: image/png\r\n\r\n\
             {payload}\r\n\
             --{BOUNDARY}--\r\n"
        );
        let app = build_router();
        let response = app.oneshot(multipart_request(&body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn parse_without_file_part_is_unprocessable() {
        let body = format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"note\"\r\n\r\n\
             just a text field\r\n\
             --{BOUNDARY}--\r\n"
        );
        let app = build_router();
        let response = app.oneshot(multipart_request(&body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn health_is_stable_and_stateless() {
        let app = build_router();
        for _ in 0..2 {
            let response = app
                .clone()
                .oneshot(Request::get("/health").body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            let json = body_json(response).await;
            assert_eq!(json, json!({"status": "healthy", "service": "ocr-service"}));
        }
    }
}
