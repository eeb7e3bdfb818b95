//! HTTP server hosting the confirmation function.
//!
//! The frontend invokes `/send-confirmation` straight from the browser
//! after a lead is stored, so every route carries permissive CORS.
//!
//! # API Endpoints
//!
//! | Method | Path                 | Description                         |
//! |--------|----------------------|-------------------------------------|
//! | GET    | `/health`            | Health check                        |
//! | POST   | `/send-confirmation` | Generate and send the welcome email |

use axum::{
    http::{header, Method, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use super::types::{error_response, ConfirmationRequest, ConfirmationResponse};
use crate::error::ServerError;
use crate::mailer::deliver_confirmation;

/// Start the HTTP server
pub async fn start_server(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    // Browsers send the anon bearer token, so AUTHORIZATION must be allowed
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
        .expose_headers([header::CONTENT_TYPE]);

    let app = Router::new()
        .route("/", get(health))
        .route("/health", get(health))
        .route("/send-confirmation", post(send_confirmation))
        .layer(cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("🚀 Leadbloom function host running on http://localhost:{}", port);
    tracing::info!("   POST /send-confirmation - Generate and send the email");
    tracing::info!("   GET  /health            - Health check");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check endpoint
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "leadbloom",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "send_confirmation": "POST /send-confirmation"
        }
    }))
}

/// Confirmation endpoint.
///
/// 400 with `{error}` when a field is blank, 500 with `{error}` when a
/// provider fails, 200 with `{success, id}` once the email is sent.
async fn send_confirmation(
    Json(request): Json<ConfirmationRequest>,
) -> Result<Json<ConfirmationResponse>, (StatusCode, Json<Value>)> {
    if let Some(field) = request.missing_field() {
        let error = ServerError::BadRequest(format!("Missing required field: {}", field));
        tracing::warn!("⚠️  Rejected confirmation request: {}", error);
        return Err((
            StatusCode::BAD_REQUEST,
            Json(error_response(&error.to_string())),
        ));
    }

    let request_id = Uuid::new_v4();
    tracing::info!(
        %request_id,
        email = %request.email,
        industry = %request.industry,
        "📨 Confirmation requested"
    );

    match deliver_confirmation(&request.name, &request.email, &request.industry).await {
        Ok(sent) => {
            tracing::info!(%request_id, provider_id = %sent.provider_id, "✅ Confirmation sent");
            Ok(Json(ConfirmationResponse {
                success: true,
                id: sent.provider_id,
            }))
        }
        Err(e) => {
            let error = ServerError::from(e);
            tracing::error!(%request_id, "❌ Confirmation failed: {}", error);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(error_response(&error.to_string())),
            ))
        }
    }
}
