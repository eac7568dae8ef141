//! HTTP Handlers

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use paypal_checkout::{CaptureRequest, NewOrder, PaymentError};

use crate::state::AppState;

// ============================================================================
// Request / Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct CreateOrderBody {
    pub description: String,
    #[serde(default)]
    pub custom_id: Option<String>,
    #[serde(default)]
    pub invoice_id: Option<String>,
    pub amount_cents: u64,
}

#[derive(Debug, Serialize)]
pub struct CreateOrderResponse {
    pub id: String,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(err: &PaymentError, code: &str) -> ApiError {
    let status = match err {
        PaymentError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::BAD_GATEWAY,
    };
    (
        status,
        Json(ErrorResponse {
            error: err.user_message().into(),
            code: code.into(),
        }),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Set up a PayPal order; the browser's PayPal button needs the id
pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrderBody>,
) -> Result<Json<CreateOrderResponse>, ApiError> {
    let order = NewOrder {
        description: payload.description,
        custom_id: payload.custom_id.unwrap_or_default(),
        invoice_id: payload
            .invoice_id
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
        amount_cents: payload.amount_cents,
    };

    let auth = state.provider.authenticate().await.map_err(|e| {
        tracing::error!("PayPal auth error: {}", e);
        api_error(&e, "AUTH_ERROR")
    })?;

    let created = state
        .provider
        .create_order(&auth, &order)
        .await
        .map_err(|e| {
            tracing::error!(invoice_id = %order.invoice_id, "Create order error: {}", e);
            api_error(&e, "ORDER_ERROR")
        })?;

    Ok(Json(CreateOrderResponse {
        id: created.id,
        status: created.status,
    }))
}

/// Capture an approved order and acknowledge with `true`
pub async fn capture_order(
    State(state): State<AppState>,
    Json(payload): Json<CaptureRequest>,
) -> Result<Json<bool>, ApiError> {
    let auth = state.provider.authenticate().await.map_err(|e| {
        tracing::error!("PayPal auth error: {}", e);
        api_error(&e, "AUTH_ERROR")
    })?;

    let captured = state
        .provider
        .capture_order(&auth, &payload.order_id)
        .await
        .map_err(|e| {
            tracing::error!(order_id = %payload.order_id, "Capture error: {}", e);
            api_error(&e, "CAPTURE_ERROR")
        })?;

    for capture in captured.captures() {
        tracing::info!(
            order_id = %captured.id,
            capture_id = %capture.id,
            status = %capture.status,
            final_capture = capture.final_capture,
            "Capture result"
        );
    }

    // A 201 can still carry DECLINED or PENDING captures
    let settled = captured.is_completed()
        && captured.captures().next().is_some()
        && captured.captures().all(|c| c.is_completed());
    if !settled {
        tracing::warn!(
            order_id = %captured.id,
            status = %captured.status,
            "Capture not completed"
        );
        return Err((
            StatusCode::PAYMENT_REQUIRED,
            Json(ErrorResponse {
                error: "Payment was not completed.".into(),
                code: "CAPTURE_DECLINED".into(),
            }),
        ));
    }

    Ok(Json(true))
}
