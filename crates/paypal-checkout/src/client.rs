//! PayPal REST client

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::auth::AuthResult;
use crate::capture::CaptureResponse;
use crate::config::PaypalConfig;
use crate::error::{PaymentError, Result};
use crate::order::{CreateOrderRequest, CreatedOrder, NewOrder};
use crate::provider::CheckoutProvider;

/// Timeout applied to every PayPal request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const APPLICATION_JSON: &str = "application/json";

/// PayPal Orders v2 client
///
/// Holds validated config and a pooled `reqwest::Client`. Cheap to share
/// behind an `Arc`.
pub struct PaypalClient {
    http: reqwest::Client,
    config: PaypalConfig,
}

impl PaypalClient {
    /// Create a client, rejecting config with empty fields
    pub fn new(config: PaypalConfig) -> Result<Self> {
        config.validate()?;
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { http, config })
    }

    /// Create from a JSON config file (see [`PaypalConfig::load`])
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::new(PaypalConfig::load(path)?)
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(PaypalConfig::from_env()?)
    }

    pub const fn config(&self) -> &PaypalConfig {
        &self.config
    }

    /// Send a request and decode the body if PayPal answered `expected`
    async fn execute<T: DeserializeOwned>(
        operation: &'static str,
        request: RequestBuilder,
        expected: StatusCode,
    ) -> Result<T> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!(operation, error = %e, "PayPal request failed");
            PaymentError::Transport(e)
        })?;

        let status = response.status();
        let body = response.text().await?;

        if status != expected {
            tracing::warn!(operation, %status, "Unexpected PayPal response");
            return Err(PaymentError::UnexpectedStatus {
                operation,
                status,
                body,
            });
        }

        serde_json::from_str(&body).map_err(|source| PaymentError::Decode { operation, source })
    }
}

#[async_trait]
impl CheckoutProvider for PaypalClient {
    async fn authenticate(&self) -> Result<AuthResult> {
        tracing::debug!(url = %self.config.oauth_api, "Requesting PayPal access token");

        let request = self
            .http
            .post(&self.config.oauth_api)
            .basic_auth(&self.config.client_id, Some(&self.config.secret))
            .header(ACCEPT, APPLICATION_JSON)
            .form(&[("grant_type", "client_credentials")]);

        Self::execute("authenticate", request, StatusCode::OK).await
    }

    async fn create_order(&self, auth: &AuthResult, order: &NewOrder) -> Result<CreatedOrder> {
        require_token(auth)?;
        order.validate()?;

        let body = CreateOrderRequest::from(order);
        tracing::debug!(
            custom_id = %order.custom_id,
            invoice_id = %order.invoice_id,
            amount_cents = order.amount_cents,
            "Creating PayPal order"
        );

        let request = self
            .http
            .post(&self.config.order_api)
            .bearer_auth(&auth.access_token)
            .header(ACCEPT, APPLICATION_JSON)
            .json(&body);

        let created: CreatedOrder =
            Self::execute("create order", request, StatusCode::CREATED).await?;
        tracing::info!(order_id = %created.id, status = %created.status, "Created PayPal order");
        Ok(created)
    }

    async fn capture_order(&self, auth: &AuthResult, order_id: &str) -> Result<CaptureResponse> {
        require_token(auth)?;
        validate_order_id(order_id)?;

        let url = capture_url(&self.config.order_api, order_id);
        tracing::debug!(%url, "Capturing PayPal order");

        let request = self
            .http
            .post(url)
            .bearer_auth(&auth.access_token)
            .header(ACCEPT, APPLICATION_JSON)
            .header(CONTENT_TYPE, APPLICATION_JSON);

        let captured: CaptureResponse =
            Self::execute("capture order", request, StatusCode::CREATED).await?;
        tracing::info!(order_id, status = %captured.status, "Captured PayPal order");
        Ok(captured)
    }
}

/// `<base>/<order_id>/capture` with exactly one slash after `base`
pub fn capture_url(base: &str, order_id: &str) -> String {
    let separator = if base.ends_with('/') { "" } else { "/" };
    format!("{base}{separator}{order_id}/capture")
}

fn require_token(auth: &AuthResult) -> Result<()> {
    if auth.has_token() {
        Ok(())
    } else {
        Err(PaymentError::InvalidInput("access token is empty".into()))
    }
}

/// Order ids end up in the URL path, so only accept PayPal's id alphabet
fn validate_order_id(order_id: &str) -> Result<()> {
    if order_id.is_empty() {
        return Err(PaymentError::InvalidInput("order id is empty".into()));
    }
    if !order_id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(PaymentError::InvalidInput(format!(
            "order id {order_id:?} contains invalid characters"
        )));
    }
    Ok(())
}
