//! Checkout provider abstraction

use async_trait::async_trait;

use crate::auth::AuthResult;
use crate::capture::CaptureResponse;
use crate::error::Result;
use crate::order::{CreatedOrder, NewOrder};

/// The three calls of the checkout flow.
///
/// Implemented by [`crate::PaypalClient`]; servers hold an
/// `Arc<dyn CheckoutProvider>` so tests can substitute their own.
/// Every call is independent: no state is kept between them and nothing is
/// retried.
#[async_trait]
pub trait CheckoutProvider: Send + Sync {
    /// Obtain a bearer token via the client-credentials grant
    async fn authenticate(&self) -> Result<AuthResult>;

    /// Create an order with intent `CAPTURE` the payer then approves
    async fn create_order(&self, auth: &AuthResult, order: &NewOrder) -> Result<CreatedOrder>;

    /// Capture an order the payer has approved
    async fn capture_order(&self, auth: &AuthResult, order_id: &str) -> Result<CaptureResponse>;
}
