//! Application State

use std::sync::Arc;

use paypal_checkout::CheckoutProvider;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// PayPal client (or a stand-in in tests)
    pub provider: Arc<dyn CheckoutProvider>,
}
