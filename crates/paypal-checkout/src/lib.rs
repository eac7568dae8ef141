//! # paypal-checkout
//!
//! Thin client for the three PayPal Orders v2 calls a server needs to run a
//! "PayPal Checkout" button:
//!
//! ```text
//! ┌─────────────┐  authenticate   ┌──────────────┐
//! │ Your server │────────────────▶│ /oauth2/token│  client-credentials grant
//! │             │  create_order   ├──────────────┤
//! │             │────────────────▶│ /orders      │  201 → order id
//! │             │                 └──────────────┘
//! │             │        payer approves in PayPal's UI
//! │             │  capture_order  ┌──────────────────────┐
//! │             │────────────────▶│ /orders/{id}/capture │  201 → capture ids
//! └─────────────┘                 └──────────────────────┘
//! ```
//!
//! Each call is one HTTP request with a 10 second timeout. Nothing is cached
//! or retried; callers own token reuse and retry policy.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use paypal_checkout::{CheckoutProvider, NewOrder, PaypalClient};
//!
//! let client = PaypalClient::load("paypal.json")?;
//!
//! let auth = client.authenticate().await?;
//! let order = client
//!     .create_order(&auth, &NewOrder::new("Concert ticket", "user-42", "INV-0001", 1050))
//!     .await?;
//!
//! // Hand order.id to the browser, wait for approval, then:
//! let auth = client.authenticate().await?;
//! let capture = client.capture_order(&auth, &order.id).await?;
//! ```

mod auth;
mod capture;
mod client;
mod config;
mod error;
mod order;
mod provider;

pub use auth::AuthResult;
pub use capture::{
    Address, Capture, CaptureRequest, CaptureResponse, CapturedPurchaseUnit, Payer,
    PayerAddress, PayerName, Payments, SellerProtection, SellerReceivableBreakdown, Shipping,
    ShippingName,
};
pub use client::{capture_url, PaypalClient, REQUEST_TIMEOUT};
pub use config::PaypalConfig;
pub use error::{PaymentError, Result};
pub use order::{
    ApplicationContext, CreateOrderRequest, CreatedOrder, Link, Money, NewOrder, PurchaseUnit,
    CURRENCY_EUR, MAX_TEXT_LEN,
};
pub use provider::CheckoutProvider;
