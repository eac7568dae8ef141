//! Order Creation Types
//!
//! Request body for `POST /v2/checkout/orders` and the parts of the response
//! this client reads. See
//! <https://developer.paypal.com/docs/api/orders/v2/#definition-purchase_unit>.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PaymentError, Result};

/// Only currency this client creates orders in
pub const CURRENCY_EUR: &str = "EUR";

/// PayPal's limit for description, `custom_id` and `invoice_id`
pub const MAX_TEXT_LEN: usize = 127;

/// Currency amount as PayPal encodes it (`value` is a decimal string)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    pub currency_code: String,
    pub value: Decimal,
}

impl Money {
    /// Convert minor units (cents) into a major-unit amount.
    ///
    /// Exact: 1050 becomes `10.5`, 100 becomes `1`.
    pub fn from_minor_units(currency_code: impl Into<String>, cents: u64) -> Self {
        Self {
            currency_code: currency_code.into(),
            value: Decimal::from_i128_with_scale(i128::from(cents), 2).normalize(),
        }
    }

    /// Euro amount from cents
    pub fn eur_cents(cents: u64) -> Self {
        Self::from_minor_units(CURRENCY_EUR, cents)
    }
}

/// Caller input for [`crate::CheckoutProvider::create_order`]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrder {
    /// Purchase description shown to the payer
    pub description: String,

    /// Caller reference used to reconcile PayPal transactions
    pub custom_id: String,

    /// Invoice id shown in the payer's history and emails
    pub invoice_id: String,

    /// Amount in euro cents
    pub amount_cents: u64,
}

impl NewOrder {
    pub fn new(
        description: impl Into<String>,
        custom_id: impl Into<String>,
        invoice_id: impl Into<String>,
        amount_cents: u64,
    ) -> Self {
        Self {
            description: description.into(),
            custom_id: custom_id.into(),
            invoice_id: invoice_id.into(),
            amount_cents,
        }
    }

    /// Reject text fields PayPal would refuse
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("description", &self.description),
            ("custom_id", &self.custom_id),
            ("invoice_id", &self.invoice_id),
        ] {
            let len = value.chars().count();
            if len > MAX_TEXT_LEN {
                return Err(PaymentError::InvalidInput(format!(
                    "{name} is {len} characters, max is {MAX_TEXT_LEN}"
                )));
            }
        }
        Ok(())
    }
}

/// Body of the order creation request
#[derive(Clone, Debug, Serialize)]
pub struct CreateOrderRequest {
    pub intent: String,
    pub purchase_units: Vec<PurchaseUnit>,
    pub application_context: ApplicationContext,
}

impl From<&NewOrder> for CreateOrderRequest {
    fn from(order: &NewOrder) -> Self {
        Self {
            intent: "CAPTURE".into(),
            purchase_units: vec![PurchaseUnit {
                amount: Money::eur_cents(order.amount_cents),
                description: order.description.clone(),
                custom_id: order.custom_id.clone(),
                invoice_id: order.invoice_id.clone(),
            }],
            application_context: ApplicationContext::no_shipping(),
        }
    }
}

/// One payment grouping within an order
#[derive(Clone, Debug, Serialize)]
pub struct PurchaseUnit {
    pub amount: Money,

    // PayPal requires 1..=127 characters when present
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub custom_id: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub invoice_id: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct ApplicationContext {
    pub shipping_preference: String,
}

impl ApplicationContext {
    /// The payer is never asked for a shipping address
    pub fn no_shipping() -> Self {
        Self {
            shipping_preference: "NO_SHIPPING".into(),
        }
    }
}

/// HATEOAS link returned with orders and captures
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    pub rel: String,
    #[serde(default)]
    pub method: String,
}

/// Response of a successful order creation
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedOrder {
    /// Like "1AB23456CD789012E"
    pub id: String,

    /// Like "CREATED"
    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub links: Vec<Link>,
}

impl CreatedOrder {
    /// Where the payer approves the order
    pub fn approve_url(&self) -> Option<&str> {
        self.links
            .iter()
            .find(|l| l.rel == "approve")
            .map(|l| l.href.as_str())
    }
}
