//! Capture Types
//!
//! Read-only projection of the order capture response. PayPal omits many of
//! these fields depending on the payment source, so nearly everything
//! defaults when absent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::order::{Link, Money};

/// Body the browser posts to the caller's capture endpoint
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureRequest {
    #[serde(rename = "orderID")]
    pub order_id: String,
}

/// Response of `POST /v2/checkout/orders/{id}/capture`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureResponse {
    pub id: String,
    pub status: String,
    pub purchase_units: Vec<CapturedPurchaseUnit>,
    pub payer: Payer,
    pub links: Vec<Link>,
}

impl CaptureResponse {
    /// Every capture across all purchase units
    pub fn captures(&self) -> impl Iterator<Item = &Capture> {
        self.purchase_units
            .iter()
            .flat_map(|unit| unit.payments.captures.iter())
    }

    pub fn is_completed(&self) -> bool {
        self.status == "COMPLETED"
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapturedPurchaseUnit {
    pub reference_id: String,
    /// Absent for orders created with `NO_SHIPPING`
    pub shipping: Option<Shipping>,
    pub payments: Payments,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Shipping {
    pub name: ShippingName,
    pub address: Address,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShippingName {
    pub full_name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub address_line_1: String,
    pub admin_area_2: String,
    pub admin_area_1: String,
    pub postal_code: String,
    pub country_code: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Payments {
    pub captures: Vec<Capture>,
}

/// A single capture; persist `id` for reconciliation
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Capture {
    pub id: String,
    pub status: String,
    pub amount: Option<Money>,
    pub final_capture: bool,
    pub seller_protection: SellerProtection,
    pub seller_receivable_breakdown: Option<SellerReceivableBreakdown>,
    pub links: Vec<Link>,
    pub create_time: Option<DateTime<Utc>>,
    pub update_time: Option<DateTime<Utc>>,
}

impl Capture {
    pub fn is_completed(&self) -> bool {
        self.status == "COMPLETED"
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SellerProtection {
    pub status: String,
    pub dispute_categories: Vec<String>,
}

/// Gross amount, PayPal fee and what the seller receives
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerReceivableBreakdown {
    pub gross_amount: Money,
    #[serde(default)]
    pub paypal_fee: Option<Money>,
    #[serde(default)]
    pub net_amount: Option<Money>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Payer {
    pub name: PayerName,
    pub email_address: String,
    pub payer_id: String,
    pub address: PayerAddress,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayerName {
    pub given_name: String,
    pub surname: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayerAddress {
    pub country_code: String,
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    const CAPTURE_BODY: &str = r#"{
        "id": "5O190127TN364715T",
        "status": "COMPLETED",
        "payment_source": { "paypal": {} },
        "purchase_units": [{
            "reference_id": "default",
            "payments": {
                "captures": [{
                    "id": "3C679366HH908993F",
                    "status": "COMPLETED",
                    "amount": { "currency_code": "EUR", "value": "10.50" },
                    "final_capture": true,
                    "seller_protection": {
                        "status": "ELIGIBLE",
                        "dispute_categories": ["ITEM_NOT_RECEIVED", "UNAUTHORIZED_TRANSACTION"]
                    },
                    "seller_receivable_breakdown": {
                        "gross_amount": { "currency_code": "EUR", "value": "10.50" },
                        "paypal_fee": { "currency_code": "EUR", "value": "0.72" },
                        "net_amount": { "currency_code": "EUR", "value": "9.78" }
                    },
                    "links": [
                        { "href": "https://api-m.paypal.com/v2/payments/captures/3C679366HH908993F", "rel": "self", "method": "GET" }
                    ],
                    "create_time": "2024-03-05T10:15:07Z",
                    "update_time": "2024-03-05T10:15:07Z"
                }]
            }
        }],
        "payer": {
            "name": { "given_name": "John", "surname": "Doe" },
            "email_address": "customer@example.com",
            "payer_id": "QYR5Z8XDVJNXQ",
            "address": { "country_code": "DE" }
        },
        "links": [
            { "href": "https://api-m.paypal.com/v2/checkout/orders/5O190127TN364715T", "rel": "self", "method": "GET" }
        ]
    }"#;

    #[test]
    fn test_parse_capture_response() {
        let resp: CaptureResponse = serde_json::from_str(CAPTURE_BODY).unwrap();
        assert!(resp.is_completed());
        assert_eq!(resp.payer.payer_id, "QYR5Z8XDVJNXQ");
        assert_eq!(resp.payer.address.country_code, "DE");
        assert!(resp.purchase_units[0].shipping.is_none());

        let captures: Vec<_> = resp.captures().collect();
        assert_eq!(captures.len(), 1);
        let capture = captures[0];
        assert_eq!(capture.id, "3C679366HH908993F");
        assert!(capture.final_capture && capture.is_completed());
        assert_eq!(capture.seller_protection.dispute_categories.len(), 2);

        let breakdown = capture.seller_receivable_breakdown.as_ref().unwrap();
        let fee = breakdown.paypal_fee.as_ref().unwrap().value;
        let net = breakdown.net_amount.as_ref().unwrap().value;
        assert_eq!(breakdown.gross_amount.value, fee + net);
        assert_eq!(net, dec!(9.78));
        assert_eq!(
            capture.create_time.unwrap().to_rfc3339(),
            "2024-03-05T10:15:07+00:00"
        );
    }

    #[test]
    fn test_declined_capture_has_sparse_body() {
        let resp: CaptureResponse = serde_json::from_str(
            r#"{"id":"5O190127TN364715T","status":"COMPLETED","purchase_units":[{"payments":{"captures":[{"id":"X","status":"DECLINED"}]}}]}"#,
        )
        .unwrap();
        let capture = resp.captures().next().unwrap();
        assert!(!capture.is_completed());
        assert!(capture.amount.is_none());
        assert!(!capture.final_capture);
    }

    #[test]
    fn test_capture_request_field_name() {
        let req: CaptureRequest = serde_json::from_str(r#"{"orderID":"1AB23456CD789012E"}"#).unwrap();
        assert_eq!(req.order_id, "1AB23456CD789012E");
    }
}
