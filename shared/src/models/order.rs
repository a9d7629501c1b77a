//! Order Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order status
///
/// Serialized as `placed` / `paid`. The Chinese labels used by the admin page
/// are accepted on input as well.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// 已下单
    #[default]
    #[serde(alias = "已下单")]
    Placed,
    /// 已付款
    #[serde(alias = "已付款")]
    Paid,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 2] = [OrderStatus::Placed, OrderStatus::Paid];

    /// Wire value
    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Placed => "placed",
            OrderStatus::Paid => "paid",
        }
    }

    /// Display label for the shop owner
    pub const fn label(&self) -> &'static str {
        match self {
            OrderStatus::Placed => "已下单",
            OrderStatus::Paid => "已付款",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown status value
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported order status: {0}")]
pub struct InvalidOrderStatus(pub String);

impl FromStr for OrderStatus {
    type Err = InvalidOrderStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| s == status.as_str() || s == status.label())
            .ok_or_else(|| InvalidOrderStatus(s.to_string()))
    }
}

/// Customer details captured with the order
///
/// Only the name is required; the rest is whatever the checkout form sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default, deserialize_with = "crate::types::null_as_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Customer {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Order line item, a copy of the product data at checkout time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    /// Price in currency unit
    pub price: f64,
    pub quantity: i32,
}

impl OrderItem {
    pub fn new(name: impl Into<String>, price: f64, quantity: i32) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
        }
    }
}

/// Order entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: u64,
    pub customer: Customer,
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// Masked order shown on the public order board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicOrder {
    pub id: u64,
    /// Customer name with everything after the first character masked
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
    /// `"name×quantity"` per line item
    pub items: Vec<String>,
}

/// POST /api/orders body
///
/// `items` stays untyped here so that a missing or non-array value is reported
/// as a validation error instead of a body rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub items: Option<serde_json::Value>,
    #[serde(default)]
    pub customer: Option<Customer>,
}

/// POST /api/orders response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderResponse {
    pub message: String,
    pub order_id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_values() {
        assert_eq!(serde_json::to_string(&OrderStatus::Placed).unwrap(), "\"placed\"");
        assert_eq!(serde_json::to_string(&OrderStatus::Paid).unwrap(), "\"paid\"");
    }

    #[test]
    fn test_status_accepts_labels() {
        let status: OrderStatus = serde_json::from_str("\"已付款\"").unwrap();
        assert_eq!(status, OrderStatus::Paid);
        assert_eq!("已下单".parse::<OrderStatus>().unwrap(), OrderStatus::Placed);
        assert_eq!("paid".parse::<OrderStatus>().unwrap(), OrderStatus::Paid);
    }

    #[test]
    fn test_status_rejects_unknown() {
        assert_eq!(
            "shipped".parse::<OrderStatus>(),
            Err(InvalidOrderStatus("shipped".into()))
        );
        assert!("PAID".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_order_uses_camel_case() {
        let order = Order {
            id: 1,
            customer: Customer::named("Li"),
            items: vec![OrderItem::new("Shirt", 10.0, 2)],
            status: OrderStatus::Placed,
            created_at: DateTime::from_timestamp(0, 0).unwrap(),
        };
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["createdAt"], "1970-01-01T00:00:00Z");
        assert_eq!(json["status"], "placed");
        assert_eq!(json["customer"], serde_json::json!({ "name": "Li" }));
    }

    #[test]
    fn test_null_customer_name_is_empty() {
        let customer: Customer = serde_json::from_str(r#"{"name":null,"phone":"123"}"#).unwrap();
        assert_eq!(customer.name, "");
        assert_eq!(customer.phone.as_deref(), Some("123"));

        let customer: Customer = serde_json::from_str("{}").unwrap();
        assert_eq!(customer.name, "");
    }
}
