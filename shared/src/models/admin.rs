//! Admin request bodies
//!
//! Every admin call carries the shared password, either in the query string
//! (GET) or in the JSON body (POST). Fields are optional so that missing
//! values reach the handler and get a proper message instead of a rejection.

use serde::{Deserialize, Serialize};

use super::product::Product;
use crate::types::NumberLike;

/// `?password=...`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdminQuery {
    #[serde(default)]
    pub password: Option<String>,
}

/// POST /api/admin/add-product
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddProductRequest {
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<NumberLike>,
    #[serde(default)]
    pub stock: Option<NumberLike>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// POST /api/admin/add-product response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddProductResponse {
    pub message: String,
    pub product: Product,
}

/// POST /api/admin/update-stock
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStockRequest {
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub product_id: Option<NumberLike>,
    #[serde(default)]
    pub stock: Option<NumberLike>,
}

/// POST /api/admin/delete-product
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteProductRequest {
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub product_id: Option<NumberLike>,
}

/// POST /api/admin/update-order-status
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderStatusRequest {
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub order_id: Option<NumberLike>,
    #[serde(default)]
    pub status: Option<String>,
}

/// POST /api/admin/delete-order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOrderRequest {
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub order_id: Option<NumberLike>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_stock_accepts_form_strings() {
        let req: UpdateStockRequest =
            serde_json::from_str(r#"{"password":"123","productId":"3","stock":"12"}"#).unwrap();
        assert_eq!(req.product_id.and_then(|id| id.as_u64()), Some(3));
        assert_eq!(req.stock.and_then(|s| s.as_u64()), Some(12));
    }

    #[test]
    fn test_missing_fields_are_none() {
        let req: DeleteOrderRequest = serde_json::from_str("{}").unwrap();
        assert!(req.password.is_none());
        assert!(req.order_id.is_none());
    }
}
