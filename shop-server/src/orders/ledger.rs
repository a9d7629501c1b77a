//! Order ledger
//!
//! Validates incoming orders and applies lifecycle changes on top of
//! [`OrderStorage`]. Items are stored exactly as submitted; nothing here
//! looks at the product catalog or touches stock.

use chrono::Utc;
use serde_json::Value;
use shared::models::{CreateOrderRequest, Customer, Order, OrderItem, OrderStatus, PublicOrder};
use tracing::info;

use super::error::{LedgerError, LedgerResult};
use super::export;
use super::projection;
use super::storage::OrderStorage;

#[derive(Debug, Clone)]
pub struct OrderLedger {
    storage: OrderStorage,
}

impl OrderLedger {
    pub fn new(storage: OrderStorage) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &OrderStorage {
        &self.storage
    }

    /// Validate a checkout request and record the order
    pub fn place(&self, request: CreateOrderRequest) -> LedgerResult<Order> {
        let items = parse_items(request.items)?;
        self.create(items, request.customer.unwrap_or_default())
    }

    /// Record a new order with status `placed`
    ///
    /// A whitespace-only name counts as missing; the name is stored as sent.
    pub fn create(&self, items: Vec<OrderItem>, customer: Customer) -> LedgerResult<Order> {
        if items.is_empty() {
            return Err(LedgerError::EmptyItems);
        }
        if customer.name.trim().is_empty() {
            return Err(LedgerError::MissingCustomerName);
        }

        let order = self.storage.create_order(customer, items, Utc::now())?;
        info!(
            order_id = order.id,
            customer = %order.customer.name,
            item_count = order.items.len(),
            "Order created"
        );
        Ok(order)
    }

    pub fn get(&self, id: u64) -> LedgerResult<Order> {
        self.storage
            .get_order(id)?
            .ok_or(LedgerError::OrderNotFound(id))
    }

    /// All orders, ascending by id
    pub fn list_all(&self) -> LedgerResult<Vec<Order>> {
        Ok(self.storage.list_orders()?)
    }

    /// All orders with masked customer names
    pub fn list_public(&self) -> LedgerResult<Vec<PublicOrder>> {
        Ok(self.list_all()?.iter().map(projection::to_public).collect())
    }

    /// Set an order's status
    ///
    /// Any allowed status may follow any other; `paid -> placed` is accepted
    /// so that a mistaken click can be undone.
    pub fn update_status(&self, id: u64, status: &str) -> LedgerResult<Order> {
        let status: OrderStatus = status
            .parse()
            .map_err(|_| LedgerError::InvalidStatus(status.to_string()))?;

        let order = self
            .storage
            .set_status(id, status)?
            .ok_or(LedgerError::OrderNotFound(id))?;
        info!(order_id = id, status = %status, "Order status updated");
        Ok(order)
    }

    /// Remove an order; its id is never assigned again
    pub fn delete(&self, id: u64) -> LedgerResult<Order> {
        let order = self
            .storage
            .remove_order(id)?
            .ok_or(LedgerError::OrderNotFound(id))?;
        info!(order_id = id, customer = %order.customer.name, "Order deleted");
        Ok(order)
    }

    /// CSV export of every order (BOM + header + one row per item)
    pub fn export_csv(&self) -> LedgerResult<Vec<u8>> {
        Ok(export::orders_to_csv(&self.list_all()?))
    }

    pub fn len(&self) -> LedgerResult<u64> {
        Ok(self.storage.count_orders()?)
    }

    pub fn is_empty(&self) -> LedgerResult<bool> {
        Ok(self.len()? == 0)
    }
}

/// Turn the raw `items` value into line items
///
/// Missing, `null`, non-array and empty values all count as an empty order.
fn parse_items(items: Option<Value>) -> LedgerResult<Vec<OrderItem>> {
    let Some(Value::Array(raw)) = items else {
        return Err(LedgerError::EmptyItems);
    };
    if raw.is_empty() {
        return Err(LedgerError::EmptyItems);
    }

    raw.into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value(value).map_err(|e| LedgerError::InvalidItem {
                index,
                reason: e.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ledger() -> OrderLedger {
        OrderLedger::new(OrderStorage::open_in_memory().unwrap())
    }

    fn shirt() -> Vec<OrderItem> {
        vec![OrderItem::new("Shirt", 10.0, 2)]
    }

    fn request(value: Value) -> CreateOrderRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_ids_follow_previous_max() {
        let ledger = ledger();
        assert_eq!(ledger.create(shirt(), Customer::named("A")).unwrap().id, 1);
        assert_eq!(ledger.create(shirt(), Customer::named("B")).unwrap().id, 2);

        ledger.delete(1).unwrap();
        assert_eq!(ledger.create(shirt(), Customer::named("C")).unwrap().id, 3);

        ledger.delete(3).unwrap();
        assert_eq!(ledger.create(shirt(), Customer::named("D")).unwrap().id, 4);
    }

    #[test]
    fn test_concurrent_creates_get_distinct_ids() {
        let ledger = ledger();

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let ledger = ledger.clone();
                std::thread::spawn(move || {
                    ledger
                        .create(shirt(), Customer::named(format!("C{}", i)))
                        .unwrap()
                        .id
                })
            })
            .collect();

        let mut ids: Vec<u64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        ids.sort_unstable();

        assert_eq!(ids, (1..=16).collect::<Vec<u64>>());
        assert_eq!(ledger.len().unwrap(), 16);
        assert_eq!(ledger.storage().last_order_id().unwrap(), 16);
    }

    #[test]
    fn test_new_order_defaults() {
        let ledger = ledger();
        let order = ledger.create(shirt(), Customer::named("  Li ")).unwrap();

        assert_eq!(order.status, OrderStatus::Placed);
        assert_eq!(order.customer.name, "  Li ");
        assert_eq!(order.items, shirt());
        assert_eq!(ledger.get(order.id).unwrap(), order);
    }

    #[test]
    fn test_empty_items_rejected() {
        let ledger = ledger();
        let result = ledger.create(vec![], Customer::named("A"));
        assert!(matches!(result, Err(LedgerError::EmptyItems)));
        assert!(ledger.is_empty().unwrap());
    }

    #[test]
    fn test_missing_customer_name_rejected() {
        let ledger = ledger();
        assert!(matches!(
            ledger.create(shirt(), Customer::default()),
            Err(LedgerError::MissingCustomerName)
        ));
        assert!(matches!(
            ledger.create(shirt(), Customer::named("   ")),
            Err(LedgerError::MissingCustomerName)
        ));
    }

    #[test]
    fn test_place_validates_raw_request() {
        let ledger = ledger();

        let cases = [
            json!({ "customer": { "name": "A" } }),
            json!({ "items": null, "customer": { "name": "A" } }),
            json!({ "items": "Shirt", "customer": { "name": "A" } }),
            json!({ "items": [], "customer": { "name": "A" } }),
        ];
        for case in cases {
            assert!(matches!(
                ledger.place(request(case)),
                Err(LedgerError::EmptyItems)
            ));
        }

        assert!(matches!(
            ledger.place(request(json!({ "items": [{ "name": "Shirt", "price": 10, "quantity": 1 }] }))),
            Err(LedgerError::MissingCustomerName)
        ));
        assert!(matches!(
            ledger.place(request(json!({
                "items": [{ "name": "Shirt", "price": 10, "quantity": 1 }, { "name": "Hat" }],
                "customer": { "name": "A" }
            }))),
            Err(LedgerError::InvalidItem { index: 1, .. })
        ));
        assert!(ledger.is_empty().unwrap());
    }

    #[test]
    fn test_place_keeps_optional_customer_fields() {
        let ledger = ledger();
        let order = ledger
            .place(request(json!({
                "items": [{ "id": 5, "name": "Shirt", "price": 10, "quantity": 2 }],
                "customer": { "name": "Li", "phone": "123", "note": "quick" }
            })))
            .unwrap();

        assert_eq!(order.customer.phone.as_deref(), Some("123"));
        assert_eq!(order.customer.note.as_deref(), Some("quick"));
        assert_eq!(order.items, shirt());
    }

    #[test]
    fn test_update_status() {
        let ledger = ledger();
        let order = ledger.create(shirt(), Customer::named("A")).unwrap();

        let paid = ledger.update_status(order.id, "paid").unwrap();
        assert_eq!(paid.status, OrderStatus::Paid);

        // Backwards transition is allowed
        let placed = ledger.update_status(order.id, "placed").unwrap();
        assert_eq!(placed.status, OrderStatus::Placed);

        let labelled = ledger.update_status(order.id, "已付款").unwrap();
        assert_eq!(labelled.status, OrderStatus::Paid);
    }

    #[test]
    fn test_update_status_rejects_unknown_value() {
        let ledger = ledger();
        let order = ledger.create(shirt(), Customer::named("A")).unwrap();

        assert!(matches!(
            ledger.update_status(order.id, "shipped"),
            Err(LedgerError::InvalidStatus(s)) if s == "shipped"
        ));
        assert_eq!(ledger.get(order.id).unwrap().status, OrderStatus::Placed);
    }

    #[test]
    fn test_update_status_checks_value_before_id() {
        let ledger = ledger();
        assert!(matches!(
            ledger.update_status(9, "shipped"),
            Err(LedgerError::InvalidStatus(_))
        ));
        assert!(matches!(
            ledger.update_status(9, "paid"),
            Err(LedgerError::OrderNotFound(9))
        ));
    }

    #[test]
    fn test_delete_missing_leaves_ledger_unchanged() {
        let ledger = ledger();
        ledger.create(shirt(), Customer::named("A")).unwrap();

        assert!(matches!(ledger.delete(5), Err(LedgerError::OrderNotFound(5))));
        assert_eq!(ledger.len().unwrap(), 1);
    }

    #[test]
    fn test_delete_returns_removed_order() {
        let ledger = ledger();
        let order = ledger.create(shirt(), Customer::named("A")).unwrap();

        assert_eq!(ledger.delete(order.id).unwrap(), order);
        assert!(matches!(ledger.get(order.id), Err(LedgerError::OrderNotFound(_))));
    }

    #[test]
    fn test_get_is_exact_match() {
        let ledger = ledger();
        for name in ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L"] {
            ledger.create(shirt(), Customer::named(name)).unwrap();
        }
        assert_eq!(ledger.get(1).unwrap().customer.name, "A");
        assert_eq!(ledger.get(12).unwrap().customer.name, "L");
        assert!(ledger.get(13).is_err());
    }

    #[test]
    fn test_list_public_masks_names() {
        let ledger = ledger();
        ledger.create(shirt(), Customer::named("Alice")).unwrap();
        ledger.create(shirt(), Customer::named("B")).unwrap();

        let public = ledger.list_public().unwrap();
        let names: Vec<&str> = public.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["A****", "B*"]);
        assert_eq!(public[0].items, vec!["Shirt×2"]);
    }

    #[test]
    fn test_export_csv_has_bom() {
        let ledger = ledger();
        ledger.create(shirt(), Customer::named("A")).unwrap();

        let csv = ledger.export_csv().unwrap();
        assert!(csv.starts_with("\u{FEFF}".as_bytes()));
        let text = String::from_utf8(csv).unwrap();
        assert_eq!(text.matches("\r\n").count(), 2);
    }
}
