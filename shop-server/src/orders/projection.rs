//! Public order board projection
//!
//! Customers can see recent orders, but only with the name masked.

use shared::models::{Order, PublicOrder};

/// Mask a customer name for public display
///
/// Keeps the first character and replaces the rest with `*`. A one-character
/// name still gets a single `*` so it is never shown in full. Length is counted
/// in `char`s, so `"李小明"` becomes `"李**"`.
pub fn mask_name(name: &str) -> String {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let rest = chars.count().max(1);
    let mut masked = String::with_capacity(first.len_utf8() + rest);
    masked.push(first);
    masked.extend(std::iter::repeat_n('*', rest));
    masked
}

/// `"name×quantity"`
pub fn item_summary(name: &str, quantity: i32) -> String {
    format!("{}×{}", name, quantity)
}

/// Project an order onto its public, masked form
pub fn to_public(order: &Order) -> PublicOrder {
    PublicOrder {
        id: order.id,
        name: mask_name(&order.customer.name),
        created_at: order.created_at,
        status: order.status,
        items: order
            .items
            .iter()
            .map(|item| item_summary(&item.name, item.quantity))
            .collect(),
    }
}
