//! CSV export of the ledger
//!
//! One row per line item. The order columns are only filled on the first
//! item row of each order so the sheet reads like a grouped list in Excel.
//! The file starts with a UTF-8 BOM, otherwise Excel misreads the Chinese
//! header.

use chrono::{Local, TimeZone};
use shared::models::Order;

pub const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";
pub const CSV_CONTENT_DISPOSITION: &str = "attachment; filename=\"orders.csv\"";

const BOM: &str = "\u{FEFF}";
const HEADER: [&str; 5] = ["订单ID", "姓名", "状态", "下单时间", "商品名称"];
const ROW_END: &str = "\r\n";
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Quote a field, doubling embedded quotes
pub fn escape_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Export orders with times rendered in the server's local time zone
pub fn orders_to_csv(orders: &[Order]) -> Vec<u8> {
    orders_to_csv_in(orders, &Local)
}

/// Export orders with times rendered in `tz`
pub fn orders_to_csv_in<Tz>(orders: &[Order], tz: &Tz) -> Vec<u8>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut csv = String::from(BOM);
    csv.push_str(&HEADER.join(","));
    csv.push_str(ROW_END);

    for order in orders {
        let meta = [
            escape_field(&order.id.to_string()),
            escape_field(&order.customer.name),
            escape_field(order.status.label()),
            escape_field(
                &order
                    .created_at
                    .with_timezone(tz)
                    .format(TIME_FORMAT)
                    .to_string(),
            ),
        ];

        let mut items = order.items.iter();
        let first_item = items
            .next()
            .map(|item| escape_field(&item.name))
            .unwrap_or_else(|| escape_field(""));
        push_row(&mut csv, &meta, &first_item);

        let blank: [String; 4] = Default::default();
        for item in items {
            push_row(&mut csv, &blank, &escape_field(&item.name));
        }
    }

    csv.into_bytes()
}

fn push_row(csv: &mut String, meta: &[String; 4], item: &str) {
    csv.push_str(&meta.join(","));
    csv.push(',');
    csv.push_str(item);
    csv.push_str(ROW_END);
}
