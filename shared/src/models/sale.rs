//! Sale Model
//!
//! History rows, sale detail with line items, and the checkout submission.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::serde_helpers;

/// Sale history row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: i64,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(deserialize_with = "serde_helpers::decimal_or_zero")]
    pub total_amount: Decimal,
    /// Timestamp as sent by the API (RFC 3339 or naive `YYYY-MM-DDTHH:MM:SS`)
    pub sale_date: String,
    /// Cashier who recorded the sale
    #[serde(default)]
    pub username: Option<String>,
}

impl Sale {
    /// Customer name, or `Walk-in` for anonymous sales
    pub fn customer_label(&self) -> &str {
        match self.customer_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => "Walk-in",
        }
    }

    /// Sale timestamp in local time, if the API value parses
    pub fn sale_date_local(&self) -> Option<DateTime<Local>> {
        parse_timestamp(&self.sale_date)
    }

    /// `YYYY-MM-DD HH:MM` in local time, falling back to the raw value
    pub fn display_date(&self) -> String {
        self.sale_date_local()
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| self.sale_date.clone())
    }
}

/// Parse an API timestamp; naive values are taken as local time
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Local>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
}

/// One line of a recorded sale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleItem {
    #[serde(default)]
    pub product_id: Option<i64>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(deserialize_with = "serde_helpers::int")]
    pub quantity_sold: i64,
    #[serde(deserialize_with = "serde_helpers::decimal_or_zero")]
    pub price_per_unit: Decimal,
    #[serde(default, deserialize_with = "serde_helpers::decimal_or_zero")]
    pub discount: Decimal,
    #[serde(default)]
    pub cost_per_unit: Option<Decimal>,
}

impl SaleItem {
    /// Price x quantity, before discount
    pub fn subtotal(&self) -> Decimal {
        self.price_per_unit * Decimal::from(self.quantity_sold)
    }
}

/// Sale detail as returned by `GET /api/sales/{id}`
///
/// Only the items are guaranteed; the header fields are taken from the
/// history row the detail was opened from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SaleDetail {
    #[serde(default)]
    pub items: Vec<SaleItem>,
}

impl SaleDetail {
    /// Sum of item subtotals
    pub fn items_subtotal(&self) -> Decimal {
        self.items.iter().map(SaleItem::subtotal).sum()
    }

    /// Sum of item discounts
    pub fn items_discount(&self) -> Decimal {
        self.items.iter().map(|i| i.discount).sum()
    }
}

/// One line of a checkout submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSaleItem {
    pub product_id: i64,
    pub quantity_sold: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub price_per_unit: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub discount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub cost_per_unit: Decimal,
}

/// Checkout submission body for `POST /api/sales`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSale {
    /// Blank for walk-in customers
    pub customer_name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    pub items: Vec<NewSaleItem>,
}
