//! Cart line and totals

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{NewSaleItem, Product};

/// Editable field of a cart line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CartField {
    Quantity,
    Discount,
}

/// One product in an in-progress sale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: i64,
    pub name: String,
    /// Sale price copied from the product when added
    pub unit_price: Decimal,
    /// Cost price copied from the product when added
    pub unit_cost: Decimal,
    /// Always >= 1 while the line exists
    pub quantity: i64,
    /// Absolute discount for the whole line
    pub discount: Decimal,
    /// Stock snapshot taken when the line was added, never refreshed
    pub stock: i64,
}

impl CartLine {
    pub(crate) fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.price,
            unit_cost: product.cost_price,
            quantity: 1,
            discount: Decimal::ZERO,
            stock: product.quantity,
        }
    }

    /// Unit price x quantity
    pub fn subtotal(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }

    /// Subtotal less discount
    pub fn net(&self) -> Decimal {
        self.subtotal() - self.discount
    }

    pub(crate) fn to_sale_item(&self) -> NewSaleItem {
        NewSaleItem {
            product_id: self.product_id,
            quantity_sold: self.quantity,
            price_per_unit: self.unit_price,
            discount: self.discount,
            cost_per_unit: self.unit_cost,
        }
    }
}

/// Derived cart totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTotals {
    pub subtotal: Decimal,
    pub total_discount: Decimal,
    /// `subtotal - total_discount`; the amount submitted as the sale total
    pub grand_total: Decimal,
}
