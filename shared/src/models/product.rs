//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::serde_helpers;
use crate::error::{AppError, AppResult};

/// Stock level at or below which a product is flagged as low
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Barcode value used by the scanner and the checkout SKU box
    #[serde(default)]
    pub sku: Option<String>,
    /// Units on hand
    #[serde(deserialize_with = "serde_helpers::int")]
    pub quantity: i64,
    /// Sale price per unit
    #[serde(deserialize_with = "serde_helpers::decimal_or_zero")]
    pub price: Decimal,
    #[serde(default, deserialize_with = "serde_helpers::decimal_or_zero")]
    pub cost_price: Decimal,
    #[serde(default)]
    pub description: Option<String>,
}

impl Product {
    /// Whether the stock level should be flagged as low
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= LOW_STOCK_THRESHOLD
    }

    /// Whether the SKU matches exactly
    pub fn has_sku(&self, sku: &str) -> bool {
        self.sku.as_deref() == Some(sku)
    }

    /// Form values for editing this product
    pub fn to_input(&self) -> ProductInput {
        ProductInput {
            name: self.name.clone(),
            sku: self.sku.clone().unwrap_or_default(),
            quantity: self.quantity,
            price: self.price,
            cost_price: self.cost_price,
            description: self.description.clone(),
        }
    }
}

/// Create / update product payload, also one row of a CSV import
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub sku: String,
    pub quantity: i64,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub price: Decimal,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub cost_price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ProductInput {
    /// Check the fields the product form marks as required
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::required("name"));
        }
        if self.sku.trim().is_empty() {
            return Err(AppError::required("sku"));
        }
        if self.quantity < 0 {
            return Err(AppError::with_message(
                crate::ErrorCode::ValueOutOfRange,
                "Quantity cannot be negative",
            )
            .with_detail("field", "quantity"));
        }
        if self.price.is_sign_negative() || self.cost_price.is_sign_negative() {
            return Err(AppError::new(crate::ErrorCode::ProductInvalidPrice));
        }
        Ok(())
    }
}
