//! Cart rejections

use rust_decimal::Decimal;
use thiserror::Error;

use crate::error::ErrorCode;

/// A cart mutation that was refused; the cart is left unchanged
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CartError {
    #[error("Product is out of stock!")]
    OutOfStock { product_id: i64 },

    #[error("Maximum stock quantity reached for this item.")]
    MaxStockReached { product_id: i64, stock: i64 },

    #[error("Only {available} units available.")]
    InsufficientStock { product_id: i64, available: i64 },

    #[error("Discount cannot be greater than item's subtotal of Rs. {subtotal:.2}")]
    DiscountExceedsSubtotal { product_id: i64, subtotal: Decimal },

    #[error("Discount cannot be negative.")]
    NegativeDiscount { product_id: i64 },

    #[error("Item is not in the cart.")]
    LineNotFound { product_id: i64 },

    #[error("Product with SKU \"{sku}\" not found.")]
    SkuNotFound { sku: String },

    #[error("Cart is empty.")]
    Empty,
}

impl CartError {
    /// Error code for this rejection
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::OutOfStock { .. } => ErrorCode::ProductOutOfStock,
            Self::MaxStockReached { .. } | Self::InsufficientStock { .. } => {
                ErrorCode::InsufficientStock
            }
            Self::DiscountExceedsSubtotal { .. } => ErrorCode::DiscountExceedsSubtotal,
            Self::NegativeDiscount { .. } => ErrorCode::InvalidAmount,
            Self::LineNotFound { .. } => ErrorCode::CartLineNotFound,
            Self::SkuNotFound { .. } => ErrorCode::ProductNotFound,
            Self::Empty => ErrorCode::CartEmpty,
        }
    }
}
