//! Checkout cart engine
//!
//! The cart is the only client-side state with invariants:
//!
//! - lines are unique by product id
//! - every line has `1 <= quantity <= stock` (stock is the snapshot taken
//!   when the line was added)
//! - a discount is never set above the line subtotal at the time it is set
//!
//! Every mutation either applies fully or returns a [`CartError`] and leaves
//! the cart untouched. Totals are always derived, never stored.

mod error;
mod line;


pub use error::CartError;
pub use line::{CartField, CartLine, CartTotals};

use rust_decimal::Decimal;

use crate::models::{NewSale, Product};
use crate::money::{parse_amount, parse_quantity};

/// What a successful mutation did to the cart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartChange {
    /// A new line was inserted with quantity 1
    Added,
    /// An existing line's quantity went up by one
    Incremented,
    /// A field was set on an existing line
    Updated,
    /// The line was removed
    Removed,
}

/// In-progress sale
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines in insertion order
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, product_id: i64) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add one unit of `product`
    ///
    /// An existing line is incremented up to its stock snapshot; otherwise a
    /// new line is inserted with quantity 1 and no discount.
    pub fn add_line(&mut self, product: &Product) -> Result<CartChange, CartError> {
        if let Some(line) = self.line_mut(product.id) {
            if line.quantity >= line.stock {
                return Err(reject(CartError::MaxStockReached {
                    product_id: line.product_id,
                    stock: line.stock,
                }));
            }
            line.quantity += 1;
            return Ok(CartChange::Incremented);
        }

        if product.quantity <= 0 {
            return Err(reject(CartError::OutOfStock {
                product_id: product.id,
            }));
        }
        self.lines.push(CartLine::from_product(product));
        tracing::debug!(product_id = product.id, "Cart line added");
        Ok(CartChange::Added)
    }

    /// Add the product whose SKU matches `sku` exactly
    pub fn add_by_sku<'a>(
        &mut self,
        products: &'a [Product],
        sku: &str,
    ) -> Result<&'a Product, CartError> {
        let product = products
            .iter()
            .find(|p| p.has_sku(sku))
            .ok_or_else(|| {
                reject(CartError::SkuNotFound {
                    sku: sku.to_string(),
                })
            })?;
        self.add_line(product)?;
        Ok(product)
    }

    /// Set a line field from raw user input
    ///
    /// The input is parsed leniently (anything non-numeric is 0). For
    /// quantity the stock check runs first, then a value of 0 or less
    /// removes the line. Fractional quantities are truncated.
    pub fn update_line(
        &mut self,
        product_id: i64,
        field: CartField,
        raw_value: &str,
    ) -> Result<CartChange, CartError> {
        let line = self
            .line_mut(product_id)
            .ok_or_else(|| reject(CartError::LineNotFound { product_id }))?;
        let value = parse_amount(raw_value);

        match field {
            CartField::Quantity => {
                if value > Decimal::from(line.stock) {
                    return Err(reject(CartError::InsufficientStock {
                        product_id,
                        available: line.stock,
                    }));
                }
                let quantity = parse_quantity(raw_value);
                if quantity <= 0 {
                    self.remove_line(product_id);
                    return Ok(CartChange::Removed);
                }
                line.quantity = quantity;
            }
            CartField::Discount => {
                if value.is_sign_negative() && !value.is_zero() {
                    return Err(reject(CartError::NegativeDiscount { product_id }));
                }
                let subtotal = line.subtotal();
                if value > subtotal {
                    return Err(reject(CartError::DiscountExceedsSubtotal {
                        product_id,
                        subtotal,
                    }));
                }
                line.discount = value;
            }
        }
        Ok(CartChange::Updated)
    }

    /// Move a line's quantity by `delta` through the same rules as
    /// [`update_line`](Self::update_line)
    pub fn step_quantity(&mut self, product_id: i64, delta: i64) -> Result<CartChange, CartError> {
        let current = self
            .line(product_id)
            .map(|l| l.quantity)
            .ok_or_else(|| reject(CartError::LineNotFound { product_id }))?;
        self.update_line(
            product_id,
            CartField::Quantity,
            &current.saturating_add(delta).to_string(),
        )
    }

    /// Remove a line unconditionally, returning it if it existed
    pub fn remove_line(&mut self, product_id: i64) -> Option<CartLine> {
        let index = self.lines.iter().position(|l| l.product_id == product_id)?;
        Some(self.lines.remove(index))
    }

    /// Subtotal, total discount and grand total over the current lines
    pub fn compute_totals(&self) -> CartTotals {
        let subtotal: Decimal = self.lines.iter().map(CartLine::subtotal).sum();
        let total_discount: Decimal = self.lines.iter().map(|l| l.discount).sum();
        CartTotals {
            subtotal,
            total_discount,
            grand_total: subtotal - total_discount,
        }
    }

    /// Build the create-sale body; an empty cart is rejected
    pub fn to_submission(&self, customer_name: &str) -> Result<NewSale, CartError> {
        if self.is_empty() {
            return Err(reject(CartError::Empty));
        }
        Ok(NewSale {
            customer_name: customer_name.trim().to_string(),
            total_amount: self.compute_totals().grand_total,
            items: self.lines.iter().map(CartLine::to_sale_item).collect(),
        })
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    fn line_mut(&mut self, product_id: i64) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| l.product_id == product_id)
    }
}

fn reject(err: CartError) -> CartError {
    tracing::debug!(code = %err.code(), reason = %err, "Cart change rejected");
    err
}
