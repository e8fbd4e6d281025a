//! Checkout: the cart plus the customer name, submitted as one sale

use async_trait::async_trait;
use shared::models::NewSale;
use shared::{Cart, ErrorCode};
use thiserror::Error;

use crate::{ClientError, ClientResult, HttpClient, InventoryClient};

/// Where completed sales are sent
#[async_trait]
pub trait SaleGateway: Send + Sync {
    async fn submit_sale(&self, sale: &NewSale) -> ClientResult<()>;
}

#[async_trait]
impl<H: HttpClient> SaleGateway for InventoryClient<H> {
    async fn submit_sale(&self, sale: &NewSale) -> ClientResult<()> {
        self.create_sale(sale).await
    }
}

/// Checkout failure; the cart is left as it was
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("Cart is empty.")]
    EmptyCart,

    #[error("Failed to complete sale.")]
    Submit(#[source] ClientError),
}

impl CheckoutError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::EmptyCart => ErrorCode::CartEmpty,
            Self::Submit(_) => ErrorCode::SaleSubmitFailed,
        }
    }
}

/// In-progress sale on the new-sale screen
#[derive(Debug, Default)]
pub struct CheckoutSession {
    cart: Cart,
    customer_name: String,
}

impl CheckoutSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn set_customer_name(&mut self, name: impl Into<String>) {
        self.customer_name = name.into();
    }

    /// Submit the cart as a sale
    ///
    /// An empty cart is rejected before any request is made. On success the
    /// cart and customer name are reset; on failure both are untouched and
    /// nothing is retried.
    pub async fn checkout<G>(&mut self, gateway: &G) -> Result<NewSale, CheckoutError>
    where
        G: SaleGateway + ?Sized,
    {
        // An empty cart is the only rejection `to_submission` makes
        let sale = self
            .cart
            .to_submission(&self.customer_name)
            .map_err(|_| CheckoutError::EmptyCart)?;

        if let Err(e) = gateway.submit_sale(&sale).await {
            tracing::error!(error = %e, lines = sale.items.len(), "Sale submission failed");
            return Err(CheckoutError::Submit(e));
        }

        tracing::info!(
            lines = sale.items.len(),
            total = %sale.total_amount,
            "Sale completed"
        );
        self.cart.clear();
        self.customer_name.clear();
        Ok(sale)
    }
}
