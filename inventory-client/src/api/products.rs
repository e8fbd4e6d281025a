//! Product API

use serde::de::IgnoredAny;
use shared::models::{Product, ProductInput};

use crate::{ClientResult, HttpClient, InventoryClient};

impl<H: HttpClient> InventoryClient<H> {
    pub async fn list_products(&self) -> ClientResult<Vec<Product>> {
        self.http.get("/api/products").await
    }

    /// Products whose SKU matches, as filtered by the server
    pub async fn find_products_by_sku(&self, sku: &str) -> ClientResult<Vec<Product>> {
        self.http
            .get_with_query("/api/products", &[("sku", sku)])
            .await
    }

    pub async fn low_stock_products(&self) -> ClientResult<Vec<Product>> {
        self.http.get("/api/products/low-stock").await
    }

    pub async fn create_product(&self, input: &ProductInput) -> ClientResult<()> {
        self.http
            .post::<IgnoredAny, _>("/api/products", input)
            .await?;
        Ok(())
    }

    pub async fn update_product(&self, id: i64, input: &ProductInput) -> ClientResult<()> {
        self.http
            .put::<IgnoredAny, _>(&format!("/api/products/{}", id), input)
            .await?;
        Ok(())
    }

    pub async fn delete_product(&self, id: i64) -> ClientResult<()> {
        self.http
            .delete::<IgnoredAny>(&format!("/api/products/{}", id))
            .await?;
        Ok(())
    }

    /// Create many products in one request (CSV import)
    pub async fn bulk_import_products(&self, products: &[ProductInput]) -> ClientResult<()> {
        self.http
            .post::<IgnoredAny, _>("/api/products/bulk", &products)
            .await?;
        Ok(())
    }
}
