//! Supplier API

use serde::de::IgnoredAny;
use shared::models::{Supplier, SupplierInput};

use crate::{ClientResult, HttpClient, InventoryClient};

impl<H: HttpClient> InventoryClient<H> {
    pub async fn list_suppliers(&self) -> ClientResult<Vec<Supplier>> {
        self.http.get("/api/suppliers").await
    }

    pub async fn create_supplier(&self, input: &SupplierInput) -> ClientResult<()> {
        self.http
            .post::<IgnoredAny, _>("/api/suppliers", input)
            .await?;
        Ok(())
    }

    pub async fn update_supplier(&self, id: i64, input: &SupplierInput) -> ClientResult<()> {
        self.http
            .put::<IgnoredAny, _>(&format!("/api/suppliers/{}", id), input)
            .await?;
        Ok(())
    }

    pub async fn delete_supplier(&self, id: i64) -> ClientResult<()> {
        self.http
            .delete::<IgnoredAny>(&format!("/api/suppliers/{}", id))
            .await?;
        Ok(())
    }
}
