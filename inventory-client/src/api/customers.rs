//! Customer API

use serde::de::IgnoredAny;
use shared::models::{Customer, CustomerInput};

use crate::{ClientResult, HttpClient, InventoryClient};

impl<H: HttpClient> InventoryClient<H> {
    pub async fn list_customers(&self) -> ClientResult<Vec<Customer>> {
        self.http.get("/api/customers").await
    }

    pub async fn create_customer(&self, input: &CustomerInput) -> ClientResult<()> {
        self.http
            .post::<IgnoredAny, _>("/api/customers", input)
            .await?;
        Ok(())
    }

    pub async fn update_customer(&self, id: i64, input: &CustomerInput) -> ClientResult<()> {
        self.http
            .put::<IgnoredAny, _>(&format!("/api/customers/{}", id), input)
            .await?;
        Ok(())
    }

    pub async fn delete_customer(&self, id: i64) -> ClientResult<()> {
        self.http
            .delete::<IgnoredAny>(&format!("/api/customers/{}", id))
            .await?;
        Ok(())
    }
}
