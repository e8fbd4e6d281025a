//! Sales API

use serde::de::IgnoredAny;
use shared::models::{NewSale, Sale, SaleDetail};

use crate::{ClientResult, HttpClient, InventoryClient};

impl<H: HttpClient> InventoryClient<H> {
    /// Sales history; `search` is matched server side
    pub async fn list_sales(&self, search: Option<&str>) -> ClientResult<Vec<Sale>> {
        match search.map(str::trim).filter(|s| !s.is_empty()) {
            Some(term) => {
                self.http
                    .get_with_query("/api/sales", &[("search", term)])
                    .await
            }
            None => self.http.get("/api/sales").await,
        }
    }

    pub async fn get_sale(&self, id: i64) -> ClientResult<SaleDetail> {
        self.http.get(&format!("/api/sales/{}", id)).await
    }

    /// Record a completed checkout
    pub async fn create_sale(&self, sale: &NewSale) -> ClientResult<()> {
        self.http.post::<IgnoredAny, _>("/api/sales", sale).await?;
        Ok(())
    }
}
