//! Dashboard API

use shared::models::Dashboard;

use crate::{ClientResult, HttpClient, InventoryClient};

impl<H: HttpClient> InventoryClient<H> {
    pub async fn dashboard(&self) -> ClientResult<Dashboard> {
        self.http.get("/api/dashboard").await
    }
}
