//! Reports API

use shared::models::{ReportRange, SalesPoint, SalesReport};

use crate::{ClientResult, HttpClient, InventoryClient};

impl<H: HttpClient> InventoryClient<H> {
    pub async fn sales_report(&self, range: &ReportRange) -> ClientResult<SalesReport> {
        let query = [
            ("startDate", range.start_param()),
            ("endDate", range.end_param()),
        ];
        self.http.get_with_query("/api/reports/sales", &query).await
    }

    pub async fn sales_over_time(&self) -> ClientResult<Vec<SalesPoint>> {
        self.http.get("/api/reports/sales-over-time").await
    }
}
