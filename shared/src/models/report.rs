//! Sales report Model

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::sale::Sale;
use super::serde_helpers;

/// Aggregates for a report period
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    #[serde(default, deserialize_with = "serde_helpers::int_or_zero")]
    pub total_sales: i64,
    #[serde(default, deserialize_with = "serde_helpers::decimal_or_zero")]
    pub total_revenue: Decimal,
    #[serde(default, deserialize_with = "serde_helpers::decimal_or_zero")]
    pub total_discount: Decimal,
    #[serde(default, deserialize_with = "serde_helpers::decimal_or_zero")]
    pub total_cost: Decimal,
    #[serde(default, deserialize_with = "serde_helpers::decimal_or_zero")]
    pub gross_profit: Decimal,
}

/// Response of `GET /api/reports/sales`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesReport {
    #[serde(default)]
    pub summary: ReportSummary,
    #[serde(default)]
    pub details: Vec<Sale>,
}

/// Inclusive date range of a sales report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ReportRange {
    /// First day of `today`'s month through `today`
    pub fn month_to_date(today: NaiveDate) -> Self {
        let start = today.with_day(1).unwrap_or(today);
        Self { start, end: today }
    }

    /// `startDate` query value
    pub fn start_param(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    /// `endDate` query value, extended to the end of the day
    pub fn end_param(&self) -> String {
        format!("{}T23:59:59", self.end.format("%Y-%m-%d"))
    }
}

/// One point of `GET /api/reports/sales-over-time`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesPoint {
    pub date: String,
    #[serde(default, deserialize_with = "serde_helpers::decimal_or_zero")]
    pub total: Decimal,
}
