//! Dashboard Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::sale::Sale;
use super::serde_helpers;

/// Stock statistics shown on the dashboard cards
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default, deserialize_with = "serde_helpers::int_or_zero")]
    pub total_products: i64,
    #[serde(default, deserialize_with = "serde_helpers::int_or_zero")]
    pub total_stock: i64,
    #[serde(default, deserialize_with = "serde_helpers::decimal_or_zero")]
    pub total_value: Decimal,
}

/// Best-selling product entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProduct {
    pub name: String,
    #[serde(default, deserialize_with = "serde_helpers::int_or_zero")]
    pub total_sold: i64,
}

/// Response of `GET /api/dashboard`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    #[serde(default)]
    pub stats: DashboardStats,
    #[serde(default)]
    pub top_products: Vec<TopProduct>,
    #[serde(default)]
    pub recent_sales: Vec<Sale>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_deserialize() {
        let json = r#"{
            "stats": {"totalProducts":"12","totalStock":"340","totalValue":"125000.50"},
            "topProducts": [{"name":"Rice","total_sold":"40"}],
            "recentSales": []
        }"#;
        let dashboard: Dashboard = serde_json::from_str(json).unwrap();
        assert_eq!(dashboard.stats.total_products, 12);
        assert_eq!(dashboard.stats.total_stock, 340);
        assert_eq!(dashboard.top_products[0].total_sold, 40);
    }

    #[test]
    fn test_dashboard_missing_sections() {
        let dashboard: Dashboard = serde_json::from_str(r#"{"stats":{}}"#).unwrap();
        assert_eq!(dashboard.stats.total_value, Decimal::ZERO);
        assert!(dashboard.top_products.is_empty());
    }
}
