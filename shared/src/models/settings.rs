//! Business settings Model

use serde::{Deserialize, Serialize};

/// Name used on receipts when no business name has been configured
pub const DEFAULT_BUSINESS_NAME: &str = "Smart Inventory";

/// Business profile printed on receipts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessSettings {
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl BusinessSettings {
    /// Configured business name, if not blank
    pub fn name(&self) -> Option<&str> {
        self.business_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
    }

    /// Name for receipt headers, falling back to the product name
    pub fn display_name(&self) -> &str {
        self.name().unwrap_or(DEFAULT_BUSINESS_NAME)
    }
}

/// Factory reset body for `POST /api/settings/factory-reset`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactoryReset {
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_fallback() {
        assert_eq!(BusinessSettings::default().display_name(), "Smart Inventory");
        let settings = BusinessSettings {
            business_name: Some("  ".into()),
            ..Default::default()
        };
        assert_eq!(settings.display_name(), "Smart Inventory");
        let settings = BusinessSettings {
            business_name: Some("Perera Stores".into()),
            ..Default::default()
        };
        assert_eq!(settings.display_name(), "Perera Stores");
    }

    #[test]
    fn test_deserialize_empty_object() {
        let settings: BusinessSettings = serde_json::from_str("{}").unwrap();
        assert!(settings.name().is_none());
    }
}
