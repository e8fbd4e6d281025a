//! Business settings API

use serde::de::IgnoredAny;
use shared::models::{BusinessSettings, FactoryReset};

use crate::{ClientResult, HttpClient, InventoryClient};

impl<H: HttpClient> InventoryClient<H> {
    /// Business profile; an unconfigured business reads as empty settings
    pub async fn business_settings(&self) -> ClientResult<BusinessSettings> {
        let settings: Option<BusinessSettings> = self.http.get("/api/settings/business").await?;
        Ok(settings.unwrap_or_default())
    }

    pub async fn update_business_settings(&self, settings: &BusinessSettings) -> ClientResult<()> {
        self.http
            .put::<IgnoredAny, _>("/api/settings/business", settings)
            .await?;
        Ok(())
    }

    /// Wipe all business data; the server re-checks the password
    pub async fn factory_reset(&self, password: &str) -> ClientResult<()> {
        let body = FactoryReset {
            password: password.to_string(),
        };
        self.http
            .post::<IgnoredAny, _>("/api/settings/factory-reset", &body)
            .await?;
        Ok(())
    }
}
