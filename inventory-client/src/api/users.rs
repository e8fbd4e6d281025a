//! User API

use serde::de::IgnoredAny;
use shared::models::{PasswordChange, ProfileUpdate, Role, RoleUpdate, User};

use crate::{ClientResult, HttpClient, InventoryClient};

impl<H: HttpClient> InventoryClient<H> {
    pub async fn list_users(&self) -> ClientResult<Vec<User>> {
        self.http.get("/api/users").await
    }

    pub async fn update_user_role(&self, id: i64, role: Role) -> ClientResult<()> {
        self.http
            .put::<IgnoredAny, _>(&format!("/api/users/{}/role", id), &RoleUpdate { role })
            .await?;
        Ok(())
    }

    /// Update the signed-in user's name and email
    pub async fn update_profile(&self, profile: &ProfileUpdate) -> ClientResult<()> {
        self.http
            .put::<IgnoredAny, _>("/api/users/profile", profile)
            .await?;
        Ok(())
    }

    pub async fn change_password(&self, old_password: &str, new_password: &str) -> ClientResult<()> {
        let body = PasswordChange {
            old_password: old_password.to_string(),
            new_password: new_password.to_string(),
        };
        self.http
            .put::<IgnoredAny, _>("/api/users/change-password", &body)
            .await?;
        Ok(())
    }
}
