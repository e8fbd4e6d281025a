//! Supplier Model

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Supplier entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

impl Supplier {
    /// Form values for editing this supplier
    pub fn to_input(&self) -> SupplierInput {
        SupplierInput {
            name: self.name.clone(),
            contact_person: self.contact_person.clone(),
            email: self.email.clone().unwrap_or_default(),
            phone: self.phone.clone(),
            address: self.address.clone(),
        }
    }
}

/// Create / update supplier payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierInput {
    pub name: String,
    pub contact_person: Option<String>,
    /// Required by the supplier form
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl SupplierInput {
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::required("name"));
        }
        if self.email.trim().is_empty() {
            return Err(AppError::required("email"));
        }
        Ok(())
    }
}
