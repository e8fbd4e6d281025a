//! Route gate and role-restricted actions
//!
//! Routes other than login/register render only with a session token
//! present. The role only decides which navigation entries and action
//! buttons are offered; the API enforces the real permissions.

use serde::{Deserialize, Serialize};
use shared::models::Role;
use std::fmt;

/// A screen of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Login,
    Register,
    Dashboard,
    Products,
    SalesHistory,
    NewSale,
    Scanner,
    Settings,
    Reports,
    Customers,
    Suppliers,
    UserManagement,
}

/// Outcome of checking a route against the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    Allowed,
    RedirectToLogin,
}

impl Route {
    /// URL path of the route
    pub fn path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Dashboard => "/",
            Self::Products => "/products",
            Self::SalesHistory => "/sales-history",
            Self::NewSale => "/new-sale",
            Self::Scanner => "/scanner",
            Self::Settings => "/settings",
            Self::Reports => "/reports",
            Self::Customers => "/customers",
            Self::Suppliers => "/suppliers",
            Self::UserManagement => "/user-management",
        }
    }

    /// Navigation label
    pub fn title(&self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Register",
            Self::Dashboard => "Dashboard",
            Self::Products => "Products",
            Self::SalesHistory => "Sales History",
            Self::NewSale => "New Sale",
            Self::Scanner => "Scanner",
            Self::Settings => "Settings",
            Self::Reports => "Reports",
            Self::Customers => "Customers",
            Self::Suppliers => "Suppliers",
            Self::UserManagement => "User Management",
        }
    }

    pub fn is_public(&self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }

    /// Navigation entries offered to admins only
    pub fn is_admin_nav(&self) -> bool {
        matches!(
            self,
            Self::Reports | Self::Customers | Self::Suppliers | Self::UserManagement
        )
    }

    /// Token presence decides; the role is not consulted
    pub fn guard(&self, authenticated: bool) -> Guard {
        if self.is_public() || authenticated {
            Guard::Allowed
        } else {
            Guard::RedirectToLogin
        }
    }

    /// Navigation entries for a signed-in user with `role`, in menu order
    pub fn navigation(role: Role) -> Vec<Route> {
        let mut routes = vec![Route::Dashboard, Route::Products, Route::SalesHistory];
        if role.is_admin() {
            routes.extend([
                Route::Reports,
                Route::Customers,
                Route::Suppliers,
                Route::UserManagement,
            ]);
        }
        routes.push(Route::Settings);
        routes
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A role-restricted action button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    AddProduct,
    ImportProducts,
    EditProduct,
    DeleteProduct,
    AddCustomer,
    EditCustomer,
    DeleteCustomer,
    AddSupplier,
    EditSupplier,
    DeleteSupplier,
    ChangeUserRole,
    EditBusinessSettings,
    FactoryReset,
}

impl Action {
    pub fn requires_admin(&self) -> bool {
        !matches!(
            self,
            Self::AddSupplier | Self::EditSupplier | Self::DeleteSupplier
        )
    }

    /// Whether the action is offered to `role`
    pub fn permitted(&self, role: Role) -> bool {
        !self.requires_admin() || role.is_admin()
    }

    /// Lower-case phrase for messages, e.g. "delete products"
    pub fn describe(&self) -> &'static str {
        match self {
            Self::AddProduct => "add products",
            Self::ImportProducts => "import products",
            Self::EditProduct => "edit products",
            Self::DeleteProduct => "delete products",
            Self::AddCustomer => "add customers",
            Self::EditCustomer => "edit customers",
            Self::DeleteCustomer => "delete customers",
            Self::AddSupplier => "add suppliers",
            Self::EditSupplier => "edit suppliers",
            Self::DeleteSupplier => "delete suppliers",
            Self::ChangeUserRole => "change user roles",
            Self::EditBusinessSettings => "edit business settings",
            Self::FactoryReset => "run a factory reset",
        }
    }
}
