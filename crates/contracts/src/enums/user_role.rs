use serde::{Deserialize, Serialize};

/// Console roles. Unknown roles coming off the wire fall back to
/// `Customer`, the least-privileged role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    SystemAdmin,
    SuperAdmin,
    SubAdmin,
    FieldAgent,
    #[serde(other)]
    Customer,
}

impl UserRole {
    pub const ALL: [UserRole; 5] = [
        UserRole::SystemAdmin,
        UserRole::SuperAdmin,
        UserRole::SubAdmin,
        UserRole::FieldAgent,
        UserRole::Customer,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            UserRole::SystemAdmin => "System Admin",
            UserRole::SuperAdmin => "Super Admin",
            UserRole::SubAdmin => "Sub Admin",
            UserRole::FieldAgent => "Field Agent",
            UserRole::Customer => "Customer",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::SystemAdmin => "SYSTEM_ADMIN",
            UserRole::SuperAdmin => "SUPER_ADMIN",
            UserRole::SubAdmin => "SUB_ADMIN",
            UserRole::FieldAgent => "FIELD_AGENT",
            UserRole::Customer => "CUSTOMER",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        UserRole::ALL.iter().copied().find(|r| r.as_str() == value)
    }

    pub fn is_admin(&self) -> bool {
        matches!(
            self,
            UserRole::SystemAdmin | UserRole::SuperAdmin | UserRole::SubAdmin
        )
    }

    /// Whether the role may push a government-application stage forward.
    /// Customers can only watch the tracker.
    pub fn can_update_stages(&self) -> bool {
        self.is_admin() || *self == UserRole::FieldAgent
    }

    /// Catalog screens (brands, categories, products, reasons) are
    /// admin-only in the navigation.
    pub fn can_manage_catalog(&self) -> bool {
        self.is_admin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customers_cannot_update_stages() {
        assert!(!UserRole::Customer.can_update_stages());
        assert!(UserRole::FieldAgent.can_update_stages());
        assert!(UserRole::SubAdmin.can_update_stages());
        assert!(UserRole::SystemAdmin.can_update_stages());
    }

    #[test]
    fn unknown_role_falls_back_to_customer() {
        let parsed: UserRole = serde_json::from_str("\"AUDITOR\"").unwrap();
        assert_eq!(parsed, UserRole::Customer);
    }
}
