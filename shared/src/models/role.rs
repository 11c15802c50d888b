//! User roles and dashboard navigation tabs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dashboard user role
///
/// Serialized with the display names used by the dashboard ("IT Support",
/// "Super Admin", ...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    Admin,
    #[serde(rename = "IT Support")]
    ItSupport,
    Accounting,
    Finance,
    Commercial,
    /// Fallback when no user is signed in
    #[default]
    #[serde(rename = "Super Admin")]
    SuperAdmin,
}

impl UserRole {
    pub const ALL: [UserRole; 6] = [
        UserRole::Admin,
        UserRole::ItSupport,
        UserRole::Accounting,
        UserRole::Finance,
        UserRole::Commercial,
        UserRole::SuperAdmin,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::ItSupport => "IT Support",
            Self::Accounting => "Accounting",
            Self::Finance => "Finance",
            Self::Commercial => "Commercial",
            Self::SuperAdmin => "Super Admin",
        }
    }

    /// Role of the signed-in user, `SuperAdmin` when nobody is signed in
    pub fn resolve(current: Option<UserRole>) -> UserRole {
        current.unwrap_or_default()
    }

    /// May open the Sales Reports tab
    pub fn can_view_sales_reports(&self) -> bool {
        matches!(self, Self::Accounting | Self::Finance | Self::SuperAdmin)
    }

    /// May open the User Management tab
    pub fn can_manage_users(&self) -> bool {
        matches!(self, Self::Admin | Self::SuperAdmin)
    }

    /// Sidebar tabs in display order
    pub fn visible_tabs(&self) -> Vec<NavTab> {
        let mut tabs = vec![
            NavTab::Dashboard,
            NavTab::Transactions,
            NavTab::BatchImport,
            NavTab::Analytics,
            NavTab::Flagged,
        ];
        if self.can_view_sales_reports() {
            tabs.push(NavTab::SalesReports);
        }
        if self.can_manage_users() {
            tabs.push(NavTab::Users);
        }
        tabs
    }

    pub fn can_access(&self, tab: NavTab) -> bool {
        self.visible_tabs().contains(&tab)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Sidebar navigation tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavTab {
    Dashboard,
    Transactions,
    BatchImport,
    Analytics,
    Flagged,
    SalesReports,
    Users,
}

impl NavTab {
    /// Header title shown when the tab is active
    pub fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Transactions => "Transaction Log",
            Self::BatchImport => "Batch Import",
            Self::Analytics => "Analytics",
            Self::Flagged => "Flagged Transactions",
            Self::SalesReports => "Sales Reports",
            Self::Users => "User Management",
        }
    }
}
