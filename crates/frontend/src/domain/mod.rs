pub mod a001_employee;
pub mod a002_stock_balance;
pub mod a003_project_mat_cost;
pub mod a004_stores_transaction;
pub mod a005_warehouse;
pub mod a006_mrq;
pub mod a007_mtn;

use leptos::prelude::*;

/// Sidebar section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenGroup {
    References,
    Reports,
    Documents,
}

impl ScreenGroup {
    pub const ALL: [ScreenGroup; 3] = [Self::References, Self::Documents, Self::Reports];

    pub fn label(&self) -> &'static str {
        match self {
            Self::References => "Master data",
            Self::Reports => "Reports",
            Self::Documents => "Documents",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::References => "database",
            Self::Reports => "bar-chart",
            Self::Documents => "file-text",
        }
    }
}

/// Every screen the shell can open in a tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Employee,
    StockBalance,
    ProjectMatCost,
    StoresTransaction,
    Warehouse,
    Mrq,
    Mtn,
}

impl Screen {
    pub const ALL: [Screen; 7] = [
        Self::Employee,
        Self::Warehouse,
        Self::Mrq,
        Self::Mtn,
        Self::StockBalance,
        Self::ProjectMatCost,
        Self::StoresTransaction,
    ];

    /// Stable key used in the URL (`?active=`) and in page ids.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Employee => "a001_employee",
            Self::StockBalance => "a002_stock_balance",
            Self::ProjectMatCost => "a003_project_mat_cost",
            Self::StoresTransaction => "a004_stores_transaction",
            Self::Warehouse => "a005_warehouse",
            Self::Mrq => "a006_mrq",
            Self::Mtn => "a007_mtn",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }

    pub fn page_id(&self) -> &'static str {
        match self {
            Self::Employee => "a001_employee--list",
            Self::StockBalance => "a002_stock_balance--list",
            Self::ProjectMatCost => "a003_project_mat_cost--list",
            Self::StoresTransaction => "a004_stores_transaction--list",
            Self::Warehouse => "a005_warehouse--list",
            Self::Mrq => "a006_mrq--detail",
            Self::Mtn => "a007_mtn--detail",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Employee => "Employees",
            Self::StockBalance => "Stock Balance",
            Self::ProjectMatCost => "Project Material Cost",
            Self::StoresTransaction => "Stores Transactions",
            Self::Warehouse => "Warehouses",
            Self::Mrq => "MRQ",
            Self::Mtn => "MTN",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Employee => "users",
            Self::StockBalance => "inventory",
            Self::ProjectMatCost => "invoices",
            Self::StoresTransaction => "shipments",
            Self::Warehouse => "warehouse",
            Self::Mrq | Self::Mtn => "file-text",
        }
    }

    pub fn group(&self) -> ScreenGroup {
        match self {
            Self::Employee | Self::Warehouse => ScreenGroup::References,
            Self::Mrq | Self::Mtn => ScreenGroup::Documents,
            Self::StockBalance | Self::ProjectMatCost | Self::StoresTransaction => {
                ScreenGroup::Reports
            }
        }
    }

    pub fn render(&self) -> AnyView {
        match self {
            Self::Employee => view! { <a001_employee::ui::list::EmployeeList /> }.into_any(),
            Self::StockBalance => {
                view! { <a002_stock_balance::ui::list::StockBalanceList /> }.into_any()
            }
            Self::ProjectMatCost => {
                view! { <a003_project_mat_cost::ui::list::ProjectMatCostList /> }.into_any()
            }
            Self::StoresTransaction => {
                view! { <a004_stores_transaction::ui::list::StoresTransactionList /> }.into_any()
            }
            Self::Warehouse => view! { <a005_warehouse::ui::list::WarehouseList /> }.into_any(),
            Self::Mrq => view! { <a006_mrq::ui::details::MrqDocument /> }.into_any(),
            Self::Mtn => view! { <a007_mtn::ui::details::MtnDocument /> }.into_any(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::page_frame::is_valid_page_id;

    #[test]
    fn test_keys_round_trip() {
        for screen in Screen::ALL {
            assert_eq!(Screen::from_key(screen.key()), Some(screen));
            assert!(is_valid_page_id(screen.page_id()));
            assert!(screen.page_id().starts_with(screen.key()));
        }
        assert_eq!(Screen::from_key("a999_unknown"), None);
    }

    #[test]
    fn test_every_group_has_screens() {
        for group in ScreenGroup::ALL {
            assert!(Screen::ALL.iter().any(|s| s.group() == group));
        }
    }
}
