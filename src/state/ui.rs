//! UI state for dark mode, the mobile menu, and the admin dashboard tabs.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Chrome-level UI flags shared across pages.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub mobile_menu_open: bool,
}

/// Tabs available on the admin dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    Analytics,
    Services,
    Bookings,
    Decorators,
}

impl AdminTab {
    pub const ALL: [AdminTab; 4] =
        [AdminTab::Analytics, AdminTab::Services, AdminTab::Bookings, AdminTab::Decorators];

    pub fn label(self) -> &'static str {
        match self {
            Self::Analytics => "Analytics",
            Self::Services => "Manage Services",
            Self::Bookings => "Manage Bookings",
            Self::Decorators => "Manage Decorators",
        }
    }
}

/// Tabs available on the customer dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CustomerTab {
    #[default]
    Bookings,
    Payments,
}

impl CustomerTab {
    pub fn label(self) -> &'static str {
        match self {
            Self::Bookings => "My Bookings",
            Self::Payments => "Payment History",
        }
    }
}
