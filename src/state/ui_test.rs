use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_dark_mode_off() {
    let state = UiState::default();
    assert!(!state.dark_mode);
}

#[test]
fn ui_state_default_mobile_menu_closed() {
    let state = UiState::default();
    assert!(!state.mobile_menu_open);
}

// =============================================================
// Tabs
// =============================================================

#[test]
fn admin_tab_default_is_analytics() {
    assert_eq!(AdminTab::default(), AdminTab::Analytics);
}

#[test]
fn admin_tab_labels_are_distinct() {
    for (i, a) in AdminTab::ALL.iter().enumerate() {
        for (j, b) in AdminTab::ALL.iter().enumerate() {
            if i != j {
                assert_ne!(a.label(), b.label());
            }
        }
    }
}

#[test]
fn customer_tab_default_is_bookings() {
    assert_eq!(CustomerTab::default(), CustomerTab::Bookings);
}

#[test]
fn customer_tab_labels() {
    assert_eq!(CustomerTab::Bookings.label(), "My Bookings");
    assert_eq!(CustomerTab::Payments.label(), "Payment History");
}
