use super::*;

// =============================================================
// Wire form
// =============================================================

#[test]
fn wire_uses_kebab_case() {
    assert_eq!(BookingStatus::MaterialsPrepared.wire(), "materials-prepared");
    assert_eq!(BookingStatus::OnTheWay.wire(), "on-the-way");
    assert_eq!(BookingStatus::InProgress.wire(), "in-progress");
    assert_eq!(BookingStatus::Pending.wire(), "pending");
}

#[test]
fn from_wire_round_trips_every_status() {
    for status in BookingStatus::ALL {
        assert_eq!(BookingStatus::from_wire(status.wire()), Some(status));
    }
    assert_eq!(BookingStatus::from_wire("unknown"), None);
}

#[test]
fn serde_matches_wire_form() {
    let json = serde_json::to_string(&BookingStatus::MaterialsPrepared).expect("serialize");
    assert_eq!(json, "\"materials-prepared\"");
    let back: BookingStatus = serde_json::from_str("\"on-the-way\"").expect("deserialize");
    assert_eq!(back, BookingStatus::OnTheWay);
}

#[test]
fn display_matches_wire() {
    assert_eq!(BookingStatus::InProgress.to_string(), "in-progress");
}

// =============================================================
// Decorator flow
// =============================================================

#[test]
fn flow_is_linear_and_ends_at_completed() {
    let mut status = BookingStatus::Assigned;
    let mut seen = vec![status];
    while let Some(next) = status.next_in_flow() {
        status = next;
        seen.push(status);
    }
    assert_eq!(seen, BookingStatus::DECORATOR_FLOW.to_vec());
    assert_eq!(status, BookingStatus::Completed);
}

#[test]
fn completed_has_no_next_step() {
    assert_eq!(BookingStatus::Completed.next_in_flow(), None);
}

#[test]
fn statuses_outside_the_flow_have_no_next_step() {
    assert_eq!(BookingStatus::Pending.next_in_flow(), None);
    assert_eq!(BookingStatus::Confirmed.next_in_flow(), None);
    assert_eq!(BookingStatus::Cancelled.next_in_flow(), None);
}

#[test]
fn flow_index_orders_the_progress_strip() {
    assert_eq!(BookingStatus::Assigned.flow_index(), Some(0));
    assert_eq!(BookingStatus::InProgress.flow_index(), Some(4));
    assert_eq!(BookingStatus::Cancelled.flow_index(), None);
}

// =============================================================
// Terminal / cancellable
// =============================================================

#[test]
fn only_completed_and_cancelled_are_terminal() {
    for status in BookingStatus::ALL {
        let expected = matches!(status, BookingStatus::Completed | BookingStatus::Cancelled);
        assert_eq!(status.is_terminal(), expected, "{status}");
        assert_eq!(status.cancellable(), !expected, "{status}");
    }
}

#[test]
fn badge_class_is_always_a_badge() {
    for status in BookingStatus::ALL {
        assert!(status.badge_class().starts_with("badge badge--"), "{status}");
    }
}

#[test]
fn labels_replace_dashes_with_spaces() {
    for status in BookingStatus::ALL {
        assert_eq!(status.label(), status.wire().replace('-', " "));
    }
}
