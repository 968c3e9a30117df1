use super::*;
use crate::state::bookings::BookingStatus;

fn booking(id: &str) -> Booking {
    Booking {
        id: id.to_owned(),
        service_id: None,
        service_name: "Wedding Stage".to_owned(),
        service_cost: 15000.0,
        user_email: None,
        user_name: None,
        booking_date: "2026-09-01T10:00".to_owned(),
        location: "Dhaka".to_owned(),
        user_notes: None,
        status: BookingStatus::Pending,
        is_paid: false,
        payment_status: None,
        decorator_email: None,
    }
}

#[test]
fn find_booking_matches_by_id() {
    let list = vec![booking("b-1"), booking("b-2")];
    assert_eq!(find_booking(&list, "b-2").map(|b| b.id), Some("b-2".to_owned()));
}

#[test]
fn find_booking_misses_unknown_ids() {
    let list = vec![booking("b-1")];
    assert!(find_booking(&list, "b-9").is_none());
    assert!(find_booking(&[], "b-1").is_none());
}
