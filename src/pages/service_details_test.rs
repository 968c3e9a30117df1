use super::*;

#[test]
fn booking_needs_date_and_location() {
    assert_eq!(validate_booking_input("", "Dhaka"), Err("Pick a booking date."));
    assert_eq!(
        validate_booking_input("2026-09-01T10:00", "  "),
        Err("Enter the service location.")
    );
    assert_eq!(validate_booking_input("2026-09-01T10:00", "Dhaka"), Ok(()));
}

#[test]
fn booking_payload_trims_fields_and_omits_empty_notes() {
    let payload = booking_payload("s-1", " 2026-09-01T10:00 ", " Dhaka ", "   ");
    assert_eq!(payload.service_id, "s-1");
    assert_eq!(payload.booking_date, "2026-09-01T10:00");
    assert_eq!(payload.location, "Dhaka");
    assert!(payload.user_notes.is_none());
}

#[test]
fn booking_payload_keeps_real_notes() {
    let payload = booking_payload("s-1", "2026-09-01T10:00", "Dhaka", " side entrance ");
    assert_eq!(payload.user_notes.as_deref(), Some("side entrance"));
}
