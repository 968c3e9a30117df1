use super::*;

// =============================================================
// money
// =============================================================

#[test]
fn money_drops_fraction_for_whole_amounts() {
    assert_eq!(money(1200.0), "\u{9f3}1200");
    assert_eq!(money(0.0), "\u{9f3}0");
}

#[test]
fn money_keeps_two_places_otherwise() {
    assert_eq!(money(99.5), "\u{9f3}99.50");
}

// =============================================================
// dates
// =============================================================

#[test]
fn date_label_keeps_date_and_minutes() {
    assert_eq!(date_label("2026-08-04T14:30:00.000Z"), "2026-08-04 14:30");
    assert_eq!(date_label("2026-08-04T14:30"), "2026-08-04 14:30");
}

#[test]
fn date_label_falls_back_on_unexpected_shapes() {
    assert_eq!(date_label("2026-08-04"), "2026-08-04");
    assert_eq!(date_label("2026-08-04Tbad"), "2026-08-04");
}

#[test]
fn date_only_strips_time() {
    assert_eq!(date_only("2026-08-04T14:30:00Z"), "2026-08-04");
    assert_eq!(date_only("2026-08-04"), "2026-08-04");
}

// =============================================================
// ids and initials
// =============================================================

#[test]
fn short_id_truncates_with_ellipsis() {
    assert_eq!(short_id("pi_1234567890abcdef", 8), "pi_12345\u{2026}");
    assert_eq!(short_id("short", 8), "short");
}

#[test]
fn avatar_initial_uppercases_first_letter() {
    assert_eq!(avatar_initial("alice"), "A");
    assert_eq!(avatar_initial("  bob"), "B");
    assert_eq!(avatar_initial(""), "?");
}
