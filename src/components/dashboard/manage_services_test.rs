use super::*;

#[test]
fn valid_form_returns_parsed_cost() {
    assert_eq!(validate_service_form("Stage", "wedding", "1500", "event"), Ok(1500.0));
    assert_eq!(validate_service_form("Stage", "wedding", " 99.5 ", "event"), Ok(99.5));
}

#[test]
fn name_and_unit_must_be_nonblank() {
    assert_eq!(
        validate_service_form("   ", "wedding", "1500", "event"),
        Err("Service name is required")
    );
    assert_eq!(validate_service_form("Stage", "wedding", "1500", " "), Err("Unit is required"));
}

#[test]
fn category_must_be_selected() {
    assert_eq!(validate_service_form("Stage", "", "1500", "event"), Err("Category is required"));
}

#[test]
fn cost_must_parse_and_be_nonnegative() {
    assert_eq!(
        validate_service_form("Stage", "wedding", "abc", "event"),
        Err("Cost must be a number")
    );
    assert_eq!(
        validate_service_form("Stage", "wedding", "-5", "event"),
        Err("Cost cannot be negative")
    );
}
