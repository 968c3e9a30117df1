use super::*;

#[test]
fn valid_input_trims_name_and_email() {
    assert_eq!(
        validate_register_input(" Alice ", " alice@example.com ", "secret1"),
        Ok(("Alice".to_owned(), "alice@example.com".to_owned()))
    );
}

#[test]
fn name_and_email_are_required() {
    assert_eq!(validate_register_input("", "a@b.com", "secret1"), Err("Enter your name."));
    assert_eq!(validate_register_input("Alice", "  ", "secret1"), Err("Enter your email."));
}

#[test]
fn password_needs_six_characters() {
    assert_eq!(
        validate_register_input("Alice", "a@b.com", "short"),
        Err("Password must be at least 6 characters.")
    );
    assert!(validate_register_input("Alice", "a@b.com", "sixchr").is_ok());
}
