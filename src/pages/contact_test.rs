use super::*;

#[test]
fn validate_contact_input_accepts_required_fields() {
    assert_eq!(validate_contact_input("Amina", "amina@example.com", "Need a wedding stage."), Ok(()));
}

#[test]
fn validate_contact_input_rejects_missing_or_blank_fields() {
    let err = Err("Please fill in your name, email, and message.");
    assert_eq!(validate_contact_input("", "a@b.com", "hi"), err);
    assert_eq!(validate_contact_input("Amina", "", "hi"), err);
    assert_eq!(validate_contact_input("Amina", "a@b.com", "   "), err);
}
