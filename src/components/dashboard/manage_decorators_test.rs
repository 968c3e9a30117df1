use super::*;

#[test]
fn parse_rating_accepts_decimal_input() {
    assert_eq!(parse_rating("4.5"), 4.5);
    assert_eq!(parse_rating(" 3 "), 3.0);
}

#[test]
fn parse_rating_defaults_to_unrated() {
    assert_eq!(parse_rating(""), 0.0);
    assert_eq!(parse_rating("good"), 0.0);
}

#[test]
fn promotion_email_is_trimmed_and_must_look_like_an_email() {
    assert_eq!(validate_promotion_email("  user@example.com "), Ok("user@example.com".to_owned()));
    assert_eq!(validate_promotion_email(""), Err("Enter the user's email address"));
    assert_eq!(validate_promotion_email("not-an-email"), Err("Enter the user's email address"));
}
