use super::*;

#[test]
fn five_megabytes_is_the_upload_cap() {
    assert!(!image_too_large(5.0 * 1024.0 * 1024.0));
    assert!(image_too_large(5.0 * 1024.0 * 1024.0 + 1.0));
}

#[test]
fn small_files_pass() {
    assert!(!image_too_large(0.0));
    assert!(!image_too_large(120_000.0));
}
