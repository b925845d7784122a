use super::*;

#[test]
fn validate_credentials_trims_email() {
    let creds = validate_credentials("  ana@example.test  ", "hunter2").unwrap();
    assert_eq!(creds.email, "ana@example.test");
    assert_eq!(creds.password, "hunter2");
}

#[test]
fn validate_credentials_keeps_password_whitespace() {
    let creds = validate_credentials("ana@example.test", " pass ").unwrap();
    assert_eq!(creds.password, " pass ");
}

#[test]
fn validate_credentials_requires_both_fields() {
    assert_eq!(validate_credentials("", "pw"), Err(MISSING_FIELDS));
    assert_eq!(validate_credentials("   ", "pw"), Err(MISSING_FIELDS));
    assert_eq!(validate_credentials("ana@example.test", ""), Err(MISSING_FIELDS));
}

#[test]
fn validate_credentials_rejects_malformed_email() {
    assert_eq!(validate_credentials("ana", "pw"), Err(INVALID_EMAIL));
    assert_eq!(validate_credentials("@example.test", "pw"), Err(INVALID_EMAIL));
    assert_eq!(validate_credentials("ana@localhost", "pw"), Err(INVALID_EMAIL));
}
