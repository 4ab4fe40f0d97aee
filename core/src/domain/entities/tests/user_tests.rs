//! Unit tests for user entities

use super::*;

#[test]
fn test_user_record_serialization() {
    let user = UserRecord::new(3, "bob", "Bob Builder", "bob@example.com");
    let json = serde_json::to_value(&user).unwrap();

    assert_eq!(json["id"], 3);
    assert_eq!(json["userName"], "bob");
    assert_eq!(json["fullName"], "Bob Builder");
    assert_eq!(json["email"], "bob@example.com");
}

#[test]
fn test_account_debug_hides_hash() {
    let account = UserAccount::new(
        UserRecord::new(3, "bob", "Bob Builder", "bob@example.com"),
        "$2b$04$abcdefghijklmnopqrstuv",
    );

    let rendered = format!("{:?}", account);
    assert!(rendered.contains("bob"));
    assert!(!rendered.contains("$2b$04$"));
}
