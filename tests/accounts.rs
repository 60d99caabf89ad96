//! Integration tests for account and user models

mod common;

use common::{sample_with_full_data, sample_with_partial_data, sample_with_required_data};
use pivotpick::{Account, User};

#[test]
fn test_user_samples_roundtrip_json() {
    for user in [sample_with_required_data(), sample_with_partial_data(), sample_with_full_data()] {
        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }
}

#[test]
fn test_user_json_shape() {
    let value = serde_json::to_value(sample_with_required_data()).unwrap();
    assert_eq!(value, serde_json::json!({ "id": 24814, "username": "nuGud" }));
}

#[test]
fn test_account_without_authorities_defaults_empty() {
    let json = r#"{
        "activated": true,
        "email": "ops@example.org",
        "firstName": null,
        "langKey": "en",
        "lastName": null,
        "username": "ops",
        "imageUrl": null
    }"#;

    let account: Account = serde_json::from_str(json).unwrap();
    assert!(account.authorities.is_empty());
    assert!(!account.has_authority("ROLE_USER"));
    assert_eq!(account.display_name(), "ops");
}
