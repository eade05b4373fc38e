use crate::UserId;

use googletest::prelude::*;

#[test]
fn given_padded_value_when_new_then_trims() {
    let id = UserId::new("  u123 ").unwrap();
    assert_that!(id.as_str(), eq("u123"));
}

#[test]
fn given_empty_value_when_new_then_error() {
    assert_that!(UserId::new("   "), err(anything()));
}

#[test]
fn given_path_separator_when_new_then_error() {
    assert_that!(UserId::new("u1/../u2"), err(anything()));
}

#[test]
fn given_json_string_when_deserialize_then_validates() {
    let id: UserId = serde_json::from_str(r#""u123""#).unwrap();
    assert_that!(id.to_string(), eq("u123"));

    let bad = serde_json::from_str::<UserId>(r#""""#);
    assert!(bad.is_err());
}

#[test]
fn given_uuid_when_new_then_accepted() {
    let id = UserId::new("550e8400-e29b-41d4-a716-446655440000").unwrap();
    assert_that!(id.as_str(), eq("550e8400-e29b-41d4-a716-446655440000"));
}

#[test]
fn given_query_characters_when_new_then_error() {
    assert_that!(UserId::new("u1&id=eq.u2"), err(anything()));
    assert_that!(UserId::new(".."), err(anything()));
}
