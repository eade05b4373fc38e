use crate::{StorageKey, UserId};

use googletest::prelude::*;

fn user() -> UserId {
    UserId::new("u123").unwrap()
}

#[test]
fn given_png_file_when_derive_then_name_replaced_and_extension_kept() {
    let key = StorageKey::derive(&user(), "avatar.png").unwrap();

    assert_that!(key.file_name, eq("u123.png"));
    assert_that!(key.object_path, eq("u123/u123.png"));
}

#[test]
fn given_multiple_dots_when_derive_then_uses_last_extension() {
    let key = StorageKey::derive(&user(), "holiday.photo.JPEG").unwrap();
    assert_that!(key.file_name, eq("u123.JPEG"));
}

#[test]
fn given_same_extension_when_derive_twice_then_same_key() {
    let first = StorageKey::derive(&user(), "a.png").unwrap();
    let second = StorageKey::derive(&user(), "b.png").unwrap();
    assert_that!(first, eq(&second));
}

#[test]
fn given_no_extension_when_derive_then_error() {
    assert_that!(StorageKey::derive(&user(), "avatar"), err(anything()));
    assert_that!(StorageKey::derive(&user(), "avatar."), err(anything()));
}

#[test]
fn given_published_url_when_from_avatar_url_then_recovers_extension() {
    let url = "https://x.supabase.co/storage/v1/object/public/profile_img/u123/u123.webp?t=1700";
    let key = StorageKey::from_avatar_url(&user(), Some(url));
    assert_that!(key.object_path, eq("u123/u123.webp"));
}

#[test]
fn given_foreign_or_missing_url_when_from_avatar_url_then_defaults_to_jpg() {
    let foreign = StorageKey::from_avatar_url(&user(), Some("https://cdn.example/other.png"));
    assert_that!(foreign.object_path, eq("u123/u123.jpg"));

    let missing = StorageKey::from_avatar_url(&user(), None);
    assert_that!(missing.object_path, eq("u123/u123.jpg"));
}
