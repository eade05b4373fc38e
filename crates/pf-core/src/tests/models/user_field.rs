use crate::UserField;

use std::str::FromStr;

#[test]
fn test_user_field_as_column() {
    assert_eq!(UserField::Username.as_column(), "username");
    assert_eq!(UserField::ProfileImage.as_column(), "profile_img");
}

#[test]
fn test_user_field_from_str() {
    assert_eq!(
        UserField::from_str("profile_img").unwrap(),
        UserField::ProfileImage
    );
    assert!(UserField::from_str("email").is_err());
}
