use crate::{StorageKey, UserId};

use proptest::prelude::*;

proptest! {
    #[test]
    fn given_safe_id_when_validated_then_accepted(id in "[A-Za-z0-9][A-Za-z0-9_-]{0,40}") {
        let user_id = UserId::new(id.clone()).unwrap();
        prop_assert_eq!(user_id.as_str(), id.as_str());
    }

    #[test]
    fn given_id_with_reserved_char_when_validated_then_rejected(
        prefix in "[a-z0-9]{1,10}",
        reserved in prop_oneof![Just('/'), Just('?'), Just('&'), Just('='), Just('%'), Just(' ')],
        suffix in "[a-z0-9]{1,10}",
    ) {
        let raw = format!("{prefix}{reserved}{suffix}");
        prop_assert!(UserId::new(raw).is_err());
    }

    #[test]
    fn given_published_avatar_url_when_key_recovered_then_matches_derived_key(
        id in "[a-z0-9][a-z0-9_-]{0,20}",
        stem in "[a-z0-9]{1,12}",
        ext in "[a-zA-Z]{1,5}",
        version in 0i64..i64::MAX,
    ) {
        let user_id = UserId::new(id).unwrap();
        let derived = StorageKey::derive(&user_id, &format!("{stem}.{ext}")).unwrap();
        let url = format!(
            "https://cdn.test/storage/v1/object/public/profile_img/{}?t={version}",
            derived.object_path
        );

        let recovered = StorageKey::from_avatar_url(&user_id, Some(&url));

        prop_assert_eq!(recovered, derived);
    }
}
