use crate::UploadResult;

#[test]
fn test_display_url_appends_version() {
    let result = UploadResult::new("https://cdn/profile_img/u123/u123.png", 1700000000123);
    assert_eq!(
        result.display_url(),
        "https://cdn/profile_img/u123/u123.png?t=1700000000123"
    );
}
