use crate::SelectedFile;

#[test]
fn test_extension_of_regular_name() {
    let file = SelectedFile::new("avatar.png", vec![1u8, 2, 3]);
    assert_eq!(file.extension(), Some("png"));
}

#[test]
fn test_extension_missing() {
    assert_eq!(SelectedFile::new("avatar", Vec::new()).extension(), None);
    assert_eq!(SelectedFile::new(".hidden", Vec::new()).extension(), None);
}

#[test]
fn test_with_content_type() {
    let file = SelectedFile::new("a.gif", Vec::new()).with_content_type("image/gif");
    assert_eq!(file.content_type.as_deref(), Some("image/gif"));
}
