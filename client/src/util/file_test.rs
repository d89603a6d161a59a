use super::*;

#[test]
fn blob_urls_are_object_urls() {
    assert!(is_object_url("blob:http://localhost:3000/6f1c2d"));
}

#[test]
fn data_and_static_urls_are_not_object_urls() {
    assert!(!is_object_url("data:image/png;base64,AAAA"));
    assert!(!is_object_url("/images/image-avatar.svg"));
}

#[test]
fn revoking_non_object_url_is_noop() {
    revoke_object_url("/images/image-avatar.svg");
}

#[test]
fn file_error_messages_name_the_failure() {
    assert_eq!(FileError::ReadFailed.to_string(), "file read failed");
    assert_eq!(
        FileError::ObjectUrl("SecurityError".to_owned()).to_string(),
        "object URL creation failed: SecurityError"
    );
}
