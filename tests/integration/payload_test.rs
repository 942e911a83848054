//! Integration tests for decoding share API responses.

use chrono::{TimeZone, Utc};

use shareinfo_entity::{ShareType, parse_shares_str};

const OCS_SHARES: &str = include_str!("../fixtures/ocs_shares.json");
const OCS_FAILURE: &str = include_str!("../fixtures/ocs_failure.json");

#[test]
fn test_ocs_list_is_decoded() {
    let shares = parse_shares_str(OCS_SHARES).expect("decode");
    assert_eq!(shares.len(), 2);

    for share in &shares {
        assert!(!share.contains_key("item_type"));
        assert!(!share.contains_key("storage"));
        assert!(!share.contains_key("parent"));
        assert!(share.contains_key("storage_id"));
    }
}

#[test]
fn test_user_share_fields() {
    let shares = parse_shares_str(OCS_SHARES).expect("decode");
    let user_share = &shares[0];

    assert_eq!(user_share.id(), Some(115));
    assert_eq!(user_share.share_kind(), Some(ShareType::User));
    assert_eq!(user_share.share_with(), Some("alice"));
    assert_eq!(user_share.share_with_display_name(), Some("Alice Liddell"));
    assert_eq!(user_share.token(), None);
    assert_eq!(user_share.link(), None);
    assert_eq!(user_share.expires_at(), None);
    assert_eq!(user_share.name(), Some(""));

    let perms = user_share.share_permissions().expect("permissions");
    assert!(perms.can_read());
    assert!(perms.can_update());
    assert!(perms.can_share());
    assert!(!perms.can_delete());
}

#[test]
fn test_link_share_fields() {
    let shares = parse_shares_str(OCS_SHARES).expect("decode");
    let link_share = &shares[1];

    assert_eq!(link_share.id(), Some(116));
    assert_eq!(link_share.share_kind(), Some(ShareType::PublicLink));
    assert_eq!(link_share.share_with(), None);
    assert_eq!(link_share.token(), Some("Q2xz7pbK4fIyAGm"));
    assert_eq!(
        link_share.link(),
        Some("https://cloud.example.com/index.php/s/Q2xz7pbK4fIyAGm")
    );
    assert_eq!(link_share.uid_owner(), Some("admin"));
    assert_eq!(link_share.displayname_owner(), Some("Administrator"));
    assert_eq!(link_share.share_time(), Some(1_493_904_500));
    assert_eq!(
        link_share.expires_at(),
        Some(Utc.with_ymd_and_hms(2017, 5, 10, 0, 0, 0).unwrap())
    );
    assert!(link_share.is_expired_at(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()));
}

#[test]
fn test_unknown_fields_are_reported() {
    let shares = parse_shares_str(OCS_SHARES).expect("decode");
    let unknown: Vec<&str> = shares[0].unknown_fields().map(|(key, _)| key).collect();
    assert!(unknown.contains(&"mimetype"));
    assert!(unknown.contains(&"file_target"));
    assert!(!unknown.contains(&"share_with"));
}

#[test]
fn test_ocs_failure_is_an_error() {
    let err = parse_shares_str(OCS_FAILURE).unwrap_err();
    assert!(err.message.contains("404"));
    assert!(err.message.contains("Wrong share ID"));
}
