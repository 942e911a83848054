//! Integration tests for the share record contract.

use serde_json::{Map, Value, json};

use shareinfo_entity::{ShareInfo, ShareType};

fn record(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}

#[test]
fn test_excluded_key_is_not_stored() {
    let info = ShareInfo::new(record(json!({"id": 1, "parent": 5})));
    assert!(info.contains_key("id"));
    assert!(!info.contains_key("parent"));
    assert!(!info.fields().contains_key("parent"));
}

#[test]
fn test_every_excluded_key_is_dropped() {
    let mut raw = Map::new();
    for key in ShareInfo::EXCLUDED_KEYS {
        raw.insert(key.to_string(), json!("x"));
    }
    raw.insert("token".to_string(), json!("abc"));

    let info = ShareInfo::from(raw);
    assert_eq!(info.len(), 1);
    assert_eq!(info.token(), Some("abc"));
}

#[test]
fn test_id_from_string() {
    let info = ShareInfo::new(record(json!({"id": "42"})));
    assert_eq!(info.id(), Some(42));
}

#[test]
fn test_share_type_of_empty_record() {
    let info = ShareInfo::new(Map::new());
    assert_eq!(info.share_type(), None);
    assert!(info.is_empty());
}

#[test]
fn test_expiration() {
    let zero = ShareInfo::new(record(json!({"expiration": "0"})));
    assert_eq!(zero.expiration(), None);

    let set = ShareInfo::new(record(json!({"expiration": "1700000000"})));
    assert_eq!(set.expiration(), Some(1_700_000_000));
}

#[test]
fn test_share_with() {
    let info = ShareInfo::new(record(json!({"share_with": "alice"})));
    assert_eq!(info.share_with(), Some("alice"));
    assert_eq!(ShareInfo::new(Map::new()).share_with(), None);
}

#[test]
fn test_link_reads_url_key() {
    let info = ShareInfo::new(record(json!({"url": "https://example/s/abc"})));
    assert_eq!(info.link(), Some("https://example/s/abc"));

    let wrong_key = ShareInfo::new(record(json!({"link": "https://example/s/abc"})));
    assert_eq!(wrong_key.link(), None);
}

#[test]
fn test_share_time() {
    let info = ShareInfo::new(record(json!({"stime": 1493904451})));
    assert_eq!(info.share_time(), Some(1_493_904_451));
}

#[test]
fn test_round_trip_of_non_excluded_keys() {
    let info = ShareInfo::new(record(json!({
        "id": 10,
        "share_type": 1,
        "share_with": "staff",
        "share_with_displayname": "Staff",
        "path": "/Shared",
        "permissions": 31,
        "stime": 1600000000,
        "expiration": 1700000000,
        "token": "tok",
        "url": "https://example/s/tok",
        "uid_file_owner": "root",
        "displayname_file_owner": "Root",
        "name": "Shared folder",
    })));

    assert_eq!(info.id(), Some(10));
    assert_eq!(info.share_type(), Some(1));
    assert_eq!(info.share_kind(), Some(ShareType::Group));
    assert_eq!(info.share_with(), Some("staff"));
    assert_eq!(info.share_with_display_name(), Some("Staff"));
    assert_eq!(info.path(), Some("/Shared"));
    assert_eq!(info.permissions(), Some(31));
    assert_eq!(info.share_time(), Some(1_600_000_000));
    assert_eq!(info.expiration(), Some(1_700_000_000));
    assert_eq!(info.token(), Some("tok"));
    assert_eq!(info.link(), Some("https://example/s/tok"));
    assert_eq!(info.uid_owner(), Some("root"));
    assert_eq!(info.displayname_owner(), Some("Root"));
    assert_eq!(info.name(), Some("Shared folder"));
    assert_eq!(info.unknown_fields().count(), 0);
}

#[test]
fn test_getters_do_not_change_the_record() {
    let info = ShareInfo::new(record(json!({"id": "3", "expiration": "0", "name": "n"})));
    let before = info.clone();

    for _ in 0..2 {
        assert_eq!(info.id(), Some(3));
        assert_eq!(info.expiration(), None);
        assert_eq!(info.name(), Some("n"));
        let _ = info.summary();
    }
    assert_eq!(info, before);
}

#[test]
fn test_share_info_is_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShareInfo>();

    let info = std::sync::Arc::new(ShareInfo::new(record(json!({"id": "8"}))));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let info = std::sync::Arc::clone(&info);
            std::thread::spawn(move || info.id())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().expect("thread"), Some(8));
    }
}
