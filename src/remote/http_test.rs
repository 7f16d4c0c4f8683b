#![allow(clippy::float_cmp)]

use uuid::Uuid;

use super::*;
use crate::item::ItemKind;
use crate::remote::config::RemoteTimeouts;

fn record_json(id: Uuid, board_id: Uuid) -> String {
    format!(
        r#"{{
            "id": "{id}",
            "board_id": "{board_id}",
            "type": "image",
            "content": "file:///photo.jpg",
            "description": "sunrise",
            "position_x": 40.0,
            "position_y": 60.0,
            "width": 120.0,
            "height": 120.0,
            "created_at": 1000,
            "updated_at": 2000
        }}"#
    )
}

// =========================================================================
// decode_item
// =========================================================================

#[test]
fn decode_item_reads_a_success_record() {
    let id = Uuid::new_v4();
    let board_id = Uuid::new_v4();
    let item = decode_item(200, &record_json(id, board_id)).unwrap();
    assert_eq!(item.id, id);
    assert_eq!(item.board_id, board_id);
    assert_eq!(item.kind, ItemKind::Image);
    assert_eq!(item.description.as_deref(), Some("sunrise"));
    assert_eq!(item.x, 40.0);
    assert_eq!(item.y, 60.0);
}

#[test]
fn decode_item_accepts_created_status() {
    let json = record_json(Uuid::new_v4(), Uuid::new_v4());
    assert!(decode_item(201, &json).is_ok());
}

#[test]
fn decode_item_maps_error_envelope_to_backend() {
    let err = decode_item(404, "{\"error\": \"item not found\"}").unwrap_err();
    match err {
        RemoteError::Backend { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "item not found");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn decode_item_falls_back_to_the_raw_body() {
    let err = decode_item(502, "Bad Gateway").unwrap_err();
    match err {
        RemoteError::Backend { status, message } => {
            assert_eq!(status, 502);
            assert_eq!(message, "Bad Gateway");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn decode_item_rejects_malformed_success_body() {
    let err = decode_item(200, "{\"id\": 12}").unwrap_err();
    assert!(matches!(err, RemoteError::Parse(_)));
}

// =========================================================================
// decode_items / decode_empty
// =========================================================================

#[test]
fn decode_items_preserves_backend_order() {
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();
    let board_id = Uuid::new_v4();
    let body = format!("[{},{}]", record_json(a, board_id), record_json(b, board_id));
    let items = decode_items(200, &body).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, a);
    assert_eq!(items[1].id, b);
}

#[test]
fn decode_items_reads_an_empty_board() {
    let items = decode_items(200, "[]").unwrap();
    assert!(items.is_empty());
}

#[test]
fn decode_items_maps_errors() {
    let err = decode_items(500, "{\"error\": \"boom\"}").unwrap_err();
    assert!(matches!(err, RemoteError::Backend { status: 500, .. }));
}

#[test]
fn decode_empty_accepts_no_content() {
    assert!(decode_empty(204, "").is_ok());
}

#[test]
fn decode_empty_maps_errors() {
    let err = decode_empty(403, "{\"error\": \"not yours\"}").unwrap_err();
    match err {
        RemoteError::Backend { status, message } => {
            assert_eq!(status, 403);
            assert_eq!(message, "not yours");
        }
        other => panic!("unexpected error: {other}"),
    }
}

// =========================================================================
// error_message
// =========================================================================

#[test]
fn error_message_prefers_the_envelope() {
    assert_eq!(error_message("{\"error\": \"quota exceeded\"}"), "quota exceeded");
}

#[test]
fn error_message_keeps_other_shapes_raw() {
    assert_eq!(error_message("{\"message\": \"nope\"}"), "{\"message\": \"nope\"}");
    assert_eq!(error_message("plain text"), "plain text");
    assert_eq!(error_message(""), "");
}

// =========================================================================
// Construction
// =========================================================================

#[test]
fn client_builds_from_typed_config() {
    let config = RemoteConfig {
        base_url: "https://boards.example.test".to_string(),
        api_key: "secret".to_string(),
        timeouts: RemoteTimeouts { request_secs: 5, connect_secs: 2 },
    };
    assert!(HttpRemote::new(config).is_ok());
}
