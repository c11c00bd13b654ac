mod support;

use chirp::prelude::*;
use futures::StreamExt;
use serde_json::json;
use support::{MockTransport, client, user_json};

const FRIENDS: &str = "/1.1/friends/list.json";
const VERIFY: &str = "/1.1/account/verify_credentials.json";

fn page(users: serde_json::Value, next: i64, previous: i64) -> serde_json::Value {
    json!({
        "users": users,
        "next_cursor": next,
        "next_cursor_str": next.to_string(),
        "previous_cursor": previous,
        "previous_cursor_str": previous.to_string(),
    })
}

fn three_pages(transport: &MockTransport) {
    transport.respond_when(
        Method::GET,
        FRIENDS,
        Options::new().with("cursor", -1),
        page(json!([user_json(1, "a"), user_json(2, "b")]), 111, 0),
    );
    transport.respond_when(
        Method::GET,
        FRIENDS,
        Options::new().with("cursor", 111),
        page(json!([user_json(3, "c")]), 222, -111),
    );
    transport.respond_when(
        Method::GET,
        FRIENDS,
        Options::new().with("cursor", 222),
        page(json!([user_json(4, "d")]), 0, -222),
    );
}

#[tokio::test]
async fn first_page_cursor_is_inserted_when_absent() {
    let transport = MockTransport::new();
    three_pages(&transport);
    let client = client(transport.clone());

    let cursor: Cursor<User> = client
        .cursor_from_response(
            "users",
            Method::GET,
            FRIENDS,
            Options::new().with("count", 2),
            "friends",
        )
        .await
        .unwrap();

    let sent = &transport.calls()[0].params;
    assert_eq!(sent.get("cursor"), Some(&ParamValue::Int(-1)));
    assert_eq!(sent.get("count"), Some(&ParamValue::Int(2)));
    assert_eq!(cursor.items().len(), 2);
    assert_eq!(cursor.next_cursor(), 111);
    assert_eq!(cursor.previous_cursor(), 0);
    assert_eq!(cursor.resume_method(), "friends");
    assert_eq!(cursor.field(), "users");
}

#[tokio::test]
async fn explicit_zero_cursor_is_preserved() {
    let transport = MockTransport::new();
    transport.respond(Method::GET, FRIENDS, page(json!([]), 0, 0));
    let client = client(transport.clone());

    let cursor: Cursor<User> = client
        .cursor_from_response(
            "users",
            Method::GET,
            FRIENDS,
            Options::new().with("cursor", 0),
            "friends",
        )
        .await
        .unwrap();

    assert_eq!(transport.calls()[0].params.get("cursor"), Some(&ParamValue::Int(0)));
    assert!(cursor.is_last());
    assert!(cursor.next_page().await.unwrap().is_none());
    assert_eq!(transport.calls().len(), 1);
}

#[tokio::test]
async fn next_page_changes_only_the_cursor() {
    let transport = MockTransport::new();
    three_pages(&transport);
    let client = client(transport.clone());

    let first: Cursor<User> = client
        .cursor_from_response(
            "users",
            Method::GET,
            FRIENDS,
            Options::new().with("skip_status", true),
            "friends",
        )
        .await
        .unwrap();
    let second = first.next_page().await.unwrap().unwrap();
    assert_eq!(second.items()[0].screen_name, "c");
    assert_eq!(second.previous_cursor(), -111);

    let calls = transport.calls();
    assert_eq!(calls.len(), 2);
    let mut expected = calls[0].params.clone();
    expected.insert("cursor", 111);
    assert_eq!(calls[1].params, expected);
    assert_eq!(second.options(), &expected);
}

#[tokio::test]
async fn stream_walks_every_page() {
    let transport = MockTransport::new();
    three_pages(&transport);
    let client = client(transport.clone());

    let cursor: Cursor<User> = client
        .cursor_from_response("users", Method::GET, FRIENDS, Options::new(), "friends")
        .await
        .unwrap();
    let names: Vec<String> = cursor
        .into_stream()
        .map(|user| user.map(|u| u.screen_name))
        .collect::<Vec<_>>()
        .await
        .into_iter()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(names, vec!["a", "b", "c", "d"]);
    assert_eq!(transport.calls().len(), 3);
}

#[tokio::test]
async fn stream_surfaces_a_failing_page() {
    let transport = MockTransport::new();
    transport.respond_when(
        Method::GET,
        FRIENDS,
        Options::new().with("cursor", -1),
        page(json!([user_json(1, "a")]), 5, 0),
    );
    let client = client(transport);

    let cursor: Cursor<User> = client
        .cursor_from_response("users", Method::GET, FRIENDS, Options::new(), "friends")
        .await
        .unwrap();
    let results: Vec<_> = cursor.into_stream().collect().await;

    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    assert!(matches!(results[1], Err(RestError::NotFound(_))));
}

#[tokio::test]
async fn missing_collection_field_is_a_parse_error() {
    let transport = MockTransport::new();
    transport.respond(Method::GET, FRIENDS, json!({"ids": [1, 2], "next_cursor": 0}));
    let client = client(transport);

    let err = client
        .cursor_from_response::<User>("users", Method::GET, FRIENDS, Options::new(), "friends")
        .await
        .unwrap_err();
    assert!(matches!(err, RestError::ParseError(_)));
}

#[tokio::test]
async fn string_cursors_are_read_when_numbers_are_missing() {
    let transport = MockTransport::new();
    transport.respond(
        Method::GET,
        FRIENDS,
        json!({"users": [], "next_cursor_str": "1489467234237774933"}),
    );
    let client = client(transport);

    let cursor: Cursor<User> = client
        .cursor_from_response("users", Method::GET, FRIENDS, Options::new(), "friends")
        .await
        .unwrap();
    assert_eq!(cursor.next_cursor(), 1489467234237774933);
    assert_eq!(cursor.previous_cursor(), 0);
}

#[tokio::test]
async fn cursor_with_user_defaults_to_current_user() {
    let transport = MockTransport::new();
    transport.respond(Method::GET, VERIFY, user_json(9, "me"));
    transport.respond(Method::GET, FRIENDS, page(json!([]), 0, 0));
    let client = client(transport.clone());

    let _: Cursor<User> = client
        .cursor_from_response_with_user("users", Method::GET, FRIENDS, UserArgs::new(), "friends")
        .await
        .unwrap();
    let _: Cursor<User> = client
        .cursor_from_response_with_user(
            "users",
            Method::GET,
            FRIENDS,
            UserArgs::new().user(7u64),
            "friends",
        )
        .await
        .unwrap();

    let listed = transport.calls_to(FRIENDS);
    assert_eq!(
        listed[0].params.get("screen_name"),
        Some(&ParamValue::Text("me".into()))
    );
    assert_eq!(listed[1].params.get("user_id"), Some(&ParamValue::Int(7)));
    assert!(!listed[1].params.contains_key("screen_name"));
    assert_eq!(transport.calls_to(VERIFY).len(), 1);
}
