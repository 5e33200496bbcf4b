use couchmock::error::ErrorKind;
use couchmock::fixture::{FixtureDoc, FixtureSet};
use http::StatusCode;
use serde_json::json;

mod common;

#[tokio::test]
async fn test_database_admin_calls_are_canned() {
    let server = common::test_server();

    let created = server.create_database("dstest").await.unwrap();
    assert_eq!(created.headers().status(), StatusCode::CREATED);

    let destroyed = server.destroy_database("dstest").await.unwrap();
    assert_eq!(destroyed.headers().status(), StatusCode::OK);

    assert_eq!(server.get_database("dstest").await.unwrap(), json!({}));
    assert_eq!(
        server.list_databases().await.unwrap(),
        vec!["dstest".to_string(), "datastore".to_string()]
    );
    assert_eq!(
        server.compact_database("dstest", Some("blobs")).await.unwrap(),
        json!({})
    );
    assert_eq!(
        server.replicate("dstest", "backup", None).await.unwrap(),
        json!({})
    );
    assert_eq!(server.changes("dstest", None).await.unwrap(), json!({}));
    assert_eq!(server.follow("dstest", None).await.unwrap(), json!({}));
}

#[tokio::test]
async fn test_uuids_always_returns_third_fixture_entry() {
    let server = common::test_server();
    server.set_fixture(FixtureSet::new(
        vec![],
        vec![
            "u0".to_string(),
            "u1".to_string(),
            "u2".to_string(),
            "u3".to_string(),
        ],
    ));

    let res = server.uuids().await.unwrap();
    assert_eq!(res.uuids(), ["u2".to_string()]);

    // Stable across calls.
    let res = server.uuids().await.unwrap();
    assert_eq!(res.uuids(), ["u2".to_string()]);
}

#[tokio::test]
async fn test_uuids_needs_at_least_three_entries() {
    let server = common::test_server();
    server.set_fixture(FixtureSet::new(vec![], vec!["only".to_string()]));

    let err = server.uuids().await.unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::InvalidArgument(_)));
}

#[tokio::test]
async fn test_authenticate_rejects_the_magic_username() {
    let server = common::test_server();

    let err = server.authenticate("xxx", "bar").await.unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::AuthenticationFailure);
    assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        serde_json::to_value(err.wire_body()).unwrap(),
        json!({"status_code": 401, "message": "name or password is incorrect"})
    );

    server.authenticate("foo", "bar").await.unwrap();
}

#[tokio::test]
async fn test_database_handles_share_one_fixture() {
    let server = common::test_server();
    server.set_fixture(FixtureSet::new(vec![], vec![]));

    let writer = server.database("test");
    let reader = server.scope("test");
    assert_eq!(writer.name(), "test");
    assert_eq!(reader.name(), "test");

    let key = common::new_key();
    writer.insert(&key, json!({"shared": true}), None).await.unwrap();

    let fetched = reader.get(&key, None).await.unwrap();
    assert_eq!(fetched.content(), &json!({"shared": true}));
}

#[tokio::test]
async fn test_missing_fixture_is_an_error_not_a_panic() {
    let server = common::test_server();
    let db = server.database("test");

    let err = db.get("doc-1", None).await.unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::InvalidArgument(_)));

    let err = server.uuids().await.unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::InvalidArgument(_)));
}

#[tokio::test]
async fn test_document_scoped_passthroughs_are_canned() {
    let server = common::test_server();
    server.set_fixture(FixtureSet::new(
        vec![FixtureDoc::new("doc-1", json!({})).inserted(true)],
        vec![],
    ));
    let db = server.database("test");

    assert_eq!(db.info().await.unwrap(), json!({}));
    assert_eq!(db.replicate("backup", None).await.unwrap(), json!({}));
    assert_eq!(db.compact().await.unwrap(), json!({}));
    assert_eq!(db.changes(None).await.unwrap(), json!({}));
    assert_eq!(db.follow(None).await.unwrap(), json!({}));
    assert_eq!(db.copy("doc-1", "doc-2", None).await.unwrap(), json!({}));
    assert_eq!(db.bulk(json!({"docs": []}), None).await.unwrap(), json!({}));
    assert_eq!(db.all_docs(None).await.unwrap(), json!({}));
    assert_eq!(
        db.fetch(&["doc-1".to_string()], None).await.unwrap(),
        json!({})
    );
    assert_eq!(
        db.show("blobs", "pretty", "doc-1", None).await.unwrap(),
        json!({})
    );
    assert_eq!(
        db.update_with_handler("blobs", "touch").await.unwrap(),
        json!({})
    );
    assert_eq!(db.compact_view("blobs").await.unwrap(), json!({}));
}

#[tokio::test]
async fn test_config_carries_the_connection_url() {
    let server = common::test_server();
    assert_eq!(server.config().url.as_deref(), Some("http://foo:5984"));
}
