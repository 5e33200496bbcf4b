use bytes::Bytes;
use couchmock::error::ErrorKind;
use couchmock::fixture::{FixtureDoc, FixtureSet};
use serde_json::json;

mod common;

#[tokio::test]
async fn test_attachment_insert_requires_id_name_and_content_type() {
    let server = common::test_server();
    server.set_fixture(FixtureSet::new(vec![], vec![]));
    let store = server.database("test").attachments();

    let err = store.insert("doc-1", "blob", "").await.unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::DocumentNotFound);

    let err = store.insert("", "blob", "text/plain").await.unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::DocumentNotFound);
}

#[tokio::test]
async fn test_attachment_roundtrip_persists_on_close() {
    let server = common::test_server();
    server.set_fixture(FixtureSet::new(
        vec![FixtureDoc::new("doc-1", json!({})).inserted(true)],
        vec![],
    ));
    let store = server.database("test").attachments();

    let (res, mut writer) = store.insert("doc-1", "blob", "text/plain").await.unwrap();
    assert_eq!(res.id(), Some("doc-1"));
    assert_eq!(res.rev(), "1");

    writer.write(b"hello ");
    writer.write(b"world");
    writer.close();

    let body = store.get("doc-1", "blob").await.unwrap().collect_bytes().await;
    assert_eq!(body, Bytes::from_static(b"hello world"));
}

#[tokio::test]
async fn test_attachment_writer_persists_on_drop() {
    let server = common::test_server();
    server.set_fixture(FixtureSet::new(
        vec![FixtureDoc::new("doc-1", json!({})).inserted(true)],
        vec![],
    ));
    let store = server.database("test").attachments();

    let (_res, mut writer) = store.insert("doc-1", "blob", "text/plain").await.unwrap();
    writer.write(b"dropped");
    drop(writer);

    let body = store.get("doc-1", "blob").await.unwrap().collect_bytes().await;
    assert_eq!(body, Bytes::from_static(b"dropped"));
}

#[tokio::test]
async fn test_attachment_bytes_for_unknown_id_are_discarded() {
    let server = common::test_server();
    server.set_fixture(FixtureSet::new(
        vec![FixtureDoc::new("doc-1", json!({})).inserted(true)],
        vec![],
    ));
    let store = server.database("test").attachments();

    let (_res, mut writer) = store.insert("ghost", "blob", "text/plain").await.unwrap();
    writer.write(b"nowhere");
    writer.close();

    let err = store.get("ghost", "blob").await.unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::DocumentNotFound);
}

#[tokio::test]
async fn test_attachment_get_streams_fixture_raw_data() {
    let server = common::test_server();
    server.set_fixture(FixtureSet::new(
        vec![FixtureDoc::new("doc-1", json!({})).raw_data(Bytes::from_static(b"raw bytes"))],
        vec![],
    ));
    let store = server.database("test").attachments();

    let body = store.get("doc-1", "blob").await.unwrap().collect_bytes().await;
    assert_eq!(body, Bytes::from_static(b"raw bytes"));
}

#[tokio::test]
async fn test_attachment_get_reads_file_source_at_request_time() {
    let server = common::test_server();

    let path = std::env::temp_dir().join(format!("couchmock-att-{}.bin", common::new_key()));
    std::fs::write(&path, b"file bytes").unwrap();

    server.set_fixture(FixtureSet::new(
        vec![FixtureDoc::new("doc-1", json!({})).file(&path)],
        vec![],
    ));
    let store = server.database("test").attachments();

    let body = store.get("doc-1", "blob").await.unwrap().collect_bytes().await;
    assert_eq!(body, Bytes::from_static(b"file bytes"));

    std::fs::remove_file(&path).ok();
}

#[tokio::test]
async fn test_attachment_get_without_source_fails_not_found() {
    let server = common::test_server();
    server.set_fixture(FixtureSet::new(
        vec![FixtureDoc::new("doc-1", json!({}))],
        vec![],
    ));
    let store = server.database("test").attachments();

    let err = store.get("doc-1", "blob").await.unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::DocumentNotFound);

    let err = store.get("absent", "blob").await.unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::DocumentNotFound);
}

#[tokio::test]
async fn test_attachment_destroy_is_canned() {
    let server = common::test_server();
    server.set_fixture(FixtureSet::new(vec![], vec![]));
    let store = server.database("test").attachments();

    let res = store.destroy("doc-1", "blob", Some("1")).await.unwrap();
    assert_eq!(res, json!({}));
}
