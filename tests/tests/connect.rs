#![cfg(feature = "memory")]

use lateral::{stmt::Value, Db};
use tests::fixtures;

#[tokio::test]
async fn connect_to_memory() {
    let db = Db::builder()
        .schema(fixtures::blog(|_| {}, |_| {}))
        .connect("memory:")
        .await
        .unwrap();

    db.reset_db().await.unwrap();

    let post = db
        .insert("Post", [("title", Value::from("Hello"))])
        .await
        .unwrap();
    assert_eq!(post.try_get::<String>("title").unwrap(), "Hello");
    assert!(db.driver().capability().lateral_join);
}

#[tokio::test]
async fn unsupported_scheme() {
    let err = Db::builder()
        .schema(fixtures::blog(|_| {}, |_| {}))
        .connect("mysql://localhost/blog")
        .await
        .unwrap_err();

    assert!(err.is_invalid_connection_url());
}

#[tokio::test]
async fn malformed_url() {
    let err = Db::builder()
        .schema(fixtures::blog(|_| {}, |_| {}))
        .connect("not a url")
        .await
        .unwrap_err();

    assert!(err.is_invalid_connection_url());
}

#[tokio::test]
async fn schema_is_required() {
    let err = Db::builder().connect("memory:").await.unwrap_err();
    assert_eq!(err.to_string(), "no schema set on the database builder");
}
