use lateral::{stmt::Value, AssociationOptions, Schema};
use pretty_assertions::assert_eq;
use tests::{fixtures, tests, DbTest};

fn schema() -> Schema {
    fixtures::blog(
        |post| {
            post.has_one_of_many(
                "last_comment",
                "Comment",
                |comments| comments.order_by_desc("created_at"),
                AssociationOptions::default(),
            );
            post.has_one_of_many(
                "misnamed",
                "Comment",
                |comments| comments,
                AssociationOptions::default().foreign_key("author_id"),
            );
        },
        |_| {},
    )
}

async fn unknown_association_runs_nothing(test: &mut DbTest) {
    let db = test.setup_db(schema()).await;
    fixtures::seed_posts(&db, 1, 1, |_, n| format!("Comment {n}")).await;
    test.log().clear();

    let err = db
        .preload(
            &db.schema().model("Post").unwrap().all(),
            &["last_comment", "comments"],
        )
        .await
        .unwrap_err();

    assert!(err.is_unknown_association());
    assert_eq!(
        err.to_string(),
        "unknown association `comments` on model `Post`"
    );
    assert!(test.log().is_empty());
}

async fn find_missing_record(test: &mut DbTest) {
    let db = test.setup_db(schema()).await;

    let err = db.find("Post", 42).await.unwrap_err();
    assert!(err.is_record_not_found());
    assert_eq!(err.to_string(), "record not found: table=posts; key=42");
}

async fn find_existing_record(test: &mut DbTest) {
    let db = test.setup_db(schema()).await;
    let posts = fixtures::seed_posts(&db, 3, 0, |_, _| unreachable!()).await;

    let key = posts[1].get("id").cloned().unwrap();
    let post = db.find("Post", key).await.unwrap();
    assert_eq!(post, posts[1]);
}

async fn unknown_model(test: &mut DbTest) {
    let db = test.setup_db(schema()).await;

    let err = db
        .insert("Author", [("name", Value::from("Ann"))])
        .await
        .unwrap_err();

    assert!(err.is_invalid_schema());
    assert!(test.log().is_empty());
}

async fn missing_required_column(test: &mut DbTest) {
    let db = test.setup_db(schema()).await;

    // `title` is NOT NULL
    let result = db.insert("Post", Vec::<(&str, Value)>::new()).await;
    assert!(result.is_err());
}

async fn misnamed_foreign_key_fails_at_execution(test: &mut DbTest) {
    let db = test.setup_db(schema()).await;
    let posts = fixtures::seed_posts(&db, 1, 1, |_, n| format!("Comment {n}")).await;
    test.log().clear();

    // The schema builds; the database rejects the statement
    let result = db.association(&posts[0], "misnamed").await;
    assert!(result.is_err());
    assert_eq!(test.log().lateral_queries().len(), 1);
}

tests!(
    unknown_association_runs_nothing,
    find_missing_record,
    find_existing_record,
    unknown_model,
    missing_required_column,
    misnamed_foreign_key_fails_at_execution,
);
