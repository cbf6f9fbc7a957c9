use lateral::{stmt::Value, AssociationOptions, Loaded, Schema};
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
        },
        |_| {},
    )
}

async fn preload_latest_comment(test: &mut DbTest) {
    let db = test.setup_db(schema()).await;
    fixtures::seed_posts(&db, 5, 10, |_, n| format!("Comment {n}")).await;
    test.log().clear();

    let posts = db
        .preload(&db.schema().model("Post").unwrap().all(), &["last_comment"])
        .await
        .unwrap();

    // One statement for the posts, one for every post's latest comment
    assert_eq!(test.log().query_count(), 2);
    assert_eq!(test.log().lateral_queries().len(), 1);

    assert_eq!(posts.len(), 5);

    for post in &posts {
        let comment = post.one("last_comment").unwrap();
        assert_eq!(comment.try_get::<String>("body").unwrap(), "Comment 10");
        assert_eq!(comment.get("post_id"), post.get("id"));
        assert_eq!(comment.model(), "Comment");
    }
}

async fn load_latest_comment_lazily(test: &mut DbTest) {
    let db = test.setup_db(schema()).await;
    let posts = fixtures::seed_posts(&db, 2, 3, |title, n| format!("{title} #{n}")).await;
    test.log().clear();

    let Loaded::One(Some(comment)) = db.association(&posts[1], "last_comment").await.unwrap()
    else {
        panic!("expected a comment");
    };

    assert_eq!(comment.try_get::<String>("body").unwrap(), "Post 2 #3");
    assert_eq!(test.log().query_count(), 1);

    let (sql, params) = &test.log().lateral_queries()[0];
    assert!(sql.ends_with(r#"WHERE "comments"."post_id_alias" = $2 LIMIT $3"#));
    assert_eq!(params[1], posts[1].get("id").cloned().unwrap());
}

async fn post_without_comments(test: &mut DbTest) {
    let db = test.setup_db(schema()).await;
    fixtures::seed_posts(&db, 2, 2, |_, n| format!("Comment {n}")).await;
    let lonely = db
        .insert("Post", [("title", Value::from("Lonely"))])
        .await
        .unwrap();

    let posts = db
        .preload(&db.schema().model("Post").unwrap().all(), &["last_comment"])
        .await
        .unwrap();

    let loaded: Vec<_> = posts
        .iter()
        .map(|post| post.one("last_comment").is_some())
        .collect();
    assert_eq!(loaded, [true, true, false]);

    assert_eq!(
        db.association(&lonely, "last_comment").await.unwrap(),
        Loaded::One(None)
    );
}

async fn preload_on_empty_relation(test: &mut DbTest) {
    let db = test.setup_db(schema()).await;

    let posts = db
        .preload(&db.schema().model("Post").unwrap().all(), &["last_comment"])
        .await
        .unwrap();

    assert!(posts.is_empty());
    // No owners, so no lateral statement at all
    assert_eq!(test.log().query_count(), 1);
    assert!(test.log().lateral_queries().is_empty());
}

async fn preload_already_loaded_records(test: &mut DbTest) {
    let db = test.setup_db(schema()).await;
    let mut posts = fixtures::seed_posts(&db, 3, 4, |title, n| format!("{title}/{n}")).await;
    test.log().clear();

    db.preload_records("Post", &mut posts, &["last_comment"])
        .await
        .unwrap();

    assert_eq!(test.log().len(), 1);

    let bodies: Vec<_> = posts
        .iter()
        .map(|post| {
            post.one("last_comment")
                .unwrap()
                .try_get::<String>("body")
                .unwrap()
        })
        .collect();
    assert_eq!(bodies, ["Post 1/4", "Post 2/4", "Post 3/4"]);
}

tests!(
    preload_latest_comment,
    load_latest_comment_lazily,
    post_without_comments,
    preload_on_empty_relation,
    preload_already_loaded_records,
);
