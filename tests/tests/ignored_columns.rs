use lateral::{AssociationOptions, Schema};
use pretty_assertions::assert_eq;
use tests::{fixtures, tests, DbTest};

fn schema() -> Schema {
    fixtures::blog(
        |post| {
            post.has_one_of_many(
                "last_comment",
                "Comment",
                |comments| comments.order_by_desc("id"),
                AssociationOptions::default(),
            );
        },
        |comment| {
            comment.ignored_columns(["created_at", "updated_at"]);
        },
    )
}

async fn ignored_columns_are_not_selected(test: &mut DbTest) {
    let db = test.setup_db(schema()).await;
    fixtures::seed_posts(&db, 2, 3, |_, n| format!("Comment {n}")).await;
    test.log().clear();

    let posts = db
        .preload(&db.schema().model("Post").unwrap().all(), &["last_comment"])
        .await
        .unwrap();

    for post in &posts {
        let comment = post.one("last_comment").unwrap();

        assert_eq!(comment.try_get::<String>("body").unwrap(), "Comment 3");
        assert_eq!(
            comment.columns().collect::<Vec<_>>(),
            ["post_id_alias", "id", "body", "post_id"]
        );
    }

    // Posts do not ignore their timestamps
    assert!(posts[0].get("created_at").is_some());

    let (sql, _) = &test.log().lateral_queries()[0];
    assert!(!sql.contains("created_at"));
    assert!(!sql.contains("updated_at"));
}

async fn inserted_records_hide_ignored_columns(test: &mut DbTest) {
    let db = test.setup_db(schema()).await;
    let posts = fixtures::seed_posts(&db, 1, 0, |_, _| unreachable!()).await;

    let comment = db
        .insert(
            "Comment",
            [
                ("body", "hello".into()),
                ("post_id", posts[0].get("id").cloned().unwrap()),
            ],
        )
        .await
        .unwrap();

    assert_eq!(comment.get("created_at"), None);
    assert_eq!(comment.try_get::<String>("body").unwrap(), "hello");
}

tests!(
    ignored_columns_are_not_selected,
    inserted_records_hide_ignored_columns,
);
