use lateral::{stmt::Value, AssociationOptions, Schema};
use pretty_assertions::assert_eq;
use tests::{fixtures, tests, DbTest};

fn schema(limit: u64) -> Schema {
    fixtures::blog(
        |post| {
            post.has_some_of_many(
                "latest_comments",
                "Comment",
                move |comments| comments.order_by_desc("created_at").limit(limit),
                AssociationOptions::default(),
            );
        },
        |_| {},
    )
}

async fn preload_latest_two_comments(test: &mut DbTest) {
    let db = test.setup_db(schema(2)).await;
    fixtures::seed_posts(&db, 5, 10, |_, n| format!("Comment {n}")).await;
    test.log().clear();

    let posts = db
        .preload(&db.schema().model("Post").unwrap().all(), &["latest_comments"])
        .await
        .unwrap();

    assert_eq!(test.log().query_count(), 2);

    for post in &posts {
        assert_eq!(
            fixtures::strings(post.many("latest_comments"), "body"),
            ["Comment 10", "Comment 9"]
        );
    }
}

async fn limit_bounds_each_post_separately(test: &mut DbTest) {
    let db = test.setup_db(schema(3)).await;

    let mut posts = vec![];
    for count in [0, 1, 5] {
        let post = db
            .insert("Post", [("title", Value::from(format!("{count} comments")))])
            .await
            .unwrap();

        for n in 1..=count {
            db.insert(
                "Comment",
                [
                    ("body", Value::from(format!("Comment {n}"))),
                    ("post_id", post.get("id").cloned().unwrap()),
                ],
            )
            .await
            .unwrap();
        }

        posts.push(post);
    }

    db.preload_records("Post", &mut posts, &["latest_comments"])
        .await
        .unwrap();

    let counts: Vec<_> = posts
        .iter()
        .map(|post| post.many("latest_comments").len())
        .collect();
    assert_eq!(counts, [0, 1, 3]);

    assert_eq!(
        fixtures::strings(posts[2].many("latest_comments"), "body"),
        ["Comment 5", "Comment 4", "Comment 3"]
    );
}

async fn filtered_relation_only_loads_matching_owners(test: &mut DbTest) {
    let db = test.setup_db(schema(2)).await;
    fixtures::seed_posts(&db, 3, 3, |title, n| format!("{title}: {n}")).await;
    test.log().clear();

    let relation = db
        .schema()
        .model("Post")
        .unwrap()
        .all()
        .where_eq("title", "Post 2");

    let posts = db.preload(&relation, &["latest_comments"]).await.unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(
        fixtures::strings(posts[0].many("latest_comments"), "body"),
        ["Post 2: 3", "Post 2: 2"]
    );

    let (sql, params) = &test.log().lateral_queries()[0];
    assert!(sql.ends_with(r#"WHERE "comments"."post_id_alias" IN ($2)"#));
    assert_eq!(params[1], posts[0].get("id").cloned().unwrap());
}

tests!(
    preload_latest_two_comments,
    limit_bounds_each_post_separately,
    filtered_relation_only_loads_matching_owners,
);
