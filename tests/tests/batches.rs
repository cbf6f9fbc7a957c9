use lateral::{AssociationOptions, Schema};
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

async fn each_batch_is_preloaded(test: &mut DbTest) {
    let db = test.setup_db(schema()).await;
    fixtures::seed_posts(&db, 10, 3, |title, n| format!("{title} Comment {n}")).await;
    test.log().clear();

    let mut batches = vec![];

    db.find_in_batches(
        &db.schema().model("Post").unwrap().all(),
        5,
        &["last_comment"],
        |posts| {
            let latest = posts
                .iter()
                .map(|post| {
                    let title = post.try_get::<String>("title")?;
                    let body = post
                        .one("last_comment")
                        .map(|comment| comment.try_get::<String>("body"))
                        .transpose()?;
                    Ok((title, body))
                })
                .collect::<lateral::Result<Vec<_>>>()?;

            batches.push(latest);
            Ok(())
        },
    )
    .await
    .unwrap();

    assert_eq!(batches.len(), 2);

    for (batch, offset) in batches.iter().zip([0, 5]) {
        assert_eq!(batch.len(), 5);

        for (i, (title, body)) in batch.iter().enumerate() {
            let expected = format!("Post {}", offset + i + 1);
            assert_eq!(title, &expected);
            assert_eq!(body.as_deref(), Some(&*format!("{expected} Comment 3")));
        }
    }

    // Both batches render the same lateral statement, bound to different
    // posts. The third page comes back empty, so nothing is preloaded.
    let lateral = test.log().lateral_queries();
    assert_eq!(lateral.len(), 2);
    assert_eq!(lateral[0].0, lateral[1].0);
    assert_ne!(lateral[0].1, lateral[1].1);
    assert_eq!(test.log().query_count(), 5);
}

async fn short_last_batch_ends_iteration(test: &mut DbTest) {
    let db = test.setup_db(schema()).await;
    fixtures::seed_posts(&db, 7, 1, |_, n| format!("Comment {n}")).await;
    test.log().clear();

    let mut sizes = vec![];

    db.find_in_batches(
        &db.schema().model("Post").unwrap().all(),
        5,
        &["last_comment"],
        |posts| {
            sizes.push(posts.len());
            Ok(())
        },
    )
    .await
    .unwrap();

    assert_eq!(sizes, [5, 2]);
    assert_eq!(test.log().query_count(), 4);
}

async fn callback_error_stops_iteration(test: &mut DbTest) {
    let db = test.setup_db(schema()).await;
    fixtures::seed_posts(&db, 4, 0, |_, _| unreachable!()).await;

    let mut calls = 0;

    let err = db
        .find_in_batches(&db.schema().model("Post").unwrap().all(), 2, &[], |_| {
            calls += 1;
            lateral_core::bail!("stop after first batch");
        })
        .await
        .unwrap_err();

    assert_eq!(calls, 1);
    assert_eq!(err.to_string(), "stop after first batch");
}

async fn zero_batch_size_is_rejected(test: &mut DbTest) {
    let db = test.setup_db(schema()).await;

    let err = db
        .find_in_batches(&db.schema().model("Post").unwrap().all(), 0, &[], |_| Ok(()))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "batch size must be greater than zero");
    assert!(test.log().is_empty());
}

tests!(
    each_batch_is_preloaded,
    short_last_batch_ends_iteration,
    callback_error_stops_iteration,
    zero_batch_size_is_rejected,
);
