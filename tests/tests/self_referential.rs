use lateral::{AssociationOptions, Schema};
use pretty_assertions::assert_eq;
use tests::{fixtures, tests, DbTest};

fn schema() -> Schema {
    fixtures::tree(|leaf| {
        leaf.has_some_of_many(
            "latest_children",
            "Leaf",
            |leafs| leafs.order_by_desc("created_at").limit(2),
            AssociationOptions::default().foreign_key("parent_id"),
        );
        leaf.has_one_of_many(
            "latest_published_child",
            "Leaf",
            |leafs| leafs.where_eq("published", true).order_by_desc("created_at"),
            AssociationOptions::default().foreign_key("parent_id"),
        );
    })
}

async fn preload_children_of_roots(test: &mut DbTest) {
    let db = test.setup_db(schema()).await;
    fixtures::seed_leafs(&db, 5, 10).await;
    test.log().clear();

    let roots = db
        .schema()
        .model("Leaf")
        .unwrap()
        .all()
        .where_null("parent_id");

    let roots = db.preload(&roots, &["latest_children"]).await.unwrap();
    assert_eq!(roots.len(), 5);

    for root in &roots {
        let children = root.many("latest_children");
        assert_eq!(fixtures::strings(children, "name"), ["Child 10", "Child 9"]);

        for child in children {
            assert_eq!(child.get("parent_id"), root.get("id"));
        }
    }

    let lateral = test.log().lateral_queries();
    assert_eq!(lateral.len(), 1);
    assert!(lateral[0].0.contains(r#"FROM "leafs" "leafs__alias""#));
    assert!(lateral[0].0.contains(r#""leafs__alias"."parent_id" = "leafs"."id""#));
}

async fn aliased_scope_keeps_its_filter(test: &mut DbTest) {
    let db = test.setup_db(schema()).await;
    let roots = fixtures::seed_leafs(&db, 2, 5).await;
    test.log().clear();

    let mut roots = roots;
    db.preload_records("Leaf", &mut roots, &["latest_published_child"])
        .await
        .unwrap();

    // Children with even numbers are published
    for root in &roots {
        let child = root.one("latest_published_child").unwrap();
        assert_eq!(child.try_get::<String>("name").unwrap(), "Child 4");
        assert!(child.try_get::<bool>("published").unwrap());
    }

    let (sql, _) = &test.log().lateral_queries()[0];
    assert!(sql.contains(r#""leafs__alias"."published" = TRUE"#));
}

async fn leaves_have_no_children(test: &mut DbTest) {
    let db = test.setup_db(schema()).await;
    fixtures::seed_leafs(&db, 1, 2).await;

    let children = db
        .schema()
        .model("Leaf")
        .unwrap()
        .all()
        .where_not_null("parent_id");

    let children = db.preload(&children, &["latest_children"]).await.unwrap();
    assert_eq!(children.len(), 2);

    for child in &children {
        assert!(child.many("latest_children").is_empty());
    }
}

tests!(
    preload_children_of_roots,
    aliased_scope_keeps_its_filter,
    leaves_have_no_children,
);
