//! Tables shared by the scenarios: posts with comments, and a tree of
//! leafs pointing at their parent.

use lateral::{
    schema::{ModelBuilder, TableBuilder, Type},
    stmt::Value,
    Db, Record, Schema,
};

pub fn posts(t: &mut TableBuilder) {
    t.primary_key("id");
    t.timestamps();
    t.column("title", Type::Text);
}

pub fn comments(t: &mut TableBuilder) {
    t.primary_key("id");
    t.timestamps();
    t.column("body", Type::Text);
    t.column("post_id", Type::Integer(8));
}

pub fn leafs(t: &mut TableBuilder) {
    t.primary_key("id");
    t.timestamps();
    t.column("name", Type::Text);
    t.nullable_column("parent_id", Type::Integer(8));
    t.column("published", Type::Boolean);
}

/// `Post` over `posts` and `Comment` over `comments`, with the models
/// configured by the given closures.
pub fn blog(
    post: impl FnOnce(&mut ModelBuilder),
    comment: impl FnOnce(&mut ModelBuilder),
) -> Schema {
    Schema::builder()
        .table("posts", posts)
        .table("comments", comments)
        .model("Post", "posts", post)
        .model("Comment", "comments", comment)
        .build()
        .unwrap()
}

/// `Leaf` over `leafs`, configured by `leaf`.
pub fn tree(leaf: impl FnOnce(&mut ModelBuilder)) -> Schema {
    Schema::builder()
        .table("leafs", leafs)
        .model("Leaf", "leafs", leaf)
        .build()
        .unwrap()
}

/// Inserts posts titled `Post 1..=posts`, each followed by `comments`
/// comments whose bodies `body` derives from the post's title and the
/// comment's number. Returns the posts.
pub async fn seed_posts(
    db: &Db,
    posts: usize,
    comments: usize,
    body: impl Fn(&str, usize) -> String,
) -> Vec<Record> {
    let mut created = vec![];

    for n in 1..=posts {
        let title = format!("Post {n}");
        let post = db
            .insert("Post", [("title", Value::from(&title))])
            .await
            .unwrap();

        for n in 1..=comments {
            db.insert(
                "Comment",
                [
                    ("body", Value::from(body(&title, n))),
                    ("post_id", post.get("id").cloned().unwrap()),
                ],
            )
            .await
            .unwrap();
        }

        created.push(post);
    }

    created
}

/// Inserts `roots` root leafs, each with `children` children named
/// `Child 1..=children`. Returns the roots.
pub async fn seed_leafs(db: &Db, roots: usize, children: usize) -> Vec<Record> {
    let mut created = vec![];

    for n in 1..=roots {
        let root = db
            .insert(
                "Leaf",
                [
                    ("name", Value::from(format!("Root {n}"))),
                    ("published", Value::from(true)),
                ],
            )
            .await
            .unwrap();

        for n in 1..=children {
            db.insert(
                "Leaf",
                [
                    ("name", Value::from(format!("Child {n}"))),
                    ("parent_id", root.get("id").cloned().unwrap()),
                    ("published", Value::from(n % 2 == 0)),
                ],
            )
            .await
            .unwrap();
        }

        created.push(root);
    }

    created
}

/// The `field` of each record, as strings.
pub fn strings(records: &[Record], field: &str) -> Vec<String> {
    records
        .iter()
        .map(|record| record.try_get::<String>(field).unwrap())
        .collect()
}
