use lateral::{
    alias_table,
    schema::Type,
    stmt::{Expr, ExprAnd, ExprOr},
    Relation, Schema,
};
use pretty_assertions::assert_eq;

fn leafs() -> Relation {
    let schema = Schema::builder()
        .table("leafs", |t| {
            t.primary_key("id");
            t.timestamps();
            t.column("name", Type::Text);
            t.nullable_column("parent_id", Type::Integer(8));
            t.column("published", Type::Boolean);
        })
        .model("Leaf", "leafs", |_| {})
        .build()
        .unwrap();

    schema.model("Leaf").unwrap().all()
}

#[test]
fn rewrites_where_and_order() {
    let relation = leafs();
    let published = Expr::eq(relation.column("published"), true);

    let relation = relation
        .where_in("id", [1, 2])
        .or(published)
        .order_by_desc("created_at");

    assert_eq!(
        alias_table(&relation, "omg_leafs").to_sql(),
        r#"SELECT "omg_leafs".* FROM "leafs" "omg_leafs" WHERE ("omg_leafs"."id" IN (1, 2) OR "omg_leafs"."published" = TRUE) ORDER BY "omg_leafs"."created_at" DESC"#
    );
}

#[test]
fn without_predicate() {
    let relation = leafs().order_by_desc("created_at").limit(2);

    assert_eq!(
        alias_table(&relation, "omg_leafs").to_sql(),
        r#"SELECT "omg_leafs".* FROM "leafs" "omg_leafs" ORDER BY "omg_leafs"."created_at" DESC LIMIT 2"#
    );
}

#[test]
fn comparisons_and_conjunctions() {
    let relation = leafs()
        .where_eq("name", "root")
        .where_gt("id", 10)
        .where_lt("id", 20);

    assert_eq!(
        alias_table(&relation, "l").to_sql(),
        r#"SELECT "l".* FROM "leafs" "l" WHERE "l"."name" = 'root' AND "l"."id" > 10 AND "l"."id" < 20"#
    );
}

#[test]
fn aliasing_twice_leaves_no_trace_of_the_first_alias() {
    let relation = leafs()
        .where_in("id", [1, 2])
        .where_eq("published", true)
        .order_by_asc("name");

    let sql = alias_table(&alias_table(&relation, "first"), "second").to_sql();

    assert_eq!(
        sql,
        r#"SELECT "second".* FROM "leafs" "second" WHERE "second"."id" IN (1, 2) AND "second"."published" = TRUE ORDER BY "second"."name" ASC"#
    );
    assert!(!sql.contains(r#""first""#));
    assert!(!sql.contains(r#""leafs"."#));
}

#[test]
fn unsupported_nodes_pass_through() {
    let relation = leafs();
    let id = relation.column("id");

    let relation = relation
        .where_null("parent_id")
        .filter(Expr::ge(id.clone(), 3))
        .filter(Expr::not(Expr::eq(id, 4)));

    assert_eq!(
        alias_table(&relation, "l").to_sql(),
        r#"SELECT "l".* FROM "leafs" "l" WHERE "leafs"."parent_id" IS NULL AND "leafs"."id" >= 3 AND NOT "leafs"."id" = 4"#
    );
}

#[test]
fn right_hand_columns_are_left_alone() {
    let relation = leafs();
    let correlated = Expr::eq(relation.column("parent_id"), relation.column("id"));

    assert_eq!(
        alias_table(&relation.filter(correlated), "l").to_sql(),
        r#"SELECT "l".* FROM "leafs" "l" WHERE "l"."parent_id" = "leafs"."id""#
    );
}

#[test]
fn input_is_not_modified() {
    let relation = leafs().where_eq("published", true).order_by_desc("id");
    let before = relation.to_sql();

    let aliased = alias_table(&relation, "l");

    assert_eq!(relation.to_sql(), before);
    assert_ne!(aliased.to_sql(), before);
    assert_eq!(relation.table().alias(), None);
    assert_eq!(aliased.table().alias(), Some("l"));
}

#[test]
fn selection_is_reset_to_the_default_projection() {
    let relation = leafs();
    let relation = relation.clone().select([relation.column("name")]);

    assert_eq!(
        alias_table(&relation, "l").to_sql(),
        r#"SELECT "l".* FROM "leafs" "l""#
    );
}

#[test]
fn empty_conjunction_leaves_no_predicate() {
    let relation = leafs()
        .filter(ExprAnd { operands: vec![] })
        .order_by_asc("id");

    assert_eq!(
        relation.to_sql(),
        r#"SELECT "leafs".* FROM "leafs" ORDER BY "leafs"."id" ASC"#
    );
    assert_eq!(
        alias_table(&relation, "l").to_sql(),
        r#"SELECT "l".* FROM "leafs" "l" ORDER BY "l"."id" ASC"#
    );
}

#[test]
fn disjunction_of_empty_conjunctions_leaves_no_predicate() {
    let relation = leafs().filter(ExprOr {
        operands: vec![ExprAnd { operands: vec![] }.into()],
    });

    let aliased = alias_table(&relation, "l");

    assert_eq!(aliased.predicate(), None);
    assert_eq!(aliased.to_sql(), r#"SELECT "l".* FROM "leafs" "l""#);
}
