//! SELECT rendering tests against the generic dialect.

use pretty_assertions::assert_eq;

use crate::ast::functions::{count_star, sum};
use crate::ast::query::Query;
use crate::ast::table::Table;
use crate::ast::term::{col, Term};

#[test]
fn test_implicit_star() {
    let t = Table::new("t");
    assert_eq!(Query::from_(&t).to_sql(), r#"SELECT * FROM "t""#);
}

#[test]
fn test_explicit_columns() {
    let t = Table::new("users");
    let q = Query::from_(&t)
        .select([t.field("id"), t.field("name")])
        .unwrap();
    assert_eq!(q.to_sql(), r#"SELECT "id","name" FROM "users""#);
}

#[test]
fn test_distinct() {
    let t = Table::new("orders");
    let q = Query::from_(&t)
        .select([t.field("status")])
        .unwrap()
        .distinct()
        .unwrap();
    assert_eq!(q.to_sql(), r#"SELECT DISTINCT "status" FROM "orders""#);
}

#[test]
fn test_select_alias() {
    let t = Table::new("t");
    let q = Query::from_(&t)
        .select([sum(t.field("revenue")).as_("total")])
        .unwrap();
    assert_eq!(q.to_sql(), r#"SELECT SUM("revenue") "total" FROM "t""#);
}

#[test]
fn test_where_and_or_grouping() {
    let t = Table::new("t");
    let q = Query::from_(&t)
        .select([t.field("a")])
        .unwrap()
        .where_(
            t.field("a")
                .eq(1)
                .and_(t.field("b").eq(2).or_(t.field("c").eq(3))),
        )
        .unwrap();
    assert_eq!(
        q.to_sql(),
        r#"SELECT "a" FROM "t" WHERE "a"=1 AND ("b"=2 OR "c"=3)"#
    );
}

#[test]
fn test_not() {
    let t = Table::new("t");
    let q = Query::from_(&t)
        .select([t.field("a")])
        .unwrap()
        .where_(t.field("flag").eq(true).negate())
        .unwrap();
    assert_eq!(q.to_sql(), r#"SELECT "a" FROM "t" WHERE NOT "flag"=true"#);
}

#[test]
fn test_between_and_in() {
    let t = Table::new("t");
    let q = Query::from_(&t)
        .select([t.field("id")])
        .unwrap()
        .where_(t.field("price").between(10, 100))
        .unwrap()
        .where_(t.field("status").isin(["active", "pending"]))
        .unwrap();
    assert_eq!(
        q.to_sql(),
        r#"SELECT "id" FROM "t" WHERE "price" BETWEEN 10 AND 100 AND "status" IN ('active','pending')"#
    );
}

#[test]
fn test_like_and_is_null() {
    let t = Table::new("t");
    let q = Query::from_(&t)
        .select([t.field("id")])
        .unwrap()
        .where_(t.field("email").like("%@example.com"))
        .unwrap()
        .where_(t.field("deleted_at").is_null())
        .unwrap();
    assert_eq!(
        q.to_sql(),
        r#"SELECT "id" FROM "t" WHERE "email" LIKE '%@example.com' AND "deleted_at" IS NULL"#
    );
}

#[test]
fn test_string_quotes_are_doubled() {
    let t = Table::new("t");
    let q = Query::from_(&t)
        .select([t.field("id")])
        .unwrap()
        .where_(t.field("name").eq("O'Brien"))
        .unwrap();
    assert_eq!(
        q.to_sql(),
        r#"SELECT "id" FROM "t" WHERE "name"='O''Brien'"#
    );
}

#[test]
fn test_arithmetic_grouping() {
    let t = Table::new("t");
    let q = Query::from_(&t)
        .select([t.field("x").add(col("y")), t.field("x").add(col("y")).mul(2)])
        .unwrap();
    assert_eq!(q.to_sql(), r#"SELECT "x"+"y",("x"+"y")*2 FROM "t""#);
}

#[test]
fn test_group_having_order_pagination() {
    let t = Table::new("orders");
    let q = Query::from_(&t)
        .select([t.field("status").into(), count_star()])
        .unwrap()
        .groupby(t.field("status"))
        .unwrap()
        .having(count_star().gt(5))
        .unwrap()
        .orderby_desc(t.field("status"))
        .unwrap()
        .limit(10)
        .unwrap()
        .offset(20)
        .unwrap();
    assert_eq!(
        q.to_sql(),
        r#"SELECT "status",COUNT(*) FROM "orders" GROUP BY "status" HAVING COUNT(*)>5 ORDER BY "status" DESC LIMIT 10 OFFSET 20"#
    );
}

#[test]
fn test_join_kinds_and_namespacing() {
    let u = Table::new("users");
    let o = Table::new("orders");
    let q = Query::from_(&u)
        .left_join(&o)
        .unwrap()
        .on(u.field("id").eq(o.field("user_id")))
        .unwrap()
        .select([u.field("id"), o.field("amount")])
        .unwrap();
    assert_eq!(
        q.to_sql(),
        r#"SELECT "users"."id","orders"."amount" FROM "users" LEFT JOIN "orders" ON "users"."id"="orders"."user_id""#
    );
}

#[test]
fn test_cross_join_has_no_condition() {
    let a = Table::new("a");
    let b = Table::new("b");
    let q = Query::from_(&a)
        .cross_join(&b)
        .unwrap()
        .select([a.star()])
        .unwrap();
    assert_eq!(q.to_sql(), r#"SELECT "a".* FROM "a" CROSS JOIN "b""#);
}

#[test]
fn test_join_uses_table_alias_for_namespacing() {
    let long = Table::new("warehouse_inventory").as_alias("w");
    let o = Table::new("orders");
    let q = Query::from_(&long)
        .join(&o)
        .unwrap()
        .on(long.field("sku").eq(o.field("sku")))
        .unwrap()
        .select([long.field("sku")])
        .unwrap();
    assert_eq!(
        q.to_sql(),
        r#"SELECT "w"."sku" FROM "warehouse_inventory" "w" JOIN "orders" ON "w"."sku"="orders"."sku""#
    );
}

#[test]
fn test_exists_subquery() {
    let t = Table::new("t");
    let other = Table::new("other");
    let sub = Query::from_(&other).select([other.field("id")]).unwrap();
    let q = Query::from_(&t)
        .select([t.field("id")])
        .unwrap()
        .where_(Term::exists(sub))
        .unwrap();
    assert_eq!(
        q.to_sql(),
        r#"SELECT "id" FROM "t" WHERE EXISTS (SELECT "id" FROM "other")"#
    );
}

#[test]
fn test_schema_qualified_table() {
    let t = Table::new("events").schema("analytics");
    let q = Query::from_(&t).select([t.field("id")]).unwrap();
    assert_eq!(q.to_sql(), r#"SELECT "id" FROM "analytics"."events""#);
}
