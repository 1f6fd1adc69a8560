//! CREATE TABLE / DROP TABLE rendering tests.

use pretty_assertions::assert_eq;

use crate::ast::query::{ColumnDef, Query};
use crate::ast::table::Table;
use crate::transpiler::dialect;

#[test]
fn test_create_table_with_columns() {
    let q = Query::create_table(Table::new("abc"))
        .column(ColumnDef::new("a", "INT"))
        .unwrap()
        .column(ColumnDef::new("b", "VARCHAR(100)"))
        .unwrap();
    assert_eq!(q.to_sql(), r#"CREATE TABLE "abc" ("a" INT,"b" VARCHAR(100))"#);
}

#[test]
fn test_create_table_constraints() {
    let q = Query::create_table(Table::new("abc"))
        .column(ColumnDef::new("id", "INT").not_null())
        .unwrap()
        .column(ColumnDef::new("status", "VARCHAR(20)").default_value("new"))
        .unwrap()
        .primary_key(["id"])
        .unwrap();
    assert_eq!(
        q.to_sql(),
        r#"CREATE TABLE "abc" ("id" INT NOT NULL,"status" VARCHAR(20) DEFAULT 'new',PRIMARY KEY ("id"))"#
    );
}

#[test]
fn test_create_temporary_table_if_not_exists() {
    let q = Query::create_table(Table::new("tmp"))
        .temporary()
        .unwrap()
        .if_not_exists()
        .unwrap()
        .column(ColumnDef::new("a", "INT"))
        .unwrap();
    assert_eq!(
        q.to_sql(),
        r#"CREATE TEMPORARY TABLE IF NOT EXISTS "tmp" ("a" INT)"#
    );
}

#[test]
fn test_create_table_as_select() {
    let src = Table::new("src");
    let q = Query::create_table(Table::new("dst"))
        .as_select(Query::from_(&src).select([src.field("a")]).unwrap())
        .unwrap();
    assert_eq!(q.to_sql(), r#"CREATE TABLE "dst" AS (SELECT "a" FROM "src")"#);
}

#[test]
fn test_vertica_local_temporary_table() {
    let q = dialect::VERTICA
        .create_table(Table::new("tmp"))
        .unwrap()
        .temporary()
        .unwrap()
        .column(ColumnDef::new("a", "INT"))
        .unwrap();
    assert_eq!(
        q.to_sql(),
        r#"CREATE LOCAL TEMPORARY TABLE "tmp" ("a" INT) ON COMMIT PRESERVE ROWS"#
    );
}

#[test]
fn test_drop_table() {
    let q = Query::drop_table(Table::new("abc"));
    assert_eq!(q.to_sql(), r#"DROP TABLE "abc""#);

    let q = Query::drop_table(Table::new("abc")).if_exists().unwrap();
    assert_eq!(q.to_sql(), r#"DROP TABLE IF EXISTS "abc""#);
}
