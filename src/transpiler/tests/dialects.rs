//! Dialect configuration tests: quoting, pagination, vendor statements and
//! the factory identity contract.

use pretty_assertions::assert_eq;

use crate::ast::operators::StatementKind;
use crate::ast::query::Query;
use crate::ast::table::Table;
use crate::ast::term::col;
use crate::ast::values::Value;
use crate::error::QuerelError;
use crate::transpiler::dialect::{
    CLICKHOUSE, GENERIC, MSSQL, MYSQL, ORACLE, POSTGRESQL, REDSHIFT, SNOWFLAKE, SQLITE, VERTICA,
};

#[test]
fn test_factory_identity_contract() {
    let t = Table::new("t");
    assert_eq!(Query::from_(&t).dialect(), &GENERIC);
    assert_eq!(MYSQL.from_(&t).unwrap().dialect(), &MYSQL);
    assert_eq!(POSTGRESQL.from_(&t).unwrap().dialect(), &POSTGRESQL);
    assert_eq!(SQLITE.from_(&t).unwrap().dialect(), &SQLITE);
    assert_eq!(MSSQL.from_(&t).unwrap().dialect(), &MSSQL);
    assert_eq!(ORACLE.from_(&t).unwrap().dialect(), &ORACLE);
    assert_eq!(SNOWFLAKE.from_(&t).unwrap().dialect(), &SNOWFLAKE);
    assert_eq!(CLICKHOUSE.from_(&t).unwrap().dialect(), &CLICKHOUSE);
    assert_eq!(REDSHIFT.from_(&t).unwrap().dialect(), &REDSHIFT);
    assert_eq!(VERTICA.from_(&t).unwrap().dialect(), &VERTICA);
    assert_ne!(MYSQL.from_(&t).unwrap().dialect(), &POSTGRESQL);
}

#[test]
fn test_mysql_backtick_quoting() {
    let t = Table::new("users");
    let q = MYSQL
        .from_(&t)
        .unwrap()
        .select([t.field("name")])
        .unwrap()
        .where_(t.field("active").eq(true))
        .unwrap();
    assert_eq!(
        q.to_sql(),
        "SELECT `name` FROM `users` WHERE `active`=true"
    );
}

#[test]
fn test_mysql_insert_ignore() {
    let q = MYSQL
        .into_(Table::new("t"))
        .unwrap()
        .ignore()
        .unwrap()
        .insert([1])
        .unwrap();
    assert_eq!(q.to_sql(), "INSERT IGNORE INTO `t` VALUES (1)");
}

#[test]
fn test_mysql_load_data() {
    let q = MYSQL
        .load("/tmp/users.csv")
        .unwrap()
        .into_table(Table::new("users"))
        .unwrap();
    assert_eq!(
        q.to_sql(),
        "LOAD DATA LOCAL INFILE '/tmp/users.csv' INTO TABLE `users` FIELDS TERMINATED BY ','"
    );
}

#[test]
fn test_load_unsupported_elsewhere() {
    let err = GENERIC.load("/tmp/users.csv").unwrap_err();
    assert!(matches!(
        err,
        QuerelError::UnsupportedStatement {
            kind: StatementKind::Load,
            ..
        }
    ));
}

#[test]
fn test_vertica_copy() {
    let q = VERTICA
        .copy_(Table::new("events"))
        .unwrap()
        .from_file("/tmp/events.csv")
        .unwrap();
    assert_eq!(
        q.to_sql(),
        r#"COPY "events" FROM LOCAL '/tmp/events.csv' PARSER fcsvparser(header=false)"#
    );
}

#[test]
fn test_copy_unsupported_elsewhere() {
    let err = MYSQL.copy_(Table::new("events")).unwrap_err();
    assert!(matches!(
        err,
        QuerelError::UnsupportedStatement {
            kind: StatementKind::Copy,
            ..
        }
    ));
}

#[test]
fn test_mssql_offset_fetch_pagination() {
    let t = Table::new("t");
    let q = MSSQL
        .from_(&t)
        .unwrap()
        .select([t.field("a")])
        .unwrap()
        .limit(10)
        .unwrap()
        .offset(5)
        .unwrap();
    assert_eq!(
        q.to_sql(),
        r#"SELECT "a" FROM "t" OFFSET 5 ROWS FETCH NEXT 10 ROWS ONLY"#
    );
}

#[test]
fn test_offset_fetch_without_explicit_offset() {
    let t = Table::new("t");
    let q = ORACLE
        .from_(&t)
        .unwrap()
        .select([t.field("a")])
        .unwrap()
        .limit(10)
        .unwrap();
    assert_eq!(q.to_sql(), "SELECT a FROM t OFFSET 0 ROWS FETCH NEXT 10 ROWS ONLY");
}

#[test]
fn test_oracle_renders_bare_identifiers() {
    let t = Table::new("t");
    let q = ORACLE
        .from_(&t)
        .unwrap()
        .select([t.field("a").as_("b")])
        .unwrap();
    assert_eq!(q.to_sql(), "SELECT a b FROM t");
}

#[test]
fn test_snowflake_quotes_aliases_only() {
    let t = Table::new("t");
    let q = SNOWFLAKE
        .from_(&t)
        .unwrap()
        .select([t.field("a").as_("b")])
        .unwrap();
    assert_eq!(q.to_sql(), r#"SELECT a "b" FROM t"#);
}

#[test]
fn test_sqlite_numeric_booleans() {
    let t = Table::new("t");
    let q = SQLITE
        .from_(&t)
        .unwrap()
        .select([t.field("id")])
        .unwrap()
        .where_(t.field("active").eq(true))
        .unwrap();
    assert_eq!(q.to_sql(), r#"SELECT "id" FROM "t" WHERE "active"=1"#);
}

#[test]
fn test_placeholder_styles() {
    let t = Table::new("t");
    let build = |dialect: &'static crate::transpiler::dialect::Dialect| {
        dialect
            .from_(&t)
            .unwrap()
            .select([t.field("id")])
            .unwrap()
            .where_(col("id").eq(Value::Param(1)))
            .unwrap()
            .to_sql()
    };
    assert_eq!(build(&GENERIC), r#"SELECT "id" FROM "t" WHERE "id"=?"#);
    assert_eq!(build(&POSTGRESQL), r#"SELECT "id" FROM "t" WHERE "id"=$1"#);
    assert_eq!(build(&REDSHIFT), r#"SELECT "id" FROM "t" WHERE "id"=%s"#);
}

#[test]
fn test_clickhouse_update_via_alter() {
    let t = Table::new("t");
    let q = CLICKHOUSE
        .update(t.clone())
        .unwrap()
        .set("foo", "bar")
        .unwrap()
        .where_(t.field("id").eq(1))
        .unwrap();
    assert_eq!(q.to_sql(), r#"ALTER TABLE "t" UPDATE "foo"='bar' WHERE "id"=1"#);
}

#[test]
fn test_clickhouse_delete_via_alter() {
    let t = Table::new("t");
    let q = CLICKHOUSE
        .from_(&t)
        .unwrap()
        .delete()
        .unwrap()
        .where_(t.field("id").eq(1))
        .unwrap();
    assert_eq!(q.to_sql(), r#"ALTER TABLE "t" DELETE WHERE "id"=1"#);
}

#[test]
fn test_identifier_quote_doubling() {
    let t = Table::new(r#"weird"name"#);
    let q = Query::from_(&t).select([t.field("a")]).unwrap();
    assert_eq!(q.to_sql(), r#"SELECT "a" FROM "weird""name""#);
}
