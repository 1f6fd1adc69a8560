//! Builder state-machine tests: statement kinds, clause gating, rendering
//! idempotence.

use pretty_assertions::assert_eq;

use crate::ast::operators::StatementKind;
use crate::ast::query::Query;
use crate::ast::table::Table;
use crate::ast::term::col;
use crate::error::QuerelError;
use crate::transpiler::dialect;

#[test]
fn test_statement_kinds() {
    let t = Table::new("t");
    assert_eq!(Query::from_(&t).kind(), StatementKind::Select);
    assert_eq!(Query::into_(t.clone()).kind(), StatementKind::Insert);
    assert_eq!(Query::update(t.clone()).kind(), StatementKind::Update);
    assert_eq!(Query::create_table(t.clone()).kind(), StatementKind::CreateTable);
    assert_eq!(Query::drop_table(t).kind(), StatementKind::DropTable);
}

#[test]
fn test_generic_factory_binds_generic_dialect() {
    let t = Table::new("t");
    assert_eq!(Query::from_(&t).dialect(), &dialect::GENERIC);
}

#[test]
fn test_groupby_invalid_on_insert() {
    let err = Query::into_(Table::new("t")).groupby(col("x")).unwrap_err();
    assert!(matches!(
        err,
        QuerelError::InvalidClause {
            clause: "GROUP BY",
            kind: StatementKind::Insert,
        }
    ));
}

#[test]
fn test_set_invalid_on_select() {
    let t = Table::new("t");
    let err = Query::from_(&t).set("a", 1).unwrap_err();
    assert!(matches!(err, QuerelError::InvalidClause { .. }));
}

#[test]
fn test_insert_row_invalid_on_update() {
    let err = Query::update(Table::new("t")).insert([1]).unwrap_err();
    assert!(matches!(err, QuerelError::InvalidClause { .. }));
}

#[test]
fn test_where_invalid_on_insert() {
    let err = Query::into_(Table::new("t"))
        .where_(col("x").eq(1))
        .unwrap_err();
    assert!(matches!(err, QuerelError::InvalidClause { .. }));
}

#[test]
fn test_join_condition_must_be_criterion() {
    let a = Table::new("a");
    let b = Table::new("b");
    let err = Query::from_(&a)
        .join(&b)
        .unwrap()
        .on(b.field("id"))
        .unwrap_err();
    assert!(matches!(err, QuerelError::InvalidJoinCondition));
}

#[test]
fn test_delete_transition_requires_clause_free_select() {
    let t = Table::new("t");
    let q = Query::from_(&t).delete().unwrap();
    assert_eq!(q.kind(), StatementKind::Delete);

    let err = Query::from_(&t)
        .select([t.field("a")])
        .unwrap()
        .delete()
        .unwrap_err();
    assert!(matches!(err, QuerelError::StatementKindFixed { .. }));
}

#[test]
fn test_is_joined() {
    let a = Table::new("a");
    let b = Table::new("b");
    let c = Table::new("c");
    let q = Query::from_(&a)
        .join(&b)
        .unwrap()
        .on(a.field("foo").eq(b.field("boo")))
        .unwrap();

    assert!(q.is_joined(&b));
    assert!(q.is_joined(&a));
    assert!(!q.is_joined(&c));
}

#[test]
fn test_rendering_is_idempotent() {
    let t = Table::new("t");
    let q = Query::from_(&t)
        .select([t.field("a")])
        .unwrap()
        .where_(t.field("a").gt(10))
        .unwrap()
        .orderby(t.field("a"))
        .unwrap()
        .limit(5)
        .unwrap();

    let first = q.to_sql();
    let second = q.to_sql();
    assert_eq!(first, second);
    assert_eq!(first, r#"SELECT "a" FROM "t" WHERE "a">10 ORDER BY "a" LIMIT 5"#);
}

#[test]
fn test_repeated_where_and_combines() {
    let t = Table::new("t");
    let q = Query::from_(&t)
        .select([t.field("a")])
        .unwrap()
        .where_(t.field("a").gt(1))
        .unwrap()
        .where_(t.field("b").lt(2))
        .unwrap();
    assert_eq!(q.to_sql(), r#"SELECT "a" FROM "t" WHERE "a">1 AND "b"<2"#);
}

#[test]
fn test_degenerate_builders_render_empty() {
    let insert_without_rows = Query::into_(Table::new("t"));
    assert_eq!(insert_without_rows.to_sql(), "");
}
