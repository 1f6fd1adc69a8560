//! DELETE SQL generation.

use crate::ast::query::QueryBuilder;
use crate::ast::table::Selectable;
use crate::transpiler::dialect::Dialect;
use crate::transpiler::term::render_term;
use crate::transpiler::{render_source, render_table_name, RenderCtx};

pub(crate) fn render_delete(q: &QueryBuilder, d: &Dialect) -> String {
    let Some(from) = &q.from_ else {
        return String::new();
    };

    let ctx = RenderCtx {
        dialect: d,
        with_namespace: false,
    };

    // Columnar engines mutate through ALTER TABLE instead of DELETE.
    let mut sql = if d.mutate_via_alter {
        match from {
            Selectable::Table(t) => format!("ALTER TABLE {} DELETE", render_table_name(t, d)),
            Selectable::Derived(_) => return String::new(),
        }
    } else {
        format!("DELETE FROM {}", render_source(from, d))
    };

    if let Some(wheres) = &q.wheres {
        sql.push_str(" WHERE ");
        sql.push_str(&render_term(wheres, &ctx));
    }
    sql
}
