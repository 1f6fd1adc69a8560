//! UPDATE SQL generation.

use crate::ast::query::QueryBuilder;
use crate::transpiler::dialect::Dialect;
use crate::transpiler::term::render_term;
use crate::transpiler::{render_table_name, RenderCtx};

pub(crate) fn render_update(q: &QueryBuilder, d: &Dialect) -> String {
    let Some(table) = &q.update_table else {
        return String::new();
    };

    let ctx = RenderCtx {
        dialect: d,
        with_namespace: false,
    };

    // Columnar engines mutate through ALTER TABLE instead of UPDATE.
    let mut sql = if d.mutate_via_alter {
        format!("ALTER TABLE {} UPDATE ", render_table_name(table, d))
    } else {
        format!("UPDATE {} SET ", render_table_name(table, d))
    };

    let assignments: Vec<String> = q
        .assignments
        .iter()
        .map(|(field, value)| format!("{}={}", d.quote(&field.name), render_term(value, &ctx)))
        .collect();
    sql.push_str(&assignments.join(","));

    if let Some(wheres) = &q.wheres {
        sql.push_str(" WHERE ");
        sql.push_str(&render_term(wheres, &ctx));
    }
    sql
}
