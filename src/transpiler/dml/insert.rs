//! INSERT SQL generation.

use crate::ast::query::QueryBuilder;
use crate::transpiler::dialect::Dialect;
use crate::transpiler::term::render_term;
use crate::transpiler::{render_table_name, RenderCtx};

pub(crate) fn render_insert(q: &QueryBuilder, d: &Dialect) -> String {
    let Some(table) = &q.insert_table else {
        return String::new();
    };
    if q.rows.is_empty() {
        return String::new();
    }

    let ctx = RenderCtx {
        dialect: d,
        with_namespace: false,
    };

    let mut sql = String::from("INSERT ");
    if q.ignore {
        sql.push_str("IGNORE ");
    }
    sql.push_str("INTO ");
    sql.push_str(&render_table_name(table, d));

    if !q.columns.is_empty() {
        let cols: Vec<String> = q.columns.iter().map(|c| d.quote(&c.name)).collect();
        sql.push_str(&format!(" ({})", cols.join(",")));
    }

    let rows: Vec<String> = q
        .rows
        .iter()
        .map(|row| {
            let values: Vec<String> = row.iter().map(|t| render_term(t, &ctx)).collect();
            format!("({})", values.join(","))
        })
        .collect();
    sql.push_str(" VALUES ");
    sql.push_str(&rows.join(","));
    sql
}
