//! SELECT SQL generation.

use crate::ast::query::QueryBuilder;
use crate::transpiler::dialect::{Dialect, LimitStyle};
use crate::transpiler::term::render_term;
use crate::transpiler::{render_source, RenderCtx};

pub(crate) fn render_select(q: &QueryBuilder, d: &Dialect) -> String {
    if q.selects.is_empty() && q.from_.is_none() {
        return String::new();
    }

    let ctx = RenderCtx {
        dialect: d,
        with_namespace: !q.joins.is_empty(),
    };

    let mut sql = String::from("SELECT ");
    if q.distinct {
        sql.push_str("DISTINCT ");
    }

    if q.selects.is_empty() {
        sql.push('*');
    } else {
        let cols: Vec<String> = q.selects.iter().map(|t| render_term(t, &ctx)).collect();
        sql.push_str(&cols.join(","));
    }

    if let Some(from) = &q.from_ {
        sql.push_str(" FROM ");
        sql.push_str(&render_source(from, d));
    }

    for join in &q.joins {
        sql.push(' ');
        sql.push_str(join.kind.sql_keyword());
        sql.push(' ');
        sql.push_str(&render_source(&join.selectable, d));
        if let Some(condition) = &join.condition {
            sql.push_str(" ON ");
            sql.push_str(&render_term(condition, &ctx));
        }
    }

    if let Some(wheres) = &q.wheres {
        sql.push_str(" WHERE ");
        sql.push_str(&render_term(wheres, &ctx));
    }

    if !q.groupbys.is_empty() {
        let groups: Vec<String> = q.groupbys.iter().map(|t| render_term(t, &ctx)).collect();
        sql.push_str(" GROUP BY ");
        sql.push_str(&groups.join(","));
    }

    if let Some(havings) = &q.havings {
        sql.push_str(" HAVING ");
        sql.push_str(&render_term(havings, &ctx));
    }

    if !q.orderbys.is_empty() {
        let orders: Vec<String> = q
            .orderbys
            .iter()
            .map(|(term, order)| {
                let rendered = render_term(term, &ctx);
                match order {
                    Some(order) => format!("{rendered} {}", order.sql_keyword()),
                    None => rendered,
                }
            })
            .collect();
        sql.push_str(" ORDER BY ");
        sql.push_str(&orders.join(","));
    }

    sql.push_str(&render_pagination(q, d));
    sql
}

pub(crate) fn render_pagination(q: &QueryBuilder, d: &Dialect) -> String {
    let mut sql = String::new();
    match d.limit_style {
        LimitStyle::LimitOffset => {
            if let Some(n) = q.limit {
                sql.push_str(&format!(" LIMIT {n}"));
            }
            if let Some(n) = q.offset {
                sql.push_str(&format!(" OFFSET {n}"));
            }
        }
        LimitStyle::OffsetFetch => {
            if q.limit.is_some() || q.offset.is_some() {
                sql.push_str(&format!(" OFFSET {} ROWS", q.offset.unwrap_or(0)));
                if let Some(n) = q.limit {
                    sql.push_str(&format!(" FETCH NEXT {n} ROWS ONLY"));
                }
            }
        }
    }
    sql
}
