//! Term and value rendering.

use crate::ast::operators::ArithOp;
use crate::ast::table::Selectable;
use crate::ast::term::{Criterion, FieldRef, Term};
use crate::ast::values::Value;
use crate::transpiler::dialect::Dialect;
use crate::transpiler::{render_query, RenderCtx};

pub(crate) fn render_term(term: &Term, ctx: &RenderCtx) -> String {
    match term {
        Term::Field(field) => render_field(field, ctx),
        Term::Literal(value) => render_value(value, ctx.dialect),
        Term::Function { name, args } => {
            let args: Vec<String> = args.iter().map(|a| render_term(a, ctx)).collect();
            format!("{name}({})", args.join(","))
        }
        Term::Arithmetic { op, left, right } => {
            format!(
                "{}{}{}",
                render_arith_operand(left, *op, ctx),
                op.sql_symbol(),
                render_arith_operand(right, *op, ctx)
            )
        }
        Term::Criterion(criterion) => render_criterion(criterion, ctx),
        Term::Case(case) => {
            let mut sql = String::from("CASE");
            for (condition, result) in &case.whens {
                sql.push_str(" WHEN ");
                sql.push_str(&render_term(condition, ctx));
                sql.push_str(" THEN ");
                sql.push_str(&render_term(result, ctx));
            }
            if let Some(else_) = &case.else_ {
                sql.push_str(" ELSE ");
                sql.push_str(&render_term(else_, ctx));
            }
            sql.push_str(" END");
            sql
        }
        Term::Tuple(elements) => {
            let parts: Vec<String> = elements.iter().map(|e| render_term(e, ctx)).collect();
            format!("({})", parts.join(","))
        }
        Term::Star(qualifier) => match qualifier {
            Some(selectable) if ctx.with_namespace => match table_reference(selectable, ctx) {
                Some(reference) => format!("{reference}.*"),
                None => "*".to_string(),
            },
            _ => "*".to_string(),
        },
        Term::Aliased { term, alias } => {
            format!(
                "{} {}",
                render_term(term, ctx),
                ctx.dialect.quote_alias(alias)
            )
        }
    }
}

/// The quoted name an outer clause uses for a selectable: its alias when one
/// is live, otherwise the table name. Resolved at render time through the
/// live selectable, never from a captured string.
fn table_reference(selectable: &Selectable, ctx: &RenderCtx) -> Option<String> {
    selectable
        .reference_name()
        .map(|name| ctx.dialect.quote(&name))
}

fn render_field(field: &FieldRef, ctx: &RenderCtx) -> String {
    let name = ctx.dialect.quote(&field.name);
    if ctx.with_namespace {
        if let Some(selectable) = &field.table {
            if let Some(reference) = table_reference(selectable, ctx) {
                return format!("{reference}.{name}");
            }
        }
    }
    name
}

/// Additive operands nested under a multiplicative operator keep their
/// grouping with parentheses.
fn render_arith_operand(operand: &Term, parent: ArithOp, ctx: &RenderCtx) -> String {
    let sql = render_term(operand, ctx);
    match operand {
        Term::Arithmetic { op, .. } if op.is_additive() && !parent.is_additive() => {
            format!("({sql})")
        }
        _ => sql,
    }
}

/// Logical sub-criteria keep their grouping with parentheses.
fn render_logical_operand(operand: &Term, ctx: &RenderCtx) -> String {
    let sql = render_term(operand, ctx);
    if matches!(operand, Term::Criterion(Criterion::Logical { .. })) {
        format!("({sql})")
    } else {
        sql
    }
}

fn render_criterion(criterion: &Criterion, ctx: &RenderCtx) -> String {
    match criterion {
        Criterion::Compare { op, left, right } => {
            format!(
                "{}{}{}",
                render_logical_operand(left, ctx),
                op.sql_symbol(),
                render_logical_operand(right, ctx)
            )
        }
        Criterion::Logical { op, left, right } => {
            format!(
                "{} {} {}",
                render_logical_operand(left, ctx),
                op.sql_keyword(),
                render_logical_operand(right, ctx)
            )
        }
        Criterion::Not(operand) => {
            format!("NOT {}", render_logical_operand(operand, ctx))
        }
        Criterion::Between {
            term,
            low,
            high,
            negated,
        } => {
            let keyword = if *negated { "NOT BETWEEN" } else { "BETWEEN" };
            format!(
                "{} {keyword} {} AND {}",
                render_term(term, ctx),
                render_term(low, ctx),
                render_term(high, ctx)
            )
        }
        Criterion::IsNull { term, negated } => {
            let keyword = if *negated { "IS NOT NULL" } else { "IS NULL" };
            format!("{} {keyword}", render_term(term, ctx))
        }
        Criterion::In {
            term,
            list,
            negated,
        } => {
            let keyword = if *negated { "NOT IN" } else { "IN" };
            let elements: Vec<String> = list.iter().map(|e| render_term(e, ctx)).collect();
            format!(
                "{} {keyword} ({})",
                render_term(term, ctx),
                elements.join(",")
            )
        }
        Criterion::Exists { query, negated } => {
            let keyword = if *negated { "NOT EXISTS" } else { "EXISTS" };
            format!("{keyword} ({})", render_query(query, ctx.dialect))
        }
    }
}

pub(crate) fn render_value(value: &Value, d: &Dialect) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Bool(b) => d.bool_literal(*b).to_string(),
        Value::Int(n) => n.to_string(),
        Value::Float(n) => n.to_string(),
        Value::Decimal(dec) => dec.to_string(),
        Value::String(s) => d.quote_string(s),
        Value::Date(date) => d.quote_string(&date.format("%Y-%m-%d").to_string()),
        Value::Timestamp(ts) => d.quote_string(&ts.format("%Y-%m-%d %H:%M:%S").to_string()),
        Value::Uuid(u) => d.quote_string(&u.to_string()),
        Value::Param(index) => d.placeholder_for(*index),
    }
}
