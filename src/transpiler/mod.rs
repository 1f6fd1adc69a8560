//! The rendering engine: one generic renderer that walks a builder's
//! clauses and consults the active [`dialect::Dialect`] at every formatting
//! decision point.

pub mod dialect;

mod ddl;
mod dml;
mod term;

#[cfg(test)]
mod tests;

use crate::ast::operators::StatementKind;
use crate::ast::query::QueryBuilder;
use crate::ast::table::{Selectable, Table};

use dialect::Dialect;

/// Per-render state threaded through the term renderer.
pub(crate) struct RenderCtx<'a> {
    pub dialect: &'a Dialect,
    /// Qualify field references with their owning table. On only when the
    /// query has joins.
    pub with_namespace: bool,
}

/// Render a builder with the given dialect configuration. Inner queries of
/// derived tables render with the outer statement's dialect.
pub(crate) fn render_query(q: &QueryBuilder, d: &Dialect) -> String {
    match q.kind {
        StatementKind::Select => dml::select::render_select(q, d),
        StatementKind::Insert => dml::insert::render_insert(q, d),
        StatementKind::Update => dml::update::render_update(q, d),
        StatementKind::Delete => dml::delete::render_delete(q, d),
        StatementKind::CreateTable => ddl::render_create_table(q, d),
        StatementKind::DropTable => ddl::render_drop_table(q, d),
        StatementKind::Copy => dml::bulk::render_copy(q, d),
        StatementKind::Load => dml::bulk::render_load(q, d),
    }
}

/// A table as a statement target: schema-qualified name, no alias.
pub(crate) fn render_table_name(t: &Table, d: &Dialect) -> String {
    match t.schema_name() {
        Some(schema) => format!("{}.{}", d.quote(schema), d.quote(t.name())),
        None => d.quote(t.name()),
    }
}

/// A selectable as a FROM/JOIN source: tables render their name plus alias,
/// derived tables render their parenthesized SQL plus alias.
pub(crate) fn render_source(s: &Selectable, d: &Dialect) -> String {
    match s {
        Selectable::Table(t) => {
            let name = render_table_name(t, d);
            match t.alias() {
                Some(alias) => format!("{name} {}", d.quote_alias(alias)),
                None => name,
            }
        }
        Selectable::Derived(derived) => {
            let inner = render_query(derived.query(), d);
            match derived.alias() {
                Some(alias) => format!("({inner}) {}", d.quote_alias(alias)),
                None => format!("({inner})"),
            }
        }
    }
}
