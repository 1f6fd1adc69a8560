//! The query accumulator: one mutable builder per statement.

use crate::ast::operators::{JoinKind, SortOrder, StatementKind};
use crate::ast::table::{Selectable, Table};
use crate::ast::term::{FieldRef, Term};
use crate::ast::values::Value;
use crate::transpiler::dialect::Dialect;

mod clauses;
mod constructors;
mod rewrite;

#[cfg(test)]
mod tests;

pub use clauses::Joiner;
pub use constructors::Query;

/// One JOIN entry. Cross joins carry no condition.
#[derive(Debug, Clone)]
pub struct Join {
    pub selectable: Selectable,
    pub condition: Option<Term>,
    pub kind: JoinKind,
}

/// A column definition for CREATE TABLE.
#[derive(Debug, Clone)]
pub struct ColumnDef {
    pub name: String,
    pub sql_type: String,
    pub nullable: bool,
    pub default: Option<Value>,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, sql_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sql_type: sql_type.into(),
            nullable: true,
            default: None,
        }
    }

    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }
}

/// Accumulates clauses for one statement and renders them in canonical
/// order. Built through [`Query`] or a dialect's factory methods; clauses
/// are appended with chained calls; rendering is a read-only projection that
/// can be repeated.
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    pub(crate) kind: StatementKind,
    pub(crate) dialect: &'static Dialect,

    // SELECT / DELETE
    pub(crate) from_: Option<Selectable>,
    pub(crate) joins: Vec<Join>,
    pub(crate) selects: Vec<Term>,
    pub(crate) distinct: bool,
    pub(crate) wheres: Option<Term>,
    pub(crate) groupbys: Vec<Term>,
    pub(crate) havings: Option<Term>,
    pub(crate) orderbys: Vec<(Term, Option<SortOrder>)>,
    pub(crate) limit: Option<u64>,
    pub(crate) offset: Option<u64>,

    // INSERT
    pub(crate) insert_table: Option<Table>,
    pub(crate) columns: Vec<FieldRef>,
    pub(crate) rows: Vec<Vec<Term>>,
    pub(crate) ignore: bool,

    // UPDATE
    pub(crate) update_table: Option<Table>,
    pub(crate) assignments: Vec<(FieldRef, Term)>,

    // CREATE TABLE / DROP TABLE / COPY
    pub(crate) ddl_table: Option<Table>,
    pub(crate) create_columns: Vec<ColumnDef>,
    pub(crate) primary_key: Vec<String>,
    pub(crate) temporary: bool,
    pub(crate) if_not_exists: bool,
    pub(crate) as_select: Option<Box<QueryBuilder>>,
    pub(crate) if_exists: bool,

    // Bulk ingestion (COPY / LOAD)
    pub(crate) copy_file: Option<String>,
    pub(crate) load_file: Option<String>,

    // Alias registry
    pub(crate) subquery_count: usize,
    pub(crate) reuse_hazards: Vec<String>,
}

impl QueryBuilder {
    pub(crate) fn new(kind: StatementKind, dialect: &'static Dialect) -> Self {
        Self {
            kind,
            dialect,
            from_: None,
            joins: vec![],
            selects: vec![],
            distinct: false,
            wheres: None,
            groupbys: vec![],
            havings: None,
            orderbys: vec![],
            limit: None,
            offset: None,
            insert_table: None,
            columns: vec![],
            rows: vec![],
            ignore: false,
            update_table: None,
            assignments: vec![],
            ddl_table: None,
            create_columns: vec![],
            primary_key: vec![],
            temporary: false,
            if_not_exists: false,
            as_select: None,
            if_exists: false,
            copy_file: None,
            load_file: None,
            subquery_count: 0,
            reuse_hazards: vec![],
        }
    }

    /// The statement kind this builder accumulates.
    pub fn kind(&self) -> StatementKind {
        self.kind
    }

    /// The dialect this builder was constructed for. Compares equal to the
    /// canonical static of the dialect whose factory produced the builder.
    pub fn dialect(&self) -> &'static Dialect {
        self.dialect
    }

    /// How many generated derived-table aliases this builder has handed out.
    pub fn subquery_count(&self) -> usize {
        self.subquery_count
    }

    /// Diagnostics recorded when an already-aliased derived table was
    /// attached to this builder. Observational only; rendering proceeds.
    pub fn reuse_hazards(&self) -> &[String] {
        &self.reuse_hazards
    }

    /// Render the statement to SQL text. Idempotent: the builder is not
    /// changed and repeated calls yield identical strings.
    pub fn to_sql(&self) -> String {
        crate::transpiler::render_query(self, self.dialect)
    }
}

impl std::fmt::Display for QueryBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_sql())
    }
}
