//! Factory entry points for query builders.
//!
//! [`Query`] binds the generic ANSI dialect; the same factories exist on
//! every [`Dialect`] value with a statement-capability check performed at
//! construction time.

use crate::ast::operators::StatementKind;
use crate::ast::query::QueryBuilder;
use crate::ast::table::{Selectable, Table};
use crate::error::{QuerelError, QuerelResult};
use crate::transpiler::dialect::{self, Dialect};

/// The generic-dialect query factory.
pub struct Query;

impl Query {
    /// Start a SELECT from the given table or derived table.
    pub fn from_(source: impl Into<Selectable>) -> QueryBuilder {
        QueryBuilder::new(StatementKind::Select, &dialect::GENERIC).set_from(source.into())
    }

    /// Start an INSERT into the given table.
    pub fn into_(table: Table) -> QueryBuilder {
        let mut q = QueryBuilder::new(StatementKind::Insert, &dialect::GENERIC);
        q.insert_table = Some(table);
        q
    }

    /// Start an UPDATE of the given table.
    pub fn update(table: Table) -> QueryBuilder {
        let mut q = QueryBuilder::new(StatementKind::Update, &dialect::GENERIC);
        q.update_table = Some(table);
        q
    }

    /// Start a CREATE TABLE statement.
    pub fn create_table(table: Table) -> QueryBuilder {
        let mut q = QueryBuilder::new(StatementKind::CreateTable, &dialect::GENERIC);
        q.ddl_table = Some(table);
        q
    }

    /// Start a DROP TABLE statement.
    pub fn drop_table(table: Table) -> QueryBuilder {
        let mut q = QueryBuilder::new(StatementKind::DropTable, &dialect::GENERIC);
        q.ddl_table = Some(table);
        q
    }
}

impl Dialect {
    fn builder_for(&'static self, kind: StatementKind) -> QuerelResult<QueryBuilder> {
        if !self.supports(kind) {
            return Err(QuerelError::UnsupportedStatement {
                dialect: self.name,
                kind,
            });
        }
        Ok(QueryBuilder::new(kind, self))
    }

    /// Start a SELECT bound to this dialect.
    pub fn from_(&'static self, source: impl Into<Selectable>) -> QuerelResult<QueryBuilder> {
        Ok(self.builder_for(StatementKind::Select)?.set_from(source.into()))
    }

    /// Start an INSERT bound to this dialect.
    pub fn into_(&'static self, table: Table) -> QuerelResult<QueryBuilder> {
        let mut q = self.builder_for(StatementKind::Insert)?;
        q.insert_table = Some(table);
        Ok(q)
    }

    /// Start an UPDATE bound to this dialect.
    pub fn update(&'static self, table: Table) -> QuerelResult<QueryBuilder> {
        let mut q = self.builder_for(StatementKind::Update)?;
        q.update_table = Some(table);
        Ok(q)
    }

    /// Start a CREATE TABLE bound to this dialect.
    pub fn create_table(&'static self, table: Table) -> QuerelResult<QueryBuilder> {
        let mut q = self.builder_for(StatementKind::CreateTable)?;
        q.ddl_table = Some(table);
        Ok(q)
    }

    /// Start a DROP TABLE bound to this dialect.
    pub fn drop_table(&'static self, table: Table) -> QuerelResult<QueryBuilder> {
        let mut q = self.builder_for(StatementKind::DropTable)?;
        q.ddl_table = Some(table);
        Ok(q)
    }

    /// Start a bulk LOAD of a local file; pair with
    /// [`QueryBuilder::into_table`]. Only dialects declaring the LOAD
    /// statement accept this.
    pub fn load(&'static self, path: impl Into<String>) -> QuerelResult<QueryBuilder> {
        let mut q = self.builder_for(StatementKind::Load)?;
        q.load_file = Some(path.into());
        Ok(q)
    }

    /// Start a bulk COPY into the given table; pair with
    /// [`QueryBuilder::from_file`]. Only dialects declaring the COPY
    /// statement accept this.
    pub fn copy_(&'static self, table: Table) -> QuerelResult<QueryBuilder> {
        let mut q = self.builder_for(StatementKind::Copy)?;
        q.ddl_table = Some(table);
        Ok(q)
    }
}
