//! AST-native SQL query builder.
//!
//! Statements are composed as typed expression trees and rendered to
//! dialect-correct SQL text on demand — no string templating, no parsing,
//! no execution.
//!
//! ```ignore
//! use querel::prelude::*;
//!
//! let users = Table::new("users");
//! let sql = Query::from_(&users)
//!     .select([users.field("id").as_("user_id"), users.field("name").into()])?
//!     .where_(users.field("active").eq(true))?
//!     .to_sql();
//! ```
//!
//! Derived-table handles are `Rc`-based and confined to one thread; a
//! builder and every selectable it references belong together.

pub mod ast;
pub mod error;
pub mod transpiler;

pub use ast::{
    col, lit, Case, ColumnDef, DerivedTable, FieldRef, Join, JoinKind, Joiner, Query,
    QueryBuilder, Selectable, SortOrder, StatementKind, Table, Term, Value,
};
pub use error::{QuerelError, QuerelResult};
pub use transpiler::dialect::{
    Dialect, CLICKHOUSE, GENERIC, MSSQL, MYSQL, ORACLE, POSTGRESQL, REDSHIFT, SNOWFLAKE,
    SQLITE, VERTICA,
};

pub mod prelude {
    pub use crate::ast::functions::*;
    pub use crate::ast::{
        col, lit, Case, ColumnDef, DerivedTable, FieldRef, Query, QueryBuilder, Selectable,
        SortOrder, Table, Term, Value,
    };
    pub use crate::error::{QuerelError, QuerelResult};
    pub use crate::transpiler::dialect::{
        Dialect, CLICKHOUSE, GENERIC, MSSQL, MYSQL, ORACLE, POSTGRESQL, REDSHIFT, SNOWFLAKE,
        SQLITE, VERTICA,
    };
}
