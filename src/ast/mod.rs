//! The statement AST: values, expression terms, selectables and the query
//! builder itself.

pub mod case;
pub mod functions;
pub mod operators;
pub mod query;
pub mod table;
pub mod term;
pub mod values;


pub use case::{Case, CaseExpr};
pub use operators::{ArithOp, Comparator, JoinKind, LogicOp, SortOrder, StatementKind};
pub use query::{ColumnDef, Join, Joiner, Query, QueryBuilder};
pub use table::{DerivedTable, Selectable, Table};
pub use term::{col, lit, Criterion, FieldRef, Term};
pub use values::Value;
