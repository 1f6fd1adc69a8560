//! Fluent clause methods for [`QueryBuilder`].
//!
//! Clause methods are gated on the statement kind: adding a clause the kind
//! cannot carry fails immediately at the call with
//! [`QuerelError::InvalidClause`].

use tracing::warn;

use crate::ast::operators::{JoinKind, SortOrder, StatementKind};
use crate::ast::query::{ColumnDef, Join, QueryBuilder};
use crate::ast::table::{Selectable, Table};
use crate::ast::term::{FieldRef, Term};
use crate::error::{QuerelError, QuerelResult};

impl QueryBuilder {
    fn require_kind(
        &self,
        clause: &'static str,
        allowed: &[StatementKind],
    ) -> QuerelResult<()> {
        if allowed.contains(&self.kind) {
            Ok(())
        } else {
            Err(QuerelError::invalid_clause(clause, self.kind))
        }
    }

    /// Attach a selectable to this builder, generating a derived-table alias
    /// when needed. Assignment happens here, at attachment — rendering never
    /// mutates alias state.
    pub(crate) fn attach(&mut self, selectable: Selectable) -> Selectable {
        if let Selectable::Derived(derived) = &selectable {
            match derived.alias() {
                None => {
                    let alias = format!("sq{}", self.subquery_count);
                    if derived.assign_generated_alias(alias) {
                        self.subquery_count += 1;
                    }
                }
                Some(alias) if derived.alias_was_generated() => {
                    let message = format!(
                        "derived table \"{alias}\" is already embedded as a nested \
                         subquery elsewhere; both embeddings observe the same live alias"
                    );
                    warn!(alias, "{}", message);
                    self.reuse_hazards.push(message);
                }
                Some(_) => {}
            }
        }
        selectable
    }

    pub(crate) fn set_from(mut self, source: Selectable) -> Self {
        let source = self.attach(source);
        self.from_ = Some(source);
        self
    }

    /// Add terms to the select list.
    pub fn select<I>(mut self, terms: I) -> QuerelResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<Term>,
    {
        self.require_kind("SELECT list", &[StatementKind::Select])?;
        self.selects.extend(terms.into_iter().map(Into::into));
        Ok(self)
    }

    pub fn distinct(mut self) -> QuerelResult<Self> {
        self.require_kind("DISTINCT", &[StatementKind::Select])?;
        self.distinct = true;
        Ok(self)
    }

    /// Add a WHERE condition; repeated calls AND-combine.
    pub fn where_(mut self, condition: impl Into<Term>) -> QuerelResult<Self> {
        self.require_kind(
            "WHERE",
            &[
                StatementKind::Select,
                StatementKind::Update,
                StatementKind::Delete,
            ],
        )?;
        let condition = condition.into();
        self.wheres = Some(match self.wheres.take() {
            Some(existing) => existing.and_(condition),
            None => condition,
        });
        Ok(self)
    }

    pub fn groupby(mut self, term: impl Into<Term>) -> QuerelResult<Self> {
        self.require_kind("GROUP BY", &[StatementKind::Select])?;
        self.groupbys.push(term.into());
        Ok(self)
    }

    /// Add a HAVING condition; repeated calls AND-combine.
    pub fn having(mut self, condition: impl Into<Term>) -> QuerelResult<Self> {
        self.require_kind("HAVING", &[StatementKind::Select])?;
        let condition = condition.into();
        self.havings = Some(match self.havings.take() {
            Some(existing) => existing.and_(condition),
            None => condition,
        });
        Ok(self)
    }

    /// Order by a term with no explicit direction.
    pub fn orderby(mut self, term: impl Into<Term>) -> QuerelResult<Self> {
        self.require_kind("ORDER BY", &[StatementKind::Select])?;
        self.orderbys.push((term.into(), None));
        Ok(self)
    }

    pub fn orderby_asc(mut self, term: impl Into<Term>) -> QuerelResult<Self> {
        self.require_kind("ORDER BY", &[StatementKind::Select])?;
        self.orderbys.push((term.into(), Some(SortOrder::Asc)));
        Ok(self)
    }

    pub fn orderby_desc(mut self, term: impl Into<Term>) -> QuerelResult<Self> {
        self.require_kind("ORDER BY", &[StatementKind::Select])?;
        self.orderbys.push((term.into(), Some(SortOrder::Desc)));
        Ok(self)
    }

    pub fn limit(mut self, n: u64) -> QuerelResult<Self> {
        self.require_kind("LIMIT", &[StatementKind::Select])?;
        self.limit = Some(n);
        Ok(self)
    }

    pub fn offset(mut self, n: u64) -> QuerelResult<Self> {
        self.require_kind("OFFSET", &[StatementKind::Select])?;
        self.offset = Some(n);
        Ok(self)
    }

    fn join_with_kind(
        self,
        source: impl Into<Selectable>,
        kind: JoinKind,
    ) -> QuerelResult<Joiner> {
        self.require_kind("JOIN", &[StatementKind::Select])?;
        Ok(Joiner {
            builder: self,
            selectable: source.into(),
            kind,
        })
    }

    /// Inner join; commit with [`Joiner::on`].
    pub fn join(self, source: impl Into<Selectable>) -> QuerelResult<Joiner> {
        self.join_with_kind(source, JoinKind::Inner)
    }

    pub fn left_join(self, source: impl Into<Selectable>) -> QuerelResult<Joiner> {
        self.join_with_kind(source, JoinKind::Left)
    }

    pub fn right_join(self, source: impl Into<Selectable>) -> QuerelResult<Joiner> {
        self.join_with_kind(source, JoinKind::Right)
    }

    pub fn outer_join(self, source: impl Into<Selectable>) -> QuerelResult<Joiner> {
        self.join_with_kind(source, JoinKind::Outer)
    }

    /// Cross join: committed immediately, no ON condition.
    pub fn cross_join(mut self, source: impl Into<Selectable>) -> QuerelResult<Self> {
        self.require_kind("JOIN", &[StatementKind::Select])?;
        let source = self.attach(source.into());
        self.joins.push(Join {
            selectable: source,
            condition: None,
            kind: JoinKind::Cross,
        });
        Ok(self)
    }

    /// Turn a clause-free SELECT into a DELETE. Once select-list, grouping
    /// or ordering clauses exist the kind is fixed and this fails.
    pub fn delete(mut self) -> QuerelResult<Self> {
        if self.kind != StatementKind::Select {
            return Err(QuerelError::StatementKindFixed {
                wanted: StatementKind::Delete,
                reason: "builder is not a SELECT",
            });
        }
        if !self.selects.is_empty() || !self.groupbys.is_empty() || !self.orderbys.is_empty() {
            return Err(QuerelError::StatementKindFixed {
                wanted: StatementKind::Delete,
                reason: "select-list clauses were already added",
            });
        }
        self.kind = StatementKind::Delete;
        Ok(self)
    }

    /// Name the column list for an INSERT.
    pub fn columns<I>(mut self, columns: I) -> QuerelResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<FieldRef>,
    {
        self.require_kind("column list", &[StatementKind::Insert])?;
        self.columns.extend(columns.into_iter().map(Into::into));
        Ok(self)
    }

    /// Append one VALUES row.
    pub fn insert<I>(mut self, row: I) -> QuerelResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<Term>,
    {
        self.require_kind("VALUES", &[StatementKind::Insert])?;
        self.rows.push(row.into_iter().map(Into::into).collect());
        Ok(self)
    }

    /// Request IGNORE on INSERT. Fails on dialects without that syntax.
    pub fn ignore(mut self) -> QuerelResult<Self> {
        self.require_kind("IGNORE", &[StatementKind::Insert])?;
        if !self.dialect.supports_insert_ignore {
            return Err(QuerelError::IgnoreNotSupported {
                dialect: self.dialect.name,
            });
        }
        self.ignore = true;
        Ok(self)
    }

    /// Add one SET assignment for an UPDATE.
    pub fn set(
        mut self,
        field: impl Into<FieldRef>,
        value: impl Into<Term>,
    ) -> QuerelResult<Self> {
        self.require_kind("SET", &[StatementKind::Update])?;
        self.assignments.push((field.into(), value.into()));
        Ok(self)
    }

    /// Add a column definition to a CREATE TABLE.
    pub fn column(mut self, def: ColumnDef) -> QuerelResult<Self> {
        self.require_kind("column definition", &[StatementKind::CreateTable])?;
        self.create_columns.push(def);
        Ok(self)
    }

    pub fn primary_key<I, S>(mut self, columns: I) -> QuerelResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.require_kind("PRIMARY KEY", &[StatementKind::CreateTable])?;
        self.primary_key.extend(columns.into_iter().map(Into::into));
        Ok(self)
    }

    pub fn temporary(mut self) -> QuerelResult<Self> {
        self.require_kind("TEMPORARY", &[StatementKind::CreateTable])?;
        self.temporary = true;
        Ok(self)
    }

    pub fn if_not_exists(mut self) -> QuerelResult<Self> {
        self.require_kind("IF NOT EXISTS", &[StatementKind::CreateTable])?;
        self.if_not_exists = true;
        Ok(self)
    }

    /// Populate a CREATE TABLE from a SELECT instead of column definitions.
    pub fn as_select(mut self, query: QueryBuilder) -> QuerelResult<Self> {
        self.require_kind("AS SELECT", &[StatementKind::CreateTable])?;
        self.as_select = Some(Box::new(query));
        Ok(self)
    }

    pub fn if_exists(mut self) -> QuerelResult<Self> {
        self.require_kind("IF EXISTS", &[StatementKind::DropTable])?;
        self.if_exists = true;
        Ok(self)
    }

    /// Target table of a bulk LOAD.
    pub fn into_table(mut self, table: Table) -> QuerelResult<Self> {
        self.require_kind("INTO TABLE", &[StatementKind::Load])?;
        self.insert_table = Some(table);
        Ok(self)
    }

    /// Source file of a bulk COPY.
    pub fn from_file(mut self, path: impl Into<String>) -> QuerelResult<Self> {
        self.require_kind("FROM LOCAL", &[StatementKind::Copy])?;
        self.copy_file = Some(path.into());
        Ok(self)
    }
}

/// Pending join: holds the builder until the ON condition arrives.
#[derive(Debug)]
pub struct Joiner {
    builder: QueryBuilder,
    selectable: Selectable,
    kind: JoinKind,
}

impl Joiner {
    /// Commit the join with its ON condition. The condition must be a
    /// boolean criterion.
    pub fn on(self, condition: impl Into<Term>) -> QuerelResult<QueryBuilder> {
        let condition = condition.into();
        if !condition.is_criterion() {
            return Err(QuerelError::InvalidJoinCondition);
        }
        let mut builder = self.builder;
        let selectable = builder.attach(self.selectable);
        builder.joins.push(Join {
            selectable,
            condition: Some(condition),
            kind: self.kind,
        });
        Ok(builder)
    }
}
