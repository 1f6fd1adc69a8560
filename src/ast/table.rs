//! FROM/JOIN sources: physical tables and derived (sub)queries.

use std::cell::{Cell, OnceCell};
use std::rc::Rc;

use crate::ast::query::QueryBuilder;
use crate::ast::term::{FieldRef, Term};

/// A physical table reference, optionally schema-qualified and aliased.
///
/// `Table` is a plain value: cloning copies it, and two tables compare equal
/// when name, schema and alias all match. This declared equality is what
/// `replace_table` and `is_joined` match on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    name: String,
    schema: Option<String>,
    alias: Option<String>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema: None,
            alias: None,
        }
    }

    /// Qualify the table with a schema namespace.
    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    /// Attach an explicit alias.
    pub fn as_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schema_name(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// A field belonging to this table. The reference keeps a link to the
    /// table itself, not to its rendered name.
    pub fn field(&self, name: impl Into<String>) -> FieldRef {
        FieldRef::new(name).table(Selectable::Table(self.clone()))
    }

    /// The `table.*` select target.
    pub fn star(&self) -> Term {
        Term::Star(Some(Selectable::Table(self.clone())))
    }
}

#[derive(Debug)]
struct DerivedInner {
    query: QueryBuilder,
    /// Write-once alias slot. Assigned either explicitly at construction
    /// time or generated by the first owning builder; never reassigned.
    alias: OnceCell<String>,
    generated: Cell<bool>,
}

/// A nested query embedded as a FROM/JOIN source.
///
/// The handle is cheap to clone and all clones share one alias slot, so a
/// field reference created from any clone observes the alias that is live at
/// render time. Handles are `Rc`-based and therefore confined to one thread.
#[derive(Debug, Clone)]
pub struct DerivedTable {
    inner: Rc<DerivedInner>,
}

impl DerivedTable {
    /// Wrap a finished query so it can be used as a table source.
    pub fn new(query: QueryBuilder) -> Self {
        Self {
            inner: Rc::new(DerivedInner {
                query,
                alias: OnceCell::new(),
                generated: Cell::new(false),
            }),
        }
    }

    /// Attach an explicit alias. Ignored with a warning if the slot was
    /// already filled: alias state is immutable once assigned.
    pub fn as_alias(self, alias: impl Into<String>) -> Self {
        let alias = alias.into();
        if self.inner.alias.set(alias).is_err() {
            tracing::warn!(
                current = ?self.inner.alias.get(),
                "derived table already carries an alias; explicit alias ignored"
            );
        }
        self
    }

    pub fn alias(&self) -> Option<&str> {
        self.inner.alias.get().map(String::as_str)
    }

    /// Whether the current alias was generated by an owning builder rather
    /// than set explicitly.
    pub fn alias_was_generated(&self) -> bool {
        self.inner.generated.get()
    }

    /// The embedded query.
    pub fn query(&self) -> &QueryBuilder {
        &self.inner.query
    }

    /// A field resolved against this derived table. The owning alias is
    /// looked up through the live handle at render time.
    pub fn field(&self, name: impl Into<String>) -> FieldRef {
        FieldRef::new(name).table(Selectable::Derived(self.clone()))
    }

    pub fn star(&self) -> Term {
        Term::Star(Some(Selectable::Derived(self.clone())))
    }

    /// Fill the alias slot with a generated name. Returns false if the slot
    /// was already occupied (the assignment is then skipped, not replayed).
    pub(crate) fn assign_generated_alias(&self, alias: String) -> bool {
        if self.inner.alias.set(alias).is_ok() {
            self.inner.generated.set(true);
            true
        } else {
            false
        }
    }
}

impl PartialEq for DerivedTable {
    /// Derived tables are equal only when they are the same instance.
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

/// Anything usable as a FROM/JOIN source.
#[derive(Debug, Clone, PartialEq)]
pub enum Selectable {
    Table(Table),
    Derived(DerivedTable),
}

impl Selectable {
    /// The name an outer clause uses to reference this source: its alias if
    /// one is set, otherwise the table name. Unaliased derived tables have
    /// no reference name until an owning builder assigns one.
    pub fn reference_name(&self) -> Option<String> {
        match self {
            Selectable::Table(t) => Some(t.alias().unwrap_or(t.name()).to_string()),
            Selectable::Derived(d) => d.alias().map(str::to_string),
        }
    }

    pub fn alias(&self) -> Option<String> {
        match self {
            Selectable::Table(t) => t.alias().map(str::to_string),
            Selectable::Derived(d) => d.alias().map(str::to_string),
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Selectable::Table(t) => Some(t),
            Selectable::Derived(_) => None,
        }
    }
}

impl From<Table> for Selectable {
    fn from(t: Table) -> Self {
        Selectable::Table(t)
    }
}

impl From<&Table> for Selectable {
    fn from(t: &Table) -> Self {
        Selectable::Table(t.clone())
    }
}

impl From<DerivedTable> for Selectable {
    fn from(d: DerivedTable) -> Self {
        Selectable::Derived(d)
    }
}

impl From<&DerivedTable> for Selectable {
    fn from(d: &DerivedTable) -> Self {
        Selectable::Derived(d.clone())
    }
}
