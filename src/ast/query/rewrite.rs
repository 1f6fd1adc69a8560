//! Structural table substitution over an assembled builder.

use crate::ast::query::QueryBuilder;
use crate::ast::table::{Selectable, Table};
use crate::ast::term::{Criterion, FieldRef, Term};

impl QueryBuilder {
    /// Replace every reference to `old` with `new`, in every clause of this
    /// statement: FROM, joins and their conditions, the select list, WHERE,
    /// GROUP BY, HAVING, ORDER BY, UPDATE assignments, INSERT columns and
    /// rows, and the statement's target table. Matching uses the table's
    /// declared equality (name, schema, alias), so a same-named table with a
    /// different alias is left alone. If `old` does not occur anywhere this
    /// is a no-op. Returns the builder for further chaining.
    pub fn replace_table(mut self, old: &Table, new: &Table) -> Self {
        if let Some(from) = &mut self.from_ {
            replace_selectable(from, old, new);
        }
        for join in &mut self.joins {
            replace_selectable(&mut join.selectable, old, new);
            if let Some(condition) = &mut join.condition {
                replace_in_term(condition, old, new);
            }
        }
        for term in &mut self.selects {
            replace_in_term(term, old, new);
        }
        if let Some(wheres) = &mut self.wheres {
            replace_in_term(wheres, old, new);
        }
        for term in &mut self.groupbys {
            replace_in_term(term, old, new);
        }
        if let Some(havings) = &mut self.havings {
            replace_in_term(havings, old, new);
        }
        for (term, _) in &mut self.orderbys {
            replace_in_term(term, old, new);
        }
        for (field, value) in &mut self.assignments {
            replace_in_field(field, old, new);
            replace_in_term(value, old, new);
        }
        for field in &mut self.columns {
            replace_in_field(field, old, new);
        }
        for row in &mut self.rows {
            for term in row {
                replace_in_term(term, old, new);
            }
        }
        replace_table_slot(&mut self.insert_table, old, new);
        replace_table_slot(&mut self.update_table, old, new);
        replace_table_slot(&mut self.ddl_table, old, new);
        if let Some(as_select) = self.as_select.take() {
            self.as_select = Some(Box::new(as_select.replace_table(old, new)));
        }
        self
    }

    /// True iff `table` is the FROM source or the source of any join.
    pub fn is_joined(&self, table: &Table) -> bool {
        let matches_source = |s: &Selectable| s.as_table().is_some_and(|t| t == table);
        self.from_.as_ref().is_some_and(matches_source)
            || self.joins.iter().any(|j| matches_source(&j.selectable))
    }
}

fn replace_table_slot(slot: &mut Option<Table>, old: &Table, new: &Table) {
    if let Some(table) = slot {
        if table == old {
            *slot = Some(new.clone());
        }
    }
}

fn replace_selectable(selectable: &mut Selectable, old: &Table, new: &Table) {
    if let Selectable::Table(table) = selectable {
        if table == old {
            *selectable = Selectable::Table(new.clone());
        }
    }
}

fn replace_in_field(field: &mut FieldRef, old: &Table, new: &Table) {
    if let Some(table) = &mut field.table {
        replace_selectable(table, old, new);
    }
}

/// Recursive rewrite over a term tree. Embedded queries (derived tables,
/// EXISTS bodies) are independent statements and are not descended into.
fn replace_in_term(term: &mut Term, old: &Table, new: &Table) {
    match term {
        Term::Field(field) => replace_in_field(field, old, new),
        Term::Literal(_) => {}
        Term::Function { args, .. } => {
            for arg in args {
                replace_in_term(arg, old, new);
            }
        }
        Term::Arithmetic { left, right, .. } => {
            replace_in_term(left, old, new);
            replace_in_term(right, old, new);
        }
        Term::Criterion(criterion) => replace_in_criterion(criterion, old, new),
        Term::Case(case) => {
            for (condition, result) in &mut case.whens {
                replace_in_term(condition, old, new);
                replace_in_term(result, old, new);
            }
            if let Some(else_) = &mut case.else_ {
                replace_in_term(else_, old, new);
            }
        }
        Term::Tuple(elements) => {
            for element in elements {
                replace_in_term(element, old, new);
            }
        }
        Term::Star(qualifier) => {
            if let Some(selectable) = qualifier {
                replace_selectable(selectable, old, new);
            }
        }
        Term::Aliased { term, .. } => replace_in_term(term, old, new),
    }
}

fn replace_in_criterion(criterion: &mut Criterion, old: &Table, new: &Table) {
    match criterion {
        Criterion::Compare { left, right, .. } | Criterion::Logical { left, right, .. } => {
            replace_in_term(left, old, new);
            replace_in_term(right, old, new);
        }
        Criterion::Not(operand) => replace_in_term(operand, old, new),
        Criterion::Between {
            term, low, high, ..
        } => {
            replace_in_term(term, old, new);
            replace_in_term(low, old, new);
            replace_in_term(high, old, new);
        }
        Criterion::IsNull { term, .. } => replace_in_term(term, old, new),
        Criterion::In { term, list, .. } => {
            replace_in_term(term, old, new);
            for element in list {
                replace_in_term(element, old, new);
            }
        }
        Criterion::Exists { .. } => {}
    }
}
