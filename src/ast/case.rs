//! CASE expression builder.

use crate::ast::term::Term;

/// A finished `CASE WHEN .. THEN .. [ELSE ..] END` expression node.
#[derive(Debug, Clone)]
pub struct CaseExpr {
    pub whens: Vec<(Term, Term)>,
    pub else_: Option<Box<Term>>,
}

/// Fluent builder for CASE expressions.
///
/// ```ignore
/// Case::new()
///     .when(t.field("fname").eq("Tom"), "It was Tom")
///     .else_("someone else")
///     .as_("who_was_it")
/// ```
#[derive(Debug, Clone, Default)]
pub struct Case {
    whens: Vec<(Term, Term)>,
    else_: Option<Term>,
}

impl Case {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a WHEN branch. The condition is rendered as given; the result may
    /// be any term.
    pub fn when(mut self, condition: impl Into<Term>, then: impl Into<Term>) -> Self {
        self.whens.push((condition.into(), then.into()));
        self
    }

    pub fn else_(mut self, value: impl Into<Term>) -> Self {
        self.else_ = Some(value.into());
        self
    }

    /// Finish the CASE and attach a select-list alias.
    pub fn as_(self, alias: impl Into<String>) -> Term {
        Term::from(self).as_(alias)
    }
}

impl From<Case> for Term {
    fn from(case: Case) -> Self {
        Term::Case(CaseExpr {
            whens: case.whens,
            else_: case.else_.map(Box::new),
        })
    }
}
