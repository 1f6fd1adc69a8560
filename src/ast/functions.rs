//! Shorthand constructors for common SQL functions.

use crate::ast::term::Term;

fn unary(name: &str, term: impl Into<Term>) -> Term {
    Term::Function {
        name: name.to_string(),
        args: vec![term.into()],
    }
}

pub fn sum(term: impl Into<Term>) -> Term {
    unary("SUM", term)
}

pub fn count(term: impl Into<Term>) -> Term {
    unary("COUNT", term)
}

/// `COUNT(*)`.
pub fn count_star() -> Term {
    unary("COUNT", Term::star())
}

pub fn avg(term: impl Into<Term>) -> Term {
    unary("AVG", term)
}

pub fn min(term: impl Into<Term>) -> Term {
    unary("MIN", term)
}

pub fn max(term: impl Into<Term>) -> Term {
    unary("MAX", term)
}

pub fn abs(term: impl Into<Term>) -> Term {
    unary("ABS", term)
}

pub fn coalesce<I>(terms: I) -> Term
where
    I: IntoIterator,
    I::Item: Into<Term>,
{
    Term::function("COALESCE", terms)
}

pub fn lower(term: impl Into<Term>) -> Term {
    unary("LOWER", term)
}

pub fn upper(term: impl Into<Term>) -> Term {
    unary("UPPER", term)
}
