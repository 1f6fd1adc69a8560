//! Expression nodes and their composition operations.
//!
//! Every composition method builds a new [`Term`] from its operands; the
//! operands themselves are never mutated, so a term can be cloned and reused
//! in any number of expressions.

use crate::ast::case::CaseExpr;
use crate::ast::operators::{ArithOp, Comparator, LogicOp};
use crate::ast::query::QueryBuilder;
use crate::ast::table::Selectable;
use crate::ast::values::Value;

/// A reference to a column, optionally owned by a table or derived table.
///
/// The owning table is kept as a live [`Selectable`] link; the table's alias
/// is resolved when the query is rendered, not when the reference is built.
#[derive(Debug, Clone)]
pub struct FieldRef {
    pub name: String,
    pub table: Option<Selectable>,
}

impl FieldRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table: None,
        }
    }

    pub fn table(mut self, table: impl Into<Selectable>) -> Self {
        self.table = Some(table.into());
        self
    }

    pub fn eq(self, rhs: impl Into<Term>) -> Term {
        Term::from(self).eq(rhs)
    }

    pub fn ne(self, rhs: impl Into<Term>) -> Term {
        Term::from(self).ne(rhs)
    }

    pub fn gt(self, rhs: impl Into<Term>) -> Term {
        Term::from(self).gt(rhs)
    }

    pub fn gte(self, rhs: impl Into<Term>) -> Term {
        Term::from(self).gte(rhs)
    }

    pub fn lt(self, rhs: impl Into<Term>) -> Term {
        Term::from(self).lt(rhs)
    }

    pub fn lte(self, rhs: impl Into<Term>) -> Term {
        Term::from(self).lte(rhs)
    }

    pub fn like(self, pattern: impl Into<Term>) -> Term {
        Term::from(self).like(pattern)
    }

    pub fn not_like(self, pattern: impl Into<Term>) -> Term {
        Term::from(self).not_like(pattern)
    }

    pub fn between(self, low: impl Into<Term>, high: impl Into<Term>) -> Term {
        Term::from(self).between(low, high)
    }

    pub fn isin<I>(self, values: I) -> Term
    where
        I: IntoIterator,
        I::Item: Into<Term>,
    {
        Term::from(self).isin(values)
    }

    pub fn is_null(self) -> Term {
        Term::from(self).is_null()
    }

    pub fn is_not_null(self) -> Term {
        Term::from(self).is_not_null()
    }

    pub fn add(self, rhs: impl Into<Term>) -> Term {
        Term::from(self).add(rhs)
    }

    pub fn sub(self, rhs: impl Into<Term>) -> Term {
        Term::from(self).sub(rhs)
    }

    pub fn mul(self, rhs: impl Into<Term>) -> Term {
        Term::from(self).mul(rhs)
    }

    pub fn div(self, rhs: impl Into<Term>) -> Term {
        Term::from(self).div(rhs)
    }

    pub fn as_(self, alias: impl Into<String>) -> Term {
        Term::from(self).as_(alias)
    }
}

impl From<&str> for FieldRef {
    fn from(name: &str) -> Self {
        FieldRef::new(name)
    }
}

impl From<String> for FieldRef {
    fn from(name: String) -> Self {
        FieldRef::new(name)
    }
}

/// An expression node.
#[derive(Debug, Clone)]
pub enum Term {
    Field(FieldRef),
    Literal(Value),
    Function {
        name: String,
        args: Vec<Term>,
    },
    Arithmetic {
        op: ArithOp,
        left: Box<Term>,
        right: Box<Term>,
    },
    Criterion(Criterion),
    Case(CaseExpr),
    Tuple(Vec<Term>),
    /// `*` or `table.*`.
    Star(Option<Selectable>),
    Aliased {
        term: Box<Term>,
        alias: String,
    },
}

/// A boolean-valued term usable in WHERE/HAVING/ON clauses.
#[derive(Debug, Clone)]
pub enum Criterion {
    Compare {
        op: Comparator,
        left: Box<Term>,
        right: Box<Term>,
    },
    Logical {
        op: LogicOp,
        left: Box<Term>,
        right: Box<Term>,
    },
    Not(Box<Term>),
    Between {
        term: Box<Term>,
        low: Box<Term>,
        high: Box<Term>,
        negated: bool,
    },
    IsNull {
        term: Box<Term>,
        negated: bool,
    },
    In {
        term: Box<Term>,
        list: Vec<Term>,
        negated: bool,
    },
    Exists {
        query: Box<QueryBuilder>,
        negated: bool,
    },
}

impl Term {
    /// An arbitrary function call.
    pub fn function<I>(name: impl Into<String>, args: I) -> Term
    where
        I: IntoIterator,
        I::Item: Into<Term>,
    {
        Term::Function {
            name: name.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// A tuple of terms, `(a,b,...)`.
    pub fn tuple<I>(elements: I) -> Term
    where
        I: IntoIterator,
        I::Item: Into<Term>,
    {
        Term::Tuple(elements.into_iter().map(Into::into).collect())
    }

    /// The unqualified `*` select target.
    pub fn star() -> Term {
        Term::Star(None)
    }

    /// `EXISTS (subquery)`.
    pub fn exists(query: QueryBuilder) -> Term {
        Term::Criterion(Criterion::Exists {
            query: Box::new(query),
            negated: false,
        })
    }

    /// `NOT EXISTS (subquery)`.
    pub fn not_exists(query: QueryBuilder) -> Term {
        Term::Criterion(Criterion::Exists {
            query: Box::new(query),
            negated: true,
        })
    }

    /// Whether this term is boolean-valued and may serve as a WHERE/HAVING/ON
    /// condition.
    pub fn is_criterion(&self) -> bool {
        matches!(self, Term::Criterion(_))
    }

    fn compare(self, op: Comparator, rhs: impl Into<Term>) -> Term {
        let rhs = rhs.into();
        // Comparisons against the NULL literal fold into IS [NOT] NULL.
        if let Term::Literal(v) = &rhs {
            if v.is_null() {
                match op {
                    Comparator::Eq => return self.is_null(),
                    Comparator::Ne => return self.is_not_null(),
                    _ => {}
                }
            }
        }
        // Tuple-to-tuple comparisons render with operands reversed (see
        // DESIGN.md).
        let (left, right) =
            if matches!(self, Term::Tuple(_)) && matches!(rhs, Term::Tuple(_)) {
                (rhs, self)
            } else {
                (self, rhs)
            };
        Term::Criterion(Criterion::Compare {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn eq(self, rhs: impl Into<Term>) -> Term {
        self.compare(Comparator::Eq, rhs)
    }

    pub fn ne(self, rhs: impl Into<Term>) -> Term {
        self.compare(Comparator::Ne, rhs)
    }

    pub fn gt(self, rhs: impl Into<Term>) -> Term {
        self.compare(Comparator::Gt, rhs)
    }

    pub fn gte(self, rhs: impl Into<Term>) -> Term {
        self.compare(Comparator::Gte, rhs)
    }

    pub fn lt(self, rhs: impl Into<Term>) -> Term {
        self.compare(Comparator::Lt, rhs)
    }

    pub fn lte(self, rhs: impl Into<Term>) -> Term {
        self.compare(Comparator::Lte, rhs)
    }

    pub fn like(self, pattern: impl Into<Term>) -> Term {
        self.compare(Comparator::Like, pattern)
    }

    pub fn not_like(self, pattern: impl Into<Term>) -> Term {
        self.compare(Comparator::NotLike, pattern)
    }

    pub fn ilike(self, pattern: impl Into<Term>) -> Term {
        self.compare(Comparator::ILike, pattern)
    }

    pub fn and_(self, rhs: impl Into<Term>) -> Term {
        Term::Criterion(Criterion::Logical {
            op: LogicOp::And,
            left: Box::new(self),
            right: Box::new(rhs.into()),
        })
    }

    pub fn or_(self, rhs: impl Into<Term>) -> Term {
        Term::Criterion(Criterion::Logical {
            op: LogicOp::Or,
            left: Box::new(self),
            right: Box::new(rhs.into()),
        })
    }

    /// `NOT (self)`.
    pub fn negate(self) -> Term {
        Term::Criterion(Criterion::Not(Box::new(self)))
    }

    pub fn between(self, low: impl Into<Term>, high: impl Into<Term>) -> Term {
        Term::Criterion(Criterion::Between {
            term: Box::new(self),
            low: Box::new(low.into()),
            high: Box::new(high.into()),
            negated: false,
        })
    }

    pub fn not_between(self, low: impl Into<Term>, high: impl Into<Term>) -> Term {
        Term::Criterion(Criterion::Between {
            term: Box::new(self),
            low: Box::new(low.into()),
            high: Box::new(high.into()),
            negated: true,
        })
    }

    pub fn isin<I>(self, values: I) -> Term
    where
        I: IntoIterator,
        I::Item: Into<Term>,
    {
        Term::Criterion(Criterion::In {
            term: Box::new(self),
            list: values.into_iter().map(Into::into).collect(),
            negated: false,
        })
    }

    pub fn not_in<I>(self, values: I) -> Term
    where
        I: IntoIterator,
        I::Item: Into<Term>,
    {
        Term::Criterion(Criterion::In {
            term: Box::new(self),
            list: values.into_iter().map(Into::into).collect(),
            negated: true,
        })
    }

    pub fn is_null(self) -> Term {
        Term::Criterion(Criterion::IsNull {
            term: Box::new(self),
            negated: false,
        })
    }

    pub fn is_not_null(self) -> Term {
        Term::Criterion(Criterion::IsNull {
            term: Box::new(self),
            negated: true,
        })
    }

    fn arithmetic(self, op: ArithOp, rhs: impl Into<Term>) -> Term {
        Term::Arithmetic {
            op,
            left: Box::new(self),
            right: Box::new(rhs.into()),
        }
    }

    pub fn add(self, rhs: impl Into<Term>) -> Term {
        self.arithmetic(ArithOp::Add, rhs)
    }

    pub fn sub(self, rhs: impl Into<Term>) -> Term {
        self.arithmetic(ArithOp::Sub, rhs)
    }

    pub fn mul(self, rhs: impl Into<Term>) -> Term {
        self.arithmetic(ArithOp::Mul, rhs)
    }

    pub fn div(self, rhs: impl Into<Term>) -> Term {
        self.arithmetic(ArithOp::Div, rhs)
    }

    pub fn modulo(self, rhs: impl Into<Term>) -> Term {
        self.arithmetic(ArithOp::Rem, rhs)
    }

    /// Attach a select-list alias, rendered as `expr "alias"`.
    pub fn as_(self, alias: impl Into<String>) -> Term {
        Term::Aliased {
            term: Box::new(self),
            alias: alias.into(),
        }
    }
}

/// A literal term.
pub fn lit(value: impl Into<Value>) -> Term {
    Term::Literal(value.into())
}

/// An unqualified column reference.
pub fn col(name: impl Into<String>) -> FieldRef {
    FieldRef::new(name)
}

impl From<FieldRef> for Term {
    fn from(f: FieldRef) -> Self {
        Term::Field(f)
    }
}

impl From<Criterion> for Term {
    fn from(c: Criterion) -> Self {
        Term::Criterion(c)
    }
}

impl From<Value> for Term {
    fn from(v: Value) -> Self {
        Term::Literal(v)
    }
}

impl From<bool> for Term {
    fn from(b: bool) -> Self {
        Term::Literal(Value::Bool(b))
    }
}

impl From<i32> for Term {
    fn from(n: i32) -> Self {
        Term::Literal(Value::Int(n as i64))
    }
}

impl From<i64> for Term {
    fn from(n: i64) -> Self {
        Term::Literal(Value::Int(n))
    }
}

impl From<f64> for Term {
    fn from(n: f64) -> Self {
        Term::Literal(Value::Float(n))
    }
}

impl From<&str> for Term {
    fn from(s: &str) -> Self {
        Term::Literal(Value::String(s.to_string()))
    }
}

impl From<String> for Term {
    fn from(s: String) -> Self {
        Term::Literal(Value::String(s))
    }
}

impl<A, B> From<(A, B)> for Term
where
    A: Into<Term>,
    B: Into<Term>,
{
    fn from((a, b): (A, B)) -> Self {
        Term::Tuple(vec![a.into(), b.into()])
    }
}

impl<A, B, C> From<(A, B, C)> for Term
where
    A: Into<Term>,
    B: Into<Term>,
    C: Into<Term>,
{
    fn from((a, b, c): (A, B, C)) -> Self {
        Term::Tuple(vec![a.into(), b.into(), c.into()])
    }
}
