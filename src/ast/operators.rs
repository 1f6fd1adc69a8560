use serde::{Deserialize, Serialize};

/// The statement kind a builder accumulates clauses for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatementKind {
    Select,
    Insert,
    Update,
    Delete,
    CreateTable,
    DropTable,
    /// Vendor bulk export/ingest (Vertica COPY).
    Copy,
    /// Vendor bulk ingest (MySQL LOAD DATA).
    Load,
}

impl std::fmt::Display for StatementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatementKind::Select => write!(f, "SELECT"),
            StatementKind::Insert => write!(f, "INSERT"),
            StatementKind::Update => write!(f, "UPDATE"),
            StatementKind::Delete => write!(f, "DELETE"),
            StatementKind::CreateTable => write!(f, "CREATE TABLE"),
            StatementKind::DropTable => write!(f, "DROP TABLE"),
            StatementKind::Copy => write!(f, "COPY"),
            StatementKind::Load => write!(f, "LOAD"),
        }
    }
}

/// Binary comparison operator between two terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Comparator {
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
    Like,
    NotLike,
    ILike,
    NotILike,
}

impl Comparator {
    /// The rendered operator, including its surrounding spacing.
    ///
    /// Symbolic comparators render tight (`"a"="b"`), word comparators
    /// render spaced (`"a" LIKE 'b%'`).
    pub fn sql_symbol(&self) -> &'static str {
        match self {
            Comparator::Eq => "=",
            Comparator::Ne => "<>",
            Comparator::Gt => ">",
            Comparator::Gte => ">=",
            Comparator::Lt => "<",
            Comparator::Lte => "<=",
            Comparator::Like => " LIKE ",
            Comparator::NotLike => " NOT LIKE ",
            Comparator::ILike => " ILIKE ",
            Comparator::NotILike => " NOT ILIKE ",
        }
    }
}

/// Logical connective between boolean criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LogicOp {
    #[default]
    And,
    Or,
}

impl LogicOp {
    pub fn sql_keyword(&self) -> &'static str {
        match self {
            LogicOp::And => "AND",
            LogicOp::Or => "OR",
        }
    }
}

/// Arithmetic operator between two terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl ArithOp {
    pub fn sql_symbol(&self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
            ArithOp::Rem => "%",
        }
    }

    /// Additive operators bind looser than multiplicative ones; an additive
    /// operand nested under a multiplicative operator needs parentheses.
    pub fn is_additive(&self) -> bool {
        matches!(self, ArithOp::Add | ArithOp::Sub)
    }
}

/// Sort direction for ORDER BY entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn sql_keyword(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Join type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
    Outer,
    Cross,
}

impl JoinKind {
    /// The full join keyword; a plain inner join renders as bare `JOIN`.
    pub fn sql_keyword(&self) -> &'static str {
        match self {
            JoinKind::Inner => "JOIN",
            JoinKind::Left => "LEFT JOIN",
            JoinKind::Right => "RIGHT JOIN",
            JoinKind::Outer => "FULL OUTER JOIN",
            JoinKind::Cross => "CROSS JOIN",
        }
    }
}
