//! Dialect configuration.
//!
//! A dialect is a plain bundle of rendering decisions consulted by the one
//! generic renderer — quote characters, literal styles, pagination syntax
//! and the set of statement kinds the target database accepts. Two dialects
//! compare equal when they carry the same name, which is the identity a
//! builder's `dialect()` is checked against.

use serde::{Deserialize, Serialize};

use crate::ast::operators::StatementKind;

/// Positional parameter placeholder style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaceholderStyle {
    /// `?`
    QMark,
    /// `$1`, `$2`, …
    Numbered,
    /// `%s`
    Percent,
}

/// How LIMIT/OFFSET render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LimitStyle {
    /// `LIMIT n OFFSET m`
    LimitOffset,
    /// `OFFSET m ROWS FETCH NEXT n ROWS ONLY`
    OffsetFetch,
}

/// How boolean literals render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoolStyle {
    /// `true` / `false`
    Keyword,
    /// `1` / `0`
    Numeric,
}

/// CREATE TABLE syntax variant for temporary tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreateTableStyle {
    /// `CREATE TEMPORARY TABLE …`
    Standard,
    /// `CREATE LOCAL TEMPORARY TABLE … ON COMMIT PRESERVE ROWS`
    LocalTemporary,
}

/// A named rendering configuration for one target database.
#[derive(Debug)]
pub struct Dialect {
    pub name: &'static str,
    /// Identifier quote character; `None` renders identifiers bare.
    pub quote_char: Option<char>,
    pub string_quote_char: char,
    /// Alias quote character; `None` renders aliases bare.
    pub alias_quote_char: Option<char>,
    pub placeholder: PlaceholderStyle,
    pub limit_style: LimitStyle,
    pub bool_style: BoolStyle,
    pub supports_insert_ignore: bool,
    pub create_table_style: CreateTableStyle,
    /// UPDATE/DELETE render as `ALTER TABLE … UPDATE/DELETE` mutations.
    pub mutate_via_alter: bool,
    /// Statement kinds this dialect accepts at builder construction.
    pub statements: &'static [StatementKind],
}

impl PartialEq for Dialect {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Dialect {}

impl Dialect {
    pub fn supports(&self, kind: StatementKind) -> bool {
        self.statements.contains(&kind)
    }

    /// Quote an identifier, doubling embedded quote characters.
    pub(crate) fn quote(&self, identifier: &str) -> String {
        quote_with(identifier, self.quote_char)
    }

    /// Quote an alias, doubling embedded quote characters.
    pub(crate) fn quote_alias(&self, alias: &str) -> String {
        quote_with(alias, self.alias_quote_char)
    }

    /// Quote a string literal, doubling embedded string-quote characters.
    pub(crate) fn quote_string(&self, value: &str) -> String {
        let q = self.string_quote_char;
        let doubled = format!("{q}{q}");
        format!("{q}{}{q}", value.replace(q, &doubled))
    }

    pub(crate) fn bool_literal(&self, value: bool) -> &'static str {
        match (self.bool_style, value) {
            (BoolStyle::Keyword, true) => "true",
            (BoolStyle::Keyword, false) => "false",
            (BoolStyle::Numeric, true) => "1",
            (BoolStyle::Numeric, false) => "0",
        }
    }

    pub(crate) fn placeholder_for(&self, index: usize) -> String {
        match self.placeholder {
            PlaceholderStyle::QMark => "?".to_string(),
            PlaceholderStyle::Numbered => format!("${index}"),
            PlaceholderStyle::Percent => "%s".to_string(),
        }
    }
}

fn quote_with(part: &str, quote: Option<char>) -> String {
    match quote {
        Some(q) => {
            let doubled = format!("{q}{q}");
            format!("{q}{}{q}", part.replace(q, &doubled))
        }
        None => part.to_string(),
    }
}

const STANDARD_STATEMENTS: &[StatementKind] = &[
    StatementKind::Select,
    StatementKind::Insert,
    StatementKind::Update,
    StatementKind::Delete,
    StatementKind::CreateTable,
    StatementKind::DropTable,
];

const MYSQL_STATEMENTS: &[StatementKind] = &[
    StatementKind::Select,
    StatementKind::Insert,
    StatementKind::Update,
    StatementKind::Delete,
    StatementKind::CreateTable,
    StatementKind::DropTable,
    StatementKind::Load,
];

const VERTICA_STATEMENTS: &[StatementKind] = &[
    StatementKind::Select,
    StatementKind::Insert,
    StatementKind::Update,
    StatementKind::Delete,
    StatementKind::CreateTable,
    StatementKind::DropTable,
    StatementKind::Copy,
];

pub static GENERIC: Dialect = Dialect {
    name: "generic",
    quote_char: Some('"'),
    string_quote_char: '\'',
    alias_quote_char: Some('"'),
    placeholder: PlaceholderStyle::QMark,
    limit_style: LimitStyle::LimitOffset,
    bool_style: BoolStyle::Keyword,
    supports_insert_ignore: false,
    create_table_style: CreateTableStyle::Standard,
    mutate_via_alter: false,
    statements: STANDARD_STATEMENTS,
};

pub static MYSQL: Dialect = Dialect {
    name: "mysql",
    quote_char: Some('`'),
    string_quote_char: '\'',
    alias_quote_char: Some('`'),
    placeholder: PlaceholderStyle::QMark,
    limit_style: LimitStyle::LimitOffset,
    bool_style: BoolStyle::Keyword,
    supports_insert_ignore: true,
    create_table_style: CreateTableStyle::Standard,
    mutate_via_alter: false,
    statements: MYSQL_STATEMENTS,
};

pub static POSTGRESQL: Dialect = Dialect {
    name: "postgresql",
    quote_char: Some('"'),
    string_quote_char: '\'',
    alias_quote_char: Some('"'),
    placeholder: PlaceholderStyle::Numbered,
    limit_style: LimitStyle::LimitOffset,
    bool_style: BoolStyle::Keyword,
    supports_insert_ignore: false,
    create_table_style: CreateTableStyle::Standard,
    mutate_via_alter: false,
    statements: STANDARD_STATEMENTS,
};

pub static SQLITE: Dialect = Dialect {
    name: "sqlite",
    quote_char: Some('"'),
    string_quote_char: '\'',
    alias_quote_char: Some('"'),
    placeholder: PlaceholderStyle::QMark,
    limit_style: LimitStyle::LimitOffset,
    bool_style: BoolStyle::Numeric,
    supports_insert_ignore: false,
    create_table_style: CreateTableStyle::Standard,
    mutate_via_alter: false,
    statements: STANDARD_STATEMENTS,
};

pub static MSSQL: Dialect = Dialect {
    name: "mssql",
    quote_char: Some('"'),
    string_quote_char: '\'',
    alias_quote_char: Some('"'),
    placeholder: PlaceholderStyle::QMark,
    limit_style: LimitStyle::OffsetFetch,
    bool_style: BoolStyle::Numeric,
    supports_insert_ignore: false,
    create_table_style: CreateTableStyle::Standard,
    mutate_via_alter: false,
    statements: STANDARD_STATEMENTS,
};

pub static ORACLE: Dialect = Dialect {
    name: "oracle",
    quote_char: None,
    string_quote_char: '\'',
    alias_quote_char: None,
    placeholder: PlaceholderStyle::QMark,
    limit_style: LimitStyle::OffsetFetch,
    bool_style: BoolStyle::Keyword,
    supports_insert_ignore: false,
    create_table_style: CreateTableStyle::Standard,
    mutate_via_alter: false,
    statements: STANDARD_STATEMENTS,
};

pub static SNOWFLAKE: Dialect = Dialect {
    name: "snowflake",
    quote_char: None,
    string_quote_char: '\'',
    alias_quote_char: Some('"'),
    placeholder: PlaceholderStyle::QMark,
    limit_style: LimitStyle::LimitOffset,
    bool_style: BoolStyle::Keyword,
    supports_insert_ignore: false,
    create_table_style: CreateTableStyle::Standard,
    mutate_via_alter: false,
    statements: STANDARD_STATEMENTS,
};

pub static CLICKHOUSE: Dialect = Dialect {
    name: "clickhouse",
    quote_char: Some('"'),
    string_quote_char: '\'',
    alias_quote_char: Some('"'),
    placeholder: PlaceholderStyle::QMark,
    limit_style: LimitStyle::LimitOffset,
    bool_style: BoolStyle::Keyword,
    supports_insert_ignore: false,
    create_table_style: CreateTableStyle::Standard,
    mutate_via_alter: true,
    statements: STANDARD_STATEMENTS,
};

pub static REDSHIFT: Dialect = Dialect {
    name: "redshift",
    quote_char: Some('"'),
    string_quote_char: '\'',
    alias_quote_char: Some('"'),
    placeholder: PlaceholderStyle::Percent,
    limit_style: LimitStyle::LimitOffset,
    bool_style: BoolStyle::Keyword,
    supports_insert_ignore: false,
    create_table_style: CreateTableStyle::Standard,
    mutate_via_alter: false,
    statements: STANDARD_STATEMENTS,
};

pub static VERTICA: Dialect = Dialect {
    name: "vertica",
    quote_char: Some('"'),
    string_quote_char: '\'',
    alias_quote_char: Some('"'),
    placeholder: PlaceholderStyle::QMark,
    limit_style: LimitStyle::LimitOffset,
    bool_style: BoolStyle::Keyword,
    supports_insert_ignore: false,
    create_table_style: CreateTableStyle::LocalTemporary,
    mutate_via_alter: false,
    statements: VERTICA_STATEMENTS,
};
