//! Bulk ingestion statements: COPY (Vertica) and LOAD DATA (MySQL).

use crate::ast::query::QueryBuilder;
use crate::transpiler::dialect::Dialect;
use crate::transpiler::render_table_name;

pub(crate) fn render_copy(q: &QueryBuilder, d: &Dialect) -> String {
    let (Some(table), Some(path)) = (&q.ddl_table, &q.copy_file) else {
        return String::new();
    };
    format!(
        "COPY {} FROM LOCAL {} PARSER fcsvparser(header=false)",
        render_table_name(table, d),
        d.quote_string(path)
    )
}

pub(crate) fn render_load(q: &QueryBuilder, d: &Dialect) -> String {
    let (Some(path), Some(table)) = (&q.load_file, &q.insert_table) else {
        return String::new();
    };
    format!(
        "LOAD DATA LOCAL INFILE {} INTO TABLE {} FIELDS TERMINATED BY ','",
        d.quote_string(path),
        render_table_name(table, d)
    )
}
