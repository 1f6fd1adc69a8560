//! CREATE TABLE / DROP TABLE SQL generation.

use crate::ast::query::QueryBuilder;
use crate::transpiler::dialect::{CreateTableStyle, Dialect};
use crate::transpiler::term::render_value;
use crate::transpiler::{render_query, render_table_name};

pub(crate) fn render_create_table(q: &QueryBuilder, d: &Dialect) -> String {
    let Some(table) = &q.ddl_table else {
        return String::new();
    };

    let mut sql = String::from("CREATE ");
    if q.temporary {
        match d.create_table_style {
            CreateTableStyle::Standard => sql.push_str("TEMPORARY "),
            CreateTableStyle::LocalTemporary => sql.push_str("LOCAL TEMPORARY "),
        }
    }
    sql.push_str("TABLE ");
    if q.if_not_exists {
        sql.push_str("IF NOT EXISTS ");
    }
    sql.push_str(&render_table_name(table, d));

    if let Some(as_select) = &q.as_select {
        sql.push_str(&format!(" AS ({})", render_query(as_select, d)));
    } else if !q.create_columns.is_empty() {
        let mut parts: Vec<String> = q
            .create_columns
            .iter()
            .map(|c| {
                let mut part = format!("{} {}", d.quote(&c.name), c.sql_type);
                if !c.nullable {
                    part.push_str(" NOT NULL");
                }
                if let Some(default) = &c.default {
                    part.push_str(&format!(" DEFAULT {}", render_value(default, d)));
                }
                part
            })
            .collect();
        if !q.primary_key.is_empty() {
            let keys: Vec<String> = q.primary_key.iter().map(|k| d.quote(k)).collect();
            parts.push(format!("PRIMARY KEY ({})", keys.join(",")));
        }
        sql.push_str(&format!(" ({})", parts.join(",")));
    }

    if q.temporary && d.create_table_style == CreateTableStyle::LocalTemporary {
        sql.push_str(" ON COMMIT PRESERVE ROWS");
    }
    sql
}

pub(crate) fn render_drop_table(q: &QueryBuilder, d: &Dialect) -> String {
    let Some(table) = &q.ddl_table else {
        return String::new();
    };
    let mut sql = String::from("DROP TABLE ");
    if q.if_exists {
        sql.push_str("IF EXISTS ");
    }
    sql.push_str(&render_table_name(table, d));
    sql
}
