//! Read back the schema the migrations produced
//!
//! Everything here goes through SQLite's `pragma_table_info` and
//! `pragma_foreign_key_list` table-valued functions.

use std::fmt;

use sqlx::SqlitePool;

use crate::error::{Error, Result};

/// Tables owned by the `recommendations` migrations, parents first.
pub const MANAGED_TABLES: [&str; 3] = ["recommendation", "step", "bullet"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    /// Declared type, lowercased (`integer`, `text`, `varchar(200)`)
    pub data_type: String,
    pub not_null: bool,
    /// 1-based position in the primary key, 0 when not part of it
    pub primary_key: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKey {
    pub column: String,
    pub references_table: String,
    pub references_column: String,
    pub on_delete: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    pub name: String,
    pub columns: Vec<Column>,
    pub foreign_keys: Vec<ForeignKey>,
}

impl TableSchema {
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }
}

impl fmt::Display for TableSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        for column in &self.columns {
            write!(f, "  {} {}", column.name, column.data_type)?;
            if column.primary_key > 0 {
                write!(f, " PRIMARY KEY")?;
            }
            if column.not_null {
                write!(f, " NOT NULL")?;
            }
            writeln!(f)?;
        }
        for fk in &self.foreign_keys {
            writeln!(
                f,
                "  {} -> {}.{} ON DELETE {}",
                fk.column, fk.references_table, fk.references_column, fk.on_delete
            )?;
        }
        Ok(())
    }
}

pub async fn table_exists(pool: &SqlitePool, table: &str) -> Result<bool> {
    let count: (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?")
            .bind(table)
            .fetch_one(pool)
            .await?;

    Ok(count.0 > 0)
}

pub async fn columns(pool: &SqlitePool, table: &str) -> Result<Vec<Column>> {
    let rows = sqlx::query_as::<_, (String, String, i64, i64)>(
        r#"SELECT name, lower(type), "notnull", pk FROM pragma_table_info(?) ORDER BY cid"#,
    )
    .bind(table)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(name, data_type, not_null, primary_key)| Column {
            name,
            data_type,
            not_null: not_null != 0,
            primary_key,
        })
        .collect())
}

pub async fn foreign_keys(pool: &SqlitePool, table: &str) -> Result<Vec<ForeignKey>> {
    let rows = sqlx::query_as::<_, (String, String, Option<String>, String)>(
        r#"SELECT "from", "table", "to", on_delete FROM pragma_foreign_key_list(?) ORDER BY id, seq"#,
    )
    .bind(table)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(
            |(column, references_table, references_column, on_delete)| ForeignKey {
                column,
                references_table,
                // NULL means the parent's primary key
                references_column: references_column.unwrap_or_else(|| "id".to_owned()),
                on_delete,
            },
        )
        .collect())
}

pub async fn describe(pool: &SqlitePool, table: &str) -> Result<TableSchema> {
    if !table_exists(pool, table).await? {
        return Err(Error::UnknownTable(table.to_owned()));
    }

    Ok(TableSchema {
        name: table.to_owned(),
        columns: columns(pool, table).await?,
        foreign_keys: foreign_keys(pool, table).await?,
    })
}
