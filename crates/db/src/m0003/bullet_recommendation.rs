use sea_query::{Alias, Table, TableDropStatement, TableRenameStatement};

use super::bullet::bullet_table;
use crate::table::Bullet;

/// Adds `bullet.recommendation_id` referencing `step` with cascade delete.
///
/// SQLite has no `ALTER TABLE ... ADD CONSTRAINT`, so both directions rebuild
/// the table: create `new__bullet`, copy the shared columns, drop `bullet`,
/// then rename `new__bullet` back into place. Existing rows have no step to
/// point to, so the copy fails on a non-empty table and the migration
/// transaction rolls back.
pub struct AddField;

const REBUILD_TABLE: &str = "new__bullet";

const COPY_ROWS: &str = r#"
    INSERT INTO "new__bullet" ("id", "description", "link_name", "link")
    SELECT "id", "description", "link_name", "link" FROM "bullet"
"#;

fn drop_table() -> TableDropStatement {
    Table::drop().table(Bullet::Table).to_owned()
}

fn rename_table() -> TableRenameStatement {
    Table::rename()
        .table(Alias::new(REBUILD_TABLE), Bullet::Table)
        .to_owned()
}

async fn rebuild(
    connection: &mut sqlx::SqliteConnection,
    with_step: bool,
) -> Result<(), sqlx_migrator::Error> {
    let create = bullet_table(Alias::new(REBUILD_TABLE), with_step)
        .to_string(sea_query::SqliteQueryBuilder);
    sqlx::query(&create).execute(&mut *connection).await?;

    sqlx::query(COPY_ROWS).execute(&mut *connection).await?;

    let drop = drop_table().to_string(sea_query::SqliteQueryBuilder);
    sqlx::query(&drop).execute(&mut *connection).await?;

    let rename = rename_table().to_string(sea_query::SqliteQueryBuilder);
    sqlx::query(&rename).execute(&mut *connection).await?;

    Ok(())
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for AddField {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        rebuild(connection, true).await
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        rebuild(connection, false).await
    }
}
