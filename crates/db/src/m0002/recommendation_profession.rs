use sea_query::{ColumnDef, Table, TableAlterStatement};

use crate::table::Recommendation;

pub struct AddColumn;

fn add_column() -> TableAlterStatement {
    Table::alter()
        .table(Recommendation::Table)
        .add_column(
            ColumnDef::new(Recommendation::Profession)
                .string()
                .not_null()
                .string_len(200)
                .default(""),
        )
        .to_owned()
}

fn drop_column() -> TableAlterStatement {
    Table::alter()
        .table(Recommendation::Table)
        .drop_column(Recommendation::Profession)
        .to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for AddColumn {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = add_column().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_column().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
