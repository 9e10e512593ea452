use sea_query::{
    ColumnDef, ForeignKey, ForeignKeyAction, Table, TableCreateStatement, TableDropStatement,
};

use crate::table::{Recommendation, Step};

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Step::Table)
        .col(
            ColumnDef::new(Step::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(Step::Title)
                .string()
                .not_null()
                .string_len(200),
        )
        .col(ColumnDef::new(Step::RecommendationId).integer().not_null())
        .foreign_key(
            ForeignKey::create()
                .name("fk_step_recommendation_id")
                .from(Step::Table, Step::RecommendationId)
                .to(Recommendation::Table, Recommendation::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Step::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
