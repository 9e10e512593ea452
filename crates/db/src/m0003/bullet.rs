use sea_query::{
    ColumnDef, ForeignKey, ForeignKeyAction, IntoTableRef, Table, TableCreateStatement,
    TableDropStatement,
};

use crate::table::{Bullet, Step};

pub struct CreateTable;

/// Builds the bullet table under `table`, with or without the step reference.
///
/// Shared with the `recommendation` field operation, which rebuilds the table
/// because SQLite cannot attach a foreign key through `ALTER TABLE`.
pub(super) fn bullet_table<T: IntoTableRef>(table: T, with_step: bool) -> TableCreateStatement {
    let mut statement = Table::create();
    statement
        .table(table)
        .col(
            ColumnDef::new(Bullet::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Bullet::Description).text().not_null())
        .col(
            ColumnDef::new(Bullet::LinkName)
                .string()
                .not_null()
                .string_len(200),
        )
        .col(
            ColumnDef::new(Bullet::Link)
                .string()
                .not_null()
                .string_len(350),
        );

    if with_step {
        statement
            .col(
                ColumnDef::new(Bullet::RecommendationId)
                    .integer()
                    .not_null(),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_bullet_recommendation_id")
                    .from(Bullet::Table, Bullet::RecommendationId)
                    .to(Step::Table, Step::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            );
    }

    statement.to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Bullet::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement =
            bullet_table(Bullet::Table, false).to_string(sea_query::SqliteQueryBuilder);
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
