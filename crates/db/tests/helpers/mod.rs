#![allow(dead_code)]

use std::{path::PathBuf, str::FromStr};

use recommendations_db::table::{Bullet, Recommendation, Step};
use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

pub async fn setup_pool(path: PathBuf) -> anyhow::Result<SqlitePool> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true)
        .foreign_keys(true);

    Ok(SqlitePool::connect_with(opts).await?)
}

pub async fn run(pool: &SqlitePool, plan: Plan) -> anyhow::Result<()> {
    let mut conn = pool.acquire().await?;
    recommendations_db::migrator::<sqlx::Sqlite>()?
        .run(&mut *conn, &plan)
        .await?;

    Ok(())
}

pub async fn migrated_pool(path: PathBuf) -> anyhow::Result<SqlitePool> {
    let pool = setup_pool(path).await?;
    run(&pool, Plan::apply_all()).await?;

    Ok(pool)
}

/// `(name, lowercased type, notnull, pk)` for every column of `table`, in declaration order.
pub async fn columns(
    pool: &SqlitePool,
    table: &str,
) -> anyhow::Result<Vec<(String, String, i64, i64)>> {
    let rows = sqlx::query_as::<_, (String, String, i64, i64)>(
        r#"SELECT name, lower(type), "notnull", pk FROM pragma_table_info(?) ORDER BY cid"#,
    )
    .bind(table)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// `(from, table, to, on_delete)` for every foreign key of `table`.
pub async fn foreign_keys(
    pool: &SqlitePool,
    table: &str,
) -> anyhow::Result<Vec<(String, String, String, String)>> {
    let rows = sqlx::query_as::<_, (String, String, String, String)>(
        r#"SELECT "from", "table", "to", on_delete FROM pragma_foreign_key_list(?) ORDER BY id"#,
    )
    .bind(table)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

pub async fn table_exists(pool: &SqlitePool, table: &str) -> anyhow::Result<bool> {
    let count: (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?")
            .bind(table)
            .fetch_one(pool)
            .await?;

    Ok(count.0 == 1)
}

pub async fn count(pool: &SqlitePool, table: &str) -> anyhow::Result<i64> {
    let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM \"{table}\""))
        .fetch_one(pool)
        .await?;

    Ok(count.0)
}

pub async fn create_recommendation(pool: &SqlitePool, name: &str) -> anyhow::Result<i64> {
    let statment = Query::insert()
        .into_table(Recommendation::Table)
        .columns([Recommendation::Name])
        .values_panic([name.into()])
        .to_owned();

    let (sql, values) = statment.build_sqlx(SqliteQueryBuilder);
    let result = sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(result.last_insert_rowid())
}

pub async fn create_step(
    pool: &SqlitePool,
    recommendation_id: i64,
    title: &str,
) -> anyhow::Result<i64> {
    let statment = Query::insert()
        .into_table(Step::Table)
        .columns([Step::Title, Step::RecommendationId])
        .values_panic([title.into(), recommendation_id.into()])
        .to_owned();

    let (sql, values) = statment.build_sqlx(SqliteQueryBuilder);
    let result = sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(result.last_insert_rowid())
}

pub async fn create_bullet(
    pool: &SqlitePool,
    step_id: i64,
    link_name: &str,
) -> anyhow::Result<i64> {
    let statment = Query::insert()
        .into_table(Bullet::Table)
        .columns([
            Bullet::Description,
            Bullet::LinkName,
            Bullet::Link,
            Bullet::RecommendationId,
        ])
        .values_panic([
            "Read the getting started guide".into(),
            link_name.into(),
            "https://example.com/guide".into(),
            step_id.into(),
        ])
        .to_owned();

    let (sql, values) = statment.build_sqlx(SqliteQueryBuilder);
    let result = sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(result.last_insert_rowid())
}
