//! Database migration utilities

use sqlx::migrate::MigrateDatabase;
use sqlx::SqlitePool;
use sqlx_migrator::{Migrate, Plan};

use crate::config::Config;
use crate::error::{Error, Result};

const MIGRATION_TABLE: &str = "_sqlx_migrator_migrations";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rollback {
    /// Revert the latest N applied migrations
    Count(usize),
    All,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationStatus {
    pub app: String,
    pub name: String,
    pub applied_at: Option<String>,
}

impl MigrationStatus {
    pub fn is_applied(&self) -> bool {
        self.applied_at.is_some()
    }
}

async fn run(pool: &SqlitePool, plan: Plan) -> Result<()> {
    let mut conn = pool.acquire().await?;
    recommendations_db::migrator::<sqlx::Sqlite>()?
        .run(&mut *conn, &plan)
        .await?;

    Ok(())
}

/// Apply pending migrations, all of them or up to and including `to`
#[tracing::instrument(skip(pool))]
pub async fn migrate(pool: &SqlitePool, to: Option<String>) -> Result<()> {
    let plan = match to {
        Some(name) => {
            if !recommendations_db::MIGRATIONS.contains(&name.as_str()) {
                return Err(Error::UnknownMigration(name));
            }
            tracing::info!("Applying migrations up to {}", name);
            Plan::apply_name(recommendations_db::APP, &Some(name))
        }
        None => {
            tracing::info!("Applying all pending migrations");
            Plan::apply_all()
        }
    };

    run(pool, plan).await?;

    tracing::info!("Migrations completed successfully");

    Ok(())
}

#[tracing::instrument(skip(pool))]
pub async fn rollback(pool: &SqlitePool, rollback: Rollback) -> Result<()> {
    let plan = match rollback {
        Rollback::Count(count) => {
            tracing::warn!("Reverting {} migration(s)", count);
            Plan::revert_count(count)
        }
        Rollback::All => {
            tracing::warn!("Reverting all migrations");
            Plan::revert_all()
        }
    };

    run(pool, plan).await?;

    tracing::info!("Rollback completed successfully");

    Ok(())
}

/// Every known migration with the time it was applied, if it was
pub async fn status(pool: &SqlitePool) -> Result<Vec<MigrationStatus>> {
    let applied: Vec<(String, String, String)> =
        if crate::schema::table_exists(pool, MIGRATION_TABLE).await? {
            sqlx::query_as(&format!(
                "SELECT app, name, CAST(applied_time AS TEXT) FROM {MIGRATION_TABLE} ORDER BY id"
            ))
            .fetch_all(pool)
            .await?
        } else {
            Vec::new()
        };

    Ok(recommendations_db::MIGRATIONS
        .iter()
        .map(|name| MigrationStatus {
            app: recommendations_db::APP.to_owned(),
            name: (*name).to_owned(),
            applied_at: applied
                .iter()
                .find(|(app, applied_name, _)| {
                    app == recommendations_db::APP && applied_name == name
                })
                .map(|(_, _, applied_at)| applied_at.to_owned()),
        })
        .collect())
}

/// Drop the database if it exists, recreate it and apply every migration
#[tracing::instrument(skip(config))]
pub async fn reset(config: &Config) -> Result<SqlitePool> {
    tracing::info!("Resetting database...");

    if sqlx::Sqlite::database_exists(&config.database.url).await? {
        tracing::warn!("Dropping existing database: {}", config.database.url);
        sqlx::Sqlite::drop_database(&config.database.url).await?;
    } else {
        tracing::info!("Database does not exist, nothing to drop");
    }

    let pool =
        crate::db::create_pool(&config.database.url, config.database.max_connections).await?;
    migrate(&pool, None).await?;

    tracing::info!("Database reset completed successfully");

    Ok(pool)
}
