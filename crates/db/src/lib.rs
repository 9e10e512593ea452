use sqlx_migrator::{Info, Migrator};

mod m0001;
mod m0002;
mod m0003;
pub mod table;

/// App label every migration of this crate is registered under.
pub const APP: &str = "recommendations";

/// Migration names in dependency order.
pub const MIGRATIONS: [&str; 3] = [
    "0001_initial",
    "0002_recommendation_profession",
    "0003_bullet_step",
];

pub fn migrator<DB: sqlx::Database>() -> Result<Migrator<DB>, sqlx_migrator::Error>
where
    m0001::Migration: sqlx_migrator::Migration<DB>,
    m0002::Migration: sqlx_migrator::Migration<DB>,
    m0003::Migration: sqlx_migrator::Migration<DB>,
{
    let mut migrator = Migrator::default();
    migrator.add_migrations(vec![
        Box::new(m0001::Migration),
        Box::new(m0002::Migration),
        Box::new(m0003::Migration),
    ])?;

    Ok(migrator)
}
