use anyhow::Result;
use clap::{Parser, Subcommand};
use recommendations::migrate::Rollback;

/// recommendations - steps and bullets schema
#[derive(Parser)]
#[command(name = "recommendations")]
#[command(about = "Apply and inspect the recommendations database schema", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate {
        /// Stop after this migration (e.g. 0002_recommendation_profession)
        #[arg(long)]
        to: Option<String>,
    },
    /// Revert applied migrations, latest first
    Rollback {
        /// Number of migrations to revert
        #[arg(long, default_value_t = 1, conflicts_with = "all")]
        count: usize,

        /// Revert every migration
        #[arg(long)]
        all: bool,
    },
    /// Drop database if exists and recreate with migrations
    Reset,
    /// List migrations and whether they are applied
    Status,
    /// Print columns and foreign keys of the managed tables
    Schema {
        /// Only this table
        table: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = recommendations::Config::load(cli.config.clone())?;
    config.validate()?;

    recommendations::observability::init_observability(
        "recommendations",
        env!("CARGO_PKG_VERSION"),
        &config.observability,
    )?;

    match cli.command {
        Commands::Migrate { to } => {
            let pool = pool(&config).await?;
            recommendations::migrate::migrate(&pool, to).await?;
        }
        Commands::Rollback { count, all } => {
            let pool = pool(&config).await?;
            let rollback = if all {
                Rollback::All
            } else {
                Rollback::Count(count)
            };
            recommendations::migrate::rollback(&pool, rollback).await?;
        }
        Commands::Reset => {
            recommendations::migrate::reset(&config).await?;
        }
        Commands::Status => {
            let pool = pool(&config).await?;
            for migration in recommendations::migrate::status(&pool).await? {
                match migration.applied_at {
                    Some(applied_at) => {
                        println!("[x] {}.{} ({})", migration.app, migration.name, applied_at)
                    }
                    None => println!("[ ] {}.{}", migration.app, migration.name),
                }
            }
        }
        Commands::Schema { table } => {
            let pool = pool(&config).await?;
            let tables = match table {
                Some(table) => vec![table],
                None => recommendations::schema::MANAGED_TABLES
                    .iter()
                    .map(|t| t.to_string())
                    .collect(),
            };
            for table in tables {
                print!("{}", recommendations::schema::describe(&pool, &table).await?);
            }
        }
    }

    Ok(())
}

async fn pool(config: &recommendations::Config) -> Result<sqlx::SqlitePool> {
    let pool =
        recommendations::db::create_pool(&config.database.url, config.database.max_connections)
            .await?;

    Ok(pool)
}
