pub mod config;
pub mod db;
pub mod error;
pub mod migrate;
pub mod observability;
pub mod schema;

pub use config::Config;
pub use error::{Error, Result};
