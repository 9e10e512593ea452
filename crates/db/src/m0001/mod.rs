mod recommendation;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "recommendations",
    "0001_initial",
    vec_box![],
    vec_box![recommendation::CreateTable]
);
