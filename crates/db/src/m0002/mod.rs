mod recommendation_profession;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "recommendations",
    "0002_recommendation_profession",
    vec_box![crate::m0001::Migration],
    vec_box![recommendation_profession::AddColumn]
);
