mod bullet;
mod bullet_recommendation;
mod step;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "recommendations",
    "0003_bullet_step",
    vec_box![crate::m0002::Migration],
    vec_box![
        bullet::CreateTable,
        step::CreateTable,
        bullet_recommendation::AddField
    ]
);
