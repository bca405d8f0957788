pub use sea_orm_migration::prelude::*;

mod m20260810_000001_create_user_table;
mod m20260810_000002_create_diary_table;
mod m20260810_000003_create_music_table;
mod m20260810_000004_create_weather_table;
mod m20260810_000005_create_image_table;
mod m20260811_000006_create_likes_table;
mod m20260811_000007_create_mate_table;
mod m20260812_000008_create_comment_table;
mod m20260812_000009_create_notification_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260810_000001_create_user_table::Migration),
            Box::new(m20260810_000002_create_diary_table::Migration),
            Box::new(m20260810_000003_create_music_table::Migration),
            Box::new(m20260810_000004_create_weather_table::Migration),
            Box::new(m20260810_000005_create_image_table::Migration),
            Box::new(m20260811_000006_create_likes_table::Migration),
            Box::new(m20260811_000007_create_mate_table::Migration),
            Box::new(m20260812_000008_create_comment_table::Migration),
            Box::new(m20260812_000009_create_notification_table::Migration),
        ]
    }
}
