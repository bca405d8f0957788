use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables (and the composite unique
/// indexes the production migrations carry), then call `build()` to create the
/// configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Diary};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Diary)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements to execute during database setup.
    tables: Vec<TableCreateStatement>,

    /// CREATE INDEX statements executed after all tables exist.
    ///
    /// `Schema::create_table_from_entity` only emits single-column unique
    /// constraints, so the composite unique indexes from the migrations
    /// (diary per-day, like pair, image order) are added here explicitly.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds a CREATE INDEX statement to run after table creation.
    pub fn with_index(mut self, index: IndexCreateStatement) -> Self {
        self.indexes.push(index);
        self
    }

    /// Adds all tables required for diary read and write operations.
    ///
    /// Adds the following in dependency order, together with the composite
    /// unique indexes the production migrations define:
    /// - User
    /// - Diary (UNIQUE user_id + entry_date)
    /// - Music, Weather, Image (UNIQUE diary_id + image_order)
    /// - Likes (UNIQUE user_id + diary_id)
    /// - Mate
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_diary_tables(self) -> Self {
        self.with_table(User)
            .with_table(Diary)
            .with_table(Music)
            .with_table(Weather)
            .with_table(Image)
            .with_table(Likes)
            .with_table(Mate)
            .with_index(
                Index::create()
                    .name("uq_diary_user_id_entry_date")
                    .table(Diary)
                    .col(entity::diary::Column::UserId)
                    .col(entity::diary::Column::EntryDate)
                    .unique()
                    .to_owned(),
            )
            .with_index(
                Index::create()
                    .name("uq_image_diary_id_image_order")
                    .table(Image)
                    .col(entity::image::Column::DiaryId)
                    .col(entity::image::Column::ImageOrder)
                    .unique()
                    .to_owned(),
            )
            .with_index(
                Index::create()
                    .name("uq_likes_user_id_diary_id")
                    .table(Likes)
                    .col(entity::likes::Column::UserId)
                    .col(entity::likes::Column::DiaryId)
                    .unique()
                    .to_owned(),
            )
    }

    /// Adds every table the application defines.
    ///
    /// `with_diary_tables()` plus Comment and Notification. Use this for
    /// service-level tests that touch commenting or alerting.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_social_tables(self) -> Self {
        self.with_diary_tables()
            .with_table(Comment)
            .with_table(Notification)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection, executes all CREATE TABLE
    /// statements in the order they were added, then all CREATE INDEX statements.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create schema
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
