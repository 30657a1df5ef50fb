use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Planet, Character};
///
/// let test = TestBuilder::new()
///     .with_table(Planet)
///     .with_table(Character)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Vector of CREATE TABLE statements to execute during database setup.
    ///
    /// Each statement is generated from an entity model using SeaORM's schema builder.
    /// Statements are executed in the order they were added during `build()`.
    tables: Vec<TableCreateStatement>,

    /// Whether to run the full migration set instead of per-entity table creation.
    migrate: bool,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// Initializes an empty builder ready to have entity tables added via `with_table()`.
    /// Chain method calls to configure the test environment before calling `build()`.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            migrate: false,
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. The table will be created when `build()` is called. Chain multiple
    /// calls to add multiple tables. Tables should be added in dependency order (tables
    /// with foreign keys should be added after their referenced tables).
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

    /// Adds the read-only catalog tables.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - User
    /// - Planet
    /// - Character
    ///
    /// Use this when testing catalog lookups that don't involve favorites. For tests
    /// involving favorites, use `with_migrations()` so the unique index on favorite
    /// `(user_id, name)` is present.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_catalog_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_catalog_tables(self) -> Self {
        self.with_table(User).with_table(Planet).with_table(Character)
    }

    /// Configures the builder to apply the full migration set.
    ///
    /// Instead of generating CREATE TABLE statements from entities, `build()` will run
    /// every SeaORM migration, producing the production schema (all four tables, foreign
    /// keys, and the unique index on favorite `(user_id, name)`). Any tables added via
    /// `with_table()` are ignored in this mode.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_migrations()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_migrations(mut self) -> Self {
        self.migrate = true;
        self
    }

    /// Builds the configured test context.
    ///
    /// Creates the in-memory SQLite database and sets up the schema, either by running
    /// the full migration set (`with_migrations()`) or by executing the CREATE TABLE
    /// statements collected via `with_table()`.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Configured test context ready for use
    /// - `Err(TestError::Database)` - Failed to connect or create the schema
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();

        if self.migrate {
            context.with_migrations().await?;
        } else {
            context.with_tables(self.tables).await?;
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
