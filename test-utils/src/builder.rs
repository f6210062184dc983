use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Add entity tables, then call `build()` to create the configured context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Department, User};
///
/// let test = TestBuilder::new()
///     .with_table(Department)
///     .with_table(User)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables should be added in dependency order (tables with foreign keys after
    /// the tables they reference).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables a room depends on.
    ///
    /// Adds, in dependency order: Department, User, Technician, Room.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_room_tables(self) -> Self {
        self.with_table(Department)
            .with_table(User)
            .with_table(Technician)
            .with_table(Room)
    }

    /// Adds the room tables plus equipment inventory tables.
    ///
    /// Equivalent to `with_room_tables()` followed by EquipmentType and RoomEquipment.
    pub fn with_equipment_tables(self) -> Self {
        self.with_room_tables()
            .with_table(EquipmentType)
            .with_table(RoomEquipment)
    }

    /// Adds every table used by reservation operations.
    ///
    /// Includes the equipment tables, reservations and all reservation child tables
    /// (requested equipment, services, participants, approval history).
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_reservation_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_reservation_tables(self) -> Self {
        self.with_equipment_tables()
            .with_table(Reservation)
            .with_table(ReservationEquipment)
            .with_table(AdditionalService)
            .with_table(ReservationService)
            .with_table(AdditionalParticipant)
            .with_table(ApprovalHistory)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
