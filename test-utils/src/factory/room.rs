//! Room factory for creating test room entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test rooms.
///
/// # Example
///
/// ```rust,ignore
/// let room = RoomFactory::new(&db, department.id, technician.id)
///     .max_capacity(4)
///     .available(false)
///     .build()
///     .await?;
/// ```
pub struct RoomFactory<'a> {
    db: &'a DatabaseConnection,
    department_id: i32,
    responsible_technician_id: i32,
    name: String,
    location: Option<String>,
    min_capacity: Option<i32>,
    max_capacity: i32,
    available: bool,
}

impl<'a> RoomFactory<'a> {
    /// Creates a new RoomFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Room {id}"`
    /// - location: `Some("Building A")`
    /// - min_capacity: `None`
    /// - max_capacity: `20`
    /// - available: `true`
    pub fn new(
        db: &'a DatabaseConnection,
        department_id: i32,
        responsible_technician_id: i32,
    ) -> Self {
        Self {
            db,
            department_id,
            responsible_technician_id,
            name: format!("Room {}", next_id()),
            location: Some("Building A".to_string()),
            min_capacity: None,
            max_capacity: 20,
            available: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn min_capacity(mut self, min_capacity: Option<i32>) -> Self {
        self.min_capacity = min_capacity;
        self
    }

    pub fn max_capacity(mut self, max_capacity: i32) -> Self {
        self.max_capacity = max_capacity;
        self
    }

    pub fn available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    /// Builds and inserts the room entity into the database.
    pub async fn build(self) -> Result<entity::room::Model, DbErr> {
        entity::room::ActiveModel {
            id: ActiveValue::NotSet,
            department_id: ActiveValue::Set(self.department_id),
            responsible_technician_id: ActiveValue::Set(self.responsible_technician_id),
            name: ActiveValue::Set(self.name),
            location: ActiveValue::Set(self.location),
            min_capacity: ActiveValue::Set(self.min_capacity),
            max_capacity: ActiveValue::Set(self.max_capacity),
            image_url: ActiveValue::Set(None),
            available: ActiveValue::Set(self.available),
            notes: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a room with default values.
pub async fn create_room(
    db: &DatabaseConnection,
    department_id: i32,
    responsible_technician_id: i32,
) -> Result<entity::room::Model, DbErr> {
    RoomFactory::new(db, department_id, responsible_technician_id)
        .build()
        .await
}
