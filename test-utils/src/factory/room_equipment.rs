//! Room equipment factory for creating equipment assigned to a room.

use entity::sea_orm_active_enums::EquipmentStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating room equipment rows.
pub struct RoomEquipmentFactory<'a> {
    db: &'a DatabaseConnection,
    room_id: i32,
    equipment_type_id: i32,
    quantity: i32,
    status: EquipmentStatus,
}

impl<'a> RoomEquipmentFactory<'a> {
    /// Creates a new factory with quantity `1` and status `Operational`.
    pub fn new(db: &'a DatabaseConnection, room_id: i32, equipment_type_id: i32) -> Self {
        Self {
            db,
            room_id,
            equipment_type_id,
            quantity: 1,
            status: EquipmentStatus::Operational,
        }
    }

    pub fn quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn status(mut self, status: EquipmentStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the room equipment entity into the database.
    pub async fn build(self) -> Result<entity::room_equipment::Model, DbErr> {
        entity::room_equipment::ActiveModel {
            id: ActiveValue::NotSet,
            room_id: ActiveValue::Set(self.room_id),
            equipment_type_id: ActiveValue::Set(self.equipment_type_id),
            quantity: ActiveValue::Set(self.quantity),
            status: ActiveValue::Set(self.status),
            serial_number: ActiveValue::Set(None),
            acquired_on: ActiveValue::Set(None),
            last_inspection: ActiveValue::Set(None),
            notes: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates one operational item of the given type in the room.
pub async fn create_room_equipment(
    db: &DatabaseConnection,
    room_id: i32,
    equipment_type_id: i32,
) -> Result<entity::room_equipment::Model, DbErr> {
    RoomEquipmentFactory::new(db, room_id, equipment_type_id)
        .build()
        .await
}
