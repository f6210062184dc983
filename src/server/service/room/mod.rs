//! Room service: room registry, availability, usage history and equipment inventory.

pub mod availability;
pub mod inventory;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        department::DepartmentRepository, equipment::EquipmentRepository,
        room::RoomRepository, technician::TechnicianRepository,
    },
    error::AppError,
    model::room::{CreateRoomParams, EquipmentItem, Room, UpdateEquipmentParams},
};

pub struct RoomService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> RoomService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self, id: i32) -> Result<Room, AppError> {
        self.load(id).await
    }

    pub async fn list(&self) -> Result<Vec<Room>, AppError> {
        Ok(RoomRepository::new(self.db).get_all().await?)
    }

    /// Registers a room.
    ///
    /// # Arguments
    /// - `params` - Room fields including owning department and responsible technician
    ///
    /// # Returns
    /// - `Ok(Room)` - The created room
    /// - `Err(AppError::BadRequest)` - Non-positive maximum capacity or a minimum above it
    /// - `Err(AppError::NotFound)` - Department or technician does not exist
    pub async fn create(&self, params: CreateRoomParams) -> Result<Room, AppError> {
        if params.max_capacity <= 0 {
            return Err(AppError::BadRequest(
                "Maximum capacity must be greater than zero".to_string(),
            ));
        }
        if params.min_capacity.is_some_and(|min| min > params.max_capacity) {
            return Err(AppError::BadRequest(
                "Minimum capacity must not exceed maximum capacity".to_string(),
            ));
        }

        if DepartmentRepository::new(self.db)
            .find_by_id(params.department_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Department not found".to_string()));
        }
        if TechnicianRepository::new(self.db)
            .find_by_id(params.responsible_technician_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Technician not found".to_string()));
        }

        let room = RoomRepository::new(self.db).create(&params).await?;
        tracing::info!(room_id = room.id, name = %room.name, "Room created");

        Ok(room)
    }

    pub async fn list_equipment(&self, room_id: i32) -> Result<Vec<EquipmentItem>, AppError> {
        self.load(room_id).await?;

        Ok(EquipmentRepository::new(self.db)
            .get_for_room(room_id)
            .await?)
    }

    /// Applies a partial update to one equipment row of a room.
    ///
    /// # Returns
    /// - `Ok(EquipmentItem)` - Updated row
    /// - `Err(AppError::BadRequest)` - Negative quantity
    /// - `Err(AppError::NotFound)` - No equipment row with that ID
    pub async fn update_equipment(
        &self,
        id: i32,
        params: UpdateEquipmentParams,
    ) -> Result<EquipmentItem, AppError> {
        if params.quantity.is_some_and(|q| q < 0) {
            return Err(AppError::BadRequest(
                "Quantity must not be negative".to_string(),
            ));
        }

        EquipmentRepository::new(self.db)
            .update(id, &params)
            .await?
            .ok_or_else(|| AppError::NotFound("Equipment not found".to_string()))
    }

    async fn load(&self, id: i32) -> Result<Room, AppError> {
        RoomRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Room not found".to_string()))
    }
}
