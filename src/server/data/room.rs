//! Room data repository for database operations.
//!
//! This module provides the `RoomRepository` for creating rooms and querying them by
//! ID, department, responsible technician and bookability.

use crate::server::model::room::{CreateRoomParams, Room};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

/// Repository providing database operations for rooms.
pub struct RoomRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomRepository<'a> {
    /// Creates a new RoomRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new room.
    ///
    /// # Arguments
    /// - `params` - Room fields; department and technician must already exist
    ///
    /// # Returns
    /// - `Ok(Room)` - The created room
    /// - `Err(DbErr)` - Database error, including foreign key violations
    pub async fn create(&self, params: &CreateRoomParams) -> Result<Room, DbErr> {
        let entity = entity::room::ActiveModel {
            department_id: ActiveValue::Set(params.department_id),
            responsible_technician_id: ActiveValue::Set(params.responsible_technician_id),
            name: ActiveValue::Set(params.name.clone()),
            location: ActiveValue::Set(params.location.clone()),
            min_capacity: ActiveValue::Set(params.min_capacity),
            max_capacity: ActiveValue::Set(params.max_capacity),
            image_url: ActiveValue::Set(params.image_url.clone()),
            available: ActiveValue::Set(params.available),
            notes: ActiveValue::Set(params.notes.clone()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Room::from_entity(entity))
    }

    /// Finds a room by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Room))` - Room found
    /// - `Ok(None)` - No room with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Room>, DbErr> {
        let entity = entity::prelude::Room::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Room::from_entity))
    }

    /// Gets all rooms ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Room>, DbErr> {
        let entities = entity::prelude::Room::find()
            .order_by_asc(entity::room::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Room::from_entity).collect())
    }

    /// Gets rooms open for booking, optionally restricted to the given IDs.
    ///
    /// # Arguments
    /// - `room_ids` - Restricts results to these rooms when non-empty
    ///
    /// # Returns
    /// - `Ok(Vec<Room>)` - Rooms with `available = true`, ordered by name
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_bookable(&self, room_ids: &[i32]) -> Result<Vec<Room>, DbErr> {
        let mut query =
            entity::prelude::Room::find().filter(entity::room::Column::Available.eq(true));

        if !room_ids.is_empty() {
            query = query.filter(entity::room::Column::Id.is_in(room_ids.iter().copied()));
        }

        let entities = query
            .order_by_asc(entity::room::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Room::from_entity).collect())
    }

    /// Gets IDs of rooms belonging to a department.
    pub async fn get_ids_by_department(&self, department_id: i32) -> Result<Vec<i32>, DbErr> {
        let entities = entity::prelude::Room::find()
            .filter(entity::room::Column::DepartmentId.eq(department_id))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(|r| r.id).collect())
    }

    /// Gets IDs of rooms a technician is responsible for.
    pub async fn get_ids_by_technician(&self, technician_id: i32) -> Result<Vec<i32>, DbErr> {
        let entities = entity::prelude::Room::find()
            .filter(entity::room::Column::ResponsibleTechnicianId.eq(technician_id))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(|r| r.id).collect())
    }
}
