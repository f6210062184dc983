//! Equipment data repository.
//!
//! Covers equipment types and the per-room equipment rows that reference them.

use crate::server::model::room::{EquipmentItem, EquipmentType, UpdateEquipmentParams};
use entity::sea_orm_active_enums::EquipmentStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct EquipmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EquipmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a room's equipment joined with type details, ordered by row ID.
    pub async fn get_for_room(&self, room_id: i32) -> Result<Vec<EquipmentItem>, DbErr> {
        let results = entity::prelude::RoomEquipment::find()
            .filter(entity::room_equipment::Column::RoomId.eq(room_id))
            .find_also_related(entity::prelude::EquipmentType)
            .order_by_asc(entity::room_equipment::Column::Id)
            .all(self.db)
            .await?;

        Ok(results
            .into_iter()
            .map(|(item, kind)| EquipmentItem::from_entity(item, kind))
            .collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<EquipmentItem>, DbErr> {
        let result = entity::prelude::RoomEquipment::find_by_id(id)
            .find_also_related(entity::prelude::EquipmentType)
            .one(self.db)
            .await?;

        Ok(result.map(|(item, kind)| EquipmentItem::from_entity(item, kind)))
    }

    /// Applies a partial update to a room equipment row.
    ///
    /// # Returns
    /// - `Ok(Some(EquipmentItem))` - Row updated
    /// - `Ok(None)` - No row with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        params: &UpdateEquipmentParams,
    ) -> Result<Option<EquipmentItem>, DbErr> {
        let Some(entity) = entity::prelude::RoomEquipment::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(quantity) = params.quantity {
            active.quantity = ActiveValue::Set(quantity);
        }
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status);
        }
        if let Some(notes) = &params.notes {
            active.notes = ActiveValue::Set(Some(notes.clone()));
        }
        active.update(self.db).await?;

        self.find_by_id(id).await
    }

    /// Gets all equipment types ordered by name.
    pub async fn get_types(&self) -> Result<Vec<EquipmentType>, DbErr> {
        let entities = entity::prelude::EquipmentType::find()
            .order_by_asc(entity::equipment_type::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(EquipmentType::from_entity).collect())
    }

    /// Counts how many of the given equipment type IDs exist.
    pub async fn count_types(&self, ids: &[i32]) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        entity::prelude::EquipmentType::find()
            .filter(entity::equipment_type::Column::Id.is_in(ids.iter().copied()))
            .count(self.db)
            .await
    }

    pub async fn create_type(&self, name: &str) -> Result<EquipmentType, DbErr> {
        let entity = entity::equipment_type::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(EquipmentType::from_entity(entity))
    }

    /// Sets quantity and status of a room's row for an equipment type, inserting the row
    /// when the room does not hold that type yet.
    pub async fn upsert_room_item(
        &self,
        room_id: i32,
        equipment_type_id: i32,
        quantity: i32,
        status: EquipmentStatus,
    ) -> Result<(), DbErr> {
        let existing = entity::prelude::RoomEquipment::find()
            .filter(entity::room_equipment::Column::RoomId.eq(room_id))
            .filter(entity::room_equipment::Column::EquipmentTypeId.eq(equipment_type_id))
            .one(self.db)
            .await?;

        match existing {
            Some(entity) => {
                let mut active = entity.into_active_model();
                active.quantity = ActiveValue::Set(quantity);
                active.status = ActiveValue::Set(status);
                active.update(self.db).await?;
            }
            None => {
                entity::room_equipment::ActiveModel {
                    room_id: ActiveValue::Set(room_id),
                    equipment_type_id: ActiveValue::Set(equipment_type_id),
                    quantity: ActiveValue::Set(quantity),
                    status: ActiveValue::Set(status),
                    ..Default::default()
                }
                .insert(self.db)
                .await?;
            }
        }

        Ok(())
    }
}
