//! Approval history repository.
//!
//! History rows are append-only. Writers that change a reservation insert the matching
//! entry through [`ApprovalHistoryRepository::insert`] on the same transaction.

use crate::server::model::reservation::{ApprovalHistoryEntry, NewHistoryEntry};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

pub struct ApprovalHistoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApprovalHistoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends a history entry on any connection or open transaction.
    pub async fn insert<C: ConnectionTrait>(
        conn: &C,
        entry: &NewHistoryEntry,
    ) -> Result<ApprovalHistoryEntry, DbErr> {
        let entity = entity::approval_history::ActiveModel {
            reservation_id: ActiveValue::Set(entry.reservation_id),
            actor_id: ActiveValue::Set(entry.actor_id),
            action: ActiveValue::Set(entry.action),
            previous_status: ActiveValue::Set(entry.previous_status),
            new_status: ActiveValue::Set(entry.new_status),
            reason: ActiveValue::Set(entry.reason.clone()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(conn)
        .await?;

        Ok(ApprovalHistoryEntry::from_entity(entity))
    }

    /// Gets the history of a reservation, oldest first.
    pub async fn get_by_reservation(
        &self,
        reservation_id: i32,
    ) -> Result<Vec<ApprovalHistoryEntry>, DbErr> {
        let entities = entity::prelude::ApprovalHistory::find()
            .filter(entity::approval_history::Column::ReservationId.eq(reservation_id))
            .order_by_asc(entity::approval_history::Column::CreatedAt)
            .order_by_asc(entity::approval_history::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(ApprovalHistoryEntry::from_entity)
            .collect())
    }
}
