//! Additional participant data repository.

use crate::server::model::participant::{CreateParticipantParams, Participant};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct ParticipantRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ParticipantRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a participant to a reservation.
    ///
    /// # Returns
    /// - `Ok(Participant)` - The created participant
    /// - `Err(DbErr)` - Database error, including unique violation on (reservation, email)
    pub async fn create(&self, params: &CreateParticipantParams) -> Result<Participant, DbErr> {
        let entity = entity::additional_participant::ActiveModel {
            reservation_id: ActiveValue::Set(params.reservation_id),
            name: ActiveValue::Set(params.name.clone()),
            email: ActiveValue::Set(params.email.to_lowercase()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Participant::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Participant>, DbErr> {
        let entity = entity::prelude::AdditionalParticipant::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Participant::from_entity))
    }

    /// Gets the participants of a reservation ordered by name.
    pub async fn get_by_reservation(&self, reservation_id: i32) -> Result<Vec<Participant>, DbErr> {
        let entities = entity::prelude::AdditionalParticipant::find()
            .filter(entity::additional_participant::Column::ReservationId.eq(reservation_id))
            .order_by_asc(entity::additional_participant::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Participant::from_entity).collect())
    }

    /// Checks whether the email is already registered on the reservation, ignoring case.
    pub async fn exists(&self, reservation_id: i32, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::AdditionalParticipant::find()
            .filter(entity::additional_participant::Column::ReservationId.eq(reservation_id))
            .filter(entity::additional_participant::Column::Email.eq(email.to_lowercase()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn count_by_reservation(&self, reservation_id: i32) -> Result<u64, DbErr> {
        entity::prelude::AdditionalParticipant::find()
            .filter(entity::additional_participant::Column::ReservationId.eq(reservation_id))
            .count(self.db)
            .await
    }

    /// Deletes a participant.
    ///
    /// # Returns
    /// - `Ok(true)` - Participant deleted
    /// - `Ok(false)` - No participant with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::AdditionalParticipant::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
