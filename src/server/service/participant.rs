//! Additional participants of a reservation.

use entity::sea_orm_active_enums::ReservationStatus;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::participant::ParticipantRepository,
    error::AppError,
    model::{
        participant::{CreateParticipantParams, Participant},
        user::User,
    },
    service::{
        notification::{dispatch, Notification, Notifier, Recipient},
        reservation::access::ReservationAccess,
    },
};

fn participant_not_found() -> AppError {
    AppError::NotFound("Participant not found".to_string())
}

pub struct ParticipantService<'a> {
    db: &'a DatabaseConnection,
    notifier: &'a dyn Notifier,
}

impl<'a> ParticipantService<'a> {
    pub fn new(db: &'a DatabaseConnection, notifier: &'a dyn Notifier) -> Self {
        Self { db, notifier }
    }

    /// Adds a participant to a reservation.
    ///
    /// Only the requester and users who may decide on the reservation manage its
    /// participants. Participants added to an already approved reservation are invited
    /// right away; otherwise they are invited when the reservation is approved.
    ///
    /// # Returns
    /// - `Ok(Participant)` - The added participant
    /// - `Err(AppError::NotFound)` - Reservation does not exist or is hidden from the actor
    /// - `Err(AppError::Conflict)` - Email already on the reservation
    pub async fn add(
        &self,
        actor: &User,
        params: CreateParticipantParams,
    ) -> Result<Participant, AppError> {
        let (reservation, room) = ReservationAccess::new(self.db)
            .visible_by_id(actor, params.reservation_id)
            .await?;

        let repo = ParticipantRepository::new(self.db);
        if repo.exists(reservation.id, &params.email).await? {
            return Err(AppError::Conflict(format!(
                "{} is already a participant of this reservation",
                params.email
            )));
        }

        let participant = repo.create(&params).await?;

        if reservation.status == ReservationStatus::Approved {
            let recipient = Recipient {
                name: participant.name.clone(),
                email: participant.email.clone(),
            };

            dispatch(
                self.notifier,
                vec![Notification::participant_invited(
                    &recipient,
                    &reservation,
                    &room.name,
                )],
            )
            .await;
        }

        Ok(participant)
    }

    /// Lists the participants of a reservation the actor may see.
    pub async fn list(
        &self,
        actor: &User,
        reservation_id: i32,
    ) -> Result<Vec<Participant>, AppError> {
        ReservationAccess::new(self.db)
            .visible_by_id(actor, reservation_id)
            .await?;

        Ok(ParticipantRepository::new(self.db)
            .get_by_reservation(reservation_id)
            .await?)
    }

    /// Removes a participant from a reservation the actor may see.
    ///
    /// Participants of hidden reservations are reported as missing.
    pub async fn remove(&self, actor: &User, id: i32) -> Result<(), AppError> {
        let repo = ParticipantRepository::new(self.db);
        let participant = repo.find_by_id(id).await?.ok_or_else(participant_not_found)?;

        match ReservationAccess::new(self.db)
            .visible_by_id(actor, participant.reservation_id)
            .await
        {
            Err(AppError::NotFound(_)) => return Err(participant_not_found()),
            other => other?,
        };

        if repo.delete(id).await? {
            Ok(())
        } else {
            Err(participant_not_found())
        }
    }
}
