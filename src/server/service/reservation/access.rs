//! Who may see a reservation and who may decide on it.
//!
//! Reservations a user may not see are reported as missing so their existence is not
//! leaked. Every read or write that exposes a single reservation goes through
//! [`ReservationAccess`], whichever service serves it.

use entity::sea_orm_active_enums::UserRole;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        reservation::ReservationRepository, room::RoomRepository,
        technician::TechnicianRepository,
    },
    error::AppError,
    model::{reservation::Reservation, room::Room, user::User},
};

use super::not_found;

/// The capacity in which a user may decide on a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authority {
    Admin,
    /// Technician profile id of a responsible or assigned technician
    Technician(i32),
    DepartmentHead,
    None,
}

pub struct ReservationAccess<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationAccess<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves the actor's authority over a reservation held in `room`.
    ///
    /// # Returns
    /// - `Authority::Admin` - Actor is an admin
    /// - `Authority::Technician` - Actor's active technician profile is responsible for
    ///   the room or assigned to the reservation
    /// - `Authority::DepartmentHead` - Actor heads the room's department
    /// - `Authority::None` - Actor may not decide
    pub async fn authority(
        &self,
        actor: &User,
        reservation: &Reservation,
        room: &Room,
    ) -> Result<Authority, AppError> {
        let authority = match actor.role {
            UserRole::Admin => Authority::Admin,
            UserRole::Technician => {
                let technician = TechnicianRepository::new(self.db)
                    .find_by_user_id(actor.id)
                    .await?;

                match technician {
                    Some(t)
                        if t.active
                            && (t.id == room.responsible_technician_id
                                || reservation.assigned_technician_id == Some(t.id)) =>
                    {
                        Authority::Technician(t.id)
                    }
                    _ => Authority::None,
                }
            }
            UserRole::DepartmentHead if actor.department_id == Some(room.department_id) => {
                Authority::DepartmentHead
            }
            _ => Authority::None,
        };

        Ok(authority)
    }

    /// Hides reservations from users who neither requested nor may decide on them.
    pub async fn ensure_visible(
        &self,
        actor: &User,
        reservation: &Reservation,
        room: &Room,
    ) -> Result<(), AppError> {
        if reservation.requester_id == actor.id {
            return Ok(());
        }

        match self.authority(actor, reservation, room).await? {
            Authority::None => Err(not_found()),
            _ => Ok(()),
        }
    }

    /// Loads a reservation and its room when the actor may see it.
    ///
    /// # Returns
    /// - `Ok((Reservation, Room))` - Visible reservation with its room
    /// - `Err(AppError::NotFound)` - Unknown reservation, or one the actor may not see
    pub async fn visible_by_id(
        &self,
        actor: &User,
        reservation_id: i32,
    ) -> Result<(Reservation, Room), AppError> {
        let reservation = ReservationRepository::new(self.db)
            .find_by_id(reservation_id)
            .await?
            .ok_or_else(not_found)?;
        let room = RoomRepository::new(self.db)
            .find_by_id(reservation.room_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;

        self.ensure_visible(actor, &reservation, &room).await?;

        Ok((reservation, room))
    }
}
