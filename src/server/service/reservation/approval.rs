//! Approval routing and decisions for pending reservations.

use std::collections::HashMap;

use entity::sea_orm_active_enums::{ApprovalAction, ReservationStatus, UserRole};
use sea_orm::TransactionTrait;

use crate::server::{
    data::{
        department::DepartmentRepository, participant::ParticipantRepository,
        reservation::ReservationRepository, room::RoomRepository,
        technician::TechnicianRepository, user::UserRepository,
    },
    error::{auth::AuthError, AppError},
    model::{
        reservation::{
            ApprovalDecision, ApprovalParams, NewHistoryEntry, PendingReservation, PendingScope,
            Requester, Reservation,
        },
        room::Room,
        technician::Technician,
        user::User,
    },
    service::notification::{dispatch, Notification, Recipient},
};

use super::{
    access::{Authority, ReservationAccess},
    conflict::Schedule,
    not_found, recipient, ReservationService,
};

impl ReservationService<'_> {
    async fn authority(
        &self,
        actor: &User,
        reservation: &Reservation,
        room: &Room,
    ) -> Result<Authority, AppError> {
        ReservationAccess::new(self.db)
            .authority(actor, reservation, room)
            .await
    }

    pub(super) async fn ensure_visible(
        &self,
        actor: &User,
        reservation: &Reservation,
        room: &Room,
    ) -> Result<(), AppError> {
        ReservationAccess::new(self.db)
            .ensure_visible(actor, reservation, room)
            .await
    }

    /// Gets pending reservations the actor may decide on, oldest first.
    ///
    /// Technicians see reservations in rooms they are responsible for or assigned to
    /// them, department heads see their department's rooms, admins see everything and
    /// other users get an empty list.
    pub async fn pending_for_approver(
        &self,
        actor: &User,
    ) -> Result<Vec<PendingReservation>, AppError> {
        let room_repo = RoomRepository::new(self.db);

        let scope = match actor.role {
            UserRole::Admin => PendingScope::All,
            UserRole::Technician => {
                match TechnicianRepository::new(self.db)
                    .find_by_user_id(actor.id)
                    .await?
                {
                    Some(t) if t.active => PendingScope::Scoped {
                        room_ids: room_repo.get_ids_by_technician(t.id).await?,
                        technician_id: Some(t.id),
                    },
                    _ => return Ok(Vec::new()),
                }
            }
            UserRole::DepartmentHead => match actor.department_id {
                Some(department_id) => PendingScope::Scoped {
                    room_ids: room_repo.get_ids_by_department(department_id).await?,
                    technician_id: None,
                },
                None => return Ok(Vec::new()),
            },
            UserRole::User => return Ok(Vec::new()),
        };

        let reservations = ReservationRepository::new(self.db)
            .get_pending(&scope)
            .await?;
        if reservations.is_empty() {
            return Ok(Vec::new());
        }

        let rooms: HashMap<i32, Room> = room_repo
            .get_all()
            .await?
            .into_iter()
            .map(|r| (r.id, r))
            .collect();

        let mut requester_ids: Vec<i32> = reservations.iter().map(|r| r.requester_id).collect();
        requester_ids.sort_unstable();
        requester_ids.dedup();
        let requesters: HashMap<i32, User> = UserRepository::new(self.db)
            .find_by_ids(&requester_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        let departments: HashMap<i32, String> = DepartmentRepository::new(self.db)
            .get_all()
            .await?
            .into_iter()
            .map(|d| (d.id, d.name))
            .collect();

        let technician_repo = TechnicianRepository::new(self.db);
        let participant_repo = ParticipantRepository::new(self.db);
        let mut technicians: HashMap<i32, Option<Technician>> = HashMap::new();
        let mut pending = Vec::with_capacity(reservations.len());

        for reservation in reservations {
            let room = rooms.get(&reservation.room_id);
            let technician_id = reservation
                .assigned_technician_id
                .or(room.map(|r| r.responsible_technician_id));

            let technician = match technician_id {
                Some(id) => {
                    if !technicians.contains_key(&id) {
                        technicians.insert(id, technician_repo.find_by_id(id).await?);
                    }
                    technicians.get(&id).cloned().flatten()
                }
                None => None,
            };

            let requester = match requesters.get(&reservation.requester_id) {
                Some(user) => Requester {
                    name: user.full_name(),
                    email: user.email.clone(),
                    department: user
                        .department_id
                        .and_then(|id| departments.get(&id).cloned()),
                },
                None => Requester {
                    name: String::new(),
                    email: String::new(),
                    department: None,
                },
            };

            let participant_count = participant_repo
                .count_by_reservation(reservation.id)
                .await?;

            pending.push(PendingReservation {
                room_name: room.map(|r| r.name.clone()).unwrap_or_default(),
                requester,
                technician,
                participant_count,
                reservation,
            });
        }

        Ok(pending)
    }

    /// Approves or rejects a pending reservation.
    ///
    /// # Arguments
    /// - `actor` - Authenticated approver
    /// - `params` - Reservation number, decision and optional reason
    ///
    /// # Returns
    /// - `Ok(Reservation)` - Reservation in its new state
    /// - `Err(AppError::NotFound)` - Unknown reservation number
    /// - `Err(AppError::BadRequest)` - Reservation no longer pending, or a rejection
    ///   without a reason
    /// - `Err(AppError::AuthErr)` - Actor may not decide on this reservation
    /// - `Err(AppError::ReservationConflict)` - Approval would overlap an approved booking
    pub async fn process_approval(
        &self,
        actor: &User,
        params: ApprovalParams,
    ) -> Result<Reservation, AppError> {
        let reservation = self.load(&params.number).await?;

        if reservation.status != ReservationStatus::Pending {
            return Err(AppError::BadRequest(
                "Reservation has already been processed".to_string(),
            ));
        }

        let room = self.load_room(reservation.room_id).await?;
        let authority = self.authority(actor, &reservation, &room).await?;
        if authority == Authority::None {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("deciding on reservation {}", reservation.number),
            )
            .into());
        }

        let (action, new_status) = match params.decision {
            ApprovalDecision::Approve => (ApprovalAction::Approved, ReservationStatus::Approved),
            ApprovalDecision::Reject => {
                if params.reason.is_none() {
                    return Err(AppError::BadRequest(
                        "A reason is required to reject a reservation".to_string(),
                    ));
                }
                (ApprovalAction::Rejected, ReservationStatus::Rejected)
            }
        };

        let txn = self.db.begin().await?;

        let mut assign_technician = None;
        if new_status == ReservationStatus::Approved {
            self.ensure_no_conflicts(
                &txn,
                room.id,
                &Schedule::of(&reservation),
                &[ReservationStatus::Approved],
                Some(reservation.id),
            )
            .await?;

            if let Authority::Technician(technician_id) = authority {
                assign_technician = Some(technician_id);
            }
        }

        let entry = NewHistoryEntry {
            reservation_id: reservation.id,
            actor_id: actor.id,
            action,
            previous_status: Some(reservation.status),
            new_status,
            reason: params.reason.clone(),
        };
        let decided = ReservationRepository::new(&txn)
            .set_status(reservation.id, &entry, assign_technician)
            .await?
            .ok_or_else(not_found)?;
        txn.commit().await?;

        tracing::info!(
            number = %decided.number,
            approver_id = actor.id,
            status = super::status_label(decided.status),
            "Reservation decided"
        );

        let mut notifications = Vec::new();
        if let Some(requester) = UserRepository::new(self.db)
            .find_by_id(decided.requester_id)
            .await?
        {
            notifications.push(Notification::decision(
                &recipient(&requester),
                &decided,
                &room.name,
                params.reason.as_deref(),
            ));
        }
        if decided.status == ReservationStatus::Approved {
            let participants = ParticipantRepository::new(self.db)
                .get_by_reservation(decided.id)
                .await?;
            notifications.extend(participants.into_iter().map(|p| {
                Notification::participant_invited(
                    &Recipient {
                        name: p.name,
                        email: p.email,
                    },
                    &decided,
                    &room.name,
                )
            }));
        }
        dispatch(self.notifier, notifications).await;

        Ok(decided)
    }
}
