use super::*;

/// Tests approving a reservation and assigning the approving technician.
///
/// Expected: status Approved, technician assigned, history entry with reason
#[tokio::test]
async fn sets_status_and_assigns_technician() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, technician_user, technician, room) =
        factory::helpers::create_room_with_dependencies(db).await?;
    let requester = factory::create_user(db).await?;
    let reservation = factory::create_reservation(db, requester.id, room.id).await?;

    let mut entry = history(
        reservation.id,
        technician_user.id,
        ReservationStatus::Pending,
        ReservationStatus::Approved,
        ApprovalAction::Approved,
    );
    entry.reason = Some("Looks good".to_string());

    let repo = ReservationRepository::new(db);
    let updated = repo
        .set_status(reservation.id, &entry, Some(technician.id))
        .await?
        .unwrap();

    assert_eq!(updated.status, ReservationStatus::Approved);
    assert_eq!(updated.assigned_technician_id, Some(technician.id));
    assert_eq!(updated.updated_by, Some(technician_user.id));

    let entries = entity::prelude::ApprovalHistory::find().all(db).await?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].previous_status, Some(ReservationStatus::Pending));
    assert_eq!(entries[0].new_status, ReservationStatus::Approved);
    assert_eq!(entries[0].reason.as_deref(), Some("Looks good"));

    Ok(())
}

/// Tests that rejecting without a technician keeps the existing assignment.
///
/// Expected: status Rejected, assigned technician unchanged
#[tokio::test]
async fn keeps_assignment_when_none_given() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, technician, room) = factory::helpers::create_room_with_dependencies(db).await?;
    let requester = factory::create_user(db).await?;
    let admin = factory::create_user_with_role(db, entity::sea_orm_active_enums::UserRole::Admin)
        .await?;
    let reservation = ReservationFactory::new(db, requester.id, room.id)
        .assigned_technician_id(Some(technician.id))
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let updated = repo
        .set_status(
            reservation.id,
            &history(
                reservation.id,
                admin.id,
                ReservationStatus::Pending,
                ReservationStatus::Rejected,
                ApprovalAction::Rejected,
            ),
            None,
        )
        .await?
        .unwrap();

    assert_eq!(updated.status, ReservationStatus::Rejected);
    assert_eq!(updated.assigned_technician_id, Some(technician.id));

    Ok(())
}
