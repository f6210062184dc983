use super::*;

/// Tests updating bookkeeping fields of an approved reservation.
///
/// Expected: Ok(Reservation) with the new fields and `updated_by` set to the actor
#[tokio::test]
async fn updates_notes_on_approved_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (requester, room, _) = factory::helpers::create_reservation_with_dependencies(db).await?;
    let requester = actor(requester);
    let existing = ReservationFactory::new(db, requester.id, room.id)
        .event_date(date(2030, 5, 2))
        .status(ReservationStatus::Approved)
        .build()
        .await?;

    let params = UpdateReservationParams {
        notes: Some("Bring adapters".to_string()),
        actual_attendees: Some(7),
        ..Default::default()
    };

    let notifier = RecordingNotifier::default();
    let updated = ReservationService::new(db, &notifier)
        .update(&requester, &existing.number, params)
        .await?;

    assert_eq!(updated.notes.as_deref(), Some("Bring adapters"));
    assert_eq!(updated.actual_attendees, Some(7));
    assert_eq!(updated.status, ReservationStatus::Approved);
    assert_eq!(updated.updated_by, Some(requester.id));
    assert!(updated.updated_at.is_some());
    assert!(notifier.sent().is_empty());

    Ok(())
}

/// Tests that approved reservations cannot be rescheduled.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_reschedule_of_approved_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (requester, room, _) = factory::helpers::create_reservation_with_dependencies(db).await?;
    let requester = actor(requester);
    let existing = ReservationFactory::new(db, requester.id, room.id)
        .event_date(date(2030, 5, 2))
        .status(ReservationStatus::Approved)
        .build()
        .await?;

    let params = UpdateReservationParams {
        event_date: Some(date(2030, 5, 3)),
        ..Default::default()
    };

    let notifier = RecordingNotifier::default();
    let result = ReservationService::new(db, &notifier)
        .update(&requester, &existing.number, params)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that rescheduling re-runs conflict detection without colliding with itself.
///
/// Verifies that extending a pending reservation into its own slot succeeds while
/// extending it into a neighbour's slot fails.
///
/// Expected: first update Ok, second Err(AppError::ReservationConflict)
#[tokio::test]
async fn reschedule_checks_conflicts_excluding_itself() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (requester, room, _) = factory::helpers::create_reservation_with_dependencies(db).await?;
    let requester = actor(requester);
    let own = ReservationFactory::new(db, requester.id, room.id)
        .event_date(date(2030, 5, 2))
        .times(time(9, 0), time(10, 0))
        .build()
        .await?;
    ReservationFactory::new(db, requester.id, room.id)
        .event_date(date(2030, 5, 2))
        .times(time(11, 0), time(12, 0))
        .status(ReservationStatus::Approved)
        .build()
        .await?;

    let notifier = RecordingNotifier::default();
    let service = ReservationService::new(db, &notifier);

    let shifted = service
        .update(
            &requester,
            &own.number,
            UpdateReservationParams {
                start_time: Some(time(9, 30)),
                end_time: Some(time(11, 0)),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(shifted.start_time, time(9, 30));
    assert_eq!(shifted.end_time, time(11, 0));

    let result = service
        .update(
            &requester,
            &own.number,
            UpdateReservationParams {
                end_time: Some(time(11, 30)),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(AppError::ReservationConflict(_))));

    Ok(())
}

/// Tests that moving a pending reservation to another room re-routes it.
///
/// Expected: assigned technician becomes the new room's responsible technician
#[tokio::test]
async fn room_change_reroutes_to_new_technician() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (requester, _, existing) = factory::helpers::create_reservation_with_dependencies(db).await?;
    let (_, _, other_technician, other_room) =
        factory::helpers::create_room_with_dependencies(db).await?;
    let requester = actor(requester);

    let notifier = RecordingNotifier::default();
    let updated = ReservationService::new(db, &notifier)
        .update(
            &requester,
            &existing.number,
            UpdateReservationParams {
                room_id: Some(other_room.id),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.room_id, other_room.id);
    assert_eq!(updated.assigned_technician_id, Some(other_technician.id));

    Ok(())
}

/// Tests that only the requester or an admin may update.
///
/// Expected: Err(AuthError::AccessDenied) for another user
#[tokio::test]
async fn rejects_update_by_other_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, existing) = factory::helpers::create_reservation_with_dependencies(db).await?;
    let stranger = actor(factory::create_user(db).await?);

    let notifier = RecordingNotifier::default();
    let result = ReservationService::new(db, &notifier)
        .update(
            &stranger,
            &existing.number,
            UpdateReservationParams {
                notes: Some("mine now".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests status changes through update.
///
/// Verifies that `Cancelled` is accepted and notifies, while any other status is
/// rejected.
///
/// Expected: Approved → BadRequest; Cancelled → Ok with a Cancelled history entry
#[tokio::test]
async fn only_cancellation_is_accepted_as_status_change() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (requester, _, existing) = factory::helpers::create_reservation_with_dependencies(db).await?;
    let requester = actor(requester);

    let notifier = RecordingNotifier::default();
    let service = ReservationService::new(db, &notifier);

    let result = service
        .update(
            &requester,
            &existing.number,
            UpdateReservationParams {
                status: Some(ReservationStatus::Approved),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let cancelled = service
        .update(
            &requester,
            &existing.number,
            UpdateReservationParams {
                status: Some(ReservationStatus::Cancelled),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(cancelled.status, ReservationStatus::Cancelled);
    assert!(notifier.kinds().contains(&NotificationKind::Cancelled));

    let history = service
        .approval_history(&requester, &existing.number)
        .await?;
    assert_eq!(history.last().map(|e| e.action), Some(ApprovalAction::Cancelled));

    let result = service
        .update(
            &requester,
            &existing.number,
            UpdateReservationParams {
                notes: Some("too late".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
