use super::*;

/// Tests cancelling a pending reservation.
///
/// Verifies the status change, the history entry, and that both the requester and the
/// room's technician are notified.
///
/// Expected: Ok(Reservation) in Cancelled with two Cancelled notifications
#[tokio::test]
async fn cancels_pending_reservation() -> Result<(), AppError> {
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
    let cancelled = service.cancel(&requester, &existing.number).await?;

    assert_eq!(cancelled.status, ReservationStatus::Cancelled);
    assert_eq!(
        notifier.kinds(),
        vec![NotificationKind::Cancelled, NotificationKind::Cancelled]
    );

    let history = service
        .approval_history(&requester, &existing.number)
        .await?;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].action, ApprovalAction::Cancelled);
    assert_eq!(history[0].previous_status, Some(ReservationStatus::Pending));
    assert_eq!(history[0].new_status, ReservationStatus::Cancelled);

    Ok(())
}

/// Tests that rejected and cancelled reservations cannot be cancelled.
///
/// Expected: Err(AppError::BadRequest) naming the current state
#[tokio::test]
async fn rejects_cancelling_finished_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (requester, room, _) = factory::helpers::create_reservation_with_dependencies(db).await?;
    let requester = actor(requester);
    let rejected = ReservationFactory::new(db, requester.id, room.id)
        .status(ReservationStatus::Rejected)
        .build()
        .await?;

    let notifier = RecordingNotifier::default();
    let result = ReservationService::new(db, &notifier)
        .cancel(&requester, &rejected.number)
        .await;

    match result {
        Err(AppError::BadRequest(message)) => {
            assert_eq!(message, "Reservation is already rejected")
        }
        other => panic!("Expected BadRequest, got: {:?}", other),
    }

    Ok(())
}

/// Tests that an admin may cancel someone else's reservation but another user may not.
///
/// Expected: AccessDenied for the stranger, Ok for the admin
#[tokio::test]
async fn admin_cancels_for_requester() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, existing) = factory::helpers::create_reservation_with_dependencies(db).await?;
    let stranger = actor(factory::create_user(db).await?);
    let admin = actor(factory::create_user_with_role(db, UserRole::Admin).await?);

    let notifier = RecordingNotifier::default();
    let service = ReservationService::new(db, &notifier);

    assert!(matches!(
        service.cancel(&stranger, &existing.number).await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    let cancelled = service.cancel(&admin, &existing.number).await?;
    assert_eq!(cancelled.status, ReservationStatus::Cancelled);
    assert_eq!(cancelled.updated_by, Some(admin.id));

    Ok(())
}
