use super::*;

/// Tests partially updating a reservation.
///
/// Verifies that only provided fields change, that `updated_at`/`updated_by` are set
/// and that the history entry is recorded.
///
/// Expected: Ok(Some(Reservation)) with the new name and original times
#[tokio::test]
async fn updates_given_fields_and_audits() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (requester, _, reservation) =
        factory::helpers::create_reservation_with_dependencies(db).await?;

    let repo = ReservationRepository::new(db);
    let updated = repo
        .update(
            reservation.id,
            &UpdateReservationParams {
                event_name: Some("Renamed".to_string()),
                actual_attendees: Some(4),
                ..Default::default()
            },
            &history(
                reservation.id,
                requester.id,
                ReservationStatus::Pending,
                ReservationStatus::Pending,
                ApprovalAction::Updated,
            ),
        )
        .await?
        .unwrap();

    assert_eq!(updated.event_name, "Renamed");
    assert_eq!(updated.actual_attendees, Some(4));
    assert_eq!(updated.start_time, reservation.start_time);
    assert_eq!(updated.updated_by, Some(requester.id));
    assert!(updated.updated_at.is_some());

    let entries = entity::prelude::ApprovalHistory::find().all(db).await?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].action, ApprovalAction::Updated);

    Ok(())
}

/// Tests updating a reservation that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = ReservationRepository::new(db);
    let result = repo
        .update(
            9999,
            &UpdateReservationParams::default(),
            &history(
                9999,
                user.id,
                ReservationStatus::Pending,
                ReservationStatus::Pending,
                ApprovalAction::Updated,
            ),
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
