use super::*;

/// Tests that only reservations in the requested statuses are returned.
///
/// Expected: pending and approved returned, cancelled and rejected skipped
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, room) = factory::helpers::create_room_with_dependencies(db).await?;
    let requester = factory::create_user(db).await?;
    for status in [
        ReservationStatus::Pending,
        ReservationStatus::Approved,
        ReservationStatus::Cancelled,
        ReservationStatus::Rejected,
    ] {
        ReservationFactory::new(db, requester.id, room.id)
            .status(status)
            .build()
            .await?;
    }

    let repo = ReservationRepository::new(db);
    let blocking = repo
        .get_blocking(
            &[room.id],
            &[ReservationStatus::Pending, ReservationStatus::Approved],
            date(2030, 1, 15),
            date(2030, 1, 15),
            None,
        )
        .await?;

    assert_eq!(blocking.len(), 2);
    assert!(blocking.iter().all(|r| r.is_blocking()));

    Ok(())
}

/// Tests that a recurring series starting before the range is included.
///
/// Verifies that a weekly series whose first date precedes the range but whose end
/// falls inside it is returned, while a single event before the range is not.
///
/// Expected: only the recurring reservation
#[tokio::test]
async fn includes_series_overlapping_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, room) = factory::helpers::create_room_with_dependencies(db).await?;
    let requester = factory::create_user(db).await?;
    let series = ReservationFactory::new(db, requester.id, room.id)
        .event_date(date(2030, 1, 1))
        .recurrence(Recurrence::Weekly, Some(date(2030, 3, 1)))
        .build()
        .await?;
    ReservationFactory::new(db, requester.id, room.id)
        .event_date(date(2030, 1, 1))
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let blocking = repo
        .get_blocking(
            &[room.id],
            &[ReservationStatus::Pending],
            date(2030, 2, 1),
            date(2030, 2, 28),
            None,
        )
        .await?;

    assert_eq!(blocking.len(), 1);
    assert_eq!(blocking[0].id, series.id);

    Ok(())
}

/// Tests excluding the reservation being re-checked and other rooms.
///
/// Expected: empty result
#[tokio::test]
async fn excludes_given_reservation_and_other_rooms() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, room) = factory::helpers::create_room_with_dependencies(db).await?;
    let (_, _, _, other_room) = factory::helpers::create_room_with_dependencies(db).await?;
    let requester = factory::create_user(db).await?;
    let own = factory::create_reservation(db, requester.id, room.id).await?;
    factory::create_reservation(db, requester.id, other_room.id).await?;

    let repo = ReservationRepository::new(db);
    let blocking = repo
        .get_blocking(
            &[room.id],
            &[ReservationStatus::Pending],
            date(2030, 1, 15),
            date(2030, 1, 15),
            Some(own.id),
        )
        .await?;

    assert!(blocking.is_empty());

    Ok(())
}
