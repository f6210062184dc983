use super::*;

/// Tests that an unrestricted scope returns every pending reservation.
///
/// Expected: pending reservations of all rooms, approved ones skipped
#[tokio::test]
async fn returns_all_pending_for_unrestricted_scope() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, room) = factory::helpers::create_room_with_dependencies(db).await?;
    let (_, _, _, other_room) = factory::helpers::create_room_with_dependencies(db).await?;
    let requester = factory::create_user(db).await?;
    factory::create_reservation(db, requester.id, room.id).await?;
    factory::create_reservation(db, requester.id, other_room.id).await?;
    ReservationFactory::new(db, requester.id, room.id)
        .status(ReservationStatus::Approved)
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let pending = repo.get_pending(&PendingScope::All).await?;

    assert_eq!(pending.len(), 2);

    Ok(())
}

/// Tests scoping by room and by assigned technician.
///
/// Verifies that a scoped query matches reservations in the listed rooms or assigned
/// to the technician, and nothing else.
///
/// Expected: exactly the two matching reservations
#[tokio::test]
async fn matches_rooms_or_assigned_technician() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, technician, room) = factory::helpers::create_room_with_dependencies(db).await?;
    let (_, _, _, second_room) = factory::helpers::create_room_with_dependencies(db).await?;
    let (_, _, _, third_room) = factory::helpers::create_room_with_dependencies(db).await?;
    let requester = factory::create_user(db).await?;

    let in_room = factory::create_reservation(db, requester.id, room.id).await?;
    let assigned = ReservationFactory::new(db, requester.id, second_room.id)
        .assigned_technician_id(Some(technician.id))
        .build()
        .await?;
    factory::create_reservation(db, requester.id, third_room.id).await?;

    let repo = ReservationRepository::new(db);
    let pending = repo
        .get_pending(&PendingScope::Scoped {
            room_ids: vec![room.id],
            technician_id: Some(technician.id),
        })
        .await?;

    let ids: Vec<i32> = pending.iter().map(|r| r.id).collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&in_room.id));
    assert!(ids.contains(&assigned.id));

    Ok(())
}

/// Tests an empty scope.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_nothing_for_empty_scope() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_reservation_with_dependencies(db).await?;

    let repo = ReservationRepository::new(db);
    let pending = repo
        .get_pending(&PendingScope::Scoped {
            room_ids: Vec::new(),
            technician_id: None,
        })
        .await?;

    assert!(pending.is_empty());

    Ok(())
}
