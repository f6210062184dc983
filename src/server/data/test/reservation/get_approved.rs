use super::*;

/// Tests paging through a room's approved reservations.
///
/// Expected: newest first, pending skipped, limit and offset honoured
#[tokio::test]
async fn pages_approved_reservations_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, room) = factory::helpers::create_room_with_dependencies(db).await?;
    let requester = factory::create_user(db).await?;
    for day in 1..=3 {
        ReservationFactory::new(db, requester.id, room.id)
            .event_date(date(2030, 4, day))
            .status(ReservationStatus::Approved)
            .build()
            .await?;
    }
    ReservationFactory::new(db, requester.id, room.id)
        .event_date(date(2030, 4, 20))
        .build()
        .await?;

    let repo = ReservationRepository::new(db);

    let first_page = repo.get_approved_for_room(room.id, 2, 0).await?;
    let dates: Vec<NaiveDate> = first_page.iter().map(|r| r.event_date).collect();
    assert_eq!(dates, vec![date(2030, 4, 3), date(2030, 4, 2)]);

    let second_page = repo.get_approved_for_room(room.id, 2, 2).await?;
    assert_eq!(second_page.len(), 1);
    assert_eq!(second_page[0].event_date, date(2030, 4, 1));

    Ok(())
}

/// Tests per-room approved statistics.
///
/// Expected: count and latest date for the used room, no entry for the unused room
#[tokio::test]
async fn computes_approved_stats_per_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, room) = factory::helpers::create_room_with_dependencies(db).await?;
    let (_, _, _, unused_room) = factory::helpers::create_room_with_dependencies(db).await?;
    let requester = factory::create_user(db).await?;
    for day in [3, 17] {
        ReservationFactory::new(db, requester.id, room.id)
            .event_date(date(2030, 5, day))
            .status(ReservationStatus::Approved)
            .build()
            .await?;
    }
    factory::create_reservation(db, requester.id, unused_room.id).await?;

    let repo = ReservationRepository::new(db);
    let stats = repo.get_approved_stats().await?;

    assert_eq!(stats.get(&room.id), Some(&(2, date(2030, 5, 17))));
    assert!(!stats.contains_key(&unused_room.id));

    Ok(())
}
