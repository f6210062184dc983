use super::*;

/// Tests searching for free rooms over a window.
///
/// Verifies that a room with an overlapping booking, a blocked room and rooms outside
/// the requested set are excluded, and that a window spanning two days sees bookings
/// on the second day.
///
/// Expected: only the free room is returned
#[tokio::test]
async fn finds_rooms_free_in_window() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (department, _, technician, busy) =
        factory::helpers::create_room_with_dependencies(db).await?;
    let free = RoomFactory::new(db, department.id, technician.id)
        .build()
        .await?;
    RoomFactory::new(db, department.id, technician.id)
        .available(false)
        .build()
        .await?;
    let requester = factory::create_user(db).await?;
    ReservationFactory::new(db, requester.id, busy.id)
        .event_date(date(2030, 5, 2))
        .times(time(9, 0), time(11, 0))
        .build()
        .await?;

    let service = RoomService::new(db);

    let start = date(2030, 5, 1).and_time(time(16, 0));
    let end = date(2030, 5, 2).and_time(time(10, 0));
    let rooms = service.available_in_window(start, end, &[]).await?;
    let ids: Vec<i32> = rooms.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![free.id]);

    let morning = service
        .available_in_window(
            date(2030, 5, 1).and_time(time(9, 0)),
            date(2030, 5, 1).and_time(time(12, 0)),
            &[busy.id],
        )
        .await?;
    assert_eq!(morning.len(), 1);
    assert_eq!(morning[0].id, busy.id);

    let inverted = service.available_in_window(end, start, &[]).await;
    assert!(matches!(inverted, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests validating a slot against existing bookings.
///
/// Verifies that an overlap is reported with the earliest clashing booking and the
/// free slots of the day as suggestions, and that a clear slot reports no conflict.
///
/// Expected: ExistingReservation with alternatives 08-09, 10-13 and 14-18
#[tokio::test]
async fn validates_slot_with_suggestions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (requester, room, morning) =
        factory::helpers::create_reservation_with_dependencies(db).await?;
    ReservationFactory::new(db, requester.id, room.id)
        .times(time(13, 0), time(14, 0))
        .status(ReservationStatus::Approved)
        .build()
        .await?;
    ReservationFactory::new(db, requester.id, room.id)
        .times(time(15, 0), time(16, 0))
        .status(ReservationStatus::Rejected)
        .build()
        .await?;

    let service = RoomService::new(db);
    let day = date(2030, 1, 15);

    let report = service
        .validate_availability(room.id, day, time(9, 30), time(10, 30))
        .await?;
    assert!(report.has_conflict());
    assert_eq!(
        report.conflict,
        Some(AvailabilityConflict::ExistingReservation {
            event_name: morning.event_name.clone(),
            reservation_number: morning.number.clone(),
            slot: TimeSlot::new(time(9, 0), time(10, 0)),
        })
    );
    let suggestions = report.suggestions.unwrap();
    assert_eq!(
        suggestions.alternatives,
        vec![
            TimeSlot::new(time(8, 0), time(9, 0)),
            TimeSlot::new(time(10, 0), time(13, 0)),
            TimeSlot::new(time(14, 0), time(18, 0)),
        ]
    );
    assert_eq!(
        suggestions.next_available,
        Some(TimeSlot::new(time(8, 0), time(9, 0)))
    );

    let clear = service
        .validate_availability(room.id, day, time(15, 0), time(16, 0))
        .await?;
    assert!(!clear.has_conflict());
    assert!(clear.suggestions.is_none());

    let inverted = service
        .validate_availability(room.id, day, time(11, 0), time(10, 0))
        .await;
    assert!(matches!(inverted, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests validating a slot in a blocked room.
///
/// Expected: RoomBlocked without suggestions
#[tokio::test]
async fn reports_blocked_room() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (department, _, technician, _) =
        factory::helpers::create_room_with_dependencies(db).await?;
    let blocked = RoomFactory::new(db, department.id, technician.id)
        .available(false)
        .build()
        .await?;

    let report = RoomService::new(db)
        .validate_availability(blocked.id, date(2030, 1, 15), time(9, 0), time(10, 0))
        .await?;

    assert_eq!(report.conflict, Some(AvailabilityConflict::RoomBlocked));
    assert!(report.suggestions.is_none());

    Ok(())
}

/// Tests the daily availability overview.
///
/// Verifies that a room booked for nearly the whole business day is unavailable, a
/// lightly booked room is available and a blocked room never is.
///
/// Expected: availability flags and booked slots per room
#[tokio::test]
async fn reports_daily_availability() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (department, _, technician, full) =
        factory::helpers::create_room_with_dependencies(db).await?;
    let light = RoomFactory::new(db, department.id, technician.id)
        .build()
        .await?;
    let blocked = RoomFactory::new(db, department.id, technician.id)
        .available(false)
        .build()
        .await?;
    let requester = factory::create_user(db).await?;
    ReservationFactory::new(db, requester.id, full.id)
        .times(time(8, 0), time(17, 30))
        .build()
        .await?;
    ReservationFactory::new(db, requester.id, light.id)
        .times(time(10, 0), time(11, 0))
        .build()
        .await?;

    let overview = RoomService::new(db)
        .daily_availability(date(2030, 1, 15))
        .await?;
    let find = |id: i32| overview.iter().find(|a| a.room.id == id).unwrap();

    assert!(!find(full.id).is_available);
    assert_eq!(
        find(full.id).booked_slots,
        vec![TimeSlot::new(time(8, 0), time(17, 30))]
    );
    assert!(find(light.id).is_available);
    assert!(!find(blocked.id).is_available);
    assert!(find(blocked.id).booked_slots.is_empty());

    Ok(())
}
