use super::*;

/// Tests filtering reservations by an inclusive date range.
///
/// Expected: only reservations on dates within the range, ordered by date and time
#[tokio::test]
async fn filters_by_inclusive_date_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, room) = factory::helpers::create_room_with_dependencies(db).await?;
    let requester = factory::create_user(db).await?;
    for (day, hour) in [(1, 9), (5, 14), (5, 8), (9, 9)] {
        ReservationFactory::new(db, requester.id, room.id)
            .event_date(date(2030, 6, day))
            .times(time(hour, 0), time(hour + 1, 0))
            .build()
            .await?;
    }

    let repo = ReservationRepository::new(db);
    let reservations = repo
        .get_all(Some(date(2030, 6, 5)), Some(date(2030, 6, 9)))
        .await?;

    let slots: Vec<(NaiveDate, NaiveTime)> = reservations
        .iter()
        .map(|r| (r.event_date, r.start_time))
        .collect();
    assert_eq!(
        slots,
        vec![
            (date(2030, 6, 5), time(8, 0)),
            (date(2030, 6, 5), time(14, 0)),
            (date(2030, 6, 9), time(9, 0)),
        ]
    );

    let everything = repo.get_all(None, None).await?;
    assert_eq!(everything.len(), 4);

    Ok(())
}
