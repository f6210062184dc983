use super::*;

/// Tests listing bookable rooms.
///
/// Verifies that blocked rooms are excluded.
///
/// Expected: Ok(Vec) without the blocked room
#[tokio::test]
async fn excludes_blocked_rooms() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_room_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (department, _, technician, open_room) =
        factory::helpers::create_room_with_dependencies(db).await?;
    let blocked = factory::room::RoomFactory::new(db, department.id, technician.id)
        .available(false)
        .build()
        .await?;

    let repo = RoomRepository::new(db);
    let rooms = repo.get_bookable(&[]).await?;

    assert!(rooms.iter().any(|r| r.id == open_room.id));
    assert!(!rooms.iter().any(|r| r.id == blocked.id));

    Ok(())
}

/// Tests restricting the bookable search to given rooms.
///
/// Expected: Ok(Vec) containing only the requested room
#[tokio::test]
async fn restricts_to_requested_rooms() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_room_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (department, _, technician, first) =
        factory::helpers::create_room_with_dependencies(db).await?;
    factory::create_room(db, department.id, technician.id).await?;

    let repo = RoomRepository::new(db);
    let rooms = repo.get_bookable(&[first.id]).await?;

    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].id, first.id);

    Ok(())
}
