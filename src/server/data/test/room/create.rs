use super::*;

/// Tests creating a room.
///
/// Expected: Ok(Room) findable by ID with the given fields
#[tokio::test]
async fn creates_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_room_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (department, _, technician, _) =
        factory::helpers::create_room_with_dependencies(db).await?;

    let repo = RoomRepository::new(db);
    let room = repo
        .create(&CreateRoomParams {
            department_id: department.id,
            responsible_technician_id: technician.id,
            name: "Auditorium".to_string(),
            location: Some("Building B".to_string()),
            min_capacity: Some(10),
            max_capacity: 200,
            image_url: None,
            available: true,
            notes: None,
        })
        .await?;

    let found = repo.find_by_id(room.id).await?.unwrap();
    assert_eq!(found.name, "Auditorium");
    assert_eq!(found.max_capacity, 200);
    assert_eq!(found.responsible_technician_id, technician.id);

    Ok(())
}

/// Tests that a room must reference an existing department.
///
/// Expected: Err(DbErr) from the foreign key
#[tokio::test]
async fn fails_for_unknown_department() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_room_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, technician, _) = factory::helpers::create_room_with_dependencies(db).await?;

    let repo = RoomRepository::new(db);
    let result = repo
        .create(&CreateRoomParams {
            department_id: 9999,
            responsible_technician_id: technician.id,
            name: "Nowhere".to_string(),
            location: None,
            min_capacity: None,
            max_capacity: 5,
            image_url: None,
            available: true,
            notes: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
