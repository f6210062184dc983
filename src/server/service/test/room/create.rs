use super::*;

fn room_params(department_id: i32, technician_id: i32) -> CreateRoomParams {
    CreateRoomParams {
        department_id,
        responsible_technician_id: technician_id,
        name: "Auditorium".to_string(),
        location: Some("Main building".to_string()),
        min_capacity: Some(10),
        max_capacity: 120,
        image_url: None,
        available: true,
        notes: None,
    }
}

/// Tests creating a room.
///
/// Expected: Ok(Room) listed afterwards
#[tokio::test]
async fn creates_room() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (department, _, technician, _) =
        factory::helpers::create_room_with_dependencies(db).await?;

    let service = RoomService::new(db);
    let room = service
        .create(room_params(department.id, technician.id))
        .await?;

    assert_eq!(room.name, "Auditorium");
    assert_eq!(room.max_capacity, 120);
    assert!(service.list().await?.iter().any(|r| r.id == room.id));
    assert_eq!(service.get(room.id).await?, room);

    Ok(())
}

/// Tests room validation.
///
/// Verifies capacity bounds and that department and technician must exist.
///
/// Expected: BadRequest for capacities, NotFound for unknown references
#[tokio::test]
async fn validates_room() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (department, _, technician, _) =
        factory::helpers::create_room_with_dependencies(db).await?;
    let service = RoomService::new(db);

    let mut zero = room_params(department.id, technician.id);
    zero.max_capacity = 0;
    assert!(matches!(
        service.create(zero).await,
        Err(AppError::BadRequest(_))
    ));

    let mut inverted = room_params(department.id, technician.id);
    inverted.min_capacity = Some(200);
    assert!(matches!(
        service.create(inverted).await,
        Err(AppError::BadRequest(_))
    ));

    assert!(matches!(
        service.create(room_params(9999, technician.id)).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.create(room_params(department.id, 9999)).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(service.get(9999).await, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests updating one equipment row.
///
/// Expected: updated quantity and status; BadRequest for negative quantity; NotFound
/// for an unknown row
#[tokio::test]
async fn updates_equipment_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, room) = factory::helpers::create_room_with_dependencies(db).await?;
    let projector = factory::create_equipment_type(db, "Projector").await?;
    let row = RoomEquipmentFactory::new(db, room.id, projector.id)
        .quantity(2)
        .build()
        .await?;

    let service = RoomService::new(db);
    let updated = service
        .update_equipment(
            row.id,
            UpdateEquipmentParams {
                quantity: Some(1),
                status: Some(EquipmentStatus::Damaged),
                notes: Some("Lamp broken".to_string()),
            },
        )
        .await?;
    assert_eq!(updated.quantity, 1);
    assert_eq!(updated.status, EquipmentStatus::Damaged);
    assert_eq!(updated.name, "Projector");

    let listed = service.list_equipment(room.id).await?;
    assert_eq!(listed, vec![updated]);

    let negative = service
        .update_equipment(
            row.id,
            UpdateEquipmentParams {
                quantity: Some(-1),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(negative, Err(AppError::BadRequest(_))));

    let missing = service
        .update_equipment(9999, UpdateEquipmentParams::default())
        .await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    Ok(())
}
