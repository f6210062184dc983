use super::*;

fn counts(operational: i32, damaged: i32) -> StatusCounts {
    StatusCounts {
        operational,
        damaged,
        ..Default::default()
    }
}

/// Tests reading a room inventory.
///
/// Verifies that every standard item is reported, that equipment types count under
/// the item their name contains and that unrelated types are ignored.
///
/// Expected: nine items with Camera and Chair counted by status
#[tokio::test]
async fn reports_inventory_per_item() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, room) = factory::helpers::create_room_with_dependencies(db).await?;
    let camera = factory::create_equipment_type(db, "PTZ Camera").await?;
    let chair = factory::create_equipment_type(db, "Chair").await?;
    let laptop = factory::create_equipment_type(db, "Laptop").await?;
    RoomEquipmentFactory::new(db, room.id, camera.id)
        .quantity(2)
        .build()
        .await?;
    RoomEquipmentFactory::new(db, room.id, chair.id)
        .quantity(30)
        .build()
        .await?;
    RoomEquipmentFactory::new(db, room.id, chair.id)
        .quantity(3)
        .status(EquipmentStatus::Damaged)
        .build()
        .await?;
    RoomEquipmentFactory::new(db, room.id, laptop.id)
        .build()
        .await?;

    let inventory = RoomService::new(db).inventory(room.id).await?;

    assert_eq!(inventory.room_name, room.name);
    assert_eq!(inventory.items.len(), 9);
    let get = |item: &str| inventory.items.iter().find(|i| i.item == item).unwrap().counts;
    assert_eq!(get("Camera"), counts(2, 0));
    assert_eq!(get("Chair"), counts(30, 3));
    assert_eq!(get("Chair").total(), 33);
    assert_eq!(get("Projector"), StatusCounts::default());

    Ok(())
}

/// Tests updating a room inventory.
///
/// Verifies that an existing type is updated in place, a missing type is created under
/// the canonical item name and item names are matched ignoring case.
///
/// Expected: inventory reflecting the new quantities
#[tokio::test]
async fn updates_inventory() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, room) = factory::helpers::create_room_with_dependencies(db).await?;
    let chair = factory::create_equipment_type(db, "Chair").await?;
    RoomEquipmentFactory::new(db, room.id, chair.id)
        .quantity(10)
        .build()
        .await?;

    let service = RoomService::new(db);
    let inventory = service
        .update_inventory(
            room.id,
            Some(room.id),
            vec![
                InventoryUpdate {
                    item: "chair".to_string(),
                    quantity: 25,
                    status: EquipmentStatus::Operational,
                },
                InventoryUpdate {
                    item: "Whiteboard".to_string(),
                    quantity: 1,
                    status: EquipmentStatus::UnderMaintenance,
                },
            ],
        )
        .await?;

    let get = |item: &str| inventory.items.iter().find(|i| i.item == item).unwrap().counts;
    assert_eq!(get("Chair"), counts(25, 0));
    assert_eq!(get("Whiteboard").under_maintenance, 1);

    let rows = service.list_equipment(room.id).await?;
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().any(|r| r.name == "Whiteboard"));

    Ok(())
}

/// Tests updating inventory next to an equipment type with a compound name.
///
/// Verifies that "Projector Screen" keeps counting as a Screen and that a Projector
/// update gets its own type instead of overwriting the screen row.
///
/// Expected: Projector and Screen counted separately
#[tokio::test]
async fn keeps_compound_type_under_its_item() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, room) = factory::helpers::create_room_with_dependencies(db).await?;
    let screen = factory::create_equipment_type(db, "Projector Screen").await?;
    RoomEquipmentFactory::new(db, room.id, screen.id)
        .quantity(1)
        .build()
        .await?;

    let service = RoomService::new(db);
    let inventory = service
        .update_inventory(
            room.id,
            None,
            vec![InventoryUpdate {
                item: "Projector".to_string(),
                quantity: 2,
                status: EquipmentStatus::Operational,
            }],
        )
        .await?;

    let get = |item: &str| inventory.items.iter().find(|i| i.item == item).unwrap().counts;
    assert_eq!(get("Screen"), counts(1, 0));
    assert_eq!(get("Projector"), counts(2, 0));

    let rows = service.list_equipment(room.id).await?;
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().any(|r| r.name == "Projector" && r.quantity == 2));
    assert!(rows.iter().any(|r| r.name == "Projector Screen" && r.quantity == 1));

    Ok(())
}

/// Tests rejected inventory updates.
///
/// Expected: BadRequest for a room mismatch, an unknown item or a negative quantity;
/// NotFound for an unknown room
#[tokio::test]
async fn rejects_invalid_inventory_updates() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, room) = factory::helpers::create_room_with_dependencies(db).await?;
    let service = RoomService::new(db);
    let update = |item: &str, quantity: i32| InventoryUpdate {
        item: item.to_string(),
        quantity,
        status: EquipmentStatus::Operational,
    };

    assert!(matches!(
        service
            .update_inventory(room.id, Some(room.id + 1), vec![update("Chair", 1)])
            .await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service
            .update_inventory(room.id, None, vec![update("Laptop", 1)])
            .await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service
            .update_inventory(room.id, None, vec![update("Chair", -2)])
            .await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.update_inventory(9999, None, vec![update("Chair", 1)]).await,
        Err(AppError::NotFound(_))
    ));
    assert!(service.list_equipment(room.id).await?.is_empty());

    Ok(())
}
