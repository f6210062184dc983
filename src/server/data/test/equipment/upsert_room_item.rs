use super::*;

/// Tests inserting a room row for a type the room does not hold yet.
///
/// Expected: one new row with the given quantity and status
#[tokio::test]
async fn inserts_missing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_equipment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, room) = factory::helpers::create_room_with_dependencies(db).await?;

    let repo = EquipmentRepository::new(db);
    let marker = repo.create_type("Marker").await?;
    repo.upsert_room_item(room.id, marker.id, 20, EquipmentStatus::Operational)
        .await?;

    let items = repo.get_for_room(room.id).await?;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].quantity, 20);
    assert_eq!(items[0].equipment_type_id, marker.id);

    Ok(())
}

/// Tests updating the existing row for a type the room already holds.
///
/// Expected: still one row, with the new quantity and status
#[tokio::test]
async fn updates_existing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_equipment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, room) = factory::helpers::create_room_with_dependencies(db).await?;
    let screen = factory::create_equipment_type(db, "Screen").await?;
    factory::create_room_equipment(db, room.id, screen.id).await?;

    let repo = EquipmentRepository::new(db);
    repo.upsert_room_item(room.id, screen.id, 3, EquipmentStatus::UnderMaintenance)
        .await?;

    let items = repo.get_for_room(room.id).await?;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].quantity, 3);
    assert_eq!(items[0].status, EquipmentStatus::UnderMaintenance);

    Ok(())
}
