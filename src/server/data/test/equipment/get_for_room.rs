use super::*;

/// Tests listing a room's equipment with type details.
///
/// Verifies that each row carries its equipment type name and that equipment of other
/// rooms is not returned.
///
/// Expected: Ok(Vec) with one named item
#[tokio::test]
async fn returns_items_with_type_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_equipment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, room) = factory::helpers::create_room_with_dependencies(db).await?;
    let (_, _, _, other_room) = factory::helpers::create_room_with_dependencies(db).await?;
    let projector = factory::create_equipment_type(db, "Projector Epson").await?;
    factory::create_room_equipment(db, room.id, projector.id).await?;
    factory::create_room_equipment(db, other_room.id, projector.id).await?;

    let repo = EquipmentRepository::new(db);
    let items = repo.get_for_room(room.id).await?;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Projector Epson");
    assert_eq!(items[0].room_id, room.id);
    assert_eq!(items[0].status, EquipmentStatus::Operational);

    Ok(())
}
