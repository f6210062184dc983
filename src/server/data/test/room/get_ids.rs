use super::*;

/// Tests listing room IDs by department and by responsible technician.
///
/// Expected: each query returns only the rooms it owns
#[tokio::test]
async fn returns_room_ids_for_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_room_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (department, _, technician, room) =
        factory::helpers::create_room_with_dependencies(db).await?;
    let (other_department, _, other_technician, other_room) =
        factory::helpers::create_room_with_dependencies(db).await?;

    let repo = RoomRepository::new(db);

    assert_eq!(repo.get_ids_by_department(department.id).await?, vec![room.id]);
    assert_eq!(
        repo.get_ids_by_department(other_department.id).await?,
        vec![other_room.id]
    );
    assert_eq!(repo.get_ids_by_technician(technician.id).await?, vec![room.id]);
    assert_eq!(
        repo.get_ids_by_technician(other_technician.id).await?,
        vec![other_room.id]
    );

    Ok(())
}
