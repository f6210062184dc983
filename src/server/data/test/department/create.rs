use super::*;

/// Tests creating a department.
///
/// Expected: Ok(Department) findable by ID and by name
#[tokio::test]
async fn creates_department() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_room_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DepartmentRepository::new(db);
    let department = repo.create("Engineering").await?;

    assert_eq!(department.name, "Engineering");
    assert!(repo.find_by_id(department.id).await?.is_some());
    assert!(repo.name_exists("Engineering").await?);
    assert!(!repo.name_exists("Finance").await?);

    Ok(())
}

/// Tests that department names are unique.
///
/// Expected: Err(DbErr) on the second insert
#[tokio::test]
async fn fails_on_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_room_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DepartmentRepository::new(db);
    repo.create("Engineering").await?;
    let result = repo.create("Engineering").await;

    assert!(result.is_err());

    Ok(())
}
