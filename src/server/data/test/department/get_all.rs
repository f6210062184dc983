use super::*;

/// Tests listing departments alphabetically.
///
/// Expected: Ok(Vec) sorted by name
#[tokio::test]
async fn returns_departments_sorted_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_room_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DepartmentRepository::new(db);
    repo.create("Sales").await?;
    repo.create("Engineering").await?;
    repo.create("Marketing").await?;

    let names: Vec<String> = repo.get_all().await?.into_iter().map(|d| d.name).collect();

    assert_eq!(names, vec!["Engineering", "Marketing", "Sales"]);

    Ok(())
}
