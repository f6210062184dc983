use super::*;

/// Tests fetching several users at once.
///
/// Verifies that existing IDs are returned and unknown IDs are skipped.
///
/// Expected: Ok(Vec) with only the existing users
#[tokio::test]
async fn returns_existing_users_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_room_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let users = repo.find_by_ids(&[first.id, second.id, 9999]).await?;

    assert_eq!(users.len(), 2);
    assert!(users.iter().any(|u| u.id == first.id));
    assert!(users.iter().any(|u| u.id == second.id));

    Ok(())
}

/// Tests fetching with an empty ID list.
///
/// Expected: Ok(empty Vec) without querying
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_room_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let users = repo.find_by_ids(&[]).await?;

    assert!(users.is_empty());

    Ok(())
}
