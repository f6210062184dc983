use super::*;

/// Tests detecting when admin users exist.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_when_admin_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_room_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user_with_role(db, UserRole::Admin).await?;

    let repo = UserRepository::new(db);
    let result = repo.admin_exists().await;

    assert!(result.is_ok());
    assert!(result.unwrap());

    Ok(())
}

/// Tests detecting when only non-admin users exist.
///
/// Verifies that technicians and department heads do not count as admins.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_with_only_regular_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_room_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;
    factory::create_user_with_role(db, UserRole::Technician).await?;
    factory::create_user_with_role(db, UserRole::DepartmentHead).await?;

    let repo = UserRepository::new(db);
    let result = repo.admin_exists().await;

    assert!(result.is_ok());
    assert!(!result.unwrap());

    Ok(())
}
