use super::*;

/// Tests finding a user by email regardless of case.
///
/// Verifies that lookups lowercase their input and return the stored hash alongside
/// the user.
///
/// Expected: Ok(Some(UserCredentials))
#[tokio::test]
async fn finds_user_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_room_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(&params("grace@example.com"), "stored-hash".to_string())
        .await?;

    let found = repo.find_by_email("  GRACE@example.com ").await?;

    let credentials = found.expect("user should be found");
    assert_eq!(credentials.user.email, "grace@example.com");
    assert_eq!(credentials.password_hash, "stored-hash");

    Ok(())
}

/// Tests looking up an unknown email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_room_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let found = repo.find_by_email("nobody@example.com").await?;

    assert!(found.is_none());
    assert!(!repo.email_exists("nobody@example.com").await?);

    Ok(())
}
