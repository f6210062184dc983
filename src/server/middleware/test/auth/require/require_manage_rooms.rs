use super::*;

/// Tests technicians and admins may manage rooms.
///
/// Expected: Ok(User) for both roles
#[tokio::test]
async fn grants_room_management_to_technicians_and_admins() -> Result<(), AppError> {
    let test = test_db().await;
    let db = test.db.as_ref().unwrap();

    for role in [UserRole::Technician, UserRole::Admin] {
        let user = factory::create_user_with_role(db, role).await?;
        let claims = claims_for(user.id);

        let result = AuthGuard::new(db, &claims)
            .require(&[Permission::ManageRooms])
            .await;

        assert_eq!(result?.role, role);
    }

    Ok(())
}

/// Tests regular users and department heads cannot manage rooms.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_room_management_to_other_roles() -> Result<(), AppError> {
    let test = test_db().await;
    let db = test.db.as_ref().unwrap();

    for role in [UserRole::User, UserRole::DepartmentHead] {
        let user = factory::create_user_with_role(db, role).await?;
        let claims = claims_for(user.id);

        let result = AuthGuard::new(db, &claims)
            .require(&[Permission::ManageRooms])
            .await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) if id == user.id
        ));
    }

    Ok(())
}
