//! Shared helper utilities for factory methods.
//!
//! Provides unique ID generation and shortcuts for creating entities together with
//! their foreign-key dependencies.

use entity::sea_orm_active_enums::UserRole;
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a room with every row it depends on.
///
/// Creates, in order:
/// 1. Department
/// 2. User with the `Technician` role
/// 3. Technician profile for that user
/// 4. Room owned by the department, with the technician responsible for it
///
/// # Returns
/// - `Ok((department, technician_user, technician, room))` - All created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_room_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::department::Model,
        entity::user::Model,
        entity::technician::Model,
        entity::room::Model,
    ),
    DbErr,
> {
    let department = crate::factory::department::create_department(db).await?;
    let technician_user = crate::factory::user::UserFactory::new(db)
        .role(UserRole::Technician)
        .department_id(Some(department.id))
        .build()
        .await?;
    let technician =
        crate::factory::technician::create_technician(db, technician_user.id).await?;
    let room = crate::factory::room::create_room(db, department.id, technician.id).await?;

    Ok((department, technician_user, technician, room))
}

/// Creates a pending reservation with a requester and a room.
///
/// # Returns
/// - `Ok((requester, room, reservation))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_reservation_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::room::Model,
        entity::reservation::Model,
    ),
    DbErr,
> {
    let (_, _, _, room) = create_room_with_dependencies(db).await?;
    let requester = crate::factory::user::create_user(db).await?;
    let reservation =
        crate::factory::reservation::create_reservation(db, requester.id, room.id).await?;

    Ok((requester, room, reservation))
}
