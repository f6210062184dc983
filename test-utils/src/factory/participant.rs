//! Additional participant factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Adds a participant to a reservation.
pub async fn create_participant(
    db: &DatabaseConnection,
    reservation_id: i32,
    name: impl Into<String>,
    email: impl Into<String>,
) -> Result<entity::additional_participant::Model, DbErr> {
    entity::additional_participant::ActiveModel {
        id: ActiveValue::NotSet,
        reservation_id: ActiveValue::Set(reservation_id),
        name: ActiveValue::Set(name.into()),
        email: ActiveValue::Set(email.into()),
    }
    .insert(db)
    .await
}
