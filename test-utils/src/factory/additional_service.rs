//! Additional service factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a catalog service with the given name.
pub async fn create_additional_service(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::additional_service::Model, DbErr> {
    entity::additional_service::ActiveModel {
        id: ActiveValue::NotSet,
        name: ActiveValue::Set(name.into()),
        description: ActiveValue::Set(None),
    }
    .insert(db)
    .await
}
