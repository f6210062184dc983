//! Equipment type factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an equipment type with the given name.
pub async fn create_equipment_type(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::equipment_type::Model, DbErr> {
    entity::equipment_type::ActiveModel {
        id: ActiveValue::NotSet,
        name: ActiveValue::Set(name.into()),
        description: ActiveValue::Set(None),
        brand: ActiveValue::Set(None),
        model: ActiveValue::Set(None),
        year: ActiveValue::Set(None),
    }
    .insert(db)
    .await
}
