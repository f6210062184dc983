//! Technician factory for creating technician profiles.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating a technician profile for an existing user.
pub struct TechnicianFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    specialty: Option<String>,
    active: bool,
}

impl<'a> TechnicianFactory<'a> {
    /// Creates a new factory for `user_id` with specialty `"Audiovisual"`.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            specialty: Some("Audiovisual".to_string()),
            active: true,
        }
    }

    pub fn specialty(mut self, specialty: Option<String>) -> Self {
        self.specialty = specialty;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the technician entity into the database.
    pub async fn build(self) -> Result<entity::technician::Model, DbErr> {
        entity::technician::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.user_id),
            specialty: ActiveValue::Set(self.specialty),
            active: ActiveValue::Set(self.active),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a technician profile for the given user.
pub async fn create_technician(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::technician::Model, DbErr> {
    TechnicianFactory::new(db, user_id).build().await
}
