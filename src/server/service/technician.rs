use entity::sea_orm_active_enums::UserRole;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{technician::TechnicianRepository, user::UserRepository},
    error::AppError,
    model::technician::Technician,
};

pub struct TechnicianService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> TechnicianService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Promotes a user to technician by creating their technician profile.
    ///
    /// The user's role becomes `Technician` unless they are an admin, who keep their role.
    ///
    /// # Returns
    /// - `Ok(Technician)` - The new technician profile
    /// - `Err(AppError::NotFound)` - User does not exist
    /// - `Err(AppError::Conflict)` - User already has a technician profile
    pub async fn promote(
        &self,
        user_id: i32,
        specialty: Option<String>,
    ) -> Result<Technician, AppError> {
        let user_repo = UserRepository::new(self.db);
        let technician_repo = TechnicianRepository::new(self.db);

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };
        if technician_repo.find_by_user_id(user_id).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "User {} is already a technician",
                user_id
            )));
        }

        let technician = technician_repo.create(user_id, specialty).await?;
        if user.role != UserRole::Admin {
            user_repo.set_role(user_id, UserRole::Technician).await?;
        }

        tracing::info!(user_id, technician_id = technician.id, "User promoted to technician");

        Ok(technician)
    }

    pub async fn list(&self) -> Result<Vec<Technician>, AppError> {
        Ok(TechnicianRepository::new(self.db).get_all().await?)
    }
}
