//! User administration and the startup admin bootstrap.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{department::DepartmentRepository, user::UserRepository},
    error::AppError,
    model::user::{CreateUserParams, User},
    service::auth::password::hash_password,
};

pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user account with a bcrypt-hashed password.
    ///
    /// # Arguments
    /// - `params` - Account fields with the email already normalized
    /// - `bcrypt_cost` - Work factor for hashing the password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::Conflict)` - Email already registered
    /// - `Err(AppError::NotFound)` - Department does not exist
    pub async fn create(&self, params: CreateUserParams, bcrypt_cost: u32) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.email_exists(&params.email).await? {
            return Err(AppError::Conflict(format!(
                "Email {} is already registered",
                params.email
            )));
        }

        if let Some(department_id) = params.department_id {
            if DepartmentRepository::new(self.db)
                .find_by_id(department_id)
                .await?
                .is_none()
            {
                return Err(AppError::NotFound("Department not found".to_string()));
            }
        }

        let password_hash = hash_password(&params.password, bcrypt_cost)?;
        let user = user_repo.create(&params, password_hash).await?;

        tracing::info!(user_id = user.id, "User created");

        Ok(user)
    }

    pub async fn list(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }

    /// Creates the first admin account when none exists.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Admin created
    /// - `Ok(None)` - An admin already exists
    pub async fn bootstrap_admin(
        &self,
        email: &str,
        password: &str,
        bcrypt_cost: u32,
    ) -> Result<Option<User>, AppError> {
        if UserRepository::new(self.db).admin_exists().await? {
            return Ok(None);
        }

        let params = CreateUserParams {
            first_name: "System".to_string(),
            last_name: "Administrator".to_string(),
            email: email.trim().to_lowercase(),
            password: password.to_string(),
            role: entity::sea_orm_active_enums::UserRole::Admin,
            department_id: None,
        };

        self.create(params, bcrypt_cost).await.map(Some)
    }
}
