//! User factory for creating test user entities.
//!
//! Users are created active with the `User` role and no department unless
//! overridden through the builder.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::UserRole;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// The default password hash is not a valid bcrypt hash; tests exercising login
/// should set one with `password_hash()`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .email("head@example.com")
///     .role(UserRole::DepartmentHead)
///     .department_id(Some(department.id))
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    email: String,
    password_hash: String,
    role: UserRole,
    department_id: Option<i32>,
    active: bool,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"User"`
    /// - last_name: `"{id}"` where id is auto-incremented
    /// - email: `"user{id}@example.com"`
    /// - role: `UserRole::User`
    /// - department_id: `None`
    /// - active: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: "User".to_string(),
            last_name: id.to_string(),
            email: format!("user{}@example.com", id),
            password_hash: "not-a-bcrypt-hash".to_string(),
            role: UserRole::User,
            department_id: None,
            active: true,
        }
    }

    /// Sets the first name.
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    /// Sets the last name.
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    /// Sets the email address.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the stored password hash.
    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    /// Sets the role.
    pub fn role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }

    /// Sets the department.
    pub fn department_id(mut self, department_id: Option<i32>) -> Self {
        self.department_id = department_id;
        self
    }

    /// Sets whether the account is active.
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::NotSet,
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(self.password_hash),
            role: ActiveValue::Set(self.role),
            department_id: ActiveValue::Set(self.department_id),
            active: ActiveValue::Set(self.active),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user with the given role and otherwise default values.
pub async fn create_user_with_role(
    db: &DatabaseConnection,
    role: UserRole,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).role(role).build().await
}
