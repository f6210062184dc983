//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user accounts. Emails are
//! stored lowercased, so every lookup lowercases its input before querying.

use crate::server::model::user::{CreateUserParams, User, UserCredentials};
use chrono::Utc;
use entity::sea_orm_active_enums::UserRole;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new active user account.
    ///
    /// # Arguments
    /// - `params` - Normalized user fields
    /// - `password_hash` - Bcrypt hash of the user's password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including unique violation on email
    pub async fn create(
        &self,
        params: &CreateUserParams,
        password_hash: String,
    ) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            first_name: ActiveValue::Set(params.first_name.clone()),
            last_name: ActiveValue::Set(params.last_name.clone()),
            email: ActiveValue::Set(params.email.to_lowercase()),
            password_hash: ActiveValue::Set(password_hash),
            role: ActiveValue::Set(params.role),
            department_id: ActiveValue::Set(params.department_id),
            active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user and their password hash by email, ignoring case.
    ///
    /// # Returns
    /// - `Ok(Some(UserCredentials))` - User found
    /// - `Ok(None)` - No user with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserCredentials>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email.trim().to_lowercase()))
            .one(self.db)
            .await?;

        Ok(entity.map(|e| {
            let password_hash = e.password_hash.clone();
            UserCredentials {
                user: User::from_entity(e),
                password_hash,
            }
        }))
    }

    /// Checks whether an account already uses the given email, ignoring case.
    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email.trim().to_lowercase()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets users by ID, silently skipping IDs that do not exist.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<User>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Gets all users ordered by last name, then first name.
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::LastName)
            .order_by_asc(entity::user::Column::FirstName)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Checks if any admin users exist in the database.
    ///
    /// Used at startup to decide whether an initial admin account must be created.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one admin user exists in the database
    /// - `Ok(false)` - No admin users exist (first-time setup scenario)
    /// - `Err(DbErr)` - Database error during count query
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(UserRole::Admin))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }

    /// Sets the role of a user.
    ///
    /// # Returns
    /// - `Ok(())` - Role updated (or no matching user found)
    /// - `Err(DbErr)` - Database error during update operation
    pub async fn set_role(&self, user_id: i32, role: UserRole) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::Role,
                sea_orm::sea_query::Expr::value(role),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }
}
