//! User domain models and parameters.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::UserRole;

use crate::model::user::{CreateUserDto, PersonDto, UserDto, UserRoleDto};

use super::enum_mapping;

enum_mapping!(UserRole <=> UserRoleDto {
    Admin,
    Technician,
    User,
    DepartmentHead,
});

/// A user account without its password hash.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: UserRole,
    pub department_id: Option<i32>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            role: entity.role,
            department_id: entity.department_id,
            active: entity.active,
            created_at: entity.created_at,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            role: self.role.into(),
            department_id: self.department_id,
            active: self.active,
            created_at: self.created_at,
        }
    }
}

/// Name and contact of someone involved in a reservation.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl Person {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.full_name(),
            email: user.email.clone(),
        }
    }

    pub fn into_dto(self) -> PersonDto {
        PersonDto {
            id: self.id,
            name: self.name,
            email: self.email,
        }
    }
}

/// Parameters for creating a user account.
///
/// The email is normalized to lowercase so lookups are case-insensitive.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub department_id: Option<i32>,
}

impl CreateUserParams {
    pub fn from_dto(dto: CreateUserDto) -> Self {
        Self {
            first_name: dto.first_name.trim().to_string(),
            last_name: dto.last_name.trim().to_string(),
            email: dto.email.trim().to_lowercase(),
            password: dto.password,
            role: dto.role.into(),
            department_id: dto.department_id,
        }
    }
}

/// A user together with the stored password hash, used only for credential checks.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}
