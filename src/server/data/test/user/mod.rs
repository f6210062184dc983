use crate::server::{data::user::UserRepository, model::user::CreateUserParams};
use entity::sea_orm_active_enums::UserRole;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod admin_exists;
mod find_by_email;
mod find_by_ids;

fn params(email: &str) -> CreateUserParams {
    CreateUserParams {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: email.to_string(),
        password: "unused".to_string(),
        role: UserRole::User,
        department_id: None,
    }
}
