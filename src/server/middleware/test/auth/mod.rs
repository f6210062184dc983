use chrono::Utc;
use entity::sea_orm_active_enums::UserRole;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::user::UserRoleDto,
    server::{
        error::{auth::AuthError, AppError},
        middleware::auth::{AuthGuard, Permission},
        service::auth::jwt::{Claims, TOKEN_ISSUER},
    },
};

mod extract;

/// Claims as an access token for `user_id` would carry them.
fn claims_for(user_id: i32) -> Claims {
    let now = Utc::now().timestamp();

    Claims {
        sub: user_id.to_string(),
        email: format!("user{}@example.com", user_id),
        role: UserRoleDto::User,
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        department_id: None,
        iat: now,
        exp: now + 3600,
        iss: TOKEN_ISSUER.to_string(),
    }
}

async fn test_db() -> test_utils::context::TestContext {
    TestBuilder::new()
        .with_table(entity::prelude::Department)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap()
}
