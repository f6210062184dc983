use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TechnicianDto {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub email: String,
    pub specialty: Option<String>,
    pub active: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, Validate, ToSchema)]
pub struct CreateTechnicianDto {
    pub user_id: i32,
    #[validate(length(min = 1, max = 100))]
    pub specialty: Option<String>,
}
