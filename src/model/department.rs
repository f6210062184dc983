use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DepartmentDto {
    pub id: i32,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Validate, ToSchema)]
pub struct CreateDepartmentDto {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}
