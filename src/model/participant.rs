use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ParticipantDto {
    pub id: i32,
    pub reservation_id: i32,
    pub name: String,
    pub email: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Validate, ToSchema)]
pub struct CreateParticipantDto {
    pub reservation_id: i32,
    #[validate(length(min = 1, max = 150))]
    pub name: String,
    #[validate(email)]
    pub email: String,
}
