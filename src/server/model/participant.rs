use crate::model::participant::{CreateParticipantDto, ParticipantDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    pub id: i32,
    pub reservation_id: i32,
    pub name: String,
    pub email: String,
}

impl Participant {
    pub fn from_entity(entity: entity::additional_participant::Model) -> Self {
        Self {
            id: entity.id,
            reservation_id: entity.reservation_id,
            name: entity.name,
            email: entity.email,
        }
    }

    pub fn into_dto(self) -> ParticipantDto {
        ParticipantDto {
            id: self.id,
            reservation_id: self.reservation_id,
            name: self.name,
            email: self.email,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateParticipantParams {
    pub reservation_id: i32,
    pub name: String,
    pub email: String,
}

impl CreateParticipantParams {
    pub fn from_dto(dto: CreateParticipantDto) -> Self {
        Self {
            reservation_id: dto.reservation_id,
            name: dto.name.trim().to_string(),
            email: dto.email.trim().to_lowercase(),
        }
    }
}
