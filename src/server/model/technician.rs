//! Technician domain models.

use crate::model::{reservation::TechnicianBriefDto, technician::TechnicianDto};

/// A technician profile joined with its user account.
#[derive(Debug, Clone, PartialEq)]
pub struct Technician {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub email: String,
    pub specialty: Option<String>,
    pub active: bool,
}

impl Technician {
    /// Converts the technician entity and its user into a domain model.
    ///
    /// A missing user yields an empty name and email rather than failing, since the
    /// foreign key makes that state unreachable outside of manual edits.
    pub fn from_entity(
        entity: entity::technician::Model,
        user: Option<entity::user::Model>,
    ) -> Self {
        let (name, email) = user
            .map(|u| (format!("{} {}", u.first_name, u.last_name), u.email))
            .unwrap_or_default();

        Self {
            id: entity.id,
            user_id: entity.user_id,
            name,
            email,
            specialty: entity.specialty,
            active: entity.active,
        }
    }

    pub fn into_dto(self) -> TechnicianDto {
        TechnicianDto {
            id: self.id,
            user_id: self.user_id,
            name: self.name,
            email: self.email,
            specialty: self.specialty,
            active: self.active,
        }
    }

    pub fn into_brief_dto(self) -> TechnicianBriefDto {
        TechnicianBriefDto {
            id: self.id,
            name: self.name,
            specialty: self.specialty,
        }
    }
}
