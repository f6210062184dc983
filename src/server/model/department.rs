use crate::model::department::DepartmentDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Department {
    pub id: i32,
    pub name: String,
}

impl Department {
    pub fn from_entity(entity: entity::department::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> DepartmentDto {
        DepartmentDto {
            id: self.id,
            name: self.name,
        }
    }
}
