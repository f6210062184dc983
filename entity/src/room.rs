use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "room")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub department_id: i32,
    pub responsible_technician_id: i32,
    pub name: String,
    pub location: Option<String>,
    pub min_capacity: Option<i32>,
    pub max_capacity: i32,
    pub image_url: Option<String>,
    pub available: bool,
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::department::Entity",
        from = "Column::DepartmentId",
        to = "super::department::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Department,
    #[sea_orm(
        belongs_to = "super::technician::Entity",
        from = "Column::ResponsibleTechnicianId",
        to = "super::technician::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Technician,
    #[sea_orm(has_many = "super::room_equipment::Entity")]
    RoomEquipment,
}

impl Related<super::department::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl Related<super::technician::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Technician.def()
    }
}

impl Related<super::room_equipment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoomEquipment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
