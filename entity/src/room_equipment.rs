use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::EquipmentStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "room_equipment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub room_id: i32,
    pub equipment_type_id: i32,
    pub quantity: i32,
    pub status: EquipmentStatus,
    pub serial_number: Option<String>,
    pub acquired_on: Option<Date>,
    pub last_inspection: Option<Date>,
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::room::Entity",
        from = "Column::RoomId",
        to = "super::room::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Room,
    #[sea_orm(
        belongs_to = "super::equipment_type::Entity",
        from = "Column::EquipmentTypeId",
        to = "super::equipment_type::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    EquipmentType,
}

impl Related<super::room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Room.def()
    }
}

impl Related<super::equipment_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EquipmentType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
