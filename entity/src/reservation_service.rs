use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reservation_service")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub reservation_id: i32,
    pub additional_service_id: i32,
    pub quantity: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::reservation::Entity",
        from = "Column::ReservationId",
        to = "super::reservation::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Reservation,
    #[sea_orm(
        belongs_to = "super::additional_service::Entity",
        from = "Column::AdditionalServiceId",
        to = "super::additional_service::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    AdditionalService,
}

impl Related<super::additional_service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AdditionalService.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
