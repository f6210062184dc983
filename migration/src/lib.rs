pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_department_table;
mod m20260105_000002_create_user_table;
mod m20260105_000003_create_technician_table;
mod m20260105_000004_create_room_table;
mod m20260105_000005_create_equipment_type_table;
mod m20260105_000006_create_room_equipment_table;
mod m20260106_000007_create_reservation_table;
mod m20260106_000008_create_reservation_equipment_table;
mod m20260106_000009_create_additional_service_table;
mod m20260106_000010_create_reservation_service_table;
mod m20260106_000011_create_additional_participant_table;
mod m20260107_000012_create_approval_history_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_department_table::Migration),
            Box::new(m20260105_000002_create_user_table::Migration),
            Box::new(m20260105_000003_create_technician_table::Migration),
            Box::new(m20260105_000004_create_room_table::Migration),
            Box::new(m20260105_000005_create_equipment_type_table::Migration),
            Box::new(m20260105_000006_create_room_equipment_table::Migration),
            Box::new(m20260106_000007_create_reservation_table::Migration),
            Box::new(m20260106_000008_create_reservation_equipment_table::Migration),
            Box::new(m20260106_000009_create_additional_service_table::Migration),
            Box::new(m20260106_000010_create_reservation_service_table::Migration),
            Box::new(m20260106_000011_create_additional_participant_table::Migration),
            Box::new(m20260107_000012_create_approval_history_table::Migration),
        ]
    }
}
