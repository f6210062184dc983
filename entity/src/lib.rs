//! SeaORM entity definitions for the room reservation schema.
//!
//! One module per table. Enumerated columns live in `sea_orm_active_enums` and are
//! stored as strings so the schema stays portable across SQLite and Postgres.

pub mod prelude;

pub mod additional_participant;
pub mod additional_service;
pub mod approval_history;
pub mod department;
pub mod equipment_type;
pub mod reservation;
pub mod reservation_equipment;
pub mod reservation_service;
pub mod room;
pub mod room_equipment;
pub mod sea_orm_active_enums;
pub mod technician;
pub mod user;
