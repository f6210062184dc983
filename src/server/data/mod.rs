//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Multi-row writes that must land together run inside a single database transaction.

pub mod additional_service;
pub mod approval_history;
pub mod department;
pub mod equipment;
pub mod participant;
pub mod reservation;
pub mod room;
pub mod technician;
pub mod user;
