//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls and notifications
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Authorization**: Deciding who may see and change which reservations

pub mod auth;
pub mod department;
pub mod notification;
pub mod participant;
pub mod reservation;
pub mod room;
pub mod technician;
pub mod user;
