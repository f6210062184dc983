//! Wire DTOs shared by every HTTP endpoint.
//!
//! Request DTOs carry `validator` constraints and are checked in the controllers
//! before being converted into service parameters.

pub mod api;
pub mod auth;
pub mod department;
pub mod participant;
pub mod reservation;
pub mod room;
pub mod technician;
pub mod user;
