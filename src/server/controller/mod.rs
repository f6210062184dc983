//! HTTP request handlers.
//!
//! Controllers authenticate the caller, validate request DTOs, convert them into
//! service parameters and map domain results back into response DTOs.

pub mod auth;
pub mod department;
pub mod participant;
pub mod reservation;
pub mod room;
pub mod technician;
pub mod user;

#[cfg(test)]
mod test;
