//! Domain models and operation parameters.
//!
//! Repositories convert entity models into these types at the data boundary and
//! controllers convert them into DTOs. Parameter types carry already-validated,
//! already-parsed request data into the services.

pub mod auth;
pub mod department;
pub mod participant;
pub mod reservation;
pub mod room;
pub mod technician;
pub mod user;

/// Implements `From` in both directions between a database enum and its wire DTO
/// enum when both share variant names.
macro_rules! enum_mapping {
    ($entity:ident <=> $dto:ident { $($variant:ident),+ $(,)? }) => {
        impl From<$entity> for $dto {
            fn from(value: $entity) -> Self {
                match value {
                    $($entity::$variant => $dto::$variant,)+
                }
            }
        }

        impl From<$dto> for $entity {
            fn from(value: $dto) -> Self {
                match value {
                    $($dto::$variant => $entity::$variant,)+
                }
            }
        }
    };
}

pub(crate) use enum_mapping;
