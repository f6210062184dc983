//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults so tests only spell out the fields
//! they care about. Foreign keys are passed explicitly; `helpers` has shortcuts that
//! create a whole dependency chain at once.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::user::create_user(&db).await?;
//!     let (department, technician_user, technician, room) =
//!         factory::helpers::create_room_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let admin = factory::user::UserFactory::new(&db)
//!     .email("admin@example.com")
//!     .role(UserRole::Admin)
//!     .build()
//!     .await?;
//! ```

pub mod additional_service;
pub mod department;
pub mod equipment_type;
pub mod helpers;
pub mod participant;
pub mod reservation;
pub mod room;
pub mod room_equipment;
pub mod technician;
pub mod user;

pub use additional_service::create_additional_service;
pub use department::create_department;
pub use equipment_type::create_equipment_type;
pub use participant::create_participant;
pub use reservation::create_reservation;
pub use room::create_room;
pub use room_equipment::create_room_equipment;
pub use technician::create_technician;
pub use user::{create_user, create_user_with_role};
