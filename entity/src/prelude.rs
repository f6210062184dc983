pub use super::additional_participant::Entity as AdditionalParticipant;
pub use super::additional_service::Entity as AdditionalService;
pub use super::approval_history::Entity as ApprovalHistory;
pub use super::department::Entity as Department;
pub use super::equipment_type::Entity as EquipmentType;
pub use super::reservation::Entity as Reservation;
pub use super::reservation_equipment::Entity as ReservationEquipment;
pub use super::reservation_service::Entity as ReservationService;
pub use super::room::Entity as Room;
pub use super::room_equipment::Entity as RoomEquipment;
pub use super::technician::Entity as Technician;
pub use super::user::Entity as User;
