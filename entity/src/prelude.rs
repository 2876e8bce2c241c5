pub use super::booked_room::Entity as BookedRoom;
pub use super::role::Entity as Role;
pub use super::room::Entity as Room;
pub use super::user::Entity as User;
pub use super::user_role::Entity as UserRole;
