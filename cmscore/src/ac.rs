pub mod actor;
pub mod role;

pub use self::actor::Actor;
pub use self::role::{Role, Roles};
