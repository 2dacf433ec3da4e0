mod claims;
mod role;
mod session;

pub use self::claims::AccessClaims;
pub use self::role::{LOGIN_PATH, Role, UNAUTHORIZED_PATH, UnknownRole};
pub use self::session::Session;
