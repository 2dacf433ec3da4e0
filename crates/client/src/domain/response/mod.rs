mod api;
mod token;

pub use self::api::from_envelope;
pub use self::token::{LoginResponse, TokenResponse};
