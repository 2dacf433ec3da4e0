mod auth;
mod query;

pub use self::auth::{
    LoginRequest, RegisterRequest, ResendOtpRequest, UpdateEmailRequest, UpdateUserInfoRequest,
    VerifyOtpRequest,
};
pub use self::query::FindAllQuery;
